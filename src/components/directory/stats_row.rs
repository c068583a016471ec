use dioxus::prelude::*;

/// Aggregate stat cards for the currently filtered directory.
#[component]
pub fn StatsRow(province_count: usize, city_count: usize) -> Element {
    rsx! {
        div { class: "ms-stats",
            div { class: "ms-stat-card",
                div { class: "ms-stat-number", "{province_count}" }
                div { class: "ms-stat-label", "Provinces" }
            }
            div { class: "ms-stat-card",
                div { class: "ms-stat-number", "{city_count}" }
                div { class: "ms-stat-label", "Cities" }
            }
        }
    }
}
