use dioxus::prelude::*;

use crate::catalog::{City, Province, ProvinceId};

/// Expandable province card. The header toggles expansion; the expanded
/// body lists the province's cities in a grid.
#[component]
pub fn ProvinceCard(
    province: Province,
    expanded: bool,
    on_toggle: EventHandler<ProvinceId>,
    on_select: EventHandler<City>,
) -> Element {
    let id = province.id;
    let chevron = if expanded { "▼" } else { "▶" };
    let cities_label = format!("{} cities found", province.cities.len());

    rsx! {
        div { class: "ms-province-card",
            div {
                class: "ms-province-header",
                onclick: move |_| on_toggle.call(id),
                h2 { "{province.name}" }
                span { class: "ms-toggle-icon", "{chevron}" }
            }
            if expanded {
                div { class: "ms-cities-list",
                    div { class: "ms-cities-count", "{cities_label}" }
                    div { class: "ms-cities-grid",
                        for city in province.cities.iter() {
                            CityItem {
                                key: "{city.id.as_u64()}",
                                city: city.clone(),
                                on_select,
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Single city entry: name plus formatted coordinate. Clicking selects
/// the city and opens the prayer-times modal.
#[component]
fn CityItem(city: City, on_select: EventHandler<City>) -> Element {
    let coords = format!(
        "📍 {:.4}, {:.4}",
        city.coordinate.latitude, city.coordinate.longitude
    );
    let city_for_click = city.clone();

    rsx! {
        div {
            class: "ms-city-item",
            onclick: move |_| on_select.call(city_for_click.clone()),
            div { class: "ms-city-name", "{city.name}" }
            div { class: "ms-city-coords", "{coords}" }
        }
    }
}
