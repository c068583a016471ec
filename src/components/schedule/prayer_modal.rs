use dioxus::prelude::*;

use crate::components::{use_prayer_days, use_schedule_loading, use_selected_city};
use crate::schedule::visible_days;

/// Prayer-times overlay for the selected city.
///
/// Renders nothing while no city is selected. While the fetch is in
/// flight a small spinner shows; once data arrives, at most the first
/// seven daily entries render in response order. A failed fetch leaves
/// the modal open with neither spinner nor data.
#[component]
pub fn PrayerModal(on_close: EventHandler<()>) -> Element {
    let selected = use_selected_city();
    let days = use_prayer_days();
    let loading = use_schedule_loading();

    let selected_data = selected.read();
    let Some(city) = selected_data.as_ref() else {
        return rsx! { div {} };
    };

    let schedule = days.read().clone();

    rsx! {
        // Overlay backdrop
        div {
            class: "ms-modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "ms-modal-content",
                onclick: move |e| e.stop_propagation(), // Prevent closing when clicking inside

                button {
                    class: "ms-modal-close",
                    onclick: move |_| on_close.call(()),
                    "aria-label": "Close prayer times",
                    "✕"
                }
                h2 { class: "ms-modal-title", "🕌 Prayer Times" }
                h3 { class: "ms-modal-city", "{city.name}" }

                if loading() {
                    div { class: "ms-modal-loading",
                        div { class: "ms-spinner ms-spinner--small" }
                        p { "Loading prayer times..." }
                    }
                } else if let Some(all_days) = &schedule {
                    div { class: "ms-prayer-list",
                        for day in visible_days(all_days) {
                            div { class: "ms-prayer-day",
                                key: "{day.id}",
                                div { class: "ms-prayer-date", "{day.date}" }
                                div { class: "ms-prayer-times",
                                    for (name, time) in day.time.iter() {
                                        div { class: "ms-prayer-time-item",
                                            key: "{name}",
                                            span { class: "ms-prayer-name", "{name}" }
                                            span { class: "ms-prayer-time", "{time}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
