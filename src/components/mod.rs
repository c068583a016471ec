//! UI components for the Musafir application.
//!
//! All UI state lives in signals owned by [`App`] and is shared with the
//! component tree through Dioxus context:
//!
//! ```ignore
//! // Anywhere below App:
//! let directory = use_directory();
//! match directory.read().clone() {
//!     DirectoryStatus::Loading => { /* spinner */ }
//!     DirectoryStatus::Ready(provinces) => { /* render */ }
//!     DirectoryStatus::Failed(err) => { /* error screen */ }
//! }
//! ```

mod header;

pub mod directory;
pub mod schedule;

pub use directory::DirectoryView;
pub use header::Header;
pub use schedule::PrayerModal;

use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

use crate::api;
use crate::catalog::{City, Province};
use crate::schedule::{should_apply, PrayerDay};

// ============================================================================
// Shared state and context accessors
// ============================================================================

/// Directory load state for UI display
#[derive(Clone)]
pub enum DirectoryStatus {
    Loading,
    Ready(Vec<Province>),
    Failed(String),
}

/// Messages for the schedule-fetch coroutine
pub enum ScheduleMessage {
    Fetch(City),
}

// Directory status context provider
pub fn use_directory() -> Signal<DirectoryStatus> {
    use_context::<Signal<DirectoryStatus>>()
}

/// Context provider for the currently selected city (`None` = modal closed)
pub fn use_selected_city() -> Signal<Option<City>> {
    use_context::<Signal<Option<City>>>()
}

/// Context provider for the current prayer schedule, if any
pub fn use_prayer_days() -> Signal<Option<Vec<PrayerDay>>> {
    use_context::<Signal<Option<Vec<PrayerDay>>>>()
}

/// Context provider for the schedule-fetch in-flight flag
pub fn use_schedule_loading() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Context provider for sending cities to the schedule-fetch coroutine
pub fn use_schedule_sender() -> Coroutine<ScheduleMessage> {
    use_context::<Coroutine<ScheduleMessage>>()
}

// ============================================================================
// App
// ============================================================================

#[component]
pub fn App() -> Element {
    let directory = use_signal(|| DirectoryStatus::Loading);
    use_context_provider(|| directory);

    let mut selected_city = use_signal(|| None::<City>);
    use_context_provider(|| selected_city);

    let mut prayer_days = use_signal(|| None::<Vec<PrayerDay>>);
    use_context_provider(|| prayer_days);

    let schedule_loading = use_signal(|| false);
    use_context_provider(|| schedule_loading);

    // One-shot directory load at mount. A failure here is terminal: the
    // status is never retried and only the error screen renders.
    let mut directory_signal = directory;
    use_effect(move || {
        if matches!(&*directory_signal.read(), DirectoryStatus::Loading) {
            spawn(async move {
                match api::fetch_provinces().await {
                    Ok(provinces) => {
                        directory_signal.set(DirectoryStatus::Ready(provinces));
                    }
                    Err(e) => {
                        error!("Failed to load province directory: {}", e);
                        directory_signal.set(DirectoryStatus::Failed(e.to_string()));
                    }
                }
            });
        }
    });

    // Schedule-fetch coroutine. Each message opens the modal immediately
    // and spawns an independent fetch task, so a new selection never waits
    // on a previous fetch. Completions are applied only while their city
    // is still the selected one.
    let schedule_task = use_coroutine({
        let mut selected = selected_city;
        let mut days = prayer_days;
        let mut loading = schedule_loading;

        move |mut rx: UnboundedReceiver<ScheduleMessage>| async move {
            while let Some(msg) = rx.next().await {
                match msg {
                    ScheduleMessage::Fetch(city) => {
                        selected.set(Some(city.clone()));
                        days.set(None);
                        loading.set(true);

                        let selected_for_spawn = selected;
                        let mut days_for_spawn = days;
                        let mut loading_for_spawn = loading;

                        spawn(async move {
                            let result = api::fetch_schedule(
                                city.coordinate.latitude,
                                city.coordinate.longitude,
                            )
                            .await;

                            match result {
                                Ok(schedule)
                                    if should_apply(
                                        selected_for_spawn.read().as_ref(),
                                        city.id,
                                    ) =>
                                {
                                    days_for_spawn.set(Some(schedule.prayers));
                                }
                                Ok(_) => {
                                    info!(
                                        "Discarding schedule for {}: no longer selected",
                                        city.name
                                    );
                                }
                                Err(e) => {
                                    // Silent to the user: the modal stays open
                                    // with neither spinner nor data.
                                    error!(
                                        "Failed to load prayer times for {}: {}",
                                        city.name, e
                                    );
                                }
                            }
                            loading_for_spawn.set(false);
                        });
                    }
                }
            }
        }
    });

    use_context_provider(|| schedule_task);

    // The loading and error screens replace the whole view: no header, no
    // search box, no stats until the directory is ready.
    rsx! {
        div { class: "ms-app",
            match directory() {
                DirectoryStatus::Loading => rsx! {
                    div { class: "ms-loading",
                        div { class: "ms-spinner" }
                        p { "Loading provinces..." }
                    }
                },
                DirectoryStatus::Failed(message) => rsx! {
                    div { class: "ms-error",
                        span { class: "ms-error-icon", "⚠️" }
                        p { "Error: {message}" }
                    }
                },
                DirectoryStatus::Ready(provinces) => rsx! {
                    Header {}
                    DirectoryView { provinces }
                    PrayerModal {
                        on_close: move |_| {
                            selected_city.set(None);
                            prayer_days.set(None);
                        }
                    }
                },
            }
        }
    }
}
