use dioxus::prelude::*;

use crate::catalog::{filter_provinces, toggle_expansion, DirectoryStats, Province, ProvinceId};
use crate::components::{use_schedule_sender, ScheduleMessage};

use super::{ProvinceCard, SearchBox, StatsRow};

/// Main directory view over the loaded province list.
///
/// The filtered list and its aggregates are recomputed on every render
/// from the search term; nothing derived is cached.
#[component]
pub fn DirectoryView(provinces: Vec<Province>) -> Element {
    let search_term = use_signal(String::new);
    let mut expanded = use_signal(|| None::<ProvinceId>);
    let schedule_task = use_schedule_sender();

    let term = search_term();
    let filtered = filter_provinces(&provinces, &term);
    let stats = DirectoryStats::of(&filtered);

    rsx! {
        div { class: "ms-container",
            SearchBox { term: search_term }

            StatsRow {
                province_count: stats.province_count,
                city_count: stats.city_count,
            }

            for province in filtered {
                ProvinceCard {
                    key: "{province.id.as_u64()}",
                    province: province.clone(),
                    expanded: expanded() == Some(province.id),
                    on_toggle: move |id| expanded.set(toggle_expansion(expanded(), id)),
                    on_select: move |city| schedule_task.send(ScheduleMessage::Fetch(city)),
                }
            }
        }
    }
}
