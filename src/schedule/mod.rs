//! Prayer-schedule domain.
//!
//! Wire types for the `/prayer` endpoint, the display cap on returned
//! days, and the guard that decides whether a fetch completion may still
//! be applied to UI state.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{City, CityId};

/// Maximum number of daily entries shown in the modal. The backend may
/// return more; the remainder is ignored.
pub const MAX_VISIBLE_DAYS: usize = 7;

/// One day's schedule: a display-formatted date plus the prayer-name to
/// time-of-day mapping, in the order the backend sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrayerDay {
    pub id: u64,
    pub date: String,
    pub time: IndexMap<String, String>,
}

/// Response body of `GET /prayer?latitude=..&longitude=..`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub prayers: Vec<PrayerDay>,
}

/// Caps a schedule at the first [`MAX_VISIBLE_DAYS`] entries, preserving
/// order.
pub fn visible_days(days: &[PrayerDay]) -> &[PrayerDay] {
    &days[..days.len().min(MAX_VISIBLE_DAYS)]
}

/// Whether a completed fetch for `requested` may still be applied.
///
/// A completion is discarded once the modal has closed or a different
/// city has been selected, so closing before the fetch resolves can never
/// resurrect stale schedule data.
pub fn should_apply(selected: Option<&City>, requested: CityId) -> bool {
    selected.is_some_and(|city| city.id == requested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Coordinate;

    fn day(id: u64) -> PrayerDay {
        PrayerDay {
            id,
            date: format!("Day {}", id),
            time: IndexMap::new(),
        }
    }

    fn city(id: u64) -> City {
        City {
            id: CityId::from_u64(id),
            name: format!("City {}", id),
            coordinate: Coordinate {
                latitude: 0.0,
                longitude: 0.0,
            },
        }
    }

    #[test]
    fn test_visible_days_caps_at_seven_in_order() {
        let days: Vec<PrayerDay> = (0..10).map(day).collect();

        let visible = visible_days(&days);

        assert_eq!(visible.len(), 7);
        let ids: Vec<u64> = visible.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_visible_days_passes_short_schedules_through() {
        let days: Vec<PrayerDay> = (0..3).map(day).collect();
        assert_eq!(visible_days(&days).len(), 3);
        assert!(visible_days(&[]).is_empty());
    }

    #[test]
    fn test_should_apply_rejects_after_close() {
        // Modal closed before the fetch resolved
        assert!(!should_apply(None, CityId::from_u64(1)));
    }

    #[test]
    fn test_should_apply_rejects_after_reselect() {
        let now_selected = city(2);
        assert!(!should_apply(Some(&now_selected), CityId::from_u64(1)));
    }

    #[test]
    fn test_should_apply_accepts_still_selected_city() {
        let selected = city(1);
        assert!(should_apply(Some(&selected), CityId::from_u64(1)));
    }

    #[test]
    fn test_decode_preserves_time_ordering() {
        let body = r#"{
            "prayers": [
                {
                    "id": 1,
                    "date": "Senin, 01/09/2026",
                    "time": {
                        "imsak": "04:26",
                        "subuh": "04:36",
                        "terbit": "05:52",
                        "dzuhur": "11:54",
                        "ashar": "15:13",
                        "maghrib": "17:52",
                        "isya": "19:02"
                    }
                }
            ]
        }"#;

        let response: ScheduleResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.prayers.len(), 1);
        let entry = &response.prayers[0];
        assert_eq!(entry.date, "Senin, 01/09/2026");

        let names: Vec<&str> = entry.time.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec!["imsak", "subuh", "terbit", "dzuhur", "ashar", "maghrib", "isya"]
        );
        assert_eq!(entry.time["maghrib"], "17:52");
    }
}
