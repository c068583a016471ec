//! Pure functions over the loaded province directory.
//!
//! Derived state (the filtered list and its aggregates) is recomputed from
//! current state on every render rather than cached, so it can never go
//! stale.

use super::types::{Province, ProvinceId};

/// Filters provinces by case-insensitive substring match on name.
///
/// An empty term matches everything; input order is preserved.
pub fn filter_provinces(provinces: &[Province], term: &str) -> Vec<Province> {
    let needle = term.to_lowercase();
    provinces
        .iter()
        .filter(|province| province.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Aggregate counts over a filtered province list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectoryStats {
    /// Number of provinces after filtering.
    pub province_count: usize,
    /// Sum of city-list lengths across the filtered provinces.
    pub city_count: usize,
}

impl DirectoryStats {
    pub fn of(provinces: &[Province]) -> Self {
        Self {
            province_count: provinces.len(),
            city_count: provinces.iter().map(|p| p.cities.len()).sum(),
        }
    }
}

/// Single-expansion toggle: collapses when `id` is already expanded,
/// otherwise expands `id` (implicitly collapsing anything else).
pub fn toggle_expansion(current: Option<ProvinceId>, id: ProvinceId) -> Option<ProvinceId> {
    if current == Some(id) {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{City, CityId, Coordinate};

    fn city(id: u64, name: &str) -> City {
        City {
            id: CityId::from_u64(id),
            name: name.to_string(),
            coordinate: Coordinate {
                latitude: -6.2,
                longitude: 106.8,
            },
        }
    }

    fn province(id: u64, name: &str, cities: Vec<City>) -> Province {
        Province {
            id: ProvinceId::from_u64(id),
            name: name.to_string(),
            cities,
        }
    }

    fn sample() -> Vec<Province> {
        vec![
            province(1, "Bali", vec![city(11, "Denpasar"), city(12, "Badung")]),
            province(2, "Aceh", vec![city(21, "Banda Aceh")]),
            province(3, "Jawa Timur", vec![]),
        ]
    }

    #[test]
    fn test_empty_term_is_identity() {
        let provinces = sample();
        let filtered = filter_provinces(&provinces, "");
        assert_eq!(filtered, provinces);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let provinces = sample();

        let filtered = filter_provinces(&provinces, "aCeH");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Aceh");

        // Substring, not prefix
        let filtered = filter_provinces(&provinces, "timur");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Jawa Timur");
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let provinces = sample();
        // "a" matches all three names
        let filtered = filter_provinces(&provinces, "a");
        let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bali", "Aceh", "Jawa Timur"]);
    }

    #[test]
    fn test_filter_can_match_nothing() {
        let provinces = sample();
        assert!(filter_provinces(&provinces, "sumatra").is_empty());
    }

    #[test]
    fn test_city_count_sums_over_filtered() {
        // Worked example: Bali has 2 cities, Aceh has 1; "a" matches both
        let provinces = vec![
            province(1, "Bali", vec![city(11, "a"), city(12, "b")]),
            province(2, "Aceh", vec![city(21, "c")]),
        ];
        let filtered = filter_provinces(&provinces, "a");
        let stats = DirectoryStats::of(&filtered);

        assert_eq!(stats.province_count, 2);
        assert_eq!(stats.city_count, 3);
    }

    #[test]
    fn test_stats_of_empty_list() {
        assert_eq!(DirectoryStats::of(&[]), DirectoryStats::default());
    }

    #[test]
    fn test_toggle_is_idempotent_paired() {
        let id = ProvinceId::from_u64(7);

        let expanded = toggle_expansion(None, id);
        assert_eq!(expanded, Some(id));

        let collapsed = toggle_expansion(expanded, id);
        assert_eq!(collapsed, None);
    }

    #[test]
    fn test_expanding_b_collapses_a() {
        let a = ProvinceId::from_u64(1);
        let b = ProvinceId::from_u64(2);

        let state = toggle_expansion(None, a);
        let state = toggle_expansion(state, b);

        assert_eq!(state, Some(b));
    }
}
