//! Province/city directory domain.
//!
//! **Module Organization:**
//! - `types.rs`: wire types decoded from the `/province` endpoint
//! - `filter.rs`: pure functions over the loaded directory (search
//!   filtering, aggregate counts, expansion toggling)

pub mod filter;
pub mod types;

pub use filter::{filter_provinces, toggle_expansion, DirectoryStats};
pub use types::{City, CityId, Coordinate, Province, ProvinceId};
