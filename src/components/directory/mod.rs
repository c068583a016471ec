//! Directory view: search box, stat cards, and expandable province cards.

mod directory_view;
mod province_card;
mod search_box;
mod stats_row;

pub use directory_view::DirectoryView;
pub use province_card::ProvinceCard;
pub use search_box::SearchBox;
pub use stats_row::StatsRow;
