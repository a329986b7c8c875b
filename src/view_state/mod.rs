//! Timeline geometry (pure).
//!
//! Height estimation, connector geometry and stacked layout, all in
//! abstract layout units. No terminal or rendering types appear here.

pub mod connector;
pub mod height;
pub mod height_index;
pub mod layout;

pub use connector::{
    children_block_height, connector_between, sub_connector_between, total_entry_height,
    Connector, EntryMetrics,
};
pub use height::estimate_height;
pub use height_index::HeightIndex;
pub use hit_test::HitTestResult;
pub use layout::{PlacedEntry, PlacedSubEntry, TimelineLayout};
