// crates/domain/src/analytics.rs
pub mod line_counter;
pub mod sort;

pub use line_counter::count_lines;
pub use sort::{SortOrder, sorted_records};
