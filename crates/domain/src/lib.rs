#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod options;

pub use analytics::{SortOrder, count_lines};
pub use model::{ResultCollection, ResultRecord};
