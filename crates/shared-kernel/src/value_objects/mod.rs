// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod title;

pub use counts::LineCount;
pub use title::DocumentTitle;
