// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod memory;
pub mod output;
pub mod persistence;

pub use filesystem::FolderDocumentSource;
pub use memory::InMemoryDocumentSource;
pub use output::{JsonlSink, OutputWriter, TextSink, sink_for};
