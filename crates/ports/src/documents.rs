// crates/ports/src/documents.rs
use std::collections::BTreeMap;

use bard_lines_shared_kernel::{DocumentTitle, Result};

/// Documents keyed by their unique title.
pub type DocumentSet = BTreeMap<DocumentTitle, String>;

/// Port for acquiring the documents to analyse.
///
/// The whole set is loaded before analysis starts; a failure here aborts the
/// run before any report line is written.
pub trait DocumentSource {
    fn load(&self) -> Result<DocumentSet>;
}
