use bard_lines_ports::documents::{DocumentSet, DocumentSource};
use bard_lines_shared_kernel::{DocumentTitle, Result};

/// Document source backed by an already loaded set.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentSource {
    documents: DocumentSet,
}

impl InMemoryDocumentSource {
    pub fn new(documents: DocumentSet) -> Self {
        Self { documents }
    }

    /// Add or replace one document.
    pub fn insert(&mut self, title: impl Into<DocumentTitle>, content: impl Into<String>) {
        self.documents.insert(title.into(), content.into());
    }
}

impl DocumentSource for InMemoryDocumentSource {
    fn load(&self) -> Result<DocumentSet> {
        Ok(self.documents.clone())
    }
}

impl<T, C> FromIterator<(T, C)> for InMemoryDocumentSource
where
    T: Into<DocumentTitle>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (T, C)>>(iter: I) -> Self {
        let documents = iter.into_iter().map(|(t, c)| (t.into(), c.into())).collect();
        Self { documents }
    }
}
