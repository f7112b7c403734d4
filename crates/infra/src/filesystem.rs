// crates/infra/src/filesystem.rs
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use ignore::WalkBuilder;

use bard_lines_ports::documents::{DocumentSet, DocumentSource};
use bard_lines_shared_kernel::{DocumentTitle, InfrastructureError, Result};

use crate::persistence::FileReader;

/// Loads every file directly inside one folder whose name ends with the
/// configured extension. The title is the file name without that extension.
#[derive(Debug, Clone)]
pub struct FolderDocumentSource {
    folder: PathBuf,
    extension: String,
    excluded: Option<PathBuf>,
}

impl FolderDocumentSource {
    /// `extension` may be given with or without its leading dot; an empty
    /// extension selects every file and keeps full file names as titles.
    pub fn new(folder: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        let mut extension = extension.into();
        if !extension.is_empty() && !extension.starts_with('.') {
            extension.insert(0, '.');
        }
        Self { folder: folder.into(), extension, excluded: None }
    }

    /// Never load `path`, e.g. the report file when it is written into the
    /// folder being analysed.
    #[must_use]
    pub fn excluding(mut self, path: impl Into<PathBuf>) -> Self {
        self.excluded = Some(path.into());
        self
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    fn title_for(&self, path: &Path) -> Option<DocumentTitle> {
        let Some(name) = path.file_name()?.to_str() else {
            log::warn!("skipping '{}': file name is not valid UTF-8", path.display());
            return None;
        };
        let stem = name.strip_suffix(self.extension.as_str())?;
        if stem.is_empty() {
            log::warn!("skipping '{}': empty title", path.display());
            return None;
        }
        Some(DocumentTitle::from(stem))
    }

    fn ensure_folder(&self) -> Result<()> {
        let metadata = fs::metadata(&self.folder).map_err(|source| InfrastructureError::FileSystemOperation {
            operation: "open folder".to_string(),
            path: self.folder.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(InfrastructureError::FileSystemOperation {
                operation: "open folder".to_string(),
                path: self.folder.clone(),
                source: io::Error::other("not a directory"),
            }
            .into());
        }
        Ok(())
    }
}

impl DocumentSource for FolderDocumentSource {
    fn load(&self) -> Result<DocumentSet> {
        self.ensure_folder()?;

        let mut builder = WalkBuilder::new(&self.folder);
        // Plays live directly in the folder; hidden and ignored files still count.
        builder.max_depth(Some(1)).standard_filters(false).follow_links(true);

        // A file that does not exist yet cannot be inside the folder.
        let excluded = self.excluded.as_deref().and_then(|p| fs::canonicalize(p).ok());

        let mut documents = DocumentSet::new();
        for entry in builder.build() {
            let entry = entry.map_err(|e| InfrastructureError::Traversal {
                path: self.folder.clone(),
                details: e.to_string(),
            })?;
            if entry.depth() == 0 {
                continue;
            }

            let path = entry.path();
            if excluded.as_deref().is_some_and(|ex| fs::canonicalize(path).is_ok_and(|p| p == ex)) {
                log::debug!("skipping '{}': excluded", path.display());
                continue;
            }
            let Some(title) = self.title_for(path) else {
                continue;
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                log::warn!("skipping '{}': not a regular file", path.display());
                continue;
            }

            let content = FileReader::read_to_string(path)?;
            log::debug!("loaded '{title}' from {} ({} bytes)", path.display(), content.len());
            documents.insert(title, content);
        }

        log::info!(
            "loaded {} documents from {} (*{})",
            documents.len(),
            self.folder.display(),
            self.extension
        );
        Ok(documents)
    }
}
