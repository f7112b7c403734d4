use std::{fs, io, path::Path};

use bard_lines_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the entire file at `path` as UTF-8 text.
    ///
    /// Invalid UTF-8 is reported as an `InvalidData` read error rather than
    /// being replaced, so a mis-encoded play never yields a silent count.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        let bytes = fs::read(path).map_err(|source| read_error(path, source))?;
        String::from_utf8(bytes).map_err(|e| read_error(path, io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

fn read_error(path: &Path, source: io::Error) -> InfrastructureError {
    InfrastructureError::FileRead { path: path.to_path_buf(), source }
}
