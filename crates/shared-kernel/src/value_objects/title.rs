// crates/shared-kernel/src/value_objects/title.rs
use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Unique key naming one document, e.g. the play `"hamlet"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentTitle(String);

impl DocumentTitle {
    #[inline]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentTitle {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DocumentTitle {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for DocumentTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DocumentTitle {
    fn borrow(&self) -> &str {
        &self.0
    }
}
