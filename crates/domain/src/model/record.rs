use std::{cmp::Ordering, fmt};

use serde::Serialize;

use bard_lines_shared_kernel::{DocumentTitle, LineCount};

/// One per-document result, rendered as
/// `"<count> is the number of lines in <title>"`.
///
/// Equality and ordering look only at the rendered text.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRecord {
    count: LineCount,
    title: DocumentTitle,
    #[serde(rename = "record")]
    text: String,
}

impl ResultRecord {
    pub fn new(title: DocumentTitle, count: LineCount) -> Self {
        let text = format!("{count} is the number of lines in {title}");
        Self { count, title, text }
    }

    pub fn count(&self) -> LineCount {
        self.count
    }

    pub fn title(&self) -> &DocumentTitle {
        &self.title
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ResultRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq for ResultRecord {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for ResultRecord {}

impl PartialOrd for ResultRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ResultRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}
