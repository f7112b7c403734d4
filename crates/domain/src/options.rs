// crates/domain/src/options.rs
use std::fmt;

/// Output encodings for the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `[<unit>] <count> is the number of lines in <title>`
    #[default]
    Text,
    /// One JSON object per record.
    Jsonl,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Jsonl => "jsonl",
        })
    }
}
