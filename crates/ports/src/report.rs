// crates/ports/src/report.rs
use serde::{Deserialize, Serialize};

use bard_lines_shared_kernel::{DocumentTitle, LineCount, Result};

/// One printed line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    /// Identifier of the unit of concurrency that printed the line.
    pub unit: String,
    pub count: LineCount,
    pub title: DocumentTitle,
    /// `"<count> is the number of lines in <title>"`
    pub record: String,
}

/// Port receiving report lines in their final order.
pub trait ReportSink {
    fn emit(&mut self, line: &ReportLine) -> Result<()>;

    /// Flush buffered output once every line has been emitted.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn emit(&mut self, line: &ReportLine) -> Result<()> {
        (**self).emit(line)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

impl<S: ReportSink + ?Sized> ReportSink for Box<S> {
    fn emit(&mut self, line: &ReportLine) -> Result<()> {
        (**self).emit(line)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}
