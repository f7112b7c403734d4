use bard_lines_domain::{ResultRecord, SortOrder, analytics::sorted_records};
use bard_lines_ports::report::{ReportLine, ReportSink};
use bard_lines_shared_kernel::{ApplicationError, BardLinesError, Result};

use crate::unit::current_unit_id;

/// Sorts result records in descending text order and emits them to a sink,
/// each tagged with the id of the printing unit.
pub struct ReportPrinter<S> {
    sink: S,
    order: SortOrder,
    unit_id: fn() -> String,
}

impl<S: ReportSink> ReportPrinter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, order: SortOrder::Descending, unit_id: current_unit_id }
    }

    /// Replace the unit id provider, e.g. with a constant for reproducible output.
    #[must_use]
    pub fn with_unit_id(mut self, unit_id: fn() -> String) -> Self {
        self.unit_id = unit_id;
        self
    }

    /// Emit `records` in sorted order, returning how many lines were written.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::ReportFailed` when the sink rejects a line.
    pub fn print(&mut self, records: &[ResultRecord]) -> Result<usize> {
        let sorted = sorted_records(records, self.order);
        let unit = (self.unit_id)();

        for record in &sorted {
            let line = ReportLine {
                unit: unit.clone(),
                count: record.count(),
                title: record.title().clone(),
                record: record.as_str().to_owned(),
            };
            self.sink.emit(&line).map_err(|e| report_failed(format!("writing '{}'", line.title), e))?;
        }
        self.sink.finish().map_err(|e| report_failed("flushing report".to_string(), e))?;

        Ok(sorted.len())
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

fn report_failed(reason: String, source: BardLinesError) -> BardLinesError {
    ApplicationError::ReportFailed { reason, source: Some(Box::new(source)) }.into()
}
