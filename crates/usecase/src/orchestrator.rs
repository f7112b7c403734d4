use bard_lines_domain::ResultCollection;
use bard_lines_ports::{
    documents::{DocumentSet, DocumentSource},
    report::ReportSink,
};
use bard_lines_shared_kernel::{ApplicationError, Result};

use crate::{dto::RunSummary, processor::process, report::ReportPrinter};

/// Runs the line analysis over every document a source supplies.
pub struct AnalysisRunner<'a> {
    source: &'a dyn DocumentSource,
}

impl<'a> AnalysisRunner<'a> {
    pub fn new(source: &'a dyn DocumentSource) -> Self {
        Self { source }
    }

    /// Load, count, sort and print in one sequential pass.
    ///
    /// # Errors
    ///
    /// Fails before anything is printed if the documents cannot be loaded,
    /// and afterwards only if the sink rejects output.
    pub fn run<S: ReportSink>(&self, printer: &mut ReportPrinter<S>) -> Result<RunSummary> {
        let documents = self.load()?;
        print_report(&documents, printer)
    }

    /// Fetch the complete document set from the source.
    ///
    /// Callers that must not touch their output until loading has succeeded
    /// call this first and pass the set to [`print_report`].
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::DocumentLoadFailed` wrapping the source's error.
    pub fn load(&self) -> Result<DocumentSet> {
        let documents = self.source.load().map_err(|e| ApplicationError::DocumentLoadFailed {
            reason: "document source failed".to_string(),
            source: Some(Box::new(e)),
        })?;
        log::info!("analysing {} documents", documents.len());
        Ok(documents)
    }
}

/// Count every document in `documents` and print the sorted report.
///
/// # Errors
///
/// Fails only if the printer's sink rejects output.
pub fn print_report<S: ReportSink>(documents: &DocumentSet, printer: &mut ReportPrinter<S>) -> Result<RunSummary> {
    let results = run_and_return_results(documents);
    let printed = printer.print(&results.to_sequence())?;
    Ok(RunSummary { documents: documents.len(), printed })
}

/// Process each document once, in the set's iteration order.
pub fn run_and_return_results(documents: &DocumentSet) -> ResultCollection {
    let mut results = ResultCollection::with_capacity(documents.len());
    for (title, content) in documents {
        results.append(process(title, content));
    }
    results
}
