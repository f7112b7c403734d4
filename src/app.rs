use anyhow::{Context, Result};

use bard_lines_infra::{FolderDocumentSource, OutputWriter, sink_for};
use bard_lines_usecase::{AnalysisRunner, ReportPrinter, RunSummary, print_report};

use crate::config::RunConfig;

/// Run the whole pipeline once: load the folder, count, sort and print.
///
/// The output file is only created after every document has been loaded, so a
/// failed load leaves an existing report untouched.
///
/// # Errors
///
/// Fails when the folder cannot be loaded or the report cannot be written.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    log::info!("Starting Sequential BardPlayAnalyzer");

    let mut source = FolderDocumentSource::new(&config.folder, config.extension.as_str());
    if let Some(path) = &config.output {
        source = source.excluding(path.clone());
    }
    let documents = AnalysisRunner::new(&source)
        .load()
        .with_context(|| format!("analysing {}", config.folder.display()))?;

    let out = OutputWriter::create(config.output.as_deref()).with_context(|| match &config.output {
        Some(path) => format!("failed to create {}", path.display()),
        None => "failed to open stdout".to_string(),
    })?;
    log::debug!("writing {} report", config.format);
    let mut printer = ReportPrinter::new(sink_for(config.format, out));

    let summary = print_report(&documents, &mut printer)
        .with_context(|| format!("reporting on {}", config.folder.display()))?;

    log::info!("Ending Sequential BardPlayAnalyzer");
    Ok(summary)
}
