// tests/integration/report_properties.rs
use std::collections::HashSet;

use bard_lines_infra::{InMemoryDocumentSource, TextSink};
use bard_lines_usecase::{AnalysisRunner, ReportPrinter};

#[path = "../common/mod.rs"]
mod common;
use common::unprefixed;

fn corpus() -> InMemoryDocumentSource {
    [
        ("Hamlet", "To be, or not to be, that is the question:\nWhether 'tis nobler in the mind to suffer\n"),
        ("Macbeth", "Double, double toil and trouble;\nFire burn and cauldron bubble.\n"),
        ("Cymbeline", "Fear no more the heat o' the sun\n"),
        ("Pericles", ""),
        ("Coriolanus", "\n\n\n\n\n\n\n\n\n\n\n"),
        ("Timon", "no trailing newline"),
        ("Ophélie", "Ophélie\u{2028}is not a line feed\n"),
    ]
    .into_iter()
    .collect()
}

fn report(source: &InMemoryDocumentSource) -> Vec<String> {
    let mut printer = ReportPrinter::new(TextSink::new(Vec::new()));
    AnalysisRunner::new(source).run(&mut printer).expect("run succeeds");
    let text = String::from_utf8(printer.into_sink().into_inner()).expect("utf-8");
    text.lines().map(str::to_owned).collect()
}

#[test]
fn one_line_per_document_and_each_title_once() {
    let source = corpus();
    let lines = report(&source);
    assert_eq!(lines.len(), 7);

    let titles: HashSet<_> = lines
        .iter()
        .map(|l| unprefixed(l).rsplit_once(" in ").expect("record shape").1.to_owned())
        .collect();
    assert_eq!(titles.len(), 7);
    assert!(titles.contains("Ophélie"));
}

#[test]
fn lines_are_non_increasing() {
    let lines = report(&corpus());
    for pair in lines.windows(2) {
        assert!(unprefixed(&pair[0]) >= unprefixed(&pair[1]), "{pair:?}");
    }
}

#[test]
fn textual_order_puts_eleven_after_two() {
    let lines: Vec<_> = report(&corpus()).iter().map(|l| unprefixed(l).to_owned()).collect();
    let two = lines.iter().position(|l| l == "2 is the number of lines in Hamlet").unwrap();
    let eleven = lines.iter().position(|l| l == "11 is the number of lines in Coriolanus").unwrap();
    assert!(two < eleven);
    assert_eq!(lines.last().map(String::as_str), Some("0 is the number of lines in Pericles"));
}

#[test]
fn repeated_runs_are_identical() {
    let source = corpus();
    assert_eq!(report(&source), report(&source));
}
