// tests/integration/end_to_end.rs
use bard_lines::{app, config::RunConfig};
use bard_lines_infra::{FolderDocumentSource, InMemoryDocumentSource, JsonlSink, TextSink};
use bard_lines_ports::documents::DocumentSource;
use bard_lines_usecase::{AnalysisRunner, ReportPrinter, RunSummary};
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::{plays_folder, unprefixed};

fn render(source: &dyn DocumentSource) -> (RunSummary, String) {
    let mut printer = ReportPrinter::new(TextSink::new(Vec::new()));
    let summary = AnalysisRunner::new(source).run(&mut printer).expect("run succeeds");
    let bytes = printer.into_sink().into_inner();
    (summary, String::from_utf8(bytes).expect("utf-8 report"))
}

#[test]
fn two_plays_print_in_descending_order() {
    let source: InMemoryDocumentSource =
        [("PlayA", "line1\nline2\n"), ("PlayB", "only one line, no newline")].into_iter().collect();

    let (summary, report) = render(&source);
    let lines: Vec<_> = report.lines().collect();

    assert_eq!(summary, RunSummary { documents: 2, printed: 2 });
    assert_eq!(lines.len(), 2);
    assert_eq!(unprefixed(lines[0]), "2 is the number of lines in PlayA");
    assert_eq!(unprefixed(lines[1]), "0 is the number of lines in PlayB");
    assert!(lines.iter().all(|l| l.starts_with('[')));
}

#[test]
fn empty_source_prints_nothing() {
    let (summary, report) = render(&InMemoryDocumentSource::default());
    assert_eq!(summary, RunSummary { documents: 0, printed: 0 });
    assert!(report.is_empty());
}

#[test]
fn folder_pipeline_counts_each_play() {
    let dir = plays_folder(&[
        ("hamlet.txt", "ACT I\nSCENE I. Elsinore.\nWho's there?\n"),
        ("macbeth.txt", "When shall we three meet again\r\nIn thunder, lightning, or in rain?\r\n"),
        ("sonnets.txt", "Shall I compare thee to a summer's day?"),
        ("readme.md", "not a play\n"),
    ]);

    let (summary, report) = render(&FolderDocumentSource::new(dir.path(), ".txt"));
    let lines: Vec<_> = report.lines().map(unprefixed).collect();

    assert_eq!(summary.documents, 3);
    assert_eq!(
        lines,
        [
            "3 is the number of lines in hamlet",
            "2 is the number of lines in macbeth",
            "0 is the number of lines in sonnets",
        ]
    );
}

#[test]
fn jsonl_report_carries_structured_fields() {
    let source: InMemoryDocumentSource = [("Lear", "a\nb\nc\n"), ("Tempest", "")].into_iter().collect();
    let mut printer = ReportPrinter::new(JsonlSink::new(Vec::new())).with_unit_id(|| "main".to_string());
    AnalysisRunner::new(&source).run(&mut printer).expect("run succeeds");

    let text = String::from_utf8(printer.into_sink().into_inner()).unwrap();
    let rows: Vec<Value> = text.lines().map(|l| serde_json::from_str(l).expect("valid JSON")).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["title"], "Lear");
    assert_eq!(rows[0]["count"], 3);
    assert_eq!(rows[0]["unit"], "main");
    assert_eq!(rows[1]["record"], "0 is the number of lines in Tempest");
}

#[test]
fn app_run_writes_report_file() {
    let dir = plays_folder(&[("othello.txt", "O, beware, my lord, of jealousy;\nIt is the green-eyed monster\n")]);
    let out = dir.path().join("report.txt");
    let config = RunConfig {
        folder: dir.path().to_path_buf(),
        output: Some(out.clone()),
        ..RunConfig::default()
    };

    let summary = app::run(&config).expect("app runs");
    assert_eq!(summary.printed, 1);

    let report = std::fs::read_to_string(out).expect("report written");
    assert_eq!(report.lines().map(unprefixed).collect::<Vec<_>>(), ["2 is the number of lines in othello"]);
}

#[test]
fn app_run_fails_for_missing_folder() {
    let dir = plays_folder(&[]);
    let config = RunConfig {
        folder: dir.path().join("missing"),
        output: Some(dir.path().join("report.txt")),
        ..RunConfig::default()
    };

    let err = app::run(&config).expect_err("missing folder");
    assert!(format!("{err:#}").contains("open folder"));
    assert!(!dir.path().join("report.txt").exists());
}

#[test]
fn failed_load_leaves_existing_report_untouched() {
    let dir = plays_folder(&[]);
    let report = dir.path().join("keep.log");
    std::fs::write(&report, "previous report\n").expect("seed report");
    let config = RunConfig {
        folder: dir.path().join("missing"),
        output: Some(report.clone()),
        ..RunConfig::default()
    };

    app::run(&config).expect_err("missing folder");
    assert_eq!(std::fs::read_to_string(report).expect("report kept"), "previous report\n");
}

#[test]
fn report_inside_folder_is_not_counted_on_rerun() {
    let dir = plays_folder(&[("lear.txt", "Nothing will come of nothing.\n")]);
    let config = RunConfig {
        folder: dir.path().to_path_buf(),
        output: Some(dir.path().join("report.txt")),
        ..RunConfig::default()
    };

    app::run(&config).expect("first run");
    let summary = app::run(&config).expect("second run");

    assert_eq!(summary, RunSummary { documents: 1, printed: 1 });
    let report = std::fs::read_to_string(dir.path().join("report.txt")).expect("report written");
    assert_eq!(report.lines().map(unprefixed).collect::<Vec<_>>(), ["1 is the number of lines in lear"]);
}
