use std::path::{Path, PathBuf};

use readability::{
    app,
    config::{Config, OutputFormat},
    presentation,
};
use readability_domain::ScoreSelection;
use readability_infra::FsDocumentSource;
use readability_ports::Preset;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn run(config: &Config, answers: &[&str]) -> (anyhow::Result<()>, String) {
    let mut out = Vec::new();
    let result = app::run(config, &FsDocumentSource::new(), &Preset::new(answers.iter().copied()), &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn config(path: Option<PathBuf>, selection: Option<&str>, format: OutputFormat) -> Config {
    Config { path, selection: selection.map(ScoreSelection::parse), format }
}

#[test]
fn all_scores_for_fixture() {
    let (result, out) = run(&config(Some(fixture("cat.txt")), Some("all"), OutputFormat::Text), &[]);
    result.unwrap();

    assert!(out.starts_with("Words: 6\nSentences: 2\nCharacters: 20\nSyllables: 6\nPolysyllables: 0\n"));
    assert!(out.contains("Automated Readability Index: -4.230000 (about 1 year olds)"));
    assert!(out.contains("Simple Measure of Gobbledygook: 3.129100 (about 9 year olds)"));
    assert!(out.ends_with("This text should be understood on average by 2.750000 year olds.\n"));
}

#[test]
fn prompts_for_path_and_score() {
    let path = fixture("sentences.txt");
    let answers = [path.to_str().unwrap(), "SMOG"];
    let (result, out) = run(&config(None, None, OutputFormat::Text), &answers);
    result.unwrap();

    assert!(out.contains("Polysyllables: 2"));
    assert!(out.contains("Simple Measure of Gobbledygook:"));
    assert!(!out.contains("Coleman"));
}

#[test]
fn unsupported_selection_is_not_an_error() {
    let (result, out) = run(&config(Some(fixture("cat.txt")), None, OutputFormat::Text), &["fog"]);
    result.unwrap();
    assert!(out.ends_with("I can't calculate that :(\n"));
}

#[test]
fn missing_file_is_reported_by_path() {
    let missing = fixture("missing.txt");
    let (result, out) = run(&config(Some(missing.clone()), Some("ari"), OutputFormat::Text), &[]);
    let err = result.unwrap_err();

    assert!(out.is_empty());
    assert_eq!(presentation::describe_error(&err), format!("{} was not found", missing.display()));
}

#[test]
fn empty_file_is_not_scored() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty.txt");
    std::fs::write(&empty, "").unwrap();

    let (result, out) = run(&config(Some(empty), Some("all"), OutputFormat::Text), &[]);
    let err = result.unwrap_err();

    assert!(out.is_empty());
    assert_eq!(
        presentation::describe_error(&err),
        "Seems like the file was empty or its content could not be scored"
    );
}

#[test]
fn json_output_skips_counts_preamble() {
    let (result, out) = run(&config(Some(fixture("cat.txt")), Some("cl"), OutputFormat::Json), &[]);
    result.unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["counts"]["words"], 6);
    assert_eq!(value["report"]["kind"], "single");
    assert_eq!(value["report"]["assessment"]["formula"], "cl");
    assert_eq!(value["report"]["assessment"]["age"], -1);
}

#[test]
fn running_out_of_answers_fails() {
    let (result, _) = run(&config(None, None, OutputFormat::Text), &[]);
    let message = presentation::describe_error(&result.unwrap_err());
    assert!(message.contains("no answer available"), "{message}");
}
