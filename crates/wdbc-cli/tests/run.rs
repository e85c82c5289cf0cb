//! End-to-end runs of the benchmark into a temporary output directory.

use std::path::Path;

use wdbc_classifiers::config::EvaluationConfig;
use wdbc_classifiers::report::html::HTML_REPORT;
use wdbc_classifiers::report::table::RESULTS_CSV;
use wdbc_classifiers::report::CHART_FILES;
use wdbc_cli::evaluate::run::run_evaluation;

fn config_in(dir: &Path) -> EvaluationConfig {
    EvaluationConfig {
        output_dir: dir.to_path_buf(),
        ..EvaluationConfig::default()
    }
}

fn file_names(files: &[std::path::PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn run_writes_charts_csv_and_report_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_evaluation(&config_in(dir.path())).unwrap();

    let mut expected: Vec<String> = CHART_FILES.iter().map(|f| f.to_string()).collect();
    expected.push(RESULTS_CSV.to_string());
    expected.push(HTML_REPORT.to_string());
    assert_eq!(output.files.len(), 8);
    assert_eq!(file_names(&output.files), expected);

    for path in &output.files {
        assert!(path.starts_with(dir.path()), "{} outside output dir", path.display());
        let size = std::fs::metadata(path).unwrap().len();
        assert!(size > 0, "{} is empty", path.display());
    }
    assert_eq!(output.evaluation.models.len(), 3);
}

#[test]
fn run_without_report_writes_seven_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = EvaluationConfig {
        write_report: false,
        ..config_in(dir.path())
    };
    let output = run_evaluation(&config).unwrap();

    assert_eq!(output.files.len(), 7);
    assert_eq!(
        file_names(&output.files).last().map(String::as_str),
        Some(RESULTS_CSV)
    );
    assert!(!dir.path().join(HTML_REPORT).exists());
}

#[test]
fn run_creates_missing_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("charts").join("wdbc");
    let output = run_evaluation(&config_in(&nested)).unwrap();
    assert!(output.files.iter().all(|p| p.exists()));
}
