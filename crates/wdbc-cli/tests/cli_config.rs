use std::path::PathBuf;

use wdbc_classifiers::config::{EvaluationConfig, ModelType};
use wdbc_cli::cli::build_cli;
use wdbc_cli::evaluate::input::{from_arguments, load_evaluation_config};

fn write_config(dir: &tempfile::TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("config.json");
    std::fs::write(&path, json).expect("failed to write config");
    path
}

#[test]
fn defaults_without_config_file() {
    let matches = build_cli().try_get_matches_from(["wdbc"]).unwrap();
    let config = from_arguments(&matches).unwrap();
    assert_eq!(config, EvaluationConfig::default());
}

#[test]
fn partial_config_takes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, r#"{ "test_size": 0.3, "write_report": false }"#);

    let config = load_evaluation_config(&path).unwrap();
    assert_eq!(config.test_size, 0.3);
    assert!(!config.write_report);
    assert_eq!(config.random_state, 42);
    assert_eq!(config.cv_folds, 5);
    assert_eq!(config.models.len(), 3);
}

#[test]
fn model_list_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"{
            "models": [
                { "scale_features": true, "KNearestNeighbors": { "n_neighbors": 7 } },
                { "scale_features": false,
                  "DecisionTree": { "max_depth": 3, "min_samples_split": 2, "min_samples_leaf": 1 } }
            ]
        }"#,
    );

    let config = load_evaluation_config(&path).unwrap();
    assert_eq!(config.models.len(), 2);
    assert_eq!(
        config.models[0].model_type,
        ModelType::KNearestNeighbors { n_neighbors: 7 }
    );
    assert_eq!(config.models[1].name(), "Decision Tree");
}

#[test]
fn cli_flags_override_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, r#"{ "random_state": 1, "cv_folds": 3 }"#);
    let out = dir.path().join("out");

    let matches = build_cli()
        .try_get_matches_from([
            "wdbc".to_string(),
            path.display().to_string(),
            "--seed".to_string(),
            "7".to_string(),
            "--test-size".to_string(),
            "0.2".to_string(),
            "--output-dir".to_string(),
            out.display().to_string(),
            "--no-report".to_string(),
        ])
        .unwrap();
    let config = from_arguments(&matches).unwrap();

    assert_eq!(config.random_state, 7);
    assert_eq!(config.test_size, 0.2);
    assert_eq!(config.cv_folds, 3);
    assert_eq!(config.output_dir, out);
    assert!(!config.write_report);
}

#[test]
fn invalid_override_is_rejected() {
    let matches = build_cli()
        .try_get_matches_from(["wdbc", "--cv-folds", "1"])
        .unwrap();
    assert!(from_arguments(&matches).is_err());
}

#[test]
fn malformed_config_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "{ not json");
    let err = load_evaluation_config(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config"));
}

#[test]
fn non_numeric_seed_fails_parsing() {
    let result = build_cli().try_get_matches_from(["wdbc", "--seed", "abc"]);
    assert!(result.is_err());
}
