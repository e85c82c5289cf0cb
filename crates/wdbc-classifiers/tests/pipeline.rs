//! End-to-end runs on the bundled dataset.

use wdbc_classifiers::config::{EvaluationConfig, ModelConfig, ModelType};
use wdbc_classifiers::dataset::{load_breast_cancer, N_FEATURES, N_SAMPLES};
use wdbc_classifiers::evaluation::{evaluate_models, Evaluation};
use wdbc_classifiers::report::html::build_report;
use wdbc_classifiers::report::table::{format_results_table, write_results_csv};
use wdbc_classifiers::report::plots::plot_performance_dashboard;
use wdbc_classifiers::report::{render_all_charts, CHART_FILES};

fn default_evaluation() -> Evaluation {
    let dataset = load_breast_cancer().expect("bundled dataset");
    evaluate_models(dataset, &EvaluationConfig::default()).expect("evaluation")
}

#[test]
fn bundled_dataset_shape() {
    let dataset = load_breast_cancer().unwrap();
    assert_eq!(dataset.x.dim(), (N_SAMPLES, N_FEATURES));
    assert_eq!(dataset.class_counts(), vec![212, 357]);
    assert_eq!(dataset.feature_names[0], "mean radius");
    assert!(dataset.summary().contains("Dataset Shape: (569, 30)"));
}

#[test]
fn features_are_widened_from_f32() {
    let dataset = load_breast_cancer().unwrap();
    let first = dataset.x[[0, 0]];
    assert_eq!(first, 17.99f32 as f64);
    assert!((first - 17.99).abs() < 1e-5);
}

#[test]
fn default_run_scores_all_models() {
    let evaluation = default_evaluation();

    assert_eq!(evaluation.split.y_test.len(), 143);
    assert_eq!(evaluation.split.y_train.len(), 426);
    assert_eq!(
        evaluation.split.y_test.iter().filter(|&&y| y == 0).count(),
        53
    );

    let names: Vec<&str> = evaluation.results_table().iter().map(|(n, _)| *n).collect();
    assert_eq!(
        names,
        vec!["Logistic Regression", "Decision Tree", "K-Nearest Neighbors"]
    );
    for model in &evaluation.models {
        for value in model.metrics.values() {
            assert!((0.0..=1.0).contains(&value), "{}: {}", model.name, value);
        }
        assert!(model.metrics.accuracy > 0.85, "{} accuracy", model.name);
        assert!(model.metrics.roc_auc > 0.85, "{} ROC AUC", model.name);
        assert_eq!(model.cv.scores.len(), 5);
        assert_eq!(model.confusion.total(), 143);
        assert!(model.report.contains("weighted avg"));
    }
}

#[test]
fn same_seed_same_split() {
    let first = default_evaluation();
    let second = default_evaluation();
    assert_eq!(first.split.test_indices, second.split.test_indices);
    assert_eq!(
        first.models[0].metrics.accuracy,
        second.models[0].metrics.accuracy
    );

    let dataset = load_breast_cancer().unwrap();
    let config = EvaluationConfig {
        random_state: 7,
        ..EvaluationConfig::default()
    };
    let other = evaluate_models(dataset, &config).unwrap();
    assert_ne!(first.split.test_indices, other.split.test_indices);
}

#[test]
fn importances_and_correlations_come_from_the_tree() {
    let evaluation = default_evaluation();
    let (name, _) = evaluation.feature_importances().unwrap();
    assert_eq!(name, "Decision Tree");

    let top = evaluation.top_features(15).unwrap();
    assert_eq!(top.len(), 15);
    assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));

    let (columns, corr) = evaluation.feature_correlations(10).unwrap();
    assert_eq!(columns.len(), 10);
    assert_eq!(corr.dim(), (10, 10));
    for i in 0..10 {
        assert!((corr[[i, i]] - 1.0).abs() < 1e-9);
    }
}

#[test]
fn artifacts_are_written() {
    let evaluation = default_evaluation();
    let dir = tempfile::tempdir().unwrap();

    let charts = render_all_charts(&evaluation, dir.path()).unwrap();
    assert_eq!(charts.len(), CHART_FILES.len());
    for (path, name) in charts.iter().zip(CHART_FILES) {
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), name);
        let svg = std::fs::read_to_string(path).unwrap();
        assert!(svg.contains("<svg"), "{} is not an SVG", name);
    }

    let csv_path = dir.path().join("model_results.csv");
    write_results_csv(&evaluation, &csv_path).unwrap();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Model,Accuracy,F1 Score,CV Mean,CV Std,ROC AUC")
    );
    assert_eq!(lines.count(), 3);

    let html = build_report(&evaluation, "{}").render().into_string();
    assert!(html.contains("Logistic Regression"));
    assert!(html.contains("Classification Reports"));
}

#[test]
fn results_table_has_header_and_rows() {
    let evaluation = default_evaluation();
    let table = format_results_table(&evaluation);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].trim_start().starts_with("Accuracy  F1 Score  CV Mean  CV Std  ROC AUC"));
    assert!(lines[2].starts_with("Decision Tree"));
}

#[test]
fn tree_less_run_skips_importance_charts() {
    let config = EvaluationConfig {
        models: vec![ModelConfig::new(ModelType::KNearestNeighbors { n_neighbors: 5 })],
        ..EvaluationConfig::default()
    };
    config.validate().unwrap();
    let evaluation = evaluate_models(load_breast_cancer().unwrap(), &config).unwrap();
    assert!(evaluation.feature_importances().is_none());

    let dir = tempfile::tempdir().unwrap();
    let charts = render_all_charts(&evaluation, dir.path()).unwrap();
    let names: Vec<&str> = charts
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![CHART_FILES[0], CHART_FILES[1], CHART_FILES[2], CHART_FILES[5]]
    );
    assert!(!dir.path().join(CHART_FILES[3]).exists());
    assert!(!dir.path().join(CHART_FILES[4]).exists());
}

#[test]
fn cv_caption_follows_fold_count() {
    let config = EvaluationConfig {
        cv_folds: 3,
        ..EvaluationConfig::default()
    };
    let evaluation = evaluate_models(load_breast_cancer().unwrap(), &config).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CHART_FILES[0]);
    plot_performance_dashboard(&evaluation, &path).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("Cross-Validation Scores (3-Fold)"));
    assert!(!svg.contains("(5-Fold)"));
}
