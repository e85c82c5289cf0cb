//! Integration tests for the metric functions and the text classification report.

use ndarray::array;
use wdbc_classifiers::metrics::{
    accuracy, classification_report, confusion_matrix, f1_score, precision, recall,
    roc_auc_score, roc_curve,
};
use wdbc_classifiers::ClassifierError;

fn names() -> Vec<String> {
    vec!["malignant".to_string(), "benign".to_string()]
}

#[test]
fn hand_computed_binary_metrics() {
    let y_true = array![0, 0, 1, 1, 1, 0];
    let y_pred = array![0, 1, 1, 1, 0, 0];

    assert!((accuracy(&y_true, &y_pred).unwrap() - 4.0 / 6.0).abs() < 1e-12);
    let cm = confusion_matrix(&y_true, &y_pred).unwrap();
    assert_eq!(cm.as_array(), [[2, 1], [1, 2]]);
    assert!((precision(&y_true, &y_pred).unwrap() - 2.0 / 3.0).abs() < 1e-12);
    assert!((recall(&y_true, &y_pred).unwrap() - 2.0 / 3.0).abs() < 1e-12);
    assert!((f1_score(&y_true, &y_pred).unwrap() - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn no_positive_predictions_gives_zero_f1() {
    let y_true = array![0, 1, 1];
    let y_pred = array![0, 0, 0];
    assert_eq!(precision(&y_true, &y_pred).unwrap(), 0.0);
    assert_eq!(f1_score(&y_true, &y_pred).unwrap(), 0.0);
}

#[test]
fn perfect_ranking_has_unit_auc() {
    let y_true = array![0, 0, 1, 1];
    let scores = array![0.1, 0.2, 0.8, 0.9];
    assert_eq!(roc_auc_score(&y_true, &scores).unwrap(), 1.0);

    let roc = roc_curve(&y_true, &scores).unwrap();
    assert_eq!(roc.fpr.first(), Some(&0.0));
    assert_eq!(roc.tpr.first(), Some(&0.0));
    assert_eq!(roc.fpr.last(), Some(&1.0));
    assert_eq!(roc.tpr.last(), Some(&1.0));
    assert!(roc.thresholds[0].is_infinite());
    assert!(roc.fpr.windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn single_class_roc_is_undefined() {
    let y_true = array![1, 1, 1];
    let scores = array![0.2, 0.5, 0.9];
    assert!(matches!(
        roc_curve(&y_true, &scores),
        Err(ClassifierError::UndefinedMetric(_))
    ));
}

#[test]
fn classification_report_layout() {
    let y_true = array![0, 0, 1, 1];
    let y_pred = array![0, 1, 1, 1];
    let report = classification_report(&y_true, &y_pred, &names(), 2).unwrap();
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(
        lines[0],
        "              precision    recall  f1-score   support"
    );
    assert_eq!(lines[1], "");
    assert_eq!(
        lines[2],
        "   malignant       1.00      0.50      0.67         2"
    );
    assert_eq!(
        lines[3],
        "      benign       0.67      1.00      0.80         2"
    );
    assert_eq!(lines[4], "");
    assert_eq!(
        lines[5],
        "    accuracy                           0.75         4"
    );
    assert_eq!(
        lines[6],
        "   macro avg       0.83      0.75      0.73         4"
    );
    assert_eq!(
        lines[7],
        "weighted avg       0.83      0.75      0.73         4"
    );
}

#[test]
fn mismatched_lengths_are_rejected() {
    let y_true = array![0, 1];
    let y_pred = array![0, 1, 1];
    assert!(matches!(
        accuracy(&y_true, &y_pred),
        Err(ClassifierError::Shape(_))
    ));
}
