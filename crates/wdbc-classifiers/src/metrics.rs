//! Binary classification metrics.
//!
//! Class `1` is the positive class throughout. Ratios with a zero denominator
//! evaluate to `0.0` rather than NaN, so every scalar metric lies in `[0, 1]`.
//!
//! Accuracy and ROC AUC are computed by `smartcore::metrics`. Precision,
//! recall and F1 are read off the confusion matrix, which the reports need
//! anyway.
use ndarray::{Array1, Array2};
use serde::Serialize;

use crate::error::{ClassifierError, Result};

fn check_same_length(a: usize, b: usize) -> Result<()> {
    if a != b {
        return Err(ClassifierError::Shape(format!(
            "y_true has {} entries but predictions have {}",
            a, b
        )));
    }
    Ok(())
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

fn as_labels(y: &Array1<usize>) -> Vec<u32> {
    y.iter().map(|&label| label as u32).collect()
}

/// Fraction of predictions equal to the truth.
pub fn accuracy(y_true: &Array1<usize>, y_pred: &Array1<usize>) -> Result<f64> {
    check_same_length(y_true.len(), y_pred.len())?;
    if y_true.is_empty() {
        return Ok(0.0);
    }
    Ok(smartcore::metrics::accuracy(
        &as_labels(y_true),
        &as_labels(y_pred),
    ))
}

/// 2x2 confusion matrix; rows are the actual class, columns the predicted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    pub tn: usize,
    pub fp: usize,
    pub fn_: usize,
    pub tp: usize,
}

impl ConfusionMatrix {
    pub fn as_array(&self) -> [[usize; 2]; 2] {
        [[self.tn, self.fp], [self.fn_, self.tp]]
    }

    /// Precision of class 1.
    pub fn precision(&self) -> f64 {
        ratio(self.tp, self.tp + self.fp)
    }

    /// Recall of class 1.
    pub fn recall(&self) -> f64 {
        ratio(self.tp, self.tp + self.fn_)
    }

    pub fn f1(&self) -> f64 {
        ratio(2 * self.tp, 2 * self.tp + self.fp + self.fn_)
    }

    pub fn total(&self) -> usize {
        self.tn + self.fp + self.fn_ + self.tp
    }
}

pub fn confusion_matrix(y_true: &Array1<usize>, y_pred: &Array1<usize>) -> Result<ConfusionMatrix> {
    check_same_length(y_true.len(), y_pred.len())?;
    let mut cm = ConfusionMatrix {
        tn: 0,
        fp: 0,
        fn_: 0,
        tp: 0,
    };
    for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
        match (t == 1, p == 1) {
            (false, false) => cm.tn += 1,
            (false, true) => cm.fp += 1,
            (true, false) => cm.fn_ += 1,
            (true, true) => cm.tp += 1,
        }
    }
    Ok(cm)
}

pub fn precision(y_true: &Array1<usize>, y_pred: &Array1<usize>) -> Result<f64> {
    Ok(confusion_matrix(y_true, y_pred)?.precision())
}

pub fn recall(y_true: &Array1<usize>, y_pred: &Array1<usize>) -> Result<f64> {
    Ok(confusion_matrix(y_true, y_pred)?.recall())
}

pub fn f1_score(y_true: &Array1<usize>, y_pred: &Array1<usize>) -> Result<f64> {
    Ok(confusion_matrix(y_true, y_pred)?.f1())
}

/// Points of a receiver operating characteristic curve.
#[derive(Debug, Clone, Serialize)]
pub struct RocCurve {
    pub fpr: Vec<f64>,
    pub tpr: Vec<f64>,
    /// Score threshold of each point; the first one is `+inf`.
    pub thresholds: Vec<f64>,
}

/// Compute the ROC curve of `scores` against binary `y_true`.
///
/// Thresholds are the distinct scores in decreasing order, preceded by an
/// infinite threshold at `(0, 0)`. Points lying on a straight segment
/// between their neighbours are dropped since they do not change the curve.
pub fn roc_curve(y_true: &Array1<usize>, scores: &Array1<f64>) -> Result<RocCurve> {
    check_same_length(y_true.len(), scores.len())?;
    if scores.iter().any(|s| s.is_nan()) {
        return Err(ClassifierError::UndefinedMetric(
            "ROC curve scores contain NaN".to_string(),
        ));
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // Cumulative counts at the last position of every distinct score
    let mut tps: Vec<f64> = Vec::new();
    let mut fps: Vec<f64> = Vec::new();
    let mut thresholds: Vec<f64> = Vec::new();
    let (mut tp, mut fp) = (0usize, 0usize);
    for (pos, &i) in order.iter().enumerate() {
        if y_true[i] == 1 {
            tp += 1;
        } else {
            fp += 1;
        }
        let last_of_group = order
            .get(pos + 1)
            .map_or(true, |&next| scores[next] != scores[i]);
        if last_of_group {
            tps.push(tp as f64);
            fps.push(fp as f64);
            thresholds.push(scores[i]);
        }
    }

    if tp == 0 || fp == 0 {
        return Err(ClassifierError::UndefinedMetric(format!(
            "ROC curve needs both classes in y_true ({} positives, {} negatives)",
            tp, fp
        )));
    }

    // Drop collinear intermediate points
    if tps.len() > 2 {
        let keep: Vec<usize> = (0..tps.len())
            .filter(|&i| {
                if i == 0 || i == tps.len() - 1 {
                    return true;
                }
                let d_fps = fps[i + 1] - 2.0 * fps[i] + fps[i - 1];
                let d_tps = tps[i + 1] - 2.0 * tps[i] + tps[i - 1];
                d_fps != 0.0 || d_tps != 0.0
            })
            .collect();
        tps = keep.iter().map(|&i| tps[i]).collect();
        fps = keep.iter().map(|&i| fps[i]).collect();
        thresholds = keep.iter().map(|&i| thresholds[i]).collect();
    }

    tps.insert(0, 0.0);
    fps.insert(0, 0.0);
    thresholds.insert(0, f64::INFINITY);

    let (p, n) = (tp as f64, fp as f64);
    Ok(RocCurve {
        fpr: fps.iter().map(|v| v / n).collect(),
        tpr: tps.iter().map(|v| v / p).collect(),
        thresholds,
    })
}

/// Area under a curve by the trapezoidal rule. `x` must be monotonic.
pub fn auc(x: &[f64], y: &[f64]) -> Result<f64> {
    check_same_length(x.len(), y.len())?;
    if x.len() < 2 {
        return Err(ClassifierError::UndefinedMetric(format!(
            "at least 2 points are needed to compute area under curve, got {}",
            x.len()
        )));
    }
    let increasing = x.windows(2).all(|w| w[1] >= w[0]);
    let decreasing = x.windows(2).all(|w| w[1] <= w[0]);
    if !increasing && !decreasing {
        return Err(ClassifierError::UndefinedMetric(
            "x is neither increasing nor decreasing".to_string(),
        ));
    }
    let area: f64 = x
        .windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[1] + ys[0]) / 2.0)
        .sum();
    Ok(if decreasing && !increasing { -area } else { area })
}

/// Area under the ROC curve, i.e. the probability that a random positive
/// scores above a random negative (ties count one half).
pub fn roc_auc_score(y_true: &Array1<usize>, scores: &Array1<f64>) -> Result<f64> {
    check_same_length(y_true.len(), scores.len())?;
    if scores.iter().any(|s| s.is_nan()) {
        return Err(ClassifierError::UndefinedMetric(
            "ROC AUC scores contain NaN".to_string(),
        ));
    }
    let positives = y_true.iter().filter(|&&t| t == 1).count();
    if positives == 0 || positives == y_true.len() {
        return Err(ClassifierError::UndefinedMetric(format!(
            "ROC AUC needs both classes in y_true ({} positives, {} negatives)",
            positives,
            y_true.len() - positives
        )));
    }

    // smartcore ranks tied scores by input position, so hand it sorted scores
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));
    let truth: Vec<f64> = order.iter().map(|&i| y_true[i] as f64).collect();
    let ranked: Vec<f64> = order.iter().map(|&i| scores[i]).collect();
    Ok(smartcore::metrics::roc_auc_score(&truth, &ranked))
}

/// Per-class precision/recall/F1/support plus accuracy and averages.
///
/// Rendered in the familiar fixed-width text layout, for example:
///
/// ```text
///               precision    recall  f1-score   support
///
///    malignant       0.95      0.98      0.96        53
///       benign       0.99      0.97      0.98        90
///
///     accuracy                           0.97       143
///    macro avg       0.97      0.97      0.97       143
/// weighted avg       0.97      0.97      0.97       143
/// ```
pub fn classification_report(
    y_true: &Array1<usize>,
    y_pred: &Array1<usize>,
    target_names: &[String],
    digits: usize,
) -> Result<String> {
    check_same_length(y_true.len(), y_pred.len())?;
    if target_names.is_empty() {
        return Err(ClassifierError::InvalidConfig(
            "classification report needs at least one class name".to_string(),
        ));
    }

    let headers = ["precision", "recall", "f1-score", "support"];
    let last_heading = "weighted avg";
    let name_width = target_names.iter().map(|n| n.len()).max().unwrap_or(0);
    let width = name_width.max(last_heading.len()).max(digits);

    let row = |name: &str, p: f64, r: f64, f: f64, support: usize| -> String {
        format!(
            "{:>width$}  {:>9.digits$} {:>9.digits$} {:>9.digits$} {:>9}\n",
            name,
            p,
            r,
            f,
            support,
            width = width,
            digits = digits
        )
    };

    let mut report = format!("{:>width$} ", "", width = width);
    for h in headers {
        report.push_str(&format!(" {:>9}", h));
    }
    report.push_str("\n\n");

    let total = y_true.len();
    let mut per_class = Vec::with_capacity(target_names.len());
    for (class, name) in target_names.iter().enumerate() {
        let mut tp = 0;
        let mut predicted = 0;
        let mut support = 0;
        for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
            if p == class {
                predicted += 1;
            }
            if t == class {
                support += 1;
                if p == class {
                    tp += 1;
                }
            }
        }
        let p = ratio(tp, predicted);
        let r = ratio(tp, support);
        let f = if p + r == 0.0 { 0.0 } else { 2.0 * p * r / (p + r) };
        report.push_str(&row(name, p, r, f, support));
        per_class.push((p, r, f, support));
    }
    report.push('\n');

    let acc = accuracy(y_true, y_pred)?;
    report.push_str(&format!(
        "{:>width$}  {:>9} {:>9} {:>9.digits$} {:>9}\n",
        "accuracy",
        "",
        "",
        acc,
        total,
        width = width,
        digits = digits
    ));

    let k = per_class.len() as f64;
    let macro_avg = per_class.iter().fold((0.0, 0.0, 0.0), |acc, (p, r, f, _)| {
        (acc.0 + p / k, acc.1 + r / k, acc.2 + f / k)
    });
    report.push_str(&row("macro avg", macro_avg.0, macro_avg.1, macro_avg.2, total));

    let n = per_class.iter().map(|c| c.3).sum::<usize>().max(1) as f64;
    let weighted = per_class.iter().fold((0.0, 0.0, 0.0), |acc, (p, r, f, s)| {
        let w = *s as f64 / n;
        (acc.0 + p * w, acc.1 + r * w, acc.2 + f * w)
    });
    report.push_str(&row("weighted avg", weighted.0, weighted.1, weighted.2, total));

    Ok(report)
}

/// Pearson correlation between the selected columns of `x`.
///
/// Entry `(i, j)` correlates `columns[i]` with `columns[j]`. A constant
/// column yields NaN against every column.
pub fn pearson_correlation_matrix(x: &Array2<f64>, columns: &[usize]) -> Result<Array2<f64>> {
    if let Some(bad) = columns.iter().find(|&&c| c >= x.ncols()) {
        return Err(ClassifierError::Shape(format!(
            "column {} out of range for a matrix with {} columns",
            bad,
            x.ncols()
        )));
    }
    if x.nrows() < 2 {
        return Err(ClassifierError::InsufficientData(
            "correlation needs at least 2 rows".to_string(),
        ));
    }

    let centred: Vec<Array1<f64>> = columns
        .iter()
        .map(|&c| {
            let col = x.column(c);
            let mean = col.sum() / col.len() as f64;
            col.mapv(|v| v - mean)
        })
        .collect();
    let norms: Vec<f64> = centred.iter().map(|c| c.dot(c).sqrt()).collect();

    let k = columns.len();
    let mut corr = Array2::<f64>::zeros((k, k));
    for i in 0..k {
        for j in i..k {
            let den = norms[i] * norms[j];
            let value = if den == 0.0 {
                f64::NAN
            } else {
                (centred[i].dot(&centred[j]) / den).clamp(-1.0, 1.0)
            };
            corr[[i, j]] = value;
            corr[[j, i]] = value;
        }
    }
    Ok(corr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn roc_drops_collinear_points() {
        let y = array![0, 0, 1, 1];
        let scores = array![0.1, 0.4, 0.35, 0.8];
        let roc = roc_curve(&y, &scores).unwrap();
        assert_eq!(roc.fpr, vec![0.0, 0.0, 0.5, 0.5, 1.0]);
        assert_eq!(roc.tpr, vec![0.0, 0.5, 0.5, 1.0, 1.0]);
        assert!(roc.thresholds[0].is_infinite());
        assert!((auc(&roc.fpr, &roc.tpr).unwrap() - 0.75).abs() < 1e-12);
        assert!((roc_auc_score(&y, &scores).unwrap() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn auc_agrees_with_the_curve_under_ties() {
        // Interleaved ties like the vote fractions of a small KNN
        let y = array![1, 0, 1, 0, 1, 1, 0, 0, 1, 0];
        let scores = array![0.8, 0.4, 0.4, 0.8, 1.0, 0.6, 0.0, 0.4, 0.6, 0.2];
        let roc = roc_curve(&y, &scores).unwrap();
        let trapezoid = auc(&roc.fpr, &roc.tpr).unwrap();
        assert!((roc_auc_score(&y, &scores).unwrap() - trapezoid).abs() < 1e-12);
    }

    #[test]
    fn tied_scores_share_a_threshold() {
        let y = array![0, 1, 0, 1];
        let scores = array![0.5, 0.5, 0.5, 0.5];
        let roc = roc_curve(&y, &scores).unwrap();
        assert_eq!(roc.fpr, vec![0.0, 1.0]);
        assert_eq!(roc.tpr, vec![0.0, 1.0]);
        assert!((roc_auc_score(&y, &scores).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn correlation_of_linear_columns() {
        let x = array![[1.0, 2.0, 3.0], [2.0, 4.0, 1.0], [3.0, 6.0, 2.0]];
        let corr = pearson_correlation_matrix(&x, &[0, 1]).unwrap();
        for v in corr.iter() {
            assert!((v - 1.0).abs() < 1e-12);
        }
    }
}
