//! The Breast Cancer Wisconsin (Diagnostic) dataset.
//!
//! The numbers come from the copy bundled with `smartcore`; this module
//! converts them into `ndarray` containers and attaches the feature and class
//! names used in reports.
use ndarray::{Array1, Array2};

use crate::error::{ClassifierError, Result};

pub const N_SAMPLES: usize = 569;
pub const N_FEATURES: usize = 30;

pub const FEATURE_NAMES: [&str; N_FEATURES] = [
    "mean radius",
    "mean texture",
    "mean perimeter",
    "mean area",
    "mean smoothness",
    "mean compactness",
    "mean concavity",
    "mean concave points",
    "mean symmetry",
    "mean fractal dimension",
    "radius error",
    "texture error",
    "perimeter error",
    "area error",
    "smoothness error",
    "compactness error",
    "concavity error",
    "concave points error",
    "symmetry error",
    "fractal dimension error",
    "worst radius",
    "worst texture",
    "worst perimeter",
    "worst area",
    "worst smoothness",
    "worst compactness",
    "worst concavity",
    "worst concave points",
    "worst symmetry",
    "worst fractal dimension",
];

/// Class 0 is malignant, class 1 is benign.
pub const TARGET_NAMES: [&str; 2] = ["malignant", "benign"];

#[derive(Debug, Clone)]
pub struct Dataset {
    pub x: Array2<f64>,
    pub y: Array1<usize>,
    pub feature_names: Vec<String>,
    pub target_names: Vec<String>,
}

/// Load the bundled dataset and check its shape and labels.
///
/// smartcore ships the measurements as `f32`; they are widened to `f64`
/// here, so a value such as `17.99` reads back as `17.989999771118164`.
/// Metric values can therefore differ slightly from a float64 reference
/// copy of the data.
pub fn load_breast_cancer() -> Result<Dataset> {
    let raw = smartcore::dataset::breast_cancer::load_dataset();
    if raw.num_samples != N_SAMPLES || raw.num_features != N_FEATURES {
        return Err(ClassifierError::Dataset(format!(
            "expected {} x {} matrix, found {} x {}",
            N_SAMPLES, N_FEATURES, raw.num_samples, raw.num_features
        )));
    }

    let data: Vec<f64> = raw.data.iter().map(|&v| v as f64).collect();
    let x = Array2::from_shape_vec((raw.num_samples, raw.num_features), data)?;
    let y: Array1<usize> = raw.target.iter().map(|&t| t as usize).collect();

    let dataset = Dataset::new(
        x,
        y,
        FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        TARGET_NAMES.iter().map(|s| s.to_string()).collect(),
    )?;
    log::debug!(
        "Loaded breast cancer dataset: {} samples, {} features",
        dataset.n_samples(),
        dataset.n_features()
    );
    Ok(dataset)
}

impl Dataset {
    /// Build a dataset from parts. Labels must index into `target_names`.
    pub fn new(
        x: Array2<f64>,
        y: Array1<usize>,
        feature_names: Vec<String>,
        target_names: Vec<String>,
    ) -> Result<Self> {
        if x.nrows() != y.len() {
            return Err(ClassifierError::Shape(format!(
                "{} feature rows but {} labels",
                x.nrows(),
                y.len()
            )));
        }
        if x.ncols() != feature_names.len() {
            return Err(ClassifierError::Shape(format!(
                "{} feature columns but {} feature names",
                x.ncols(),
                feature_names.len()
            )));
        }
        if let Some(bad) = y.iter().find(|&&label| label >= target_names.len()) {
            return Err(ClassifierError::Dataset(format!(
                "label {} has no class name (expected < {})",
                bad,
                target_names.len()
            )));
        }
        Ok(Dataset {
            x,
            y,
            feature_names,
            target_names,
        })
    }

    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    /// Sample count per class, indexed by label.
    pub fn class_counts(&self) -> Vec<usize> {
        class_counts(&self.y.to_vec(), self.target_names.len())
    }

    /// Banner-framed overview of the dataset.
    pub fn summary(&self) -> String {
        let rule = "=".repeat(60);
        let mut out = String::new();
        out.push_str(&rule);
        out.push_str("\nBREAST CANCER CLASSIFICATION PROJECT\n");
        out.push_str(&rule);
        out.push_str(&format!(
            "\n\nDataset Shape: ({}, {})\n",
            self.n_samples(),
            self.n_features()
        ));
        out.push_str(&format!("Number of Features: {}\n", self.n_features()));
        out.push_str(&format!("Number of Samples: {}\n", self.n_samples()));
        out.push_str(&format!("Target Classes: {:?}\n", self.target_names));
        out.push_str("Class Distribution:\n");

        // Most frequent class first
        let counts = self.class_counts();
        let mut order: Vec<usize> = (0..counts.len()).collect();
        order.sort_by(|&a, &b| counts[b].cmp(&counts[a]));
        for label in order {
            out.push_str(&format!(
                "  {} ({}): {}\n",
                label, self.target_names[label], counts[label]
            ));
        }
        out.push_str(&rule);
        out
    }

    /// Write the summary banner to stdout.
    pub fn print_summary(&self) {
        println!("{}", self.summary());
    }
}

/// Count labels `0..n_classes`; labels outside the range are ignored.
pub fn class_counts(y: &[usize], n_classes: usize) -> Vec<usize> {
    let mut counts = vec![0usize; n_classes];
    for &label in y {
        if label < n_classes {
            counts[label] += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_labels() {
        let x = Array2::zeros((3, 2));
        let y = Array1::from_vec(vec![0, 1]);
        let err = Dataset::new(
            x,
            y,
            vec!["a".into(), "b".into()],
            vec!["neg".into(), "pos".into()],
        );
        assert!(matches!(err, Err(ClassifierError::Shape(_))));
    }

    #[test]
    fn rejects_unknown_class() {
        let x = Array2::zeros((2, 1));
        let y = Array1::from_vec(vec![0, 2]);
        let err = Dataset::new(x, y, vec!["a".into()], vec!["neg".into(), "pos".into()]);
        assert!(matches!(err, Err(ClassifierError::Dataset(_))));
    }

    #[test]
    fn counts_classes() {
        assert_eq!(class_counts(&[0, 1, 1, 1, 0], 2), vec![2, 3]);
    }
}
