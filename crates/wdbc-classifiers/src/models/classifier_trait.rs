use ndarray::{Array1, Array2};

use crate::error::Result;

/// Common contract of the binary classifiers in the benchmark.
///
/// Labels are `0` or `1`; probabilities are those of class `1`.
pub trait ClassifierModel: Send {
    /// Learn model parameters from `x` (one row per sample) and `y`.
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<usize>) -> Result<()>;

    /// Predict the probability of class `1` for every row of `x`.
    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array1<f64>>;

    /// Predict class labels. A row is labelled `1` when its probability
    /// exceeds one half.
    fn predict(&self, x: &Array2<f64>) -> Result<Array1<usize>> {
        Ok(self.predict_proba(x)?.mapv(|p| usize::from(p > 0.5)))
    }

    /// Human readable name of the model.
    fn name(&self) -> &str {
        "classifier"
    }

    /// Per-feature importances, for models that expose them.
    fn feature_importances(&self) -> Option<Array1<f64>> {
        None
    }
}

/// Check that a fit call received matching, binary, non-empty inputs.
pub(crate) fn check_fit_inputs(x: &Array2<f64>, y: &Array1<usize>) -> Result<()> {
    use crate::error::ClassifierError;

    if x.nrows() == 0 {
        return Err(ClassifierError::InsufficientData(
            "cannot fit on an empty matrix".to_string(),
        ));
    }
    if x.nrows() != y.len() {
        return Err(ClassifierError::Shape(format!(
            "{} feature rows but {} labels",
            x.nrows(),
            y.len()
        )));
    }
    if let Some(bad) = y.iter().find(|&&label| label > 1) {
        return Err(ClassifierError::InvalidConfig(format!(
            "binary classifiers expect labels 0 or 1, found {}",
            bad
        )));
    }
    Ok(())
}

/// Check that `x` has the width seen during fitting.
pub(crate) fn check_width(x: &Array2<f64>, n_features: usize) -> Result<()> {
    if x.ncols() != n_features {
        return Err(crate::error::ClassifierError::Shape(format!(
            "model was fit on {} features but got {}",
            n_features,
            x.ncols()
        )));
    }
    Ok(())
}
