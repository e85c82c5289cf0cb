//! Feature standardization.
//!
//! `StandardScaler` learns per-column mean and population standard deviation
//! on one matrix (the training partition) and applies them to any matrix of
//! the same width.

use ndarray::{Array1, Array2, Axis};

use crate::error::{ClassifierError, Result};

/// Per-column mean/std standardization.
#[derive(Clone, Debug)]
pub struct StandardScaler {
    pub mean: Array1<f64>,
    pub std: Array1<f64>,
}

impl StandardScaler {
    /// Columns with a smaller spread are only centred.
    const MIN_STD: f64 = 1e-12;

    /// Fit the scaler on `x` where rows are samples and columns are features.
    pub fn fit(x: &Array2<f64>) -> Result<Self> {
        let (nrows, ncols) = x.dim();
        if nrows == 0 || ncols == 0 {
            return Err(ClassifierError::InsufficientData(
                "cannot fit a scaler on an empty matrix".to_string(),
            ));
        }

        let mean = x
            .mean_axis(Axis(0))
            .ok_or_else(|| ClassifierError::InsufficientData("empty matrix".to_string()))?;
        let std = x
            .std_axis(Axis(0), 0.0)
            .mapv(|s| if s < Self::MIN_STD { 1.0 } else { s });

        Ok(StandardScaler { mean, std })
    }

    /// Standardize every row of `x` with the fitted statistics.
    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        if x.ncols() != self.mean.len() {
            return Err(ClassifierError::Shape(format!(
                "scaler was fit on {} features but got {}",
                self.mean.len(),
                x.ncols()
            )));
        }
        Ok((x - &self.mean) / &self.std)
    }

    pub fn fit_transform(x: &Array2<f64>) -> Result<(Self, Array2<f64>)> {
        let scaler = Self::fit(x)?;
        let transformed = scaler.transform(x)?;
        Ok((scaler, transformed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn constant_column_is_only_centred() {
        let x = array![[1.0, 3.0], [2.0, 3.0], [3.0, 3.0]];
        let (scaler, t) = StandardScaler::fit_transform(&x).unwrap();
        assert_eq!(scaler.std[1], 1.0);
        for r in 0..3 {
            assert_eq!(t[[r, 1]], 0.0);
        }
    }

    #[test]
    fn width_mismatch_is_an_error() {
        let scaler = StandardScaler::fit(&array![[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert!(scaler.transform(&array![[1.0, 2.0, 3.0]]).is_err());
    }
}
