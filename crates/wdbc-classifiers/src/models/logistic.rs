use ndarray::{Array1, Array2};
use smartcore::linear::logistic_regression::{
    LogisticRegression as SmartLogisticRegression, LogisticRegressionParameters,
};
use smartcore::numbers::realnum::RealNumber;

use crate::error::{ClassifierError, Result};
use crate::models::classifier_trait::{check_fit_inputs, check_width, ClassifierModel};

type FittedLogistic = SmartLogisticRegression<f64, u32, Array2<f64>, Array1<u32>>;

/// L2-regularized binary logistic regression backed by `smartcore`.
///
/// smartcore minimizes `sum(log_loss) + alpha/2 * ||w||²` with L-BFGS and
/// leaves the intercept unpenalized, so `alpha = 1 / C`.
pub struct LogisticRegression {
    c: f64,
    model: Option<FittedLogistic>,
}

impl LogisticRegression {
    pub fn new(c: f64) -> Self {
        LogisticRegression { c, model: None }
    }

    /// Fitted weights, one per feature.
    pub fn coefficients(&self) -> Option<Array1<f64>> {
        self.model
            .as_ref()
            .map(|model| model.coefficients().row(0).to_owned())
    }

    pub fn intercept(&self) -> Option<f64> {
        self.model.as_ref().map(|model| model.intercept()[[0, 0]])
    }
}

impl ClassifierModel for LogisticRegression {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<usize>) -> Result<()> {
        check_fit_inputs(x, y)?;
        let labels = y.mapv(|label| label as u32);
        let params = LogisticRegressionParameters::default().with_alpha(1.0 / self.c);

        let model = FittedLogistic::fit(x, &labels, params).map_err(|e| ClassifierError::Fit {
            model: "Logistic Regression",
            reason: e.to_string(),
        })?;
        log::trace!(
            "Logistic regression fit on {} samples, classes {:?}",
            x.nrows(),
            model.classes()
        );
        self.model = Some(model);
        Ok(())
    }

    fn predict_proba(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let model = self
            .model
            .as_ref()
            .ok_or(ClassifierError::NotFitted("Logistic Regression"))?;
        let weights = model.coefficients().row(0);
        check_width(x, weights.len())?;

        // Classes are sorted, so the fitted margin is that of class 1
        let intercept = model.intercept()[[0, 0]];
        Ok((x.dot(&weights) + intercept).mapv(RealNumber::sigmoid))
    }

    fn name(&self) -> &str {
        "Logistic Regression"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn separates_linear_classes() {
        let x = array![
            [-2.0, 0.1],
            [-1.5, -0.3],
            [-1.0, 0.2],
            [-0.5, 0.0],
            [0.5, 0.1],
            [1.0, -0.2],
            [1.5, 0.3],
            [2.0, 0.0]
        ];
        let y = array![0, 0, 0, 0, 1, 1, 1, 1];
        let mut model = LogisticRegression::new(1.0);
        model.fit(&x, &y).unwrap();

        assert_eq!(model.predict(&x).unwrap(), y);
        let w = model.coefficients().unwrap();
        assert!(w[0] > 0.0, "first coefficient should be positive, got {}", w[0]);
        assert!(model.intercept().unwrap().is_finite());
    }

    #[test]
    fn stronger_regularization_shrinks_weights() {
        let x = array![[-1.0], [-0.5], [0.5], [1.0], [0.2], [-0.2]];
        let y = array![0, 0, 1, 1, 1, 0];
        let mut loose = LogisticRegression::new(100.0);
        let mut tight = LogisticRegression::new(0.01);
        loose.fit(&x, &y).unwrap();
        tight.fit(&x, &y).unwrap();
        assert!(tight.coefficients().unwrap()[0].abs() < loose.coefficients().unwrap()[0].abs());
    }

    #[test]
    fn single_class_cannot_be_fit() {
        let mut model = LogisticRegression::new(1.0);
        let err = model.fit(&array![[0.0], [1.0]], &array![1, 1]);
        assert!(matches!(err, Err(ClassifierError::Fit { .. })));
    }

    #[test]
    fn predicting_before_fit_fails() {
        let model = LogisticRegression::new(1.0);
        assert!(matches!(
            model.predict_proba(&array![[1.0]]),
            Err(ClassifierError::NotFitted(_))
        ));
    }
}
