//! Train, score and cross-validate every configured model on one split.
use ndarray::{Array1, Array2, Axis};
use serde::Serialize;

use crate::config::{EvaluationConfig, ModelConfig};
use crate::data_handling::{stratified_kfold, train_test_split, Fold, Split};
use crate::dataset::Dataset;
use crate::error::{ClassifierError, Result};
use crate::math::{argsort_desc, mean_and_std};
use crate::metrics::{
    accuracy, classification_report, confusion_matrix, f1_score, pearson_correlation_matrix,
    roc_auc_score, roc_curve, ConfusionMatrix, RocCurve,
};
use crate::models::factory::build_model;
use crate::preprocessing::StandardScaler;

/// Accuracy of each cross-validation fold.
#[derive(Debug, Clone, Serialize)]
pub struct CvScores {
    pub scores: Vec<f64>,
    pub mean: f64,
    /// Population standard deviation across folds.
    pub std: f64,
}

/// One row of the results table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelMetrics {
    pub accuracy: f64,
    pub f1: f64,
    pub cv_mean: f64,
    pub cv_std: f64,
    pub roc_auc: f64,
}

impl ModelMetrics {
    pub const COLUMNS: [&'static str; 5] = ["Accuracy", "F1 Score", "CV Mean", "CV Std", "ROC AUC"];

    pub fn values(&self) -> [f64; 5] {
        [self.accuracy, self.f1, self.cv_mean, self.cv_std, self.roc_auc]
    }
}

/// Everything computed for a single model.
#[derive(Debug, Clone)]
pub struct ModelEvaluation {
    pub name: String,
    pub metrics: ModelMetrics,
    pub cv: CvScores,
    pub confusion: ConfusionMatrix,
    pub report: String,
    pub roc: RocCurve,
    pub feature_importances: Option<Array1<f64>>,
}

/// Outcome of a benchmark run, models in configuration order.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub dataset: Dataset,
    pub split: Split,
    pub models: Vec<ModelEvaluation>,
}

/// Cross-validated accuracy of a freshly built model per fold.
pub fn cross_val_score(
    config: &ModelConfig,
    x: &Array2<f64>,
    y: &Array1<usize>,
    folds: &[Fold],
) -> Result<CvScores> {
    let mut scores = Vec::with_capacity(folds.len());
    for (i, fold) in folds.iter().enumerate() {
        let mut model = build_model(config);
        model.fit(&x.select(Axis(0), &fold.train), &y.select(Axis(0), &fold.train))?;
        let y_pred = model.predict(&x.select(Axis(0), &fold.test))?;
        let score = accuracy(&y.select(Axis(0), &fold.test), &y_pred)?;
        log::trace!("{} fold {}: accuracy {:.4}", config.name(), i + 1, score);
        scores.push(score);
    }
    let (mean, std) = mean_and_std(&scores);
    Ok(CvScores { scores, mean, std })
}

/// Run the full pipeline: split, scale, then fit, score and cross-validate
/// every configured model.
pub fn evaluate_models(dataset: Dataset, config: &EvaluationConfig) -> Result<Evaluation> {
    config.validate()?;

    let split = train_test_split(&dataset.x, &dataset.y, config.test_size, config.random_state)?;
    let scaler = StandardScaler::fit(&split.x_train)?;
    let x_train_scaled = scaler.transform(&split.x_train)?;
    let x_test_scaled = scaler.transform(&split.x_test)?;
    let folds = stratified_kfold(&split.y_train, config.cv_folds)?;

    log::info!("Training Models...");
    let mut models = Vec::with_capacity(config.models.len());
    for model_config in &config.models {
        log::info!("  - {}", model_config.name());

        let (x_train, x_test) = if model_config.scale_features {
            (&x_train_scaled, &x_test_scaled)
        } else {
            (&split.x_train, &split.x_test)
        };

        let mut model = build_model(model_config);
        model.fit(x_train, &split.y_train)?;
        let y_pred = model.predict(x_test)?;
        let y_proba = model.predict_proba(x_test)?;

        let acc = accuracy(&split.y_test, &y_pred)?;
        let f1 = f1_score(&split.y_test, &y_pred)?;
        let confusion = confusion_matrix(&split.y_test, &y_pred)?;
        let cv = cross_val_score(model_config, x_train, &split.y_train, &folds)?;
        let roc = roc_curve(&split.y_test, &y_proba)?;
        let roc_auc = roc_auc_score(&split.y_test, &y_proba)?;
        let report = classification_report(&split.y_test, &y_pred, &dataset.target_names, 2)?;

        log::debug!(
            "{}: accuracy {:.4}, F1 {:.4}, CV {:.4} +/- {:.4}, ROC AUC {:.4}",
            model_config.name(),
            acc,
            f1,
            cv.mean,
            cv.std,
            roc_auc
        );

        models.push(ModelEvaluation {
            name: model_config.name().to_string(),
            metrics: ModelMetrics {
                accuracy: acc,
                f1,
                cv_mean: cv.mean,
                cv_std: cv.std,
                roc_auc,
            },
            cv,
            confusion,
            report,
            roc,
            feature_importances: model.feature_importances(),
        });
    }

    Ok(Evaluation {
        dataset,
        split,
        models,
    })
}

impl Evaluation {
    /// `(model name, metrics)` rows in configuration order.
    pub fn results_table(&self) -> Vec<(&str, ModelMetrics)> {
        self.models
            .iter()
            .map(|m| (m.name.as_str(), m.metrics))
            .collect()
    }

    pub fn model(&self, name: &str) -> Option<&ModelEvaluation> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Importances of the first model that exposes them (the decision tree
    /// in the default configuration).
    pub fn feature_importances(&self) -> Option<(&str, &Array1<f64>)> {
        self.models
            .iter()
            .find_map(|m| m.feature_importances.as_ref().map(|imp| (m.name.as_str(), imp)))
    }

    /// Indices and importances of the `k` most important features.
    pub fn top_features(&self, k: usize) -> Result<Vec<(usize, f64)>> {
        let (_, importances) = self.feature_importances().ok_or_else(|| {
            ClassifierError::InvalidConfig(
                "no configured model exposes feature importances".to_string(),
            )
        })?;
        let values = importances.to_vec();
        Ok(argsort_desc(&values)
            .into_iter()
            .take(k)
            .map(|i| (i, values[i]))
            .collect())
    }

    /// Pearson correlations over the full dataset between the `k` most
    /// important features, in importance order.
    pub fn feature_correlations(&self, k: usize) -> Result<(Vec<usize>, Array2<f64>)> {
        let columns: Vec<usize> = self.top_features(k)?.into_iter().map(|(i, _)| i).collect();
        let corr = pearson_correlation_matrix(&self.dataset.x, &columns)?;
        Ok((columns, corr))
    }
}
