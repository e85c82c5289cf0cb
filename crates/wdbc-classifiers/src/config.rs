use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{ClassifierError, Result};

/// Configuration for a single model in the benchmark.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ModelConfig {
    /// Train and score on standardized features instead of raw ones.
    pub scale_features: bool,

    #[serde(flatten)]
    pub model_type: ModelType,
}

/// Supported model types and their hyper-parameters.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum ModelType {
    LogisticRegression {
        /// Inverse of the L2 regularization strength.
        c: f64,
    },
    DecisionTree {
        max_depth: usize,
        min_samples_split: usize,
        min_samples_leaf: usize,
    },
    KNearestNeighbors {
        n_neighbors: usize,
    },
}

impl Default for ModelType {
    fn default() -> Self {
        ModelType::LogisticRegression { c: 1.0 }
    }
}

impl ModelType {
    /// Display name used in tables, reports and chart labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelType::LogisticRegression { .. } => "Logistic Regression",
            ModelType::DecisionTree { .. } => "Decision Tree",
            ModelType::KNearestNeighbors { .. } => "K-Nearest Neighbors",
        }
    }

    /// Short identifier, also accepted by `FromStr`.
    pub fn short_name(&self) -> &'static str {
        match self {
            ModelType::LogisticRegression { .. } => "logistic",
            ModelType::DecisionTree { .. } => "tree",
            ModelType::KNearestNeighbors { .. } => "knn",
        }
    }

    /// Whether the model expects standardized inputs by default.
    pub fn prefers_scaled_features(&self) -> bool {
        !matches!(self, ModelType::DecisionTree { .. })
    }

    fn validate(&self) -> Result<()> {
        match self {
            ModelType::LogisticRegression { c } => {
                if !(*c > 0.0) || !c.is_finite() {
                    return Err(ClassifierError::InvalidConfig(format!(
                        "logistic regression C must be positive, got {}",
                        c
                    )));
                }
            }
            ModelType::DecisionTree {
                max_depth,
                min_samples_split,
                min_samples_leaf,
            } => {
                if *max_depth == 0 {
                    return Err(ClassifierError::InvalidConfig(
                        "decision tree max_depth must be at least 1".to_string(),
                    ));
                }
                if *min_samples_split < 2 {
                    return Err(ClassifierError::InvalidConfig(format!(
                        "decision tree min_samples_split must be at least 2, got {}",
                        min_samples_split
                    )));
                }
                if *min_samples_leaf == 0 {
                    return Err(ClassifierError::InvalidConfig(
                        "decision tree min_samples_leaf must be at least 1".to_string(),
                    ));
                }
            }
            ModelType::KNearestNeighbors { n_neighbors } => {
                if *n_neighbors == 0 {
                    return Err(ClassifierError::InvalidConfig(
                        "n_neighbors must be at least 1".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "logistic" | "logistic_regression" | "lr" => Ok(ModelType::default()),
            "tree" | "decision_tree" | "dt" => Ok(ModelType::DecisionTree {
                max_depth: 5,
                min_samples_split: 2,
                min_samples_leaf: 1,
            }),
            "knn" | "k_nearest_neighbors" => Ok(ModelType::KNearestNeighbors { n_neighbors: 5 }),
            _ => Err(format!(
                "Unknown model type: {}. Valid options are: logistic, tree, knn",
                s
            )),
        }
    }
}

impl ModelConfig {
    pub fn new(model_type: ModelType) -> Self {
        Self {
            scale_features: model_type.prefers_scaled_features(),
            model_type,
        }
    }

    pub fn name(&self) -> &'static str {
        self.model_type.display_name()
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig::new(ModelType::default())
    }
}

/// Parameters of a full benchmark run.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Fraction of samples held out for testing.
    pub test_size: f64,
    /// Seed for the stratified train/test shuffle.
    pub random_state: u64,
    pub cv_folds: usize,
    /// Directory that receives charts, the CSV export and the HTML report.
    pub output_dir: PathBuf,
    pub write_report: bool,
    pub models: Vec<ModelConfig>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            test_size: 0.25,
            random_state: 42,
            cv_folds: 5,
            output_dir: PathBuf::from("."),
            write_report: true,
            models: default_models(),
        }
    }
}

/// The three models of the benchmark, in report order.
pub fn default_models() -> Vec<ModelConfig> {
    ["logistic", "tree", "knn"]
        .iter()
        .filter_map(|name| ModelType::from_str(name).ok())
        .map(ModelConfig::new)
        .collect()
}

impl EvaluationConfig {
    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !(self.test_size > 0.0 && self.test_size < 1.0) {
            return Err(ClassifierError::InvalidConfig(format!(
                "test_size must lie strictly between 0 and 1, got {}",
                self.test_size
            )));
        }
        if self.cv_folds < 2 {
            return Err(ClassifierError::InvalidConfig(format!(
                "cv_folds must be at least 2, got {}",
                self.cv_folds
            )));
        }
        if self.models.is_empty() {
            return Err(ClassifierError::InvalidConfig(
                "at least one model must be configured".to_string(),
            ));
        }
        for (i, model) in self.models.iter().enumerate() {
            if self.models[..i].iter().any(|m| m.name() == model.name()) {
                return Err(ClassifierError::InvalidConfig(format!(
                    "model '{}' is configured more than once",
                    model.name()
                )));
            }
            model.model_type.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EvaluationConfig::default();
        assert!(config.validate().is_ok());
        let names: Vec<_> = config.models.iter().map(|m| m.name()).collect();
        assert_eq!(
            names,
            vec!["Logistic Regression", "Decision Tree", "K-Nearest Neighbors"]
        );
        assert!(config.models[0].scale_features);
        assert!(!config.models[1].scale_features);
        assert!(config.models[2].scale_features);
    }

    #[test]
    fn duplicate_models_are_rejected() {
        let mut config = EvaluationConfig::default();
        config.models.push(ModelConfig::default());
        assert!(matches!(
            config.validate(),
            Err(ClassifierError::InvalidConfig(_))
        ));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut config = EvaluationConfig::default();
        config.test_size = 1.0;
        assert!(config.validate().is_err());

        let mut config = EvaluationConfig::default();
        config.cv_folds = 1;
        assert!(config.validate().is_err());

        let mut config = EvaluationConfig::default();
        config.models = vec![ModelConfig::new(ModelType::KNearestNeighbors { n_neighbors: 0 })];
        assert!(config.validate().is_err());
    }
}
