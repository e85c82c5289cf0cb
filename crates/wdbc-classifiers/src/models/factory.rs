use crate::config::{ModelConfig, ModelType};
use crate::models::classifier_trait::ClassifierModel;
use crate::models::decision_tree::DecisionTreeClassifier;
use crate::models::knn::KNearestNeighbors;
use crate::models::logistic::LogisticRegression;

/// Build an unfitted boxed classifier from a `ModelConfig`.
pub fn build_model(params: &ModelConfig) -> Box<dyn ClassifierModel> {
    match &params.model_type {
        ModelType::LogisticRegression { c } => Box::new(LogisticRegression::new(*c)),
        ModelType::DecisionTree {
            max_depth,
            min_samples_split,
            min_samples_leaf,
        } => Box::new(DecisionTreeClassifier::new(
            *max_depth,
            *min_samples_split,
            *min_samples_leaf,
        )),
        ModelType::KNearestNeighbors { n_neighbors } => {
            Box::new(KNearestNeighbors::new(*n_neighbors))
        }
    }
}
