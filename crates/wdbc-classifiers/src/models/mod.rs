pub mod classifier_trait;
pub mod decision_tree;
pub mod factory;
pub mod knn;
pub mod logistic;

pub use classifier_trait::ClassifierModel;
