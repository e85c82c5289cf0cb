//! wdbc-classifiers: a small benchmark of classical classifiers on the
//! Wisconsin diagnostic breast cancer dataset.
//!
//! The crate bundles the dataset loader, a stratified train/test split and
//! k-fold helper, feature standardization, three models behind the
//! [`models::ClassifierModel`] trait (logistic regression, CART decision tree,
//! k-nearest neighbours), binary classification metrics, the evaluation loop
//! tying them together and the reporting layer (SVG charts, console tables,
//! CSV export and an HTML summary).
pub mod config;
pub mod data_handling;
pub mod dataset;
pub mod error;
pub mod evaluation;
pub mod math;
pub mod metrics;
pub mod models;
pub mod preprocessing;
pub mod report;

pub use error::{ClassifierError, Result};
