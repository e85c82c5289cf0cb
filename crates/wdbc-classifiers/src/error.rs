use thiserror::Error;

/// Errors raised while loading, fitting, scoring or reporting.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("shape mismatch: {0}")]
    Shape(String),

    #[error("not enough samples: {0}")]
    InsufficientData(String),

    #[error("{0} must be fit before predicting")]
    NotFitted(&'static str),

    #[error("metric is undefined: {0}")]
    UndefinedMetric(String),

    #[error("{model} failed to fit: {reason}")]
    Fit { model: &'static str, reason: String },

    #[error("failed to load dataset: {0}")]
    Dataset(String),

    #[error("failed to render chart: {0}")]
    Plot(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl From<ndarray::ShapeError> for ClassifierError {
    fn from(err: ndarray::ShapeError) -> Self {
        ClassifierError::Shape(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
