//! Summary statistics shared by the evaluation and report modules.
pub mod summary;

pub use summary::{argsort_desc, mean_and_std};
