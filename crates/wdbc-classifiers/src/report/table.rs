//! Console summaries and the CSV export of the results table.
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::evaluation::{Evaluation, ModelMetrics};

const RULE_WIDTH: usize = 60;

/// Default file name of the CSV export.
pub const RESULTS_CSV: &str = "model_results.csv";

fn banner(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\n{title}\n{rule}")
}

/// Results table with one row per model, values rounded to 4 decimals.
///
/// ```text
///                      Accuracy  F1 Score  CV Mean  CV Std  ROC AUC
/// Logistic Regression    0.9790    0.9834   0.9812  0.0125   0.9977
/// ```
pub fn format_results_table(evaluation: &Evaluation) -> String {
    let rows = evaluation.results_table();
    let name_width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let widths: Vec<usize> = ModelMetrics::COLUMNS.iter().map(|c| c.len().max(6)).collect();

    let mut out = format!("{:name_width$}", "");
    for (column, width) in ModelMetrics::COLUMNS.iter().zip(&widths) {
        out.push_str(&format!("  {:>width$}", column, width = width));
    }
    for (name, metrics) in rows {
        out.push('\n');
        out.push_str(&format!("{:<name_width$}", name));
        for (value, width) in metrics.values().iter().zip(&widths) {
            out.push_str(&format!("  {:>width$.4}", value, width = width));
        }
    }
    out
}

/// The "RESULTS" section: banner followed by the results table.
pub fn format_results_section(evaluation: &Evaluation) -> String {
    format!("\n{}\n\n{}", banner("RESULTS"), format_results_table(evaluation))
}

/// Classification report of every model, in configuration order.
pub fn format_classification_reports(evaluation: &Evaluation) -> String {
    let mut out = format!("\n{}\n", banner("DETAILED CLASSIFICATION REPORTS"));
    for model in &evaluation.models {
        out.push_str(&format!(
            "\n{}:\n{}\n{}\n",
            model.name,
            "-".repeat(RULE_WIDTH),
            model.report
        ));
    }
    out
}

/// Numbered list of the files a run produced.
pub fn format_generated_files<S: AsRef<str>>(files: &[S]) -> String {
    let mut out = format!("\n{}\n\nGenerated Files:\n", banner("VISUALIZATIONS SAVED SUCCESSFULLY!"));
    for (i, file) in files.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, file.as_ref()));
    }
    out.push_str(&"=".repeat(RULE_WIDTH));
    out
}

#[derive(Debug, Serialize)]
struct ResultRecord<'a> {
    #[serde(rename = "Model")]
    model: &'a str,
    #[serde(rename = "Accuracy")]
    accuracy: f64,
    #[serde(rename = "F1 Score")]
    f1: f64,
    #[serde(rename = "CV Mean")]
    cv_mean: f64,
    #[serde(rename = "CV Std")]
    cv_std: f64,
    #[serde(rename = "ROC AUC")]
    roc_auc: f64,
}

/// Write the results table as CSV with a header row, full precision.
pub fn write_results_csv(evaluation: &Evaluation, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .from_writer(BufWriter::new(file));
    for (model, m) in evaluation.results_table() {
        writer.serialize(ResultRecord {
            model,
            accuracy: m.accuracy,
            f1: m.f1,
            cv_mean: m.cv_mean,
            cv_std: m.cv_std,
            roc_auc: m.roc_auc,
        })?;
    }
    writer.flush()?;
    log::debug!("Wrote results table to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_files_are_numbered() {
        let text = format_generated_files(&["a.svg", "b.svg"]);
        assert!(text.contains("VISUALIZATIONS SAVED SUCCESSFULLY!"));
        assert!(text.contains("Generated Files:\n  1. a.svg\n  2. b.svg\n"));
        assert!(text.ends_with(&"=".repeat(60)));
    }

    #[test]
    fn banner_is_framed() {
        assert_eq!(
            banner("RESULTS"),
            format!("{}\nRESULTS\n{}", "=".repeat(60), "=".repeat(60))
        );
    }
}
