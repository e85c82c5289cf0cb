//! Top-level benchmark run: evaluate, then write every artifact.
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};

use wdbc_classifiers::config::EvaluationConfig;
use wdbc_classifiers::dataset::load_breast_cancer;
use wdbc_classifiers::evaluation::{evaluate_models, Evaluation};
use wdbc_classifiers::report::html::{build_report, HTML_REPORT};
use wdbc_classifiers::report::render_all_charts;
use wdbc_classifiers::report::table::{
    format_classification_reports, format_generated_files, format_results_section,
    write_results_csv, RESULTS_CSV,
};

/// What a run produced.
#[derive(Debug)]
pub struct RunOutput {
    pub evaluation: Evaluation,
    /// Charts in display order, followed by the CSV export and the report.
    pub files: Vec<PathBuf>,
}

pub fn run_evaluation(config: &EvaluationConfig) -> Result<RunOutput> {
    let start_time = Instant::now();

    let dataset = load_breast_cancer().context("Failed to load the breast cancer dataset")?;
    dataset.print_summary();

    let evaluation = evaluate_models(dataset, config).context("Model evaluation failed")?;
    log::info!("Evaluation completed in {:?}", start_time.elapsed());
    println!("{}", format_results_section(&evaluation));

    let output_dir = &config.output_dir;
    let mut files = render_all_charts(&evaluation, output_dir)
        .with_context(|| format!("Failed to render charts into {}", output_dir.display()))?;

    let csv_path = output_dir.join(RESULTS_CSV);
    write_results_csv(&evaluation, &csv_path)
        .with_context(|| format!("Failed to write {}", csv_path.display()))?;
    files.push(csv_path);

    if config.write_report {
        let report_path = output_dir.join(HTML_REPORT);
        let config_json = serde_json::to_string_pretty(config)?;
        build_report(&evaluation, &config_json)
            .save_to_file(&report_path)
            .with_context(|| format!("Failed to write {}", report_path.display()))?;
        files.push(report_path);
    } else {
        log::debug!("HTML report disabled");
    }

    println!("{}", format_classification_reports(&evaluation));

    let names: Vec<String> = files
        .iter()
        .map(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        })
        .collect();
    println!("{}", format_generated_files(&names));
    log::info!(
        "Wrote {} files to {} in {:?}",
        files.len(),
        output_dir.display(),
        start_time.elapsed()
    );

    Ok(RunOutput { evaluation, files })
}
