use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;

use wdbc_classifiers::config::EvaluationConfig;

/// Load an evaluation configuration from a JSON file.
pub fn load_evaluation_config<P: AsRef<Path>>(path: P) -> Result<EvaluationConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: EvaluationConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Build the run configuration from the optional config file and the CLI
/// overrides, then validate it.
pub fn from_arguments(matches: &ArgMatches) -> Result<EvaluationConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(config_path) => {
            log::info!("Using config: {}", config_path.display());
            load_evaluation_config(config_path)?
        }
        None => {
            let config = EvaluationConfig::default();
            let default_json = serde_json::to_string_pretty(&config)?;
            eprintln!("No config provided; using defaults:\n{}", default_json);
            config
        }
    };

    // Apply CLI overrides
    if let Some(output_dir) = matches.get_one::<PathBuf>("output_dir") {
        config.output_dir = output_dir.clone();
    }
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.random_state = *seed;
    }
    if let Some(test_size) = matches.get_one::<f64>("test_size") {
        config.test_size = *test_size;
    }
    if let Some(cv_folds) = matches.get_one::<usize>("cv_folds") {
        config.cv_folds = *cv_folds;
    }
    if matches.get_flag("no_report") {
        config.write_report = false;
    }

    config
        .validate()
        .context("Invalid evaluation configuration")?;
    Ok(config)
}
