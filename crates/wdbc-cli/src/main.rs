use anyhow::Result;
use log::LevelFilter;

use wdbc_cli::cli::build_cli;
use wdbc_cli::evaluate::input::from_arguments;
use wdbc_cli::evaluate::run::run_evaluation;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("WDBC_LOG", "error,wdbc=info"))
        .init();

    let matches = build_cli().get_matches();
    let config = from_arguments(&matches)?;
    log::info!(
        "[WDBC] Evaluating {} models, writing to {}",
        config.models.len(),
        config.output_dir.display()
    );

    match run_evaluation(&config) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Evaluation failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
