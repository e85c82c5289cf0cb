use clap::{Arg, ArgAction, Command, ValueHint};
use std::path::PathBuf;

/// Command line definition of the `wdbc` binary.
pub fn build_cli() -> Command {
    Command::new("wdbc")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("Breast cancer classification benchmark: logistic regression, decision tree and k-NN on the WDBC dataset")
        .arg(
            Arg::new("config")
                .help("Path to an evaluation JSON configuration file. Missing fields take defaults.")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output_dir")
                .short('o')
                .long("output-dir")
                .help(
                    "Directory that receives the charts, the CSV export and the HTML report. \
                     Overrides the output directory specified in the configuration file.",
                )
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Seed of the stratified train/test split.")
                .value_parser(clap::value_parser!(u64))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("test_size")
                .short('t')
                .long("test-size")
                .help("Fraction of samples held out for testing, strictly between 0 and 1.")
                .value_parser(clap::value_parser!(f64))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("cv_folds")
                .short('k')
                .long("cv-folds")
                .help("Number of stratified cross-validation folds.")
                .value_parser(clap::value_parser!(usize))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("no_report")
                .long("no-report")
                .help("Disable HTML report generation.")
                .action(ArgAction::SetTrue),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
}
