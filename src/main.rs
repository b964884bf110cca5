//! Command-line entry point.
//!
//! Thin wrapper around the library pipeline: parse arguments, check that
//! both roots pre-exist, install the log subscriber, run the walk, print a
//! run summary.

use clap::Parser;
use fotomes_library::walk::{Summary, walk};
use fotomes_locale::Language;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "fotomes",
    version,
    about = "Sort photos into year/month folders using the dates embedded in their filenames"
)]
struct Args {
    /// Root of the tree to take photos from (must already exist)
    #[arg(short, long)]
    input: PathBuf,

    /// Root to sort photos into (must already exist)
    #[arg(short, long)]
    output: PathBuf,

    /// Language for the month folder names
    #[arg(short, long, value_enum, default_value_t = Language::default())]
    language: Language,
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Both roots must pre-exist, to avoid sorting everything into a wrong
    // destination. Bail before any filesystem mutation.
    if !args.input.exists() {
        eprintln!("input path does not exist: {}", args.input.display());
        return ExitCode::FAILURE;
    }
    if !args.output.exists() {
        eprintln!("output path does not exist: {}", args.output.display());
        return ExitCode::FAILURE;
    }

    tracing::info!(
        input = %args.input.display(),
        output = %args.output.display(),
        language = %args.language,
        "starting run"
    );
    match walk(&args.input, &args.output, args.language) {
        Ok(summary) => {
            tracing::info!("finished");
            report(&summary);
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("run aborted: {}", &*e);
            ExitCode::FAILURE
        },
    }
}

fn report(summary: &Summary) {
    println!(
        "moved {} file(s) ({} under a copy-marked name), skipped {}, failed {}",
        summary.moved + summary.disambiguated,
        summary.disambiguated,
        summary.skipped,
        summary.failed,
    );
}
