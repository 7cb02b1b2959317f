//! `rcft [TABLE]` reads an RCFT table and prints its boolean context, either
//! as a normalised table or as JSON, ready for a concept lattice engine.
//! Without an argument the table configured in `rcft.toml` (or
//! `RCFT_INPUT`) is read.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rcft::settings::{OutputFormat, Settings};
use rcft::{load_context_with, write_rcft};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let settings = Settings::load();
    let filter = settings.as_ref().map_or("info", |s| s.log.as_str());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "could not load settings");
            return ExitCode::FAILURE;
        }
    };

    let input = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => {
            info!(input = %settings.input.display(), "no table given, using the configured one");
            settings.input.clone()
        }
    };

    match run(&settings, &input) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "no result");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings, input: &Path) -> rcft::Result<String> {
    let context = load_context_with(input, &settings.parse_options())?;
    let output = match settings.format {
        OutputFormat::Rcft => write_rcft(&settings.title, &context),
        OutputFormat::Json => serde_json::to_string_pretty(&context)? + "\n",
    };
    Ok(output)
}
