//! Runtime settings for the `rcft` binary.
//!
//! Values are layered, later sources winning:
//! 1. built-in defaults
//! 2. an `rcft.toml` (or `.json`, `.yaml`, ...) file in the working directory,
//!    or the file given to [`Settings::load_from`]
//! 3. `RCFT_*` environment variables, e.g. `RCFT_FORMAT=json`

use std::path::{Path, PathBuf};

// config lets you read a separate config file
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;
use crate::parser::ParseOptions;

pub const CONFIG_NAME: &str = "rcft";
pub const ENV_PREFIX: &str = "RCFT";
pub const DEFAULT_INPUT: &str = "sortie.rcft";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Normalised RCFT table.
    Rcft,
    /// The context as JSON, for engines living outside this process.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Table read when no path is given on the command line.
    pub input: PathBuf,
    pub format: OutputFormat,
    /// Name written on the `FormalContext` line of RCFT output.
    pub title: String,
    /// Log filter used when `RUST_LOG` is not set.
    pub log: String,
    pub reject_duplicates: bool,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }
    pub fn load_from(file: Option<&Path>) -> Result<Self> {
        Self::load_with(file, Environment::with_prefix(ENV_PREFIX))
    }
    /// Same as [`Settings::load_from`] with an explicit environment layer,
    /// e.g. one fed from a map with [`Environment::source`].
    pub fn load_with(file: Option<&Path>, environment: Environment) -> Result<Self> {
        let builder = Config::builder()
            .set_default("input", DEFAULT_INPUT)?
            .set_default("format", "rcft")?
            .set_default("title", "Context")?
            .set_default("log", "info")?
            .set_default("reject_duplicates", false)?;
        let builder = match file {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name(CONFIG_NAME).required(false)),
        };
        let settings = builder
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            reject_duplicates: self.reject_duplicates,
        }
    }
}
