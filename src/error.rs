use std::path::PathBuf;

use thiserror::Error;

/// Which kind of name a duplicate was found among.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Object,
    Property,
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameKind::Object => write!(f, "object"),
            NameKind::Property => write!(f, "property"),
        }
    }
}

#[derive(Error, Debug)]
pub enum RcftError {
    #[error("Resource not found: {path:?} ({source})")]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Resource not readable: {path:?} ({source})")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid RCFT format: no header line found")]
    HeaderNotFound,
    #[error(
        "Incoherent context: {objects} objects, {rows} matrix rows, {properties} properties, matrix {rows}x{width}{}",
        .detail.as_ref().map(|d| format!(": {d}")).unwrap_or_default()
    )]
    Coherence {
        objects: usize,
        rows: usize,
        properties: usize,
        width: usize,
        detail: Option<String>,
    },
    #[error("Lattice engine error: {0}")]
    Engine(String),
    #[error("Duplicate {kind} name: {name}")]
    DuplicateName { kind: NameKind, name: String },
    #[error("Parse error on line {line}: {message}")]
    Parse { message: String, line: usize },
    #[error("Config error: {0}")]
    Config(String),
    #[error("Output error: {0}")]
    Output(String),
}

pub type Result<T> = std::result::Result<T, RcftError>;

// Helper conversions
impl From<config::ConfigError> for RcftError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<serde_json::Error> for RcftError {
    fn from(e: serde_json::Error) -> Self {
        Self::Output(e.to_string())
    }
}
