use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of the monthly report pipeline.
///
/// Recoverable conditions (bad month input, missing daily files, undefined
/// IFR) never show up here.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{}, line {line}: invalid {column} value '{value}'", path.display())]
    InvalidCount {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("{}: columns {found:?} do not match {expected:?} of earlier days", path.display())]
    SchemaMismatch {
        path: PathBuf,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("monthly {column} total for '{region}' exceeds the supported range")]
    CountOverflow { region: String, column: &'static str },

    #[error("failed to write report output: {0}")]
    Output(#[from] std::io::Error),

    #[error("map rendering failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
