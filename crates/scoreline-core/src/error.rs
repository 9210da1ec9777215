//! Error type shared by the scoreline library crates.

use std::path::PathBuf;

/// Errors surfaced by `scoreline-core`.
///
/// Parsing itself never fails: unmatched log lines are skipped. The variants
/// below cover setup (configuration, pattern compilation) and export.
#[derive(Debug, thiserror::Error)]
pub enum ScorelineError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid submission pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("failed to serialise standings: {0}")]
    Export(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScorelineError>;
