//! Error — failure taxonomy for a single analysis run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Failed to read log source {}: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed log source {}: {source}", path.display())]
    MalformedSource {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

// Convenience type alias
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;
