use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the sim-core crate and dependents.
///
/// Nothing inside the comparison engine produces these: normalizing,
/// aligning, scoring and fragment extraction are total. Only the document
/// source, configuration loading and report output can fail.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("cannot read {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No .{extension} files found in {}", folder.display())]
    NoDocuments { folder: PathBuf, extension: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, SimError>;
