//! Errors raised by the `db` commands.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// The requested schema is not the one this installation supports.
    #[error("Invalid Database version/patch: {version}__{patch} is not supported")]
    InvalidVersion { version: String, patch: String },

    /// The schema directory for a supported pair is missing from the SQL tree.
    #[error("Invalid Database version/patch: {} does not exist", .0.display())]
    MissingSchemaDir(PathBuf),

    #[error("Missing property: {0}")]
    MissingProperty(String),

    #[error("Failed to read input: {0}")]
    Prompt(#[from] std::io::Error),

    /// A scripted prompter ran out of answers or was asked an unexpected question.
    #[error("Unexpected prompt: {0}")]
    UnexpectedPrompt(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DbError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
