//! Error types for nb2report
//!
//! Provides error handling for:
//! - Missing schema files and scaffolding roots
//! - Malformed notebook documents
//! - Missing asserts marker cells
//! - Non-boolean assertion output
//! - Interpreter session failures

use std::path::PathBuf;

/// Main nb2report error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input schema notebook does not exist or is not a file.
    #[error("input schema file \"{path}\" does not exist", path = .path.display())]
    SchemaNotFound { path: PathBuf },

    /// The scaffolding root for a report run does not exist.
    #[error("scaffolding directory \"{path}\" does not exist", path = .path.display())]
    ScaffoldNotFound { path: PathBuf },

    /// A notebook document did not deserialize into the expected cell structure.
    #[error("malformed notebook document: {0}")]
    Format(#[from] serde_json::Error),

    /// No markdown cell containing the asserts marker was found.
    #[error("asserts cell cannot be found in {path}", path = .path.display())]
    MarkerNotFound { path: PathBuf },

    /// An assertion cell produced output that is not a boolean.
    #[error(
        "received output {output:?} is not a binary output; \
         check that all assert cells return True or False"
    )]
    NotABoolean { output: String },

    /// The interpreter session could not be started or used.
    #[error("interpreter failure: {0}")]
    Interpreter(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error means an input document was missing on disk.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SchemaNotFound { .. } | Self::ScaffoldNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
