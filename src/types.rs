//! Core types and errors for the package validator.

use thiserror::Error;

/// Errors that can occur while validating package names.
#[derive(Error, Debug)]
pub enum PypivetError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("index returned HTTP {status} for {name}")]
    IndexError {
        name: String,
        status: reqwest::StatusCode,
    },

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PypivetError>;

/// Outcome of looking up a package on the index.
///
/// Transport, HTTP, and parse failures are not outcomes; they surface as
/// [`PypivetError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseCheck {
    /// Package exists with the given number of published releases.
    Exists { name: String, release_count: usize },
    /// The index reports no such package.
    NotFound { name: String },
}

impl ReleaseCheck {
    /// A name passes the filter when the package exists and has more than
    /// one published release.
    pub fn is_valid(&self) -> bool {
        matches!(self, ReleaseCheck::Exists { release_count, .. } if *release_count > 1)
    }
}
