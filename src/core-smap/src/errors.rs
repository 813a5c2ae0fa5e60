//! Error types for the sitemap writers.

use std::path::PathBuf;

use thiserror::Error;

use crate::frequency::ChangeFrequency;

/// Main error type for sitemap and sitemap-index generation.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// A change frequency token outside the closed set was supplied.
    #[error(
        "Please specify valid changeFrequency. Valid values are: {valid}. You have specified: {value}.",
        valid = ChangeFrequency::valid_values()
    )]
    InvalidChangeFrequency { value: String },

    /// A writer option is out of range or was changed after writing started.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Writing, appending to or deleting a file failed.
    #[error("I/O failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The XML encoder failed to write an event into its in-memory buffer.
    #[error("XML encoding failed: {0}")]
    Encoding(#[from] std::io::Error),
}

impl SitemapError {
    /// Attaches the failing path to an I/O error from the storage layer.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SitemapError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by caller-supplied arguments. These are recoverable:
    /// nothing was written for the rejected call.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SitemapError::InvalidChangeFrequency { .. } | SitemapError::InvalidOption(_))
    }

    /// True for failures of the underlying storage.
    pub fn is_io_failure(&self) -> bool {
        matches!(self, SitemapError::Io { .. })
    }
}

/// Type alias for Result with SitemapError
pub type Result<T> = std::result::Result<T, SitemapError>;
