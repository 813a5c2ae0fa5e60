use std::path::PathBuf;

use crate::env_config::ThresholdError;

#[derive(Debug)]
pub enum Error {
    /// The URL list could not be read.
    InputError { path: PathBuf, source: std::io::Error },
    /// A line of the URL list is not a valid record.
    InvalidLine { line: usize, reason: String },
    /// A threshold from the environment is unusable.
    ThresholdError(ThresholdError),
    SitemapError(core_smap::SitemapError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputError { path, source } => write!(f, "Cannot read URL list {}: {}", path.display(), source),
            Self::InvalidLine { line, reason } => write!(f, "Invalid record on line {}: {}", line, reason),
            Self::ThresholdError(e) => write!(f, "{}", e),
            Self::SitemapError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputError { source, .. } => Some(source),
            Self::ThresholdError(e) => Some(e),
            Self::SitemapError(e) => Some(e),
            Self::InvalidLine { .. } => None,
        }
    }
}

impl From<core_smap::SitemapError> for Error {
    fn from(error: core_smap::SitemapError) -> Self {
        Self::SitemapError(error)
    }
}

impl From<ThresholdError> for Error {
    fn from(error: ThresholdError) -> Self {
        Self::ThresholdError(error)
    }
}
