//! Input records accepted by the writers.

use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone};

use crate::errors::Result;
use crate::frequency::ChangeFrequency;

/// A single `<url>` entry of a sitemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    /// The page location, written verbatim into `<loc>`.
    pub location: String,
    /// Optional last modification time, written as RFC 3339 into `<lastmod>`.
    pub last_modified: Option<DateTime<FixedOffset>>,
    /// Optional `<changefreq>` token.
    pub change_frequency: Option<ChangeFrequency>,
    /// Optional `<priority>`, passed through as given (no range check).
    pub priority: Option<String>,
}

impl UrlRecord {
    /// Creates a record with only a location.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            last_modified: None,
            change_frequency: None,
            priority: None,
        }
    }

    /// Sets the last modification time. Any time zone is accepted; its offset is kept.
    pub fn last_modified<Tz: TimeZone>(mut self, at: DateTime<Tz>) -> Self {
        self.last_modified = Some(at.fixed_offset());
        self
    }

    /// Sets the change frequency.
    pub fn change_frequency(mut self, frequency: ChangeFrequency) -> Self {
        self.change_frequency = Some(frequency);
        self
    }

    /// Sets the change frequency from its protocol token.
    ///
    /// # Errors
    ///
    /// Returns `SitemapError::InvalidChangeFrequency` when the token is not one of the
    /// seven valid values.
    pub fn with_change_frequency_str(self, token: &str) -> Result<Self> {
        Ok(self.change_frequency(token.parse()?))
    }

    /// Sets the priority.
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

/// A single `<sitemap>` entry of a sitemap index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapReference {
    /// Absolute URL of the referenced sitemap file.
    pub url: String,
    /// Optional last modification time of the referenced file.
    pub last_modified: Option<DateTime<FixedOffset>>,
}

impl SitemapReference {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            last_modified: None,
        }
    }

    pub fn last_modified<Tz: TimeZone>(mut self, at: DateTime<Tz>) -> Self {
        self.last_modified = Some(at.fixed_offset());
        self
    }
}

/// Formats a timestamp the way `<lastmod>` expects it, e.g. `2024-01-15T10:30:00+00:00`.
pub fn format_lastmod(at: &DateTime<FixedOffset>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, false)
}
