//! Configuration options for the sitemap writer.

use crate::errors::{Result, SitemapError};

/// Maximum number of URLs the Sitemaps protocol allows in a single file.
pub const DEFAULT_MAX_URLS: usize = 50_000;

/// Number of URLs kept in memory before the buffered XML is appended to the file.
pub const DEFAULT_BUFFER_SIZE: usize = 1_000;

/// Thresholds of a [`SitemapWriter`](crate::SitemapWriter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SitemapOptions {
    /// Maximum number of `<url>` elements per file (default: 50000)
    pub max_urls: usize,
    /// Number of records buffered in memory between appends (default: 1000)
    pub buffer_size: usize,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self {
            max_urls: DEFAULT_MAX_URLS,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl SitemapOptions {
    /// Creates a new builder for SitemapOptions.
    pub fn builder() -> SitemapOptionsBuilder {
        SitemapOptionsBuilder::default()
    }

    /// Checks that both thresholds are usable as divisors.
    pub fn validate(&self) -> Result<()> {
        if self.max_urls == 0 {
            return Err(SitemapError::InvalidOption("max_urls must be greater than zero".to_string()));
        }
        if self.buffer_size == 0 {
            return Err(SitemapError::InvalidOption(
                "buffer_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for SitemapOptions.
#[derive(Debug, Clone, Default)]
pub struct SitemapOptionsBuilder {
    max_urls: Option<usize>,
    buffer_size: Option<usize>,
}

impl SitemapOptionsBuilder {
    /// Sets the maximum number of URLs written to a single file.
    pub fn max_urls(mut self, max_urls: usize) -> Self {
        self.max_urls = Some(max_urls);
        self
    }

    /// Sets the number of URLs kept in memory before flushing to the file.
    pub fn buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = Some(buffer_size);
        self
    }

    /// Builds the SitemapOptions.
    pub fn build(self) -> SitemapOptions {
        SitemapOptions {
            max_urls: self.max_urls.unwrap_or(DEFAULT_MAX_URLS),
            buffer_size: self.buffer_size.unwrap_or(DEFAULT_BUFFER_SIZE),
        }
    }
}
