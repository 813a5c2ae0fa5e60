//! # Sitemap Generation Library
//!
//! Writes [Sitemaps protocol](https://www.sitemaps.org/protocol.html) documents: `urlset`
//! files holding page URLs, and a `sitemapindex` file referencing them.
//!
//! ## Features
//!
//! - Streaming writer: URLs are serialized incrementally and appended to disk every
//!   `buffer_size` records, so memory stays bounded
//! - Automatic splitting into `sitemap.xml`, `sitemap_2.xml`, ... every `max_urls` URLs
//! - Typed `changefreq` values, RFC 3339 `lastmod` timestamps
//! - Sitemap index generation from the list of produced files
//! - Pluggable [`Storage`]: local filesystem or in-memory
//!
//! ## Examples
//!
//! ### Sitemaps plus an index
//!
//! ```no_run
//! use core_smap::{IndexWriter, SitemapReference, SitemapWriter, UrlRecord};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut sitemap = SitemapWriter::new("public/sitemap.xml");
//!     for page in ["https://example.com/", "https://example.com/blog/"] {
//!         sitemap.add_url(&UrlRecord::new(page))?;
//!     }
//!     sitemap.finalize()?;
//!
//!     let mut index = IndexWriter::new("public/sitemap_index.xml");
//!     for url in sitemap.sitemap_urls("https://example.com/") {
//!         index.add_sitemap(&SitemapReference::new(url))?;
//!     }
//!     index.finalize()?;
//!     Ok(())
//! }
//! ```

pub mod common;
mod config;
mod errors;
mod frequency;
mod index;
pub mod paths;
mod records;
mod sitemap;
pub mod storage;
mod xml;

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};

// Public API re-exports
pub use config::{DEFAULT_BUFFER_SIZE, DEFAULT_MAX_URLS, SitemapOptions, SitemapOptionsBuilder};
pub use errors::{Result, SitemapError};
pub use frequency::ChangeFrequency;
pub use index::IndexWriter;
pub use records::{SitemapReference, UrlRecord, format_lastmod};
pub use sitemap::SitemapWriter;
pub use storage::{LocalStorage, MemoryStorage, Storage};
pub use xml::SITEMAP_NAMESPACE;

/// Runs the whole pipeline on the local filesystem: writes every record into sitemaps
/// at `sitemap_path`, then writes an index at `index_path` referencing each produced
/// file as `base_url` + file name.
///
/// Returns the public URLs of the produced sitemaps. When `records` is empty neither
/// sitemaps nor index are written.
///
/// # Errors
///
/// Returns the first error raised by either writer.
pub fn write_sitemaps_with_index<I>(
    records: I,
    sitemap_path: impl Into<PathBuf>,
    index_path: impl Into<PathBuf>,
    base_url: &str,
    options: SitemapOptions,
    index_lastmod: Option<DateTime<FixedOffset>>,
) -> Result<Vec<String>>
where
    I: IntoIterator<Item = UrlRecord>,
{
    let mut sitemap = SitemapWriter::with_options(sitemap_path, options)?;
    for record in records {
        sitemap.add_url(&record)?;
    }
    sitemap.finalize()?;

    let urls = sitemap.sitemap_urls(base_url);
    let mut index = IndexWriter::new(index_path);
    for url in &urls {
        let reference = SitemapReference {
            url: url.clone(),
            last_modified: index_lastmod,
        };
        index.add_sitemap(&reference)?;
    }
    index.finalize()?;

    Ok(urls)
}
