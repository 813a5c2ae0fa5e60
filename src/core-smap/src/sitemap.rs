//! Streaming, size-bounded sitemap writer.
//!
//! URLs are serialized one at a time into an in-memory buffer. Every `buffer_size`
//! records the buffer is appended to the active file, and every `max_urls` records the
//! active file is closed and a new one is started:
//!
//! ```text
//! sitemap.xml      urls 1 ..= max_urls
//! sitemap_2.xml    urls max_urls + 1 ..= 2 * max_urls
//! sitemap_3.xml    ...
//! ```
//!
//! A writer owns its files exclusively. It is not meant to be shared between threads;
//! callers needing that must serialize access themselves.

use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};
use tracing::{debug, info};

use crate::config::SitemapOptions;
use crate::errors::{Result, SitemapError};
use crate::frequency::ChangeFrequency;
use crate::paths::{numbered_path, sitemap_urls};
use crate::records::{UrlRecord, format_lastmod};
use crate::storage::{LocalStorage, Storage};
use crate::xml::XmlDocument;

/// The file currently receiving URLs.
struct ActiveDocument {
    path: PathBuf,
    xml: XmlDocument,
}

enum DocumentState {
    /// No file is open: nothing was written yet, or the last file was just closed by a
    /// rollover that has not opened its successor.
    NoDocumentOpen,
    DocumentOpen(ActiveDocument),
    /// `finalize` was called. No more URLs are accepted.
    Finalized,
}

/// Writes `urlset` documents, splitting into numbered files every `max_urls` URLs.
///
/// # Examples
///
/// ```no_run
/// use core_smap::{ChangeFrequency, SitemapOptions, SitemapWriter, UrlRecord};
///
/// # fn main() -> core_smap::Result<()> {
/// let options = SitemapOptions::builder().max_urls(10_000).build();
/// let mut writer = SitemapWriter::with_options("public/sitemap.xml", options)?;
///
/// writer.add_url(&UrlRecord::new("https://example.com/").change_frequency(ChangeFrequency::Daily))?;
/// writer.add_url(&UrlRecord::new("https://example.com/about").priority("0.5"))?;
/// writer.finalize()?;
///
/// for url in writer.sitemap_urls("https://example.com/") {
///     println!("{url}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct SitemapWriter<S: Storage = LocalStorage> {
    target_path: PathBuf,
    options: SitemapOptions,
    storage: S,
    urls_written: usize,
    file_sequence: usize,
    produced_paths: Vec<PathBuf>,
    state: DocumentState,
}

impl SitemapWriter<LocalStorage> {
    /// Writer with default thresholds (50000 URLs per file, flush every 1000) on the
    /// local filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            target_path: path.into(),
            options: SitemapOptions::default(),
            storage: LocalStorage::new(),
            urls_written: 0,
            file_sequence: 0,
            produced_paths: Vec::new(),
            state: DocumentState::NoDocumentOpen,
        }
    }

    /// Writer with custom thresholds on the local filesystem.
    ///
    /// # Errors
    ///
    /// Returns `SitemapError::InvalidOption` if either threshold is zero.
    pub fn with_options(path: impl Into<PathBuf>, options: SitemapOptions) -> Result<Self> {
        Self::with_storage(path, options, LocalStorage::new())
    }
}

impl<S: Storage> SitemapWriter<S> {
    /// Writer with custom thresholds over any storage.
    ///
    /// # Errors
    ///
    /// Returns `SitemapError::InvalidOption` if either threshold is zero.
    pub fn with_storage(path: impl Into<PathBuf>, options: SitemapOptions, storage: S) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            target_path: path.into(),
            options,
            storage,
            urls_written: 0,
            file_sequence: 0,
            produced_paths: Vec::new(),
            state: DocumentState::NoDocumentOpen,
        })
    }

    /// Sets the maximum number of URLs per file. Only allowed before the first URL.
    pub fn set_max_urls(&mut self, max_urls: usize) -> Result<()> {
        self.ensure_not_started("max_urls")?;
        let options = SitemapOptions { max_urls, ..self.options };
        options.validate()?;
        self.options = options;
        Ok(())
    }

    /// Sets how many URLs are buffered in memory between appends. Only allowed before
    /// the first URL.
    pub fn set_buffer_size(&mut self, buffer_size: usize) -> Result<()> {
        self.ensure_not_started("buffer_size")?;
        let options = SitemapOptions { buffer_size, ..self.options };
        options.validate()?;
        self.options = options;
        Ok(())
    }

    fn ensure_not_started(&self, option: &str) -> Result<()> {
        if self.urls_written > 0 || !matches!(self.state, DocumentState::NoDocumentOpen) {
            return Err(SitemapError::InvalidOption(format!(
                "{} cannot be changed after URLs have been added",
                option
            )));
        }
        Ok(())
    }

    /// Adds a URL built from loose parts, validating the change frequency token first.
    ///
    /// # Errors
    ///
    /// Returns `SitemapError::InvalidChangeFrequency` for an unknown token; in that case
    /// nothing is written and no counter changes.
    pub fn add_item(
        &mut self,
        location: &str,
        last_modified: Option<DateTime<FixedOffset>>,
        change_frequency: Option<&str>,
        priority: Option<&str>,
    ) -> Result<()> {
        let change_frequency = change_frequency.map(str::parse::<ChangeFrequency>).transpose()?;
        let record = UrlRecord {
            location: location.to_string(),
            last_modified,
            change_frequency,
            priority: priority.map(String::from),
        };
        self.add_url(&record)
    }

    /// Adds a URL, starting a new file or flushing the buffer first when a threshold is
    /// reached.
    ///
    /// # Errors
    ///
    /// Returns `SitemapError::Io` when a file cannot be deleted or appended to, and
    /// `SitemapError::InvalidOption` when the writer was already finalized.
    pub fn add_url(&mut self, record: &UrlRecord) -> Result<()> {
        if matches!(self.state, DocumentState::Finalized) {
            return Err(SitemapError::InvalidOption(
                "cannot add URLs after finalize".to_string(),
            ));
        }

        if self.urls_written % self.options.max_urls == 0 {
            self.finish_file()?;
            self.create_new_file()?;
        } else if self.urls_written % self.options.buffer_size == 0 {
            self.flush()?;
        }

        let doc = match &mut self.state {
            DocumentState::DocumentOpen(active) => &mut active.xml,
            _ => unreachable!("a document is always open after rollover"),
        };
        write_url(doc, record)?;

        self.urls_written += 1;
        Ok(())
    }

    /// Closes the active file and flushes all pending bytes. Calling it again, or on a
    /// writer that never received a URL, does nothing.
    pub fn finalize(&mut self) -> Result<()> {
        match self.state {
            DocumentState::Finalized => return Ok(()),
            DocumentState::NoDocumentOpen => {}
            DocumentState::DocumentOpen(_) => self.finish_file()?,
        }
        debug!(
            files = self.file_sequence,
            urls = self.urls_written,
            "finalized sitemap writer"
        );
        self.state = DocumentState::Finalized;
        Ok(())
    }

    /// Public URL of every file written so far: `base_url` followed by the file name.
    pub fn sitemap_urls(&self, base_url: &str) -> Vec<String> {
        sitemap_urls(base_url, &self.produced_paths)
    }

    /// The path given at construction; the first file is written there.
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// Every file started so far, in creation order.
    pub fn produced_paths(&self) -> &[PathBuf] {
        &self.produced_paths
    }

    /// Number of URLs accepted so far, across all files.
    pub fn urls_written(&self) -> usize {
        self.urls_written
    }

    /// Number of files started so far; equals `produced_paths().len()`.
    pub fn files_written(&self) -> usize {
        self.file_sequence
    }

    /// Thresholds in effect.
    pub fn options(&self) -> &SitemapOptions {
        &self.options
    }

    /// The storage the files are written to.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable access to the storage, e.g. to inspect or reconfigure a test backend.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Consumes the writer, returning its storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Writes the closing tags of the active file and appends what is left of its buffer.
    fn finish_file(&mut self) -> Result<()> {
        if let DocumentState::DocumentOpen(active) = &mut self.state {
            active.xml.close()?;
            self.storage
                .append(&active.path, active.xml.buffered())
                .map_err(|e| SitemapError::io(&active.path, e))?;
            info!(path = %active.path.display(), "finished sitemap file");
            self.state = DocumentState::NoDocumentOpen;
        }
        Ok(())
    }

    fn create_new_file(&mut self) -> Result<()> {
        let sequence = self.file_sequence + 1;
        let path = numbered_path(&self.target_path, sequence);

        self.storage.remove(&path).map_err(|e| SitemapError::io(&path, e))?;
        let xml = XmlDocument::open("urlset")?;

        info!(path = %path.display(), sequence, "started sitemap file");
        self.file_sequence = sequence;
        self.produced_paths.push(path.clone());
        self.state = DocumentState::DocumentOpen(ActiveDocument { path, xml });
        Ok(())
    }

    /// Appends the buffered XML to the active file without closing the document.
    fn flush(&mut self) -> Result<()> {
        if let DocumentState::DocumentOpen(active) = &mut self.state {
            self.storage
                .append(&active.path, active.xml.buffered())
                .map_err(|e| SitemapError::io(&active.path, e))?;
            debug!(
                path = %active.path.display(),
                bytes = active.xml.buffered().len(),
                "flushed sitemap buffer"
            );
            active.xml.clear();
        }
        Ok(())
    }
}

/// Child order is fixed: loc, priority, changefreq, lastmod.
fn write_url(doc: &mut XmlDocument, record: &UrlRecord) -> Result<()> {
    doc.start_element("url")?;
    doc.text_element("loc", &record.location)?;

    if let Some(priority) = &record.priority {
        doc.text_element("priority", priority)?;
    }

    if let Some(frequency) = record.change_frequency {
        doc.text_element("changefreq", frequency.as_str())?;
    }

    if let Some(at) = &record.last_modified {
        doc.text_element("lastmod", &format_lastmod(at))?;
    }

    doc.end_element("url")
}
