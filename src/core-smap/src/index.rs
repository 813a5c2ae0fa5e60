//! Sitemap index writer.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::{Result, SitemapError};
use crate::records::{SitemapReference, format_lastmod};
use crate::storage::{LocalStorage, Storage};
use crate::xml::XmlDocument;

/// Writes a single `sitemapindex` document referencing sitemap files.
///
/// Everything is kept in memory until [`finalize`](IndexWriter::finalize), which writes
/// the whole document in one overwrite. An index that never received a sitemap writes
/// no file at all.
pub struct IndexWriter<S: Storage = LocalStorage> {
    file_path: PathBuf,
    storage: S,
    document: Option<XmlDocument>,
    sitemaps_written: usize,
    /// Set once `finalize` has completed; the root element is closed from then on.
    finalized: bool,
}

impl IndexWriter<LocalStorage> {
    /// Index writer on the local filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_storage(path, LocalStorage::new())
    }
}

impl<S: Storage> IndexWriter<S> {
    /// Index writer over any storage. Nothing is written before `finalize`.
    pub fn with_storage(path: impl Into<PathBuf>, storage: S) -> Self {
        Self {
            file_path: path.into(),
            storage,
            document: None,
            sitemaps_written: 0,
            finalized: false,
        }
    }

    /// Adds a `<sitemap>` entry, opening the document on first use.
    ///
    /// # Errors
    ///
    /// Returns `SitemapError::InvalidOption` when the index was already finalized.
    pub fn add_sitemap(&mut self, reference: &SitemapReference) -> Result<()> {
        if self.finalized {
            return Err(SitemapError::InvalidOption(
                "cannot add sitemaps after finalize".to_string(),
            ));
        }

        let doc = match self.document.take() {
            Some(doc) => doc,
            None => XmlDocument::open("sitemapindex")?,
        };
        let doc = self.document.insert(doc);

        doc.start_element("sitemap")?;
        doc.text_element("loc", &reference.url)?;
        if let Some(at) = &reference.last_modified {
            doc.text_element("lastmod", &format_lastmod(at))?;
        }
        doc.end_element("sitemap")?;

        self.sitemaps_written += 1;
        Ok(())
    }

    /// Closes the document and writes it to the index path, replacing any previous
    /// content. Does nothing when no sitemap was added, or when called again.
    ///
    /// A failed write leaves the writer unfinalized so the call can be retried.
    pub fn finalize(&mut self) -> Result<()> {
        if self.finalized {
            return Ok(());
        }
        if let Some(doc) = &mut self.document {
            doc.close()?;
            self.storage
                .write(&self.file_path, doc.buffered())
                .map_err(|e| SitemapError::io(&self.file_path, e))?;
            info!(
                path = %self.file_path.display(),
                sitemaps = self.sitemaps_written,
                "wrote sitemap index"
            );
        }
        self.finalized = true;
        Ok(())
    }

    /// Path the index is written to.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Number of `<sitemap>` entries added so far.
    pub fn sitemaps_written(&self) -> usize {
        self.sitemaps_written
    }

    /// The storage the index is written to.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable access to the storage.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Consumes the writer, returning its storage.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
