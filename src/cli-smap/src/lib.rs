//! Command-line front end over `core_smap`: reads a URL list, writes the sitemaps and
//! (optionally) a sitemap index.

pub mod args;
pub mod env_config;
pub mod errors;
pub mod input;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use core_smap::{IndexWriter, SitemapOptions, SitemapReference, SitemapWriter};
use tracing::{debug, info, warn};

pub use args::SitemapCli;
pub use errors::Error;

/// What a run produced.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sitemap_paths: Vec<PathBuf>,
    /// Public URLs of the sitemaps; empty without `--base-url`.
    pub sitemap_urls: Vec<String>,
    /// Set only when an index was requested and at least one sitemap was written.
    pub index_path: Option<PathBuf>,
    pub urls_written: usize,
    pub skipped_lines: usize,
}

/// Resolves thresholds: command-line flag, then environment variable, then library default.
pub fn resolve_options(cli: &SitemapCli) -> Result<SitemapOptions, Error> {
    let defaults = SitemapOptions::default();
    let max_urls = match cli.max_urls {
        Some(n) => n,
        None => env_config::threshold_from_env(env_config::MAX_URLS_VAR)?.unwrap_or(defaults.max_urls),
    };
    let buffer_size = match cli.buffer_size {
        Some(n) => n,
        None => env_config::threshold_from_env(env_config::BUFFER_SIZE_VAR)?.unwrap_or(defaults.buffer_size),
    };
    Ok(SitemapOptions::builder()
        .max_urls(max_urls)
        .buffer_size(buffer_size)
        .build())
}

/// Streams the URL list into sitemaps, then writes the index if one was requested.
pub fn run(cli: &SitemapCli) -> Result<RunSummary, Error> {
    let options = resolve_options(cli)?;
    debug!(max_urls = options.max_urls, buffer_size = options.buffer_size, "resolved options");

    let file = File::open(&cli.input).map_err(|source| Error::InputError {
        path: cli.input.clone(),
        source,
    })?;
    let mut sitemap = SitemapWriter::with_options(&cli.output, options)?;
    let mut skipped_lines = 0;

    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| Error::InputError {
            path: cli.input.clone(),
            source,
        })?;
        match input::parse_line(&line, i + 1) {
            Ok(Some(record)) => sitemap.add_url(&record)?,
            Ok(None) => {}
            Err(e) if cli.skip_invalid => {
                warn!("skipping: {}", e);
                skipped_lines += 1;
            }
            Err(e) => return Err(e),
        }
    }
    sitemap.finalize()?;

    let sitemap_urls = cli
        .base_url
        .as_deref()
        .map(|base| sitemap.sitemap_urls(base))
        .unwrap_or_default();

    let index_path = match &cli.index {
        Some(path) if !sitemap_urls.is_empty() => {
            let mut index = IndexWriter::new(path);
            for url in &sitemap_urls {
                let mut reference = SitemapReference::new(url.as_str());
                if let Some(at) = cli.sitemap_lastmod {
                    reference = reference.last_modified(at);
                }
                index.add_sitemap(&reference)?;
            }
            index.finalize()?;
            Some(path.clone())
        }
        Some(path) => {
            info!(path = %path.display(), "no sitemaps written, skipping index");
            None
        }
        None => None,
    };

    Ok(RunSummary {
        sitemap_paths: sitemap.produced_paths().to_vec(),
        sitemap_urls,
        index_path,
        urls_written: sitemap.urls_written(),
        skipped_lines,
    })
}
