use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sitemap-gen")]
#[command(about = "Write sitemaps (and optionally a sitemap index) from a list of URLs", long_about = None)]
pub struct SitemapCli {
    /// URL list: one record per line, tab-separated `loc [lastmod [changefreq [priority]]]`.
    #[arg(short, long, value_parser = validate_input_file)]
    pub input: PathBuf,

    /// Path of the first sitemap. Further files are numbered: sitemap_2.xml, sitemap_3.xml, ...
    #[arg(short, long, value_parser = validate_output_file)]
    pub output: PathBuf,

    /// URLs per sitemap file. Falls back to $SITEMAP_MAX_URLS, then 50000.
    #[arg(long)]
    pub max_urls: Option<usize>,

    /// URLs buffered between appends. Falls back to $SITEMAP_BUFFER_SIZE, then 1000.
    #[arg(long)]
    pub buffer_size: Option<usize>,

    /// Also write a sitemap index at this path.
    #[arg(long, value_parser = validate_output_file, requires = "base_url")]
    pub index: Option<PathBuf>,

    /// Public URL the sitemap files are served under, e.g. https://example.com/sitemaps/
    #[arg(long, value_parser = validate_url)]
    pub base_url: Option<String>,

    /// `lastmod` for every index entry (RFC 3339).
    #[arg(long, value_parser = validate_timestamp, requires = "index")]
    pub sitemap_lastmod: Option<DateTime<FixedOffset>>,

    /// Log and skip malformed lines instead of aborting.
    #[arg(long)]
    pub skip_invalid: bool,
}

fn validate_url(s: &str) -> Result<String, String> {
    url::Url::parse(s)
        .map(|_| s.to_string())
        .map_err(|e| format!("Invalid URL: {}", e))
}

fn validate_timestamp(s: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(s).map_err(|e| format!("Invalid RFC 3339 timestamp: {}", e))
}

fn validate_input_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if !path.exists() {
        return Err(format!("Input path does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Input path is not a file: {}", path.display()));
    }

    Ok(path)
}

fn validate_output_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if path.exists() && path.is_dir() {
        return Err(format!("Output path is a directory: {}", path.display()));
    }

    if path.file_name().is_none() {
        return Err(format!("Output path has no file name: {}", path.display()));
    }

    Ok(path)
}
