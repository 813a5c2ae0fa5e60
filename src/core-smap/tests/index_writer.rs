//! Tests for the sitemap index writer and the sitemap → index pipeline

mod common;

use std::path::Path;

use chrono::DateTime;
use common::parse_document;
use core_smap::{
    IndexWriter, MemoryStorage, SITEMAP_NAMESPACE, SitemapOptions, SitemapReference, SitemapWriter, UrlRecord,
    write_sitemaps_with_index,
};

#[test]
fn test_empty_index_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let index_path = dir.path().join("sitemap_index.xml");

    let mut index = IndexWriter::new(&index_path);
    index.finalize().unwrap();
    assert!(!index_path.exists());

    // Contrast: a sitemap writer with a single record always produces a file.
    let sitemap_path = dir.path().join("sitemap.xml");
    let mut sitemap = SitemapWriter::new(&sitemap_path);
    sitemap.add_url(&UrlRecord::new("https://example.com/")).unwrap();
    sitemap.finalize().unwrap();
    assert!(sitemap_path.exists());
}

#[test]
fn test_index_roundtrip() {
    let mut index = IndexWriter::with_storage("sitemap_index.xml", MemoryStorage::new());
    let urls = [
        "https://example.com/sitemaps/sitemap.xml",
        "https://example.com/sitemaps/sitemap_2.xml",
        "https://example.com/sitemaps/sitemap_3.xml",
    ];
    for url in urls {
        index.add_sitemap(&SitemapReference::new(url)).unwrap();
    }
    index.finalize().unwrap();

    let xml = index.storage().get_string(Path::new("sitemap_index.xml")).unwrap();
    let doc = parse_document(&xml);
    assert_eq!(doc.root, "sitemapindex");
    assert_eq!(doc.namespace.as_deref(), Some(SITEMAP_NAMESPACE));
    assert_eq!(doc.entries, 3);
    assert_eq!(doc.locs, urls);
}

#[test]
fn test_index_exact_layout() {
    let at = DateTime::parse_from_rfc3339("2024-05-01T00:00:00+00:00").unwrap();
    let mut index = IndexWriter::with_storage("index.xml", MemoryStorage::new());
    index
        .add_sitemap(&SitemapReference::new("https://example.com/sitemap.xml").last_modified(at))
        .unwrap();
    index.finalize().unwrap();

    let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
    <sitemap>
        <loc>https://example.com/sitemap.xml</loc>
        <lastmod>2024-05-01T00:00:00+00:00</lastmod>
    </sitemap>
</sitemapindex>
"#;
    assert_eq!(index.storage().get_string(Path::new("index.xml")).unwrap(), expected);
}

#[test]
fn test_index_overwrites_previous_run() {
    let dir = tempfile::tempdir().unwrap();
    let index_path = dir.path().join("sitemap_index.xml");
    std::fs::write(&index_path, "previous run with much longer content than the new index").unwrap();

    let mut index = IndexWriter::new(&index_path);
    index.add_sitemap(&SitemapReference::new("https://example.com/a.xml")).unwrap();
    index.finalize().unwrap();

    let xml = std::fs::read_to_string(&index_path).unwrap();
    assert!(!xml.contains("previous run"));
    assert_eq!(parse_document(&xml).locs, vec!["https://example.com/a.xml"]);
}

#[test]
fn test_pipeline_writes_sitemaps_and_index() {
    let dir = tempfile::tempdir().unwrap();
    let sitemap_path = dir.path().join("sitemap.xml");
    let index_path = dir.path().join("sitemap_index.xml");
    let records = (0..5).map(|i| UrlRecord::new(format!("https://example.com/{i}")));
    let options = SitemapOptions::builder().max_urls(2).buffer_size(1).build();
    let at = DateTime::parse_from_rfc3339("2024-05-01T00:00:00+00:00").unwrap();

    let urls = write_sitemaps_with_index(
        records,
        &sitemap_path,
        &index_path,
        "https://example.com/sitemaps/",
        options,
        Some(at),
    )
    .unwrap();

    assert_eq!(
        urls,
        vec![
            "https://example.com/sitemaps/sitemap.xml",
            "https://example.com/sitemaps/sitemap_2.xml",
            "https://example.com/sitemaps/sitemap_3.xml",
        ]
    );
    assert!(dir.path().join("sitemap_3.xml").exists());

    let index_xml = std::fs::read_to_string(&index_path).unwrap();
    let index = parse_document(&index_xml);
    assert_eq!(index.locs, urls);
    assert_eq!(index_xml.matches("<lastmod>2024-05-01T00:00:00+00:00</lastmod>").count(), 3);
}

#[test]
fn test_pipeline_without_records_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let sitemap_path = dir.path().join("sitemap.xml");
    let index_path = dir.path().join("sitemap_index.xml");

    let urls = write_sitemaps_with_index(
        Vec::<UrlRecord>::new(),
        &sitemap_path,
        &index_path,
        "https://example.com/",
        SitemapOptions::default(),
        None,
    )
    .unwrap();

    assert!(urls.is_empty());
    assert!(!sitemap_path.exists());
    assert!(!index_path.exists());
}

#[test]
fn test_zero_max_urls_rejected() {
    let options = SitemapOptions::builder().max_urls(0).build();
    let err = write_sitemaps_with_index(
        vec![UrlRecord::new("/a")],
        "unused/sitemap.xml",
        "unused/index.xml",
        "https://example.com/",
        options,
        None,
    )
    .unwrap_err();
    assert!(err.is_invalid_argument());
}
