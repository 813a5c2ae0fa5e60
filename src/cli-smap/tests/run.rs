//! End-to-end runs of the command-line pipeline against a temporary directory

use std::path::Path;

use clap::Parser;
use cli_smap::{Error, SitemapCli, run};

fn cli(args: &[&str]) -> SitemapCli {
    SitemapCli::try_parse_from(std::iter::once("sitemap-gen").chain(args.iter().copied())).unwrap()
}

fn write_input(dir: &Path, content: &str) -> String {
    let path = dir.join("urls.tsv");
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_run_splits_and_writes_index() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "# pages\nhttps://example.com/a\t2024-01-01\tdaily\t0.9\n\nhttps://example.com/b\nhttps://example.com/c\n",
    );
    let output = dir.path().join("sitemap.xml");
    let index = dir.path().join("sitemap_index.xml");

    let summary = run(&cli(&[
        "--input",
        &input,
        "--output",
        output.to_str().unwrap(),
        "--max-urls",
        "2",
        "--buffer-size",
        "1",
        "--index",
        index.to_str().unwrap(),
        "--base-url",
        "https://example.com/",
        "--sitemap-lastmod",
        "2024-05-01T00:00:00+00:00",
    ]))
    .unwrap();

    assert_eq!(summary.urls_written, 3);
    assert_eq!(summary.skipped_lines, 0);
    assert_eq!(summary.sitemap_paths, vec![output.clone(), dir.path().join("sitemap_2.xml")]);
    assert_eq!(
        summary.sitemap_urls,
        vec!["https://example.com/sitemap.xml", "https://example.com/sitemap_2.xml"]
    );
    assert_eq!(summary.index_path.as_deref(), Some(index.as_path()));

    let first = std::fs::read_to_string(&output).unwrap();
    assert!(first.contains("<loc>https://example.com/a</loc>"));
    assert!(first.contains("<priority>0.9</priority>"));
    assert!(first.contains("<changefreq>daily</changefreq>"));
    assert!(first.contains("<lastmod>2024-01-01T00:00:00+00:00</lastmod>"));
    assert!(first.contains("<loc>https://example.com/b</loc>"));

    let second = std::fs::read_to_string(dir.path().join("sitemap_2.xml")).unwrap();
    assert!(second.contains("<loc>https://example.com/c</loc>"));

    let index_xml = std::fs::read_to_string(&index).unwrap();
    assert!(index_xml.contains("<loc>https://example.com/sitemap_2.xml</loc>"));
    assert_eq!(index_xml.matches("<lastmod>2024-05-01T00:00:00+00:00</lastmod>").count(), 2);
}

#[test]
fn test_invalid_line_aborts_with_line_number() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "/a\n/b\t\tsometimes\n");
    let output = dir.path().join("sitemap.xml");

    let err = run(&cli(&["-i", &input, "-o", output.to_str().unwrap()])).unwrap_err();
    match err {
        Error::InvalidLine { line, reason } => {
            assert_eq!(line, 2);
            assert!(reason.contains("sometimes"));
        }
        other => panic!("expected InvalidLine, got {other:?}"),
    }
}

#[test]
fn test_skip_invalid_keeps_going() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "/a\n/b\t\tsometimes\n/c\tnot-a-date\n/d\n");
    let output = dir.path().join("sitemap.xml");

    let summary = run(&cli(&["-i", &input, "-o", output.to_str().unwrap(), "--skip-invalid"])).unwrap();
    assert_eq!(summary.urls_written, 2);
    assert_eq!(summary.skipped_lines, 2);

    let xml = std::fs::read_to_string(&output).unwrap();
    assert!(xml.contains("<loc>/a</loc>"));
    assert!(xml.contains("<loc>/d</loc>"));
    assert!(!xml.contains("/b"));
}

#[test]
fn test_empty_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "# nothing yet\n\n");
    let output = dir.path().join("sitemap.xml");
    let index = dir.path().join("sitemap_index.xml");

    let summary = run(&cli(&[
        "-i",
        &input,
        "-o",
        output.to_str().unwrap(),
        "--index",
        index.to_str().unwrap(),
        "--base-url",
        "https://example.com/",
    ]))
    .unwrap();

    assert_eq!(summary.urls_written, 0);
    assert!(summary.sitemap_paths.is_empty());
    assert!(summary.index_path.is_none());
    assert!(!output.exists());
    assert!(!index.exists());
}

#[test]
fn test_zero_max_urls_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "/a\n");
    let output = dir.path().join("sitemap.xml");

    let err = run(&cli(&["-i", &input, "-o", output.to_str().unwrap(), "--max-urls", "0"])).unwrap_err();
    assert!(matches!(err, Error::SitemapError(ref e) if e.is_invalid_argument()));
    assert!(!output.exists());
}
