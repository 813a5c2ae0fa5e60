use clap::Parser;
use cli_smap::{SitemapCli, run};
use core_smap::common::logging::setup_logging;

fn main() {
    setup_logging("cli_smap=info,core_smap=info");

    let cli = SitemapCli::parse();

    match run(&cli) {
        Ok(summary) => {
            if summary.sitemap_urls.is_empty() {
                for path in &summary.sitemap_paths {
                    println!("{}", path.display());
                }
            } else {
                for url in &summary.sitemap_urls {
                    println!("{url}");
                }
            }
            if let Some(index) = &summary.index_path {
                println!("index: {}", index.display());
            }
            if summary.skipped_lines > 0 {
                eprintln!("WARNING: skipped {} invalid line(s)", summary.skipped_lines);
            }
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1)
        }
    }
}
