//! File naming for split sitemaps and their public URLs.

use std::path::{Path, PathBuf};

/// Path of the `sequence`-th file written for `target` (1-based).
///
/// The first file is `target` itself; later files get `_{sequence}` appended to the
/// file stem, keeping directory and extension: `out/sitemap.xml` → `out/sitemap_2.xml`.
pub fn numbered_path(target: &Path, sequence: usize) -> PathBuf {
    if sequence < 2 {
        return target.to_path_buf();
    }

    let stem = target
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match target.extension() {
        Some(ext) => format!("{}_{}.{}", stem, sequence, ext.to_string_lossy()),
        None => format!("{}_{}", stem, sequence),
    };
    target.with_file_name(file_name)
}

/// The final path component as a string, or an empty string when there is none.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Maps each path to `base_url` + its file name, preserving order.
///
/// No escaping and no slash normalization: `base_url` must already end where the
/// file name should start (usually with `/`).
pub fn sitemap_urls<P: AsRef<Path>>(base_url: &str, paths: &[P]) -> Vec<String> {
    paths
        .iter()
        .map(|p| format!("{}{}", base_url, base_name(p.as_ref())))
        .collect()
}
