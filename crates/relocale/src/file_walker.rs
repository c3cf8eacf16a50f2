use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Walk `root` and process HTML pages with a callback
///
/// Features:
/// - Always recursive traversal
/// - Skips hidden entries and anything git ignores
/// - Skips directories named in `skip_dirs`
/// - Filters to .html files only
pub fn walk_html_files<F>(root: &Path, skip_dirs: &[String], mut processor: F) -> Result<usize>
where
    F: FnMut(&Path) -> Result<()>,
{
    let skip_dirs = skip_dirs.to_vec();
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(true)
        .git_ignore(true)
        .git_exclude(true)
        .git_global(true)
        .filter_entry(move |entry| {
            if entry.depth() > 0 && entry.file_type().is_some_and(|ft| ft.is_dir()) {
                if let Some(name) = entry.file_name().to_str() {
                    if skip_dirs.iter().any(|skip| skip == name) {
                        return false;
                    }
                }
            }
            true
        });

    let mut found_files = 0;
    for result in builder.build() {
        let entry = result?;
        let path = entry.path();

        if path.is_file() && is_html_file(path) {
            processor(path)?;
            found_files += 1;
        }
    }

    Ok(found_files)
}

/// Walk `root` and collect HTML page paths, sorted for deterministic ordering.
pub fn collect_html_files(root: &Path, skip_dirs: &[String]) -> Result<Vec<PathBuf>> {
    let mut html_files = Vec::new();
    walk_html_files(root, skip_dirs, |path| {
        html_files.push(path.to_path_buf());
        Ok(())
    })?;
    html_files.sort();
    Ok(html_files)
}

fn is_html_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
}
