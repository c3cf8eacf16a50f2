//! Render a whole directory as text for `insta` snapshots.
//! - Only includes UTF-8 text files (CRLF→LF), ignores binary files
//! - Deterministic path order
//!
//!   Review changes: `cargo insta review`

use ignore::WalkBuilder;
use std::{fs, path::Path};

/// Every text file under `root` as `=== rel/path` followed by its contents.
pub fn dir_manifest(root: impl AsRef<Path>) -> String {
    let base = fs::canonicalize(root).expect("failed to canonicalize root path");

    // Confined to `base`, independent of any surrounding git setup
    let mut wb = WalkBuilder::new(&base);
    wb.hidden(true)
        .git_ignore(false)
        .ignore(false)
        .git_exclude(false)
        .git_global(false)
        .parents(false);

    let mut entries: Vec<(String, String)> = Vec::new();

    for dent in wb.build().filter_map(Result::ok) {
        let p = dent.path();
        if p == base {
            continue;
        }

        let Some(ft) = dent.file_type() else { continue };
        if !ft.is_file() {
            continue;
        }

        let rel = p
            .strip_prefix(&base)
            .expect("path should be within base")
            .to_string_lossy()
            .replace('\\', "/");

        let buf = fs::read(p).expect("failed to read file");

        // Non-UTF-8 files are ignored
        if let Ok(s) = std::str::from_utf8(&buf) {
            let mut body = s.replace("\r\n", "\n");
            if !body.ends_with('\n') {
                body.push('\n');
            }
            entries.push((rel, body));
        }
    }

    // Stable order
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut out = String::new();
    for (rel, body) in entries {
        out.push_str(&format!("=== {rel}\n"));
        out.push_str(&body);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_is_sorted_and_normalized() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join("b")).unwrap();
        fs::write(temp.path().join("b/page.html"), "two\r\nlines").unwrap();
        fs::write(temp.path().join("a.html"), "one\n").unwrap();
        fs::write(temp.path().join("logo.png"), [0xff, 0xd8, 0xff]).unwrap();

        assert_eq!(
            dir_manifest(temp.path()),
            "=== a.html\none\n=== b/page.html\ntwo\nlines\n"
        );
    }
}
