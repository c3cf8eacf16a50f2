use log::{debug, warn};
use similar::TextDiff;
use std::fs;
use std::path::{Path, PathBuf};

use crate::codemods::{Codemod, RewriteContext};
use crate::error::RewriteError;

/// What to do with a page whose content changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Overwrite the page in place.
    #[default]
    Write,
    /// Only report that the page would change.
    Check,
    /// Report the change as a unified diff.
    Diff,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Updated,
    Unchanged,
    /// Content would change but nothing was written. `diff` is set in [`Mode::Diff`].
    WouldUpdate { diff: Option<String> },
}

/// Aggregate result of a batch.
#[derive(Debug, Default)]
pub struct Summary {
    pub updated: usize,
    pub pending: usize,
    pub unchanged: usize,
    pub failed: Vec<(PathBuf, RewriteError)>,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.updated + self.pending + self.unchanged + self.failed.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Run every codemod over `content` in order.
pub fn rewrite_content(
    ctx: &RewriteContext,
    path: &Path,
    content: &str,
    codemods: &[Box<dyn Codemod>],
) -> Result<Option<String>, RewriteError> {
    let mut current: Option<String> = None;
    for codemod in codemods {
        let input = current.as_deref().unwrap_or(content);
        match codemod.apply(ctx, path, input) {
            Ok(Some(updated)) => {
                debug!("{}: {} applied", path.display(), codemod.name());
                current = Some(updated);
            }
            Ok(None) => {}
            Err(e) => {
                return Err(RewriteError::Codemod {
                    codemod: codemod.name(),
                    path: path.to_path_buf(),
                    message: format!("{e:#}"),
                });
            }
        }
    }
    Ok(current.filter(|updated| updated != content))
}

/// Rewrite a single page. The file is only touched when its content changes.
pub fn process_file(
    ctx: &RewriteContext,
    path: &Path,
    codemods: &[Box<dyn Codemod>],
    mode: Mode,
) -> Result<FileOutcome, RewriteError> {
    let original = fs::read_to_string(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(updated) = rewrite_content(ctx, path, &original, codemods)? else {
        return Ok(FileOutcome::Unchanged);
    };

    match mode {
        Mode::Write => {
            fs::write(path, updated).map_err(|source| RewriteError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(FileOutcome::Updated)
        }
        Mode::Check => Ok(FileOutcome::WouldUpdate { diff: None }),
        Mode::Diff => {
            let display = path.strip_prefix(&ctx.root).unwrap_or(path).display();
            let diff = TextDiff::from_lines(original.as_str(), updated.as_str());
            let diff = diff
                .unified_diff()
                .context_radius(3)
                .header(&format!("old/{display}"), &format!("new/{display}"))
                .to_string();
            Ok(FileOutcome::WouldUpdate { diff: Some(diff) })
        }
    }
}

/// Rewrite every page in `files`, reporting each outcome through `report`.
///
/// A page that fails is recorded in the summary and the batch moves on.
pub fn run_batch<F>(
    ctx: &RewriteContext,
    files: &[PathBuf],
    codemods: &[Box<dyn Codemod>],
    mode: Mode,
    mut report: F,
) -> Summary
where
    F: FnMut(&Path, &Result<FileOutcome, RewriteError>),
{
    let mut summary = Summary::default();

    for path in files {
        let result = process_file(ctx, path, codemods, mode);
        report(path, &result);

        match result {
            Ok(FileOutcome::Updated) => summary.updated += 1,
            Ok(FileOutcome::WouldUpdate { .. }) => summary.pending += 1,
            Ok(FileOutcome::Unchanged) => summary.unchanged += 1,
            Err(e) => {
                warn!("{e}");
                summary.failed.push((path.clone(), e));
            }
        }
    }

    summary
}
