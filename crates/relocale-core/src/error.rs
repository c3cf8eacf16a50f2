use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a single page could not be rewritten.
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{codemod} failed on {}: {message}", path.display())]
    Codemod {
        codemod: &'static str,
        path: PathBuf,
        message: String,
    },
}

impl RewriteError {
    pub fn path(&self) -> &Path {
        match self {
            RewriteError::Read { path, .. }
            | RewriteError::Write { path, .. }
            | RewriteError::Codemod { path, .. } => path.as_path(),
        }
    }
}
