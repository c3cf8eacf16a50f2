use anyhow::Result;
use clap::Args;
use colored::Colorize;
use relocale_core::codemods::{
    cleanup::Cleanup, location_pages::LocationPages, navigation::Navigation, rebrand::Rebrand,
    service_pages::ServicePages,
};
use relocale_core::runner::{self, FileOutcome, Mode};
use relocale_core::{Codemod, RewriteContext, RewriteError};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::file_walker;

/// Arguments shared by every rewrite command
#[derive(Args, Debug, Default, Clone)]
pub struct RewriteArgs {
    /// Root of the site to rewrite. Every .html file below it is considered.
    /// When omitted, the current directory is used.
    #[arg(value_name = "ROOT", value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Report pages that would change without modifying them.
    /// Exit with non-zero code if any page needs rewriting.
    #[arg(long, conflicts_with = "diff")]
    pub check: bool,

    /// Show diffs instead of writing files
    #[arg(long)]
    pub diff: bool,

    /// Config file to use instead of <ROOT>/relocale.toml
    #[arg(long, value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,
}

impl RewriteArgs {
    fn mode(&self) -> Mode {
        if self.check {
            Mode::Check
        } else if self.diff {
            Mode::Diff
        } else {
            Mode::Write
        }
    }
}

/// Which group of passes a command runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    Content,
    Navigation,
    Finalize,
    All,
}

impl Pipeline {
    /// Codemods in the order they must run.
    pub fn codemods(self) -> Vec<Box<dyn Codemod>> {
        match self {
            Pipeline::Content => vec![Box::new(Rebrand)],
            Pipeline::Navigation => vec![Box::new(Navigation)],
            Pipeline::Finalize => vec![
                Box::new(ServicePages),
                Box::new(LocationPages),
                Box::new(Cleanup),
            ],
            Pipeline::All => vec![
                Box::new(Rebrand),
                Box::new(ServicePages),
                Box::new(LocationPages),
                Box::new(Navigation),
                Box::new(Cleanup),
            ],
        }
    }
}

/// Execute a rewrite command
pub fn execute(pipeline: Pipeline, args: RewriteArgs) -> Result<()> {
    let root = match &args.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };
    if !root.is_dir() {
        anyhow::bail!("Site root {} is not a directory", root.display());
    }

    let config = Config::load(&root, args.config.as_deref())?;
    let files = file_walker::collect_html_files(&root, &config.skip_dirs)?;
    println!("Found {} HTML files in {}", files.len(), root.display());

    let mode = args.mode();
    let ctx = RewriteContext::new(root, config.locale);
    let codemods = pipeline.codemods();
    let summary = runner::run_batch(&ctx, &files, &codemods, mode, |path, result| {
        print_status(&ctx.root, path, result)
    });

    match mode {
        Mode::Write => println!(
            "\nUpdated {} of {} files.",
            summary.updated,
            summary.total()
        ),
        Mode::Check | Mode::Diff => println!(
            "\n{} of {} files would change.",
            summary.pending,
            summary.total()
        ),
    }

    if summary.has_failures() {
        anyhow::bail!("{} file(s) failed to rewrite", summary.failed.len());
    }
    if mode == Mode::Check && summary.pending > 0 {
        anyhow::bail!("{} file(s) need rewriting", summary.pending);
    }

    Ok(())
}

fn print_status(root: &Path, path: &Path, result: &Result<FileOutcome, RewriteError>) {
    let name = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/");

    match result {
        Ok(FileOutcome::Updated) => println!("{} {name} (updated)", "✓".green()),
        Ok(FileOutcome::Unchanged) => println!("{}", format!("· {name} (unchanged)").dimmed()),
        Ok(FileOutcome::WouldUpdate { diff }) => {
            println!("{} {name} (would update)", "!".yellow());
            if let Some(diff) = diff {
                print!("{diff}");
            }
        }
        Err(e) => println!("{} {name}: {e}", "✗".red()),
    }
}
