//! sandbox.rs
//!
//! Throwaway site directory for end-to-end tests.
//! - Lay out pages with `write`, read them back with `read`
//! - Run a cargo binary against the site with colors disabled
//!
//! Everything lives under an `assert_fs::TempDir` and is cleaned up on drop.
//!
//! ## Quick example
//! ```no_run
//! use relocale_test_utils::sandbox::Sandbox;
//!
//! let mut sb = Sandbox::new();
//! sb.write("index.html", "<title>Staten Island</title>");
//!
//! let stdout = sb.run("relocale", ["finalize", "."]).unwrap();
//! assert!(stdout.contains("Updated 1 of 1 files."));
//! assert_eq!(sb.read("index.html"), "<title>Belpre</title>");
//! ```

use assert_fs::TempDir;
use duct::Expression;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::Output;

pub struct Sandbox {
    root: TempDir,
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Sandbox {
    /// Create a new sandbox; all state is under an auto-cleaned TempDir.
    pub fn new() -> Self {
        let root = TempDir::new().expect("create sandbox TempDir");
        Self { root }
    }

    /// Absolute path to the sandbox root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Write/overwrite a file relative to the sandbox root.
    pub fn write<P: AsRef<Path>, S: AsRef<[u8]>>(&mut self, rel: P, contents: S) -> &mut Self {
        let p = self.root_path().join(rel);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(p, contents).expect("write file");
        self
    }

    /// Read a file relative to the sandbox root.
    pub fn read<P: AsRef<Path>>(&self, rel: P) -> String {
        fs::read_to_string(self.root_path().join(rel)).expect("read file")
    }

    /// Build a `duct::Expression` for a cargo binary, run from the sandbox root.
    pub fn cmd<I>(&self, program: &str, args: I) -> Expression
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        let cargo_bin_path = assert_cmd::cargo::cargo_bin(program);
        let args: Vec<_> = args
            .into_iter()
            .map(|arg| arg.as_ref().to_os_string())
            .collect();

        duct::cmd(cargo_bin_path, args)
            .dir(self.root_path())
            .env("NO_COLOR", "1")
            .env_remove("CLICOLOR_FORCE")
            .env_remove("RUST_LOG")
    }

    /// Run a cargo binary and return its stdout. Errors if it exits with non-zero status.
    pub fn run<I>(&self, program: &str, args: I) -> Result<String, String>
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        self.cmd(program, args)
            .read()
            .map_err(|e| format!("command failed: {e}"))
    }

    /// Run a cargo binary without checking its exit status.
    pub fn output<I>(&self, program: &str, args: I) -> Output
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        self.cmd(program, args)
            .stdout_capture()
            .stderr_capture()
            .unchecked()
            .run()
            .expect("spawn command")
    }
}
