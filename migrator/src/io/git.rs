//! Git adapter for discovering tracked files.
//!
//! Discovery only trusts what git tracks, so we keep a small, explicit wrapper
//! around `git` subprocess calls.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, instrument};

/// Wrapper for executing git commands in a working directory.
#[derive(Debug, Clone)]
pub struct Git {
    workdir: PathBuf,
}

impl Git {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// List tracked files (index order), relative to the working directory.
    ///
    /// Errors when the working directory is not inside a git work tree.
    #[instrument(skip_all, fields(workdir = %self.workdir.display()))]
    pub fn ls_files(&self) -> Result<Vec<String>> {
        let out = self.run_capture(&["ls-files", "-z"])?;
        let files = parse_ls_files(&out);
        debug!(count = files.len(), "listed tracked files");
        Ok(files)
    }

    fn run_capture(&self, args: &[&str]) -> Result<String> {
        let output = self.run_checked(args)?;
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn run_checked(&self, args: &[&str]) -> Result<Output> {
        let output = self.run(args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("git {} failed: {}", args.join(" "), stderr.trim()));
        }
        Ok(output)
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .with_context(|| format!("spawn git {}", args.join(" ")))
    }
}

/// Split NUL-terminated `git ls-files -z` output into paths.
fn parse_ls_files(out: &str) -> Vec<String> {
    out.split('\0')
        .filter(|path| !path.is_empty())
        .map(str::to_string)
        .collect()
}
