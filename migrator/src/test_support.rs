//! Test-only helpers for building throwaway git work trees.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, anyhow};
use tempfile::TempDir;

/// Temporary git repository, removed on drop.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create an empty repository with a local identity configured.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        let repo = Self { dir };
        repo.git(&["init", "--quiet"])?;
        repo.git(&["config", "user.name", "Migrator Test"])?;
        repo.git(&["config", "user.email", "migrator-test@local.invalid"])?;
        Ok(repo)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `contents` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, contents: &str) -> Result<()> {
        self.write_bytes(rel, contents.as_bytes())
    }

    /// Write raw bytes to `rel`, creating parent directories.
    pub fn write_bytes(&self, rel: &str, contents: &[u8]) -> Result<()> {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))
    }

    pub fn read_bytes(&self, rel: &str) -> Result<Vec<u8>> {
        let path = self.path(rel);
        fs::read(&path).with_context(|| format!("read {}", path.display()))
    }

    pub fn read(&self, rel: &str) -> Result<String> {
        let path = self.path(rel);
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    /// Stage everything so it shows up in `git ls-files`.
    pub fn add_all(&self) -> Result<()> {
        self.git(&["add", "-A"])
    }

    fn git(&self, args: &[&str]) -> Result<()> {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.root())
            .output()
            .with_context(|| format!("spawn git {}", args.join(" ")))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("git {} failed: {}", args.join(" "), stderr.trim()));
        }
        Ok(())
    }
}

/// Minimal component source referencing `template_url`.
pub fn component_source(class_name: &str, template_url: &str) -> String {
    format!(
        "import {{ Component }} from \"@angular/core\";\n\n\
         @Component({{\n  selector: \"app-{}\",\n  templateUrl: \"{template_url}\",\n}})\n\
         export class {class_name} {{}}\n",
        class_name.to_lowercase()
    )
}
