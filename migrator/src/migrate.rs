//! Per-candidate migration and the batch driver.
//!
//! Each candidate goes through ordered guards; the first that matches decides
//! its [`Status`]. Only a candidate that passes every guard is mutated:
//!
//! 1. `foo.component.html` exists → [`Status::Noop`]
//! 2. no `templateUrl: "..."` → [`Status::NoTemplateUrlFound`]
//! 3. `templateUrl` is not `foo.tpl.html` / `./foo.tpl.html` → [`Status::UnexpectedTemplateUrl`]
//! 4. `foo.tpl.html` missing → [`Status::NoTemplate`]
//! 5. rewrite `templateUrl`, then rename the template → [`Status::Ok`]
//!
//! The rewrite and the rename are separate filesystem calls; an interruption
//! between them leaves the component pointing at a not-yet-renamed template.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, error, info, instrument};

use crate::core::paths::derive_paths;
use crate::core::status::Status;
use crate::core::template_url::{find_template_url, is_expected_template_url, rewrite_template_url};
use crate::discover::discover_candidates;
use crate::io::git::Git;
use crate::report::write_status_line;

/// Driver options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrateOptions {
    /// Process only the first discovered candidate (debugging aid).
    pub just_one: bool,
}

/// What happened to one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOutcome {
    Classified(Status),
    /// An I/O error interrupted the candidate; holds the error chain.
    Failed(String),
}

/// Outcomes of a run, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationSummary {
    pub entries: Vec<(String, CandidateOutcome)>,
}

impl MigrationSummary {
    /// Number of candidates interrupted by an I/O error.
    pub fn failed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, outcome)| matches!(outcome, CandidateOutcome::Failed(_)))
            .count()
    }

    #[cfg(test)]
    pub fn status_of(&self, ts_path: &str) -> Option<&CandidateOutcome> {
        self.entries
            .iter()
            .find(|(path, _)| path == ts_path)
            .map(|(_, outcome)| outcome)
    }
}

/// Migrate a single component at `ts_path` (relative to `root`).
///
/// Skips are `Ok(status)`. Source bytes need not be UTF-8. `Err` only for I/O
/// failures (unreadable candidate, failed write or rename).
#[instrument(skip_all, fields(candidate = ts_path))]
pub fn migrate_candidate(root: &Path, ts_path: &str) -> Result<Status> {
    let paths = derive_paths(ts_path);

    let new_html = root.join(&paths.new_html_full);
    if new_html.exists() {
        debug!(new_html = %paths.new_html_full, "new template already exists");
        return Ok(Status::Noop);
    }

    let ts_file = root.join(ts_path);
    let contents = fs::read(&ts_file).with_context(|| format!("read {}", ts_file.display()))?;
    let Some(found) = find_template_url(&contents) else {
        debug!("no templateUrl found");
        return Ok(Status::NoTemplateUrlFound);
    };

    if !is_expected_template_url(found.value, &paths.old_html_relative) {
        debug!(
            template_url = %String::from_utf8_lossy(found.value),
            expected = %paths.old_html_relative,
            "unexpected templateUrl"
        );
        return Ok(Status::UnexpectedTemplateUrl);
    }

    let old_html = root.join(&paths.old_html_full);
    if !old_html.exists() {
        debug!(old_html = %paths.old_html_full, "legacy template missing");
        return Ok(Status::NoTemplate);
    }

    let rewritten = rewrite_template_url(&contents, &found, &paths.new_html_relative);
    fs::write(&ts_file, rewritten).with_context(|| format!("write {}", ts_file.display()))?;
    fs::rename(&old_html, &new_html)
        .with_context(|| format!("rename {} to {}", old_html.display(), new_html.display()))?;
    info!(from = %paths.old_html_full, to = %paths.new_html_full, "migrated template");
    Ok(Status::Ok)
}

/// Discover candidates under `root`, migrate each, and report to `out`.
///
/// Only discovery (and writing the report) can fail the run. A candidate whose
/// write or rename fails after its guards passed is logged at `error`, gets no
/// report line, and the run moves on.
pub fn run_migration<W: Write>(
    root: &Path,
    options: &MigrateOptions,
    out: &mut W,
) -> Result<MigrationSummary> {
    let git = Git::new(root);
    let candidates = discover_candidates(&git, options.just_one)?;

    let mut summary = MigrationSummary::default();
    for ts_path in candidates {
        let outcome = match migrate_candidate(root, &ts_path) {
            Ok(status) => {
                write_status_line(out, status, &ts_path)?;
                CandidateOutcome::Classified(status)
            }
            Err(err) => {
                let message = format!("{err:#}");
                error!(candidate = %ts_path, err = %message, "candidate migration failed");
                CandidateOutcome::Failed(message)
            }
        };
        summary.entries.push((ts_path, outcome));
    }
    Ok(summary)
}
