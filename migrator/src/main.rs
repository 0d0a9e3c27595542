//! Rename `*.tpl.html` templates to `*.component.html`.
//!
//! Run from the root of a git work tree. Every tracked `*.component.ts` whose
//! `templateUrl` points at its sibling `*.tpl.html` gets the reference
//! rewritten and the template renamed; every candidate gets one status line.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use migrator::exit_codes;
use migrator::logging;
use migrator::migrate::{MigrateOptions, run_migration};
use tracing::warn;

/// Stop after the first candidate.
const DEBUG_JUST_ONE: bool = false;

#[derive(Parser)]
#[command(
    name = "migrator",
    version,
    about = "Rename *.tpl.html templates to *.component.html and update templateUrl"
)]
struct Cli {}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FATAL);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse();
    let root = std::env::current_dir().context("resolve current directory")?;
    let options = MigrateOptions {
        just_one: DEBUG_JUST_ONE,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = run_migration(&root, &options, &mut out)?;
    let failed = summary.failed_count();
    if failed > 0 {
        warn!(failed, "some candidates could not be migrated; see errors above");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_args() {
        assert!(Cli::try_parse_from(["migrator"]).is_ok());
    }

    #[test]
    fn rejects_positional_args() {
        assert!(Cli::try_parse_from(["migrator", "src"]).is_err());
    }
}
