//! One-shot template rename migration for component sources.
//!
//! Walks the git-tracked `*.component.ts` files of a work tree and moves each
//! legacy `foo.tpl.html` template to `foo.component.html`, rewriting the
//! component's `templateUrl` reference to match. The architecture keeps a
//! strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (path derivation, status codes,
//!   `templateUrl` matching and rewriting). No I/O.
//! - **[`io`]**: Side-effecting adapters (git subprocess calls).
//!
//! Orchestration modules ([`discover`], [`migrate`], [`report`]) combine core
//! logic with I/O to implement the `migrator` binary.

pub mod core;
pub mod discover;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod migrate;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
