//! I/O helpers for the migrator.

pub mod git;
