//! Deterministic, pure logic shared by the migrator.
//!
//! Core modules must be free of I/O side effects. They operate on strings and
//! return deterministic outputs suitable for tests.

pub mod paths;
pub mod status;
pub mod template_url;
