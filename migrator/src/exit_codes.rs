//! Stable exit codes for the migrator binary.

/// Every candidate was processed (whatever its status).
pub const OK: i32 = 0;
/// Tracked files could not be enumerated, or another fatal error occurred.
pub const FATAL: i32 = 1;
