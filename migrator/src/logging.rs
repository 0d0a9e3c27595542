//! Development-time tracing for debugging the migrator.
//!
//! # Separation of Concerns
//!
//! - **Tracing (this module)**: Dev diagnostics via `RUST_LOG`, output to stderr.
//!   Guard decisions log at `debug`, renames at `info`, and a failed write or
//!   rename at `error`.
//!
//! - **Status report (`report`)**: The colored one-line-per-candidate report on
//!   stdout. Always written, unaffected by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset, which still shows
/// per-candidate failures. Output goes to stderr in compact format so the
/// stdout report stays clean.
///
/// # Example
/// ```bash
/// cd path/to/work-tree
/// RUST_LOG=migrator=debug migrator 2>migrator.log
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
