//! One colored status line per candidate.

use std::io::Write;

use anyhow::{Context, Result};

use crate::core::paths::derive_paths;
use crate::core::status::{Color, Status};

/// Width of the status code column.
pub const CODE_WIDTH: usize = 9;

/// Render `<color> <CODE     > <reset> <name>` for `ts_path`.
pub fn format_status_line(status: Status, ts_path: &str) -> String {
    let paths = derive_paths(ts_path);
    format!(
        "{} {:<width$} {} {}",
        status.color(),
        status.code(),
        Color::Reset,
        paths.ts_name,
        width = CODE_WIDTH
    )
}

pub fn write_status_line<W: Write>(out: &mut W, status: Status, ts_path: &str) -> Result<()> {
    writeln!(out, "{}", format_status_line(status, ts_path)).context("write status line")
}
