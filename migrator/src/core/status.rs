//! Per-candidate outcome codes and their report colors.

use std::fmt;

/// ANSI color used when printing a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Reset,
    Green,
    Yellow,
    Cyan,
}

impl Color {
    pub fn ansi(self) -> &'static str {
        match self {
            Color::Reset => "\x1b[0m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Cyan => "\x1b[36m",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ansi())
    }
}

/// Outcome of migrating one component.
///
/// Every variant except [`Status::Ok`] means the component was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Template renamed and `templateUrl` rewritten.
    Ok,
    /// `foo.component.html` already exists.
    Noop,
    /// No `templateUrl: "..."` in the component.
    NoTemplateUrlFound,
    /// `templateUrl` points somewhere other than `foo.tpl.html`.
    UnexpectedTemplateUrl,
    /// `templateUrl` is right but `foo.tpl.html` is missing on disk.
    NoTemplate,
}

impl Status {
    pub fn color(self) -> Color {
        match self {
            Status::Ok => Color::Green,
            Status::Noop => Color::Cyan,
            Status::NoTemplateUrlFound | Status::UnexpectedTemplateUrl | Status::NoTemplate => {
                Color::Yellow
            }
        }
    }

    /// Short code shown in the report column.
    pub fn code(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Noop => "NOOP",
            Status::NoTemplateUrlFound => "NOURL",
            Status::UnexpectedTemplateUrl => "WRONG",
            Status::NoTemplate => "MISSING",
        }
    }
}
