//! Locating and rewriting the `templateUrl: "..."` reference in component source.
//!
//! Sources are handled as raw bytes: a component with stray non-UTF-8 bytes is
//! still classified, and everything outside the match is written back untouched.

use std::ops::Range;
use std::sync::LazyLock;

use regex::bytes::Regex;

use crate::core::paths::with_current_dir;

static TEMPLATE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"templateUrl: "([^"]*)""#).expect("valid templateUrl regex"));

/// First `templateUrl: "..."` occurrence in a component source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateUrl<'a> {
    /// Byte range of the whole `templateUrl: "..."` match.
    pub span: Range<usize>,
    /// Quoted value, without the quotes.
    pub value: &'a [u8],
}

/// Find the first `templateUrl: "..."` in `contents`.
pub fn find_template_url(contents: &[u8]) -> Option<TemplateUrl<'_>> {
    let caps = TEMPLATE_URL_RE.captures(contents)?;
    let whole = caps.get(0)?;
    let value = caps.get(1)?;
    Some(TemplateUrl {
        span: whole.range(),
        value: value.as_bytes(),
    })
}

/// True if `value` names `expected_relative` (`./foo.tpl.html`), with or without `./`.
pub fn is_expected_template_url(value: &[u8], expected_relative: &str) -> bool {
    if value == expected_relative.as_bytes() {
        return true;
    }
    match std::str::from_utf8(value) {
        Ok(value) => with_current_dir(value) == expected_relative,
        Err(_) => false,
    }
}

/// Replace the matched reference with `templateUrl: "<new_relative>"`.
///
/// Bytes outside `found.span` are kept as-is.
pub fn rewrite_template_url(
    contents: &[u8],
    found: &TemplateUrl<'_>,
    new_relative: &str,
) -> Vec<u8> {
    let replacement = format!("templateUrl: \"{new_relative}\"");
    let mut out = Vec::with_capacity(contents.len() + replacement.len());
    out.extend_from_slice(&contents[..found.span.start]);
    out.extend_from_slice(replacement.as_bytes());
    out.extend_from_slice(&contents[found.span.end..]);
    out
}
