//! Companion path derivation for component files.
//!
//! All paths are git-style strings (`/`-separated, relative to the work tree
//! root). Nothing here touches the filesystem.

/// Suffix that marks a component definition file.
pub const COMPONENT_TS_SUFFIX: &str = ".component.ts";
/// Legacy template suffix being phased out.
pub const TPL_HTML_SUFFIX: &str = ".tpl.html";
/// Template suffix that replaces [`TPL_HTML_SUFFIX`].
pub const COMPONENT_HTML_SUFFIX: &str = ".component.html";

const CURRENT_DIR_PREFIX: &str = "./";

/// Paths derived from a single `*.component.ts` candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSet {
    /// `src/foo.tpl.html`
    pub old_html_full: String,
    /// `./foo.tpl.html`, as written in `templateUrl`.
    pub old_html_relative: String,
    /// `src/foo.component.html`
    pub new_html_full: String,
    /// `./foo.component.html`
    pub new_html_relative: String,
    /// `foo.component.ts`
    pub ts_name: String,
}

/// Derive the companion template paths for `ts_path`.
///
/// A path without the component suffix is left as-is in the full forms.
pub fn derive_paths(ts_path: &str) -> PathSet {
    let new_html_full = replace_suffix(ts_path, COMPONENT_HTML_SUFFIX);
    let old_html_full = replace_suffix(ts_path, TPL_HTML_SUFFIX);
    let new_html_relative = relative_to_sibling(&new_html_full);
    let old_html_relative = relative_to_sibling(&old_html_full);

    PathSet {
        old_html_full,
        old_html_relative,
        new_html_full,
        new_html_relative,
        ts_name: file_name(ts_path).to_string(),
    }
}

/// Prefix `value` with `./` (used to normalize `templateUrl` spellings).
pub fn with_current_dir(value: &str) -> String {
    format!("{CURRENT_DIR_PREFIX}{value}")
}

fn replace_suffix(ts_path: &str, suffix: &str) -> String {
    match ts_path.strip_suffix(COMPONENT_TS_SUFFIX) {
        Some(stem) => format!("{stem}{suffix}"),
        None => ts_path.to_string(),
    }
}

fn relative_to_sibling(full: &str) -> String {
    with_current_dir(file_name(full))
}

fn file_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_paths_for_nested_component() {
        let paths = derive_paths("src/app/foo.component.ts");
        assert_eq!(
            paths,
            PathSet {
                old_html_full: "src/app/foo.tpl.html".to_string(),
                old_html_relative: "./foo.tpl.html".to_string(),
                new_html_full: "src/app/foo.component.html".to_string(),
                new_html_relative: "./foo.component.html".to_string(),
                ts_name: "foo.component.ts".to_string(),
            }
        );
    }

    #[test]
    fn derive_paths_at_repo_root() {
        let paths = derive_paths("foo.component.ts");
        assert_eq!(paths.old_html_full, "foo.tpl.html");
        assert_eq!(paths.new_html_relative, "./foo.component.html");
        assert_eq!(paths.ts_name, "foo.component.ts");
    }

    #[test]
    fn derive_paths_is_repeatable() {
        let path = "libs/ui/button.component.ts";
        assert_eq!(derive_paths(path), derive_paths(path));
    }

    #[test]
    fn only_trailing_suffix_is_replaced() {
        let paths = derive_paths("src/x.component.ts/y.component.ts");
        assert_eq!(paths.new_html_full, "src/x.component.ts/y.component.html");
        assert_eq!(paths.old_html_full, "src/x.component.ts/y.tpl.html");
    }

    #[test]
    fn path_without_suffix_is_left_unchanged() {
        let paths = derive_paths("src/readme.md");
        assert_eq!(paths.new_html_full, "src/readme.md");
        assert_eq!(paths.old_html_relative, "./readme.md");
    }
}
