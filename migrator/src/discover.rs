//! Candidate discovery from the git index.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::paths::COMPONENT_TS_SUFFIX;
use crate::io::git::Git;

/// Keep component files, in listing order.
pub fn filter_candidates(tracked: Vec<String>) -> Vec<String> {
    tracked
        .into_iter()
        .filter(|path| path.ends_with(COMPONENT_TS_SUFFIX))
        .collect()
}

/// List tracked `*.component.ts` files under `git`'s work tree.
///
/// With `just_one`, only the first candidate is returned.
pub fn discover_candidates(git: &Git, just_one: bool) -> Result<Vec<String>> {
    let tracked = git.ls_files().context("list tracked files")?;
    let mut candidates = filter_candidates(tracked);
    debug!(
        root = %git.workdir().display(),
        count = candidates.len(),
        "discovered candidates"
    );
    if just_one {
        candidates.truncate(1);
        info!("debug mode: processing only the first candidate");
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestRepo;

    #[test]
    fn filter_keeps_component_sources_in_order() {
        let tracked = vec![
            "b/bar.component.ts".to_string(),
            "a/foo.tpl.html".to_string(),
            "a/foo.component.ts".to_string(),
            "a/foo.component.spec.ts".to_string(),
            "a/foo.service.ts".to_string(),
        ];
        assert_eq!(
            filter_candidates(tracked),
            vec![
                "b/bar.component.ts".to_string(),
                "a/foo.component.ts".to_string()
            ]
        );
    }

    #[test]
    fn discover_lists_tracked_components() {
        let repo = TestRepo::new().expect("repo");
        repo.write("src/b.component.ts", "").expect("write");
        repo.write("src/a.component.ts", "").expect("write");
        repo.write("src/a.tpl.html", "").expect("write");
        repo.add_all().expect("git add");
        repo.write("src/untracked.component.ts", "").expect("write");

        let candidates = discover_candidates(&Git::new(repo.root()), false).expect("discover");
        assert_eq!(
            candidates,
            vec![
                "src/a.component.ts".to_string(),
                "src/b.component.ts".to_string()
            ]
        );
    }

    #[test]
    fn discover_just_one_truncates() {
        let repo = TestRepo::new().expect("repo");
        repo.write("a.component.ts", "").expect("write");
        repo.write("b.component.ts", "").expect("write");
        repo.add_all().expect("git add");

        let candidates = discover_candidates(&Git::new(repo.root()), true).expect("discover");
        assert_eq!(candidates, vec!["a.component.ts".to_string()]);
    }

    #[test]
    fn discover_just_one_with_no_candidates_is_empty() {
        let repo = TestRepo::new().expect("repo");
        repo.write("README.md", "").expect("write");
        repo.add_all().expect("git add");

        let candidates = discover_candidates(&Git::new(repo.root()), true).expect("discover");
        assert!(candidates.is_empty());
    }
}
