//! Source of "files with uncommitted changes" for the output guard.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use std::process::Command;

use crate::error::{DocsplitError, Result};

/// Anything that can report which paths have uncommitted changes.
pub trait ChangeSource {
    /// Paths relative to the project root.
    fn changed_paths(&self) -> Result<ChangedPaths>;
}

/// Set of changed paths, compared after dropping `.` components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedPaths {
    paths: BTreeSet<PathBuf>,
}

impl ChangedPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl AsRef<Path>) {
        self.paths.insert(normalize(path.as_ref()));
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(&normalize(path))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<P: AsRef<Path>> FromIterator<P> for ChangedPaths {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut changed = Self::new();
        for path in iter {
            changed.insert(path);
        }
        changed
    }
}

impl ChangeSource for ChangedPaths {
    fn changed_paths(&self) -> Result<ChangedPaths> {
        Ok(self.clone())
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Wrapper around `git diff --name-only -z`.
///
/// Both unstaged and staged edits count as changed: either way the work is
/// not committed yet. Names are NUL-separated so git never C-quotes them
/// (`core.quotePath` would turn `LÉEME.md` into `"L\303\211EME.md"`).
pub struct GitCli {
    binary: PathBuf,
    workdir: PathBuf,
}

impl GitCli {
    /// Create a wrapper rooted at `workdir`, verifying git is installed.
    pub fn new(workdir: &Path) -> Result<Self> {
        let binary = which::which("git").map_err(|_| DocsplitError::MissingTool {
            name: "git".into(),
            install: "https://git-scm.com/downloads".into(),
        })?;
        Ok(Self {
            binary,
            workdir: workdir.to_path_buf(),
        })
    }

    fn diff_names(&self, cached: bool) -> Result<Vec<String>> {
        let mut cmd = Command::new(&self.binary);
        cmd.args(["diff", "--name-only", "-z", "--relative"])
            .current_dir(&self.workdir);
        if cached {
            cmd.arg("--cached");
        }

        let output = cmd.output()?;
        if !output.status.success() {
            return Err(DocsplitError::Vcs(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(parse_name_only(&String::from_utf8_lossy(&output.stdout)))
    }
}

impl ChangeSource for GitCli {
    fn changed_paths(&self) -> Result<ChangedPaths> {
        let mut changed = ChangedPaths::new();
        for name in self.diff_names(false)?.into_iter().chain(self.diff_names(true)?) {
            changed.insert(name);
        }
        tracing::debug!(count = changed.len(), "uncommitted paths reported by git");
        Ok(changed)
    }
}

/// One path per NUL-terminated record.
fn parse_name_only(stdout: &str) -> Vec<String> {
    stdout
        .split('\0')
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git(dir: &Path, args: &[&str]) {
        let output = Command::new("git")
            .args(["-c", "user.name=docsplit", "-c", "user.email=docsplit@example.org"])
            .args(["-c", "commit.gpgsign=false"])
            .args(args)
            .current_dir(dir)
            .output()
            .unwrap();
        assert!(output.status.success(), "git {args:?} failed");
    }

    fn repo_with(files: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        git(dir.path(), &["init", "-q"]);
        for name in files {
            let path = dir.path().join(name);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, "committed\n").unwrap();
        }
        git(dir.path(), &["add", "-A"]);
        git(dir.path(), &["commit", "-q", "-m", "init"]);
        dir
    }

    #[test]
    fn test_parse_name_only() {
        let names = parse_name_only("README.md\0docs/index.md\0");
        assert_eq!(names, ["README.md", "docs/index.md"]);
        assert!(parse_name_only("").is_empty());
    }

    #[test]
    fn test_parse_name_only_keeps_unusual_names() {
        let names = parse_name_only("LÉEME.md\0with space.md\0");
        assert_eq!(names, ["LÉEME.md", "with space.md"]);
    }

    #[test]
    fn test_git_reports_unstaged_and_staged_edits() {
        let dir = repo_with(&["README.md", "index.md", "docs/other.md"]);
        std::fs::write(dir.path().join("README.md"), "hand edit\n").unwrap();
        std::fs::write(dir.path().join("index.md"), "staged edit\n").unwrap();
        git(dir.path(), &["add", "index.md"]);

        let changed = GitCli::new(dir.path()).unwrap().changed_paths().unwrap();
        assert!(changed.contains(Path::new("README.md")));
        assert!(changed.contains(Path::new("index.md")));
        assert!(!changed.contains(Path::new("docs/other.md")));
        assert_eq!(changed.len(), 2);
    }

    #[test]
    fn test_git_reports_non_ascii_names_unquoted() {
        let dir = repo_with(&["LÉEME.md"]);
        std::fs::write(dir.path().join("LÉEME.md"), "hand edit\n").unwrap();

        let changed = GitCli::new(dir.path()).unwrap().changed_paths().unwrap();
        assert!(changed.contains(Path::new("LÉEME.md")));
    }

    #[test]
    fn test_git_clean_tree_reports_nothing() {
        let dir = repo_with(&["README.md"]);
        let changed = GitCli::new(dir.path()).unwrap().changed_paths().unwrap();
        assert!(changed.is_empty());
    }

    #[test]
    fn test_git_outside_repository_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = GitCli::new(dir.path()).unwrap().changed_paths().unwrap_err();
        assert!(matches!(err, DocsplitError::Vcs(_)));
    }

    #[test]
    fn test_contains_ignores_leading_dot() {
        let changed: ChangedPaths = ["README.md", "./docs/index.md"].into_iter().collect();
        assert!(changed.contains(Path::new("./README.md")));
        assert!(changed.contains(Path::new("docs/index.md")));
        assert!(!changed.contains(Path::new("index.md")));
        assert_eq!(changed.len(), 2);
    }

    #[test]
    fn test_no_substring_matches() {
        // "README.md" must not match "docs/README.md" or "README.md.bak"
        let changed: ChangedPaths = ["docs/README.md", "README.md.bak"].into_iter().collect();
        assert!(!changed.contains(Path::new("README.md")));
    }

    #[test]
    fn test_changed_paths_is_a_change_source() {
        let changed: ChangedPaths = ["index.md"].into_iter().collect();
        assert_eq!(changed.changed_paths().unwrap(), changed);
    }
}
