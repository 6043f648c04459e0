//! Diff collection by shelling out to `git diff`.

use std::path::Path;

use tokio::process::Command;

use crate::error::GitError;

/// Which diff the pipeline operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffScope {
    /// Diff between the index and HEAD (the staged change set).
    Staged,
    /// Diff introduced by the named commit (its parent against itself).
    Commit(String),
}

impl DiffScope {
    /// Derive the scope from an optional `--commit=` value.
    pub fn from_target(target: Option<String>) -> Self {
        match target {
            Some(hash) => DiffScope::Commit(hash),
            None => DiffScope::Staged,
        }
    }
}

/// Build the fixed `git diff` argument list for a scope.
///
/// Minimal form, no color, no external diff driver, pager disabled.
fn diff_args(scope: &DiffScope) -> Vec<String> {
    let mut args: Vec<String> = [
        "--no-pager",
        "diff",
        "--no-color",
        "--no-ext-diff",
        "--minimal",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    match scope {
        DiffScope::Staged => args.push("--cached".to_string()),
        DiffScope::Commit(hash) => {
            args.push(format!("{hash}^"));
            args.push(hash.clone());
        }
    }

    args
}

/// Collect the diff text for a scope.
///
/// Runs git in `repo_dir`, or the current directory when `None`. A nonzero
/// exit or any stderr output is fatal. An empty diff is not an error;
/// callers treat empty stdout as a clean halt.
pub async fn collect_diff(repo_dir: Option<&Path>, scope: &DiffScope) -> Result<String, GitError> {
    let mut command = Command::new("git");
    command.args(diff_args(scope));
    if let Some(dir) = repo_dir {
        command.current_dir(dir);
    }

    let output = command.output().await.map_err(GitError::SpawnFailed)?;

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if !output.status.success() || !stderr.is_empty() {
        return Err(GitError::DiffFailed { stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command as StdCommand;

    #[test]
    fn test_diff_args_staged() {
        let args = diff_args(&DiffScope::Staged);
        assert_eq!(
            args,
            vec![
                "--no-pager",
                "diff",
                "--no-color",
                "--no-ext-diff",
                "--minimal",
                "--cached"
            ]
        );
    }

    #[test]
    fn test_diff_args_commit() {
        let args = diff_args(&DiffScope::Commit("abc123".to_string()));
        assert_eq!(args[args.len() - 2], "abc123^");
        assert_eq!(args[args.len() - 1], "abc123");
    }

    #[test]
    fn test_scope_from_target() {
        assert_eq!(DiffScope::from_target(None), DiffScope::Staged);
        assert_eq!(
            DiffScope::from_target(Some("abc".to_string())),
            DiffScope::Commit("abc".to_string())
        );
    }

    /// Set up a git repo with one committed file in a temp dir.
    fn init_repo(dir: &Path) {
        let git = |args: &[&str]| {
            let status = StdCommand::new("git")
                .args(args)
                .current_dir(dir)
                .output()
                .unwrap();
            assert!(status.status.success(), "git {args:?} failed");
        };

        git(&["init", "-q"]);
        git(&["config", "user.name", "Test"]);
        git(&["config", "user.email", "test@test.com"]);
        std::fs::write(dir.join("file.txt"), "original\n").unwrap();
        git(&["add", "file.txt"]);
        git(&["commit", "-q", "-m", "init"]);
    }

    #[tokio::test]
    async fn test_staged_diff_empty_when_nothing_staged() {
        let dir = tempfile::tempdir().unwrap();
        init_repo(dir.path());

        let diff = collect_diff(Some(dir.path()), &DiffScope::Staged)
            .await
            .unwrap();
        assert!(diff.is_empty());
    }

    #[tokio::test]
    async fn test_staged_diff_contains_staged_change() {
        let dir = tempfile::tempdir().unwrap();
        init_repo(dir.path());

        std::fs::write(dir.path().join("file.txt"), "modified\n").unwrap();
        let status = StdCommand::new("git")
            .args(["add", "file.txt"])
            .current_dir(dir.path())
            .output()
            .unwrap();
        assert!(status.status.success());

        let diff = collect_diff(Some(dir.path()), &DiffScope::Staged)
            .await
            .unwrap();
        assert!(diff.contains("-original"));
        assert!(diff.contains("+modified"));
    }

    #[tokio::test]
    async fn test_unknown_commit_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        init_repo(dir.path());

        let result = collect_diff(
            Some(dir.path()),
            &DiffScope::Commit("deadbeef".to_string()),
        )
        .await;
        assert!(matches!(result, Err(GitError::DiffFailed { .. })));
    }
}
