//! Staging and the interactive commit editor.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::error::GitError;

/// Stage a single file for inclusion in the next commit.
///
/// Runs git in `repo_dir`, or the current directory when `None`.
pub async fn stage_file(repo_dir: Option<&Path>, path: &str) -> Result<(), GitError> {
    let mut command = Command::new("git");
    command.args(["add", path]);
    if let Some(dir) = repo_dir {
        command.current_dir(dir);
    }

    let output = command.output().await.map_err(GitError::SpawnFailed)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(GitError::StageFailed {
            path: path.to_string(),
            stderr,
        });
    }

    Ok(())
}

/// Open the interactive commit editor pre-filled with a message.
///
/// Runs `git commit -e -m <message>` with inherited stdio so the user's
/// configured editor takes over the terminal. Returns the subprocess exit
/// code, which the caller mirrors as the process exit code.
pub async fn commit_with_editor(repo_dir: Option<&Path>, message: &str) -> Result<i32, GitError> {
    let mut command = Command::new("git");
    command
        .args(["commit", "-e", "-m", message])
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    if let Some(dir) = repo_dir {
        command.current_dir(dir);
    }

    let status = command.status().await.map_err(GitError::SpawnFailed)?;

    let code = status.code().unwrap_or(1);
    debug!("git commit exited with code {code}");
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stage_nonexistent_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let out = Command::new("git")
            .args(["init", "-q"])
            .current_dir(dir.path())
            .output()
            .await
            .unwrap();
        assert!(out.status.success());

        let result = stage_file(Some(dir.path()), "no-such-file.txt").await;
        match result {
            Err(GitError::StageFailed { path, .. }) => assert_eq!(path, "no-such-file.txt"),
            other => panic!("Expected StageFailed, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_stage_existing_file_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let out = Command::new("git")
            .args(["init", "-q"])
            .current_dir(dir.path())
            .output()
            .await
            .unwrap();
        assert!(out.status.success());

        std::fs::write(dir.path().join("file.txt"), "content\n").unwrap();
        stage_file(Some(dir.path()), "file.txt").await.unwrap();

        let staged = Command::new("git")
            .args(["diff", "--cached", "--name-only"])
            .current_dir(dir.path())
            .output()
            .await
            .unwrap();
        let names = String::from_utf8_lossy(&staged.stdout);
        assert!(names.contains("file.txt"));
    }
}
