//! Git operations via the system `git` binary.
//!
//! Everything shells out to `git` with fixed argument forms, inheriting the
//! user's existing git config and editor.

pub mod commit;
pub mod diff;

pub use commit::{commit_with_editor, stage_file};
pub use diff::{DiffScope, collect_diff};

use crate::error::GitError;

/// Check that the `git` binary is installed and runnable.
///
/// Uses the `which` crate for cross-platform executable detection, then
/// verifies the binary actually runs.
pub async fn check_git_installed() -> Result<(), GitError> {
    if which::which("git").is_err() {
        return Err(GitError::NotInstalled);
    }

    let version_check = tokio::process::Command::new("git")
        .arg("--version")
        .output()
        .await
        .map_err(GitError::SpawnFailed)?;

    if !version_check.status.success() {
        return Err(GitError::NotInstalled);
    }

    Ok(())
}
