//! The generation pipeline: diff in, exactly one output action out.

use std::path::Path;

use anyhow::{Context, Result};
use semver::Version;

use crate::cli::InvocationConfig;
use crate::error::VersionError;
use crate::git::{self, DiffScope};
use crate::model::ModelClient;
use crate::prompt;
use crate::version::{BumpKind, BumpMode, choose_bump, run_bump_in};

/// Run the configured pipeline and return the process exit code.
///
/// Exactly one of {print, commit, dry-run preview} happens per run; the
/// commit paths mirror the `git commit` subprocess exit code.
pub async fn run(config: InvocationConfig) -> Result<i32> {
    let client = ModelClient::from_env();
    run_in(&config, None, &client, choose_bump).await
}

/// Pipeline body with explicit seams for the working directory, the model
/// client, and the bump choice.
pub(crate) async fn run_in(
    config: &InvocationConfig,
    repo_dir: Option<&Path>,
    client: &ModelClient,
    chooser: impl Fn(&Version) -> Result<Option<BumpKind>, VersionError>,
) -> Result<i32> {
    let root = repo_dir.unwrap_or(Path::new("."));

    // --dry-run --bump previews the version bump and stops, no generation
    if config.dry_run && config.bump_version {
        run_bump_in(root, BumpMode::Preview, &chooser)
            .await
            .context("Version bump failed")?;
        return Ok(0);
    }

    git::check_git_installed().await?;

    let scope = DiffScope::from_target(config.target_commit.clone());
    let diff = git::collect_diff(repo_dir, &scope)
        .await
        .context("Failed to collect diff")?;

    if diff.is_empty() {
        println!("No changes detected");
        return Ok(0);
    }

    println!("Loading {}...", config.model_name);

    let project_context = prompt::load_project_context(root);
    let conversation = prompt::assemble(&diff, project_context.as_deref());

    println!("Generating commit message...");
    let result = client
        .complete(&config.model_name, &conversation)
        .await
        .context("Failed to generate commit message")?;

    if config.dry_run {
        println!("{}", result.text);
        return Ok(0);
    }

    if config.bump_version {
        run_bump_in(root, BumpMode::Apply, &chooser)
            .await
            .context("Version bump failed")?;
    }

    let code = git::commit_with_editor(repo_dir, &result.text)
        .await
        .context("Failed to open the commit editor")?;

    Ok(code)
}
