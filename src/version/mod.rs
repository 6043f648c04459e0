//! Interactive version bumping over the project manifest.

pub mod bump;
pub mod manifest;

pub use bump::{BumpKind, apply_bump};
pub use manifest::{MANIFEST_FILE, Manifest};

use std::path::Path;

use dialoguer::Select;
use semver::Version;
use tracing::debug;

use crate::error::VersionError;
use crate::git::stage_file;

/// Whether the bump is previewed or applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpMode {
    /// Print the computed version, write nothing.
    Preview,
    /// Write the manifest and stage it for the next commit.
    Apply,
}

/// Bump the manifest under `root`, asking `chooser` which component to bump.
///
/// Returns the new version, or `None` when the choice is "None" (the bump is
/// abandoned silently, nothing written, nothing staged). Cancelling the
/// prompt terminates with an error before any write happens.
pub(crate) async fn run_bump_in<F>(
    root: &Path,
    mode: BumpMode,
    chooser: F,
) -> Result<Option<Version>, VersionError>
where
    F: FnOnce(&Version) -> Result<Option<BumpKind>, VersionError>,
{
    let mut manifest = Manifest::load_from(&root.join(MANIFEST_FILE))?;

    let Some(kind) = chooser(&manifest.version)? else {
        debug!("Bump abandoned, no choice made");
        return Ok(None);
    };

    let new_version = apply_bump(&manifest.version, kind);

    match mode {
        BumpMode::Preview => {
            println!("Would bump version to {new_version}");
        }
        BumpMode::Apply => {
            manifest.write_version(&new_version)?;
            stage_file(Some(root), MANIFEST_FILE).await?;
            println!("Bumped version to {new_version} and staged {MANIFEST_FILE}");
        }
    }

    Ok(Some(new_version))
}

/// One question, one enumerated answer.
pub(crate) fn choose_bump(current: &Version) -> Result<Option<BumpKind>, VersionError> {
    let choices = [
        BumpKind::Patch.as_str(),
        BumpKind::Minor.as_str(),
        BumpKind::Major.as_str(),
        "None",
    ];

    let selection = Select::new()
        .with_prompt(format!("Current version is {current}. Choose bump type"))
        .items(&choices)
        .default(0)
        .interact()
        .map_err(|_| VersionError::Cancelled)?;

    Ok(match selection {
        0 => Some(BumpKind::Patch),
        1 => Some(BumpKind::Minor),
        2 => Some(BumpKind::Major),
        _ => None,
    })
}
