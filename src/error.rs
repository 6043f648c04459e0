//! Error types for epigraph modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from git subprocess operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git not found on PATH. Install git and make sure it is on your PATH")]
    NotInstalled,

    #[error("Failed to spawn git: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git diff failed: {stderr}")]
    DiffFailed { stderr: String },

    #[error("Failed to stage '{path}': {stderr}")]
    StageFailed { path: String, stderr: String },
}

/// Errors from the model endpoint.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error(
        "Could not reach the model endpoint at {base_url}: {source}. Is the LM Studio server running?"
    )]
    RequestFailed {
        base_url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Model endpoint returned {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Failed to decode model response: {0}")]
    DecodeFailed(#[source] reqwest::Error),

    #[error("Model returned no completion choices")]
    EmptyResponse,
}

/// Errors from version manifest operations.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Failed to read manifest '{path}': {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest '{path}': {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    #[error("No [package].version field found in '{path}'")]
    MissingVersion { path: PathBuf },

    #[error("Failed to parse version '{0}': {1}")]
    InvalidVersion(String, #[source] semver::Error),

    #[error("Failed to write manifest '{path}': {reason}")]
    ManifestWrite { path: PathBuf, reason: String },

    #[error("Bump prompt cancelled")]
    Cancelled,

    #[error(transparent)]
    Git(#[from] GitError),
}
