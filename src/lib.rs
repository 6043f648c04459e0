//! epigraph - A CLI tool that writes commit messages from git diffs using a
//! locally hosted LLM.
//!
//! # Overview
//!
//! epigraph collects the staged diff (or the diff introduced by a specific
//! commit), assembles a fixed prompt around it, asks a local LM Studio
//! compatible endpoint for a commit message, and then either prints the
//! message, previews it, or opens an interactive `git commit` pre-filled
//! with it, optionally bumping the package version first.

pub mod cli;
pub mod error;
pub mod git;
pub mod model;
pub mod pipeline;
pub mod prompt;
pub mod version;

// Re-export commonly used types
pub use cli::InvocationConfig;
pub use error::{GitError, ModelError, VersionError};
pub use model::GenerationResult;
pub use prompt::{Conversation, Message, Role};
pub use version::BumpKind;
