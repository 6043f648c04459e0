//! Optional project description context.

use std::path::Path;

use tracing::debug;

/// Fixed name of the project description file at the repository root.
pub const CONTEXT_FILE: &str = "README.md";

/// Read the project description file under `root`, if present and non-empty.
///
/// Absence or unreadability is not an error; the pipeline simply proceeds
/// without context.
pub fn load_project_context(root: &Path) -> Option<String> {
    let path = root.join(CONTEXT_FILE);
    match std::fs::read_to_string(&path) {
        Ok(content) if !content.trim().is_empty() => Some(content),
        Ok(_) => {
            debug!("Context file '{}' is empty, skipping", path.display());
            None
        }
        Err(e) => {
            debug!("No readable context file '{}': {e}", path.display());
            None
        }
    }
}
