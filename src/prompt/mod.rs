//! Prompt templates, optional project context, and conversation assembly.

pub mod assemble;
pub mod context;
pub mod template;

pub use assemble::{Conversation, Message, Role, assemble};
pub use context::load_project_context;
pub use template::{DIFF_PLACEHOLDER, SYSTEM_PROMPT, USER_TEMPLATE};
