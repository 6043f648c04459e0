//! Conversation assembly: system prompt plus the diff-substituted user prompt.

use serde::Serialize;

use super::template::{DIFF_PLACEHOLDER, SYSTEM_PROMPT, USER_TEMPLATE};

/// Message role in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A role-tagged message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// The ordered two-message conversation sent to the model.
///
/// Constructed fresh per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Conversation {
    pub messages: Vec<Message>,
}

/// Build the conversation for a diff and optional project context.
///
/// The diff is substituted verbatim into the user template, no escaping or
/// re-encoding, so the model sees the literal patch. When context is present
/// the user message opens with the project-description framing.
pub fn assemble(diff: &str, context: Option<&str>) -> Conversation {
    let user_prompt = USER_TEMPLATE.replace(DIFF_PLACEHOLDER, diff);

    let user_prompt = match context {
        Some(description) => format!(
            "Here is the description of the project which you will create the git commit message for:\n\n{description}\n\n---\n\n{user_prompt}"
        ),
        None => user_prompt,
    };

    Conversation {
        messages: vec![
            Message {
                role: Role::System,
                content: SYSTEM_PROMPT.to_string(),
            },
            Message {
                role: Role::User,
                content: user_prompt,
            },
        ],
    }
}
