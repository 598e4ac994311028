//! Assistant conversation transcript.
//!
//! DESIGN
//! ======
//! The transcript is append-only: turns are never edited, reordered or
//! removed. At most one submission is pending at a time, so every assistant
//! reply directly follows the user turn that prompted it.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::error::NetworkError;
use crate::net::types::{ChatReply, ProductRef};

pub const ONBOARDING_MESSAGE: &str = "Hi! I'm your AI shopping assistant. Ask me anything about hair care, \
skin care, or wellness products. For example:\n\n\
• \"I'm losing hair, what can help?\"\n\
• \"What products are good for dandruff?\"\n\
• \"I want something for better sleep\"";
pub const EMPTY_REPLY_MESSAGE: &str = "No response received";
pub const FAILED_REPLY_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

/// Who authored a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
    pub recommendations: Vec<ProductRef>,
}

impl ChatTurn {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into(), recommendations: Vec::new() }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>, recommendations: Vec<ProductRef>) -> Self {
        Self { role: Role::Assistant, content: content.into(), recommendations }
    }
}

/// State for the assistant chat view.
#[derive(Clone, Debug)]
pub struct ChatState {
    turns: Vec<ChatTurn>,
    pending: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self { turns: vec![ChatTurn::assistant(ONBOARDING_MESSAGE, Vec::new())], pending: false }
    }
}

impl ChatState {
    #[must_use]
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// True while a submission awaits its reply.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether `text` would be accepted by [`ChatState::begin_submit`] right now.
    #[must_use]
    pub fn can_submit(&self, text: &str) -> bool {
        !self.pending && !text.trim().is_empty()
    }

    /// Append the user turn and mark a submission pending.
    ///
    /// Returns the trimmed message to send, or `None` (leaving the transcript
    /// untouched) when the text is blank or another submission is pending.
    pub fn begin_submit(&mut self, text: &str) -> Option<String> {
        if !self.can_submit(text) {
            return None;
        }
        let message = text.trim().to_owned();
        self.turns.push(ChatTurn::user(message.clone()));
        self.pending = true;
        Some(message)
    }

    /// Append the assistant turn for the pending submission and clear the
    /// pending flag. Failures become a fixed apology turn; an empty reply
    /// becomes a placeholder.
    ///
    /// Returns `false` without touching the transcript if nothing is pending.
    pub fn finish_submit(&mut self, result: Result<ChatReply, NetworkError>) -> bool {
        if !self.pending {
            return false;
        }
        let turn = match result {
            Ok(reply) => ChatTurn::assistant(
                reply.message.filter(|m| !m.is_empty()).unwrap_or_else(|| EMPTY_REPLY_MESSAGE.to_owned()),
                reply.recommendations,
            ),
            Err(_) => ChatTurn::assistant(FAILED_REPLY_MESSAGE, Vec::new()),
        };
        self.turns.push(turn);
        self.pending = false;
        true
    }
}
