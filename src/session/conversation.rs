// Conversation log for a chat session

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seeded assistant message of a fresh or cleared conversation
pub const GREETING: &str = "Hello! I'm your mental health assistant. How can I help you today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Assistant,
            timestamp: Utc::now(),
        }
    }
}

/// Append-only message log.
///
/// Timestamps never go backwards: a message stamped earlier than the last one
/// takes the last one's timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationHistory {
    messages: Vec<Message>,
}

impl ConversationHistory {
    /// Create a conversation holding only the greeting
    pub fn new() -> Self {
        Self {
            messages: vec![Message::assistant(GREETING)],
        }
    }

    pub fn add_user_message(&mut self, text: String) {
        self.add_message(Message::user(text));
    }

    pub fn add_assistant_message(&mut self, text: String) {
        self.add_message(Message::assistant(text));
    }

    pub fn add_message(&mut self, mut message: Message) {
        if let Some(last) = self.messages.last() {
            if message.timestamp < last.timestamp {
                message.timestamp = last.timestamp;
            }
        }
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Reset to the single greeting
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn user_message_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.sender == Sender::User)
            .count()
    }

    /// Get number of complete turns (user message answered by the assistant)
    pub fn turn_count(&self) -> usize {
        self.messages
            .windows(2)
            .filter(|w| w[0].sender == Sender::User && w[1].sender == Sender::Assistant)
            .count()
    }
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new()
    }
}
