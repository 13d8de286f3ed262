// Conversation context module
// Monotonic topic/sentiment/urgency accumulation across a session

mod tracker;

pub use tracker::{ContextTracker, ConversationContext, Urgency};
