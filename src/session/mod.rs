// Session module
// Message log, turn state machine and clear/reset for one chat session

mod chat;
mod conversation;

pub use chat::{ChatSession, PendingTurn, SessionError, TurnOutcome, TurnState};
pub use conversation::{ConversationHistory, Message, Sender, GREETING};
