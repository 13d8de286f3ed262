// Responder module
// Reply composition and quick-reply prompt suggestions

mod composer;
mod picker;
mod prompts;

pub use composer::{ResponseComposer, FOLLOW_UP_QUESTIONS, SUPPORTIVE_OPENERS};
pub use picker::{FixedPicker, PhrasePicker, RandomPicker, ScriptedPicker};
pub use prompts::{suggest, DEFAULT_PROMPTS};
