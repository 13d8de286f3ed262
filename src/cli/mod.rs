// CLI module
// Terminal front end standing in for the chat screen

mod commands;
mod input;
mod repl;

pub use commands::{help_text, Command};
pub use input::InputHandler;
pub use repl::{helpline_notice, render_context, render_history, render_prompts, Repl};
