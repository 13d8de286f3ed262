// User-friendly error messages
//
// Helpers that turn configuration and data-file failures into actionable
// messages for the terminal.

use anyhow::{Context, Result};
use std::fmt;

/// Wrap an error with user-friendly context
pub trait UserFriendlyError {
    /// Add user-friendly context to this error
    fn user_context(self, message: &str) -> Self;

    /// Add user-friendly context with a suggestion
    fn user_context_with_suggestion(self, problem: &str, suggestion: &str) -> Self;
}

impl<T> UserFriendlyError for Result<T> {
    fn user_context(self, message: &str) -> Self {
        self.with_context(|| message.to_string())
    }

    fn user_context_with_suggestion(self, problem: &str, suggestion: &str) -> Self {
        self.with_context(|| {
            format!(
                "{}\n\n\x1b[1;33mSuggestion:\x1b[0m {}",
                problem, suggestion
            )
        })
    }
}

/// Format a config parse error with helpful suggestions
pub fn config_parse_error(error: &str) -> String {
    format!(
        "Failed to parse config file\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check config file syntax:\n\
           \x1b[36mcat ~/.carebot/config.toml\x1b[0m\n\n\
        2. Common mistakes:\n\
           • Missing quotes around strings\n\
           • Numbers written as strings (typing_delay_ms = 1000)\n\
           • Unknown value types for seed (must be an integer)",
        error
    )
}

/// Format a file not found error with helpful suggestions
pub fn file_not_found_error(path: &str, description: &str) -> String {
    format!(
        "{} not found: {}\n\n\
        \x1b[1;33mPossible causes:\x1b[0m\n\
        • File has been moved or deleted\n\
        • Wrong path in ~/.carebot/config.toml\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check if file exists:\n\
           \x1b[36mls -la {}\x1b[0m\n\n\
        2. Remove the setting to use the built-in data",
        description, path, path
    )
}

/// Format a knowledge base loading error with helpful suggestions
pub fn knowledge_load_error(path: &str, error: impl fmt::Display) -> String {
    format!(
        "Failed to load knowledge base '{}'\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. The file must be a JSON array of entries:\n\
           \x1b[36m[{{\"id\": \"...\", \"topic\": \"...\", \"content\": \"...\", \"tags\": [\"...\"]}}]\x1b[0m\n\n\
        2. Every id must be unique and the array must not be empty",
        path, error
    )
}
