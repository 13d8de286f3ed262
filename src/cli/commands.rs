// Slash command parsing

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Clear,
    History,
    Context,
    Prompts,
    Helpline,
    /// Submit the n-th suggested prompt (1-based)
    Suggestion(usize),
}

impl Command {
    /// Parse a slash command; `None` for anything unrecognised
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();

        match trimmed {
            "/help" | "/?" => return Some(Command::Help),
            "/quit" | "/exit" => return Some(Command::Quit),
            "/clear" | "/reset" => return Some(Command::Clear),
            "/history" => return Some(Command::History),
            "/context" => return Some(Command::Context),
            "/prompts" | "/suggestions" => return Some(Command::Prompts),
            "/helpline" | "/call" => return Some(Command::Helpline),
            _ => {}
        }

        if let Some(rest) = trimmed.strip_prefix('/') {
            if let Ok(n) = rest.parse::<usize>() {
                if n > 0 {
                    return Some(Command::Suggestion(n));
                }
            }
        }

        None
    }
}

pub fn help_text() -> String {
    [
        "Available commands:",
        "  /help      - Show this help message",
        "  /exit      - Exit the chat",
        "  /clear     - Clear conversation history",
        "  /history   - Show conversation history",
        "  /context   - Show tracked topics, sentiments and urgency",
        "  /prompts   - Show suggested prompts",
        "  /<n>       - Send suggested prompt number n",
        "  /helpline  - Show the mental health helpline",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("/help"), Some(Command::Help));
        assert_eq!(Command::parse("  /exit "), Some(Command::Quit));
        assert_eq!(Command::parse("/reset"), Some(Command::Clear));
        assert_eq!(Command::parse("/call"), Some(Command::Helpline));
    }

    #[test]
    fn test_parse_suggestion_index() {
        assert_eq!(Command::parse("/2"), Some(Command::Suggestion(2)));
        assert_eq!(Command::parse("/0"), None);
        assert_eq!(Command::parse("/-1"), None);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(Command::parse("/dance"), None);
        assert_eq!(Command::parse("hello"), None);
    }

    #[test]
    fn test_help_lists_commands() {
        let help = help_text();
        assert!(help.contains("/clear"));
        assert!(help.contains("/helpline"));
    }
}
