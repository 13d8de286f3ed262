// Interactive chat loop
//
// Stands in for the chat screen: reads user lines, runs turns, renders replies
// and suggested prompts.

use anyhow::Result;
use chrono::Local;
use std::io::{self, BufRead, IsTerminal, Write};

use super::commands::{help_text, Command};
use super::input::InputHandler;
use crate::config::Config;
use crate::context::{ConversationContext, Urgency};
use crate::session::{ChatSession, ConversationHistory, Sender, TurnOutcome};

pub struct Repl {
    config: Config,
    session: ChatSession,
    input_handler: Option<InputHandler>,
}

impl Repl {
    pub fn new(config: Config, session: ChatSession) -> Self {
        let input_handler = if io::stdin().is_terminal() {
            match InputHandler::new() {
                Ok(handler) => Some(handler),
                Err(e) => {
                    tracing::warn!("Failed to initialize input handler: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self {
            config,
            session,
            input_handler,
        }
    }

    /// Run the loop until /exit, Ctrl+D or end of piped input
    pub async fn run(mut self) -> Result<()> {
        let interactive = self.input_handler.is_some();

        if interactive {
            println!("\x1b[1mMental Health Assistant\x1b[0m  (type /help for commands)");
            println!("{}", helpline_footer(&self.config));
            println!();
            print_assistant(&self.session.conversation().messages()[0].text);
            print_prompts(self.session.suggestions());
        }

        let mut piped_lines = if interactive {
            None
        } else {
            Some(io::stdin().lock().lines())
        };

        loop {
            let line = match &mut self.input_handler {
                Some(handler) => match handler.read_line("you> ")? {
                    Some(line) => line,
                    None => break,
                },
                None => match piped_lines.as_mut().and_then(|lines| lines.next()) {
                    Some(line) => line?,
                    None => break,
                },
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with('/') {
                match Command::parse(line) {
                    Some(Command::Quit) => break,
                    Some(command) => self.handle_command(command, interactive).await,
                    None => {
                        eprintln!("Unknown command: {}", line);
                        eprintln!("Type /help for available commands");
                    }
                }
                continue;
            }

            self.run_turn(line, interactive).await;
        }

        if interactive {
            println!("Take care. Goodbye!");
        }
        Ok(())
    }

    async fn run_turn(&mut self, text: &str, interactive: bool) {
        if interactive {
            print!("\x1b[2massistant is typing...\x1b[0m");
            let _ = io::stdout().flush();
        }

        let result = self.session.submit(text).await;

        if interactive {
            // Erase the typing indicator
            print!("\r\x1b[2K");
        }

        match result {
            Ok(Some(outcome)) => self.render_outcome(&outcome, interactive),
            Ok(None) => {}
            Err(e) => eprintln!("{}", e),
        }
    }

    fn render_outcome(&self, outcome: &TurnOutcome, interactive: bool) {
        print_assistant(&outcome.reply);
        if interactive {
            if outcome.urgency == Urgency::High {
                println!("{}", helpline_footer(&self.config));
            }
            print_prompts(&outcome.suggestions);
        }
    }

    async fn handle_command(&mut self, command: Command, interactive: bool) {
        match command {
            Command::Help => println!("{}", help_text()),
            Command::Clear => {
                self.session.clear();
                println!("Chat cleared: your conversation history has been reset.");
                if interactive {
                    print_assistant(&self.session.conversation().messages()[0].text);
                    print_prompts(self.session.suggestions());
                }
            }
            Command::History => print!("{}", render_history(self.session.conversation())),
            Command::Context => println!("{}", render_context(self.session.context())),
            Command::Prompts => print_prompts(self.session.suggestions()),
            Command::Helpline => println!("{}", helpline_notice(&self.config)),
            Command::Suggestion(n) => {
                let prompt = self.session.suggestion(n).map(str::to_string);
                match prompt {
                    Some(prompt) => {
                        println!("you> {}", prompt);
                        self.run_turn(&prompt, interactive).await;
                    }
                    None => eprintln!("No suggested prompt #{}", n),
                }
            }
            Command::Quit => {}
        }
    }
}

fn print_assistant(text: &str) {
    println!("\x1b[36massistant>\x1b[0m {}", text);
    println!();
}

fn print_prompts(prompts: &[String]) {
    println!("{}", render_prompts(prompts));
}

/// Numbered list of suggested prompts
pub fn render_prompts(prompts: &[String]) -> String {
    let items: Vec<String> = prompts
        .iter()
        .enumerate()
        .map(|(i, p)| format!("[/{}] {}", i + 1, p))
        .collect();
    format!("\x1b[2mSuggestions: {}\x1b[0m", items.join("  "))
}

/// One line per message with a local HH:MM timestamp
pub fn render_history(conversation: &ConversationHistory) -> String {
    let mut out = format!(
        "Conversation history ({} messages, {} from you, {} answered):\n",
        conversation.message_count(),
        conversation.user_message_count(),
        conversation.turn_count()
    );
    for message in conversation.messages() {
        let who = match message.sender {
            Sender::User => "you",
            Sender::Assistant => "assistant",
        };
        let time = message.timestamp.with_timezone(&Local).format("%H:%M");
        let first_line = message.text.lines().next().unwrap_or("");
        out.push_str(&format!("  [{}] {}: {}\n", time, who, first_line));
    }
    out
}

pub fn render_context(context: &ConversationContext) -> String {
    let join = |set: &std::collections::BTreeSet<String>| {
        if set.is_empty() {
            "(none)".to_string()
        } else {
            set.iter().cloned().collect::<Vec<_>>().join(", ")
        }
    };

    format!(
        "Topics: {}\nSentiments: {}\nUrgency: {}",
        join(&context.topics),
        join(&context.sentiments),
        context.urgency
    )
}

fn helpline_footer(config: &Config) -> String {
    format!(
        "For immediate professional help, call our Mental Health Helpline: {}",
        config.helpline_number
    )
}

/// Informational only; nothing is dialled
pub fn helpline_notice(config: &Config) -> String {
    format!(
        "Connecting to Helpline: you'll be connected to a mental health professional shortly.\n\
         Call {} ({})",
        config.helpline_number, config.helpline_dial
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompts_numbered() {
        let prompts = vec!["a".to_string(), "b".to_string()];
        let text = render_prompts(&prompts);
        assert!(text.contains("[/1] a"));
        assert!(text.contains("[/2] b"));
    }

    #[test]
    fn test_render_history_lists_greeting() {
        let mut conv = ConversationHistory::new();
        conv.add_user_message("I can't sleep".to_string());
        let text = render_history(&conv);

        assert!(text.starts_with("Conversation history (2 messages, 1 from you, 0 answered):"));
        assert!(text.contains("assistant: Hello!"));
        assert!(text.contains("you: I can't sleep"));

        conv.add_assistant_message("Rest helps.".to_string());
        conv.add_user_message("thanks".to_string());
        assert!(render_history(&conv)
            .starts_with("Conversation history (4 messages, 2 from you, 1 answered):"));
    }

    #[test]
    fn test_render_context() {
        let mut ctx = ConversationContext::default();
        assert!(render_context(&ctx).contains("Topics: (none)"));

        ctx.topics.insert("sleep".to_string());
        ctx.topics.insert("grief".to_string());
        ctx.urgency = Urgency::Medium;
        let text = render_context(&ctx);
        assert!(text.contains("Topics: grief, sleep"));
        assert!(text.contains("Urgency: medium"));
    }

    #[test]
    fn test_helpline_notice_uses_config() {
        let config = Config::default();
        let text = helpline_notice(&config);
        assert!(text.contains("1800-121-3721"));
        assert!(text.contains("tel:18001213721"));
    }
}
