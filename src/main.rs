// Carebot - rule-based mental health support assistant
// Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use carebot::cli::{helpline_notice, Repl};
use carebot::config::{load_config, Config};
use carebot::errors::UserFriendlyError;
use carebot::session::ChatSession;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "carebot")]
#[command(about = "Rule-based mental health support assistant", version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file (default: ~/.carebot/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reply immediately instead of pausing to "type"
    #[arg(long = "no-delay", global = true)]
    no_delay: bool,

    /// Seed for opener/follow-up selection
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive chat (default)
    Chat,
    /// Answer a single message in a fresh session
    Query {
        /// Message text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Print the full turn outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the mental health helpline
    Helpline,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref()).user_context_with_suggestion(
        "Could not load configuration",
        "pass --config <path> or fix ~/.carebot/config.toml",
    )?;
    apply_overrides(&mut config, &args);

    init_tracing(config.debug_logging);

    match args.command.unwrap_or(Command::Chat) {
        Command::Chat => {
            let session = ChatSession::from_config(&config)?;
            tracing::info!(session = %session.id(), "Starting chat session");
            Repl::new(config, session).run().await
        }
        Command::Query { text, json } => run_query(&config, &text.join(" "), json).await,
        Command::Helpline => {
            println!("{}", helpline_notice(&config));
            Ok(())
        }
    }
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if args.no_delay {
        config.typing_delay_ms = 0;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
}

async fn run_query(config: &Config, text: &str, json: bool) -> Result<()> {
    let mut session = ChatSession::from_config(config)?;

    match session.submit(text).await? {
        Some(outcome) if json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        Some(outcome) => println!("{}", outcome.reply),
        None => eprintln!("Nothing to answer: the message was empty"),
    }

    Ok(())
}

fn init_tracing(debug_logging: bool) {
    let show_debug = debug_logging
        || std::env::var("CAREBOT_DEBUG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

    // Default: WARN so the chat stays readable; RUST_LOG overrides unless debug is forced
    let env_filter = if show_debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Bridge log crate → tracing (rustyline logs through `log`)
    tracing_log::LogTracer::init().ok();
}
