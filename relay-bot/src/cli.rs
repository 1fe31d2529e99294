//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "relay-bot")]
#[command(
    about = "Telegram bot that answers every message with an AI completion",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Send one message to the completion API and print the reply (no Telegram).
    Ask {
        /// Text to send as the user turn.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}
