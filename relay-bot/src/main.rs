//! relay-bot: entry point. `run` starts the Telegram bot; `ask` is a one-shot completion smoke test.

use anyhow::Result;
use clap::Parser;
use relay_bot::{ask_once, run_bot_with_llm, BotConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot_with_llm(config).await
        }
        Commands::Ask { text } => {
            let reply = ask_once(&text.join(" ")).await?;
            println!("{}", reply);
            Ok(())
        }
    }
}
