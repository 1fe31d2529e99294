//! # relay_bot
//!
//! Wires the relay bot together: env config, completion client, `[CommandHandler, RelayHandler]`
//! chain and the Telegram REPL. **Public API:** [`run_bot_with_llm`], [`ask_once`] and [`BotConfig`].

mod assembly;
mod cli;
mod config;
mod facade;

pub use assembly::{build_handler_chain, build_llm_client};
pub use cli::{Cli, Commands};
pub use config::BotConfig;
pub use facade::{ask_once, run_bot_with_llm};
