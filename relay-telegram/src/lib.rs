//! # relay-telegram
//!
//! Telegram transport layer: teloxide → core adapters, a [`relay_core::Bot`] implementation,
//! connection config and the REPL runner that feeds every update into a [`handler_chain::HandlerChain`].
//! No completion logic lives here.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::{log_file_from_env, TelegramConfig};
pub use runner::{register_commands, run_repl};
