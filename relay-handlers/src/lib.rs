//! # relay-handlers
//!
//! Handlers for the relay chain: [`CommandHandler`] answers `/start` and `/help` with static
//! text; [`RelayHandler`] forwards every other text message to the completion API and sends the
//! reply back to the same chat, split into Telegram-sized chunks.

mod chunking;
mod command;
mod relay;

pub use chunking::{split_reply, TELEGRAM_MAX_MESSAGE_LEN};
pub use command::{help_text, start_text, Command, CommandHandler};
pub use relay::{FailureStyle, RelayHandler, FAILURE_NOTICE_PREFIX};
