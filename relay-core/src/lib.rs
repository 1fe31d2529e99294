//! # relay-core
//!
//! Core types and traits for the relay bot: [`Bot`], [`Handler`], message/user/chat types, the
//! [`RelayError`] taxonomy, and tracing initialization. Transport-agnostic; used by relay-telegram,
//! handler-chain and relay-handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{ErrorKind, RelayError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
