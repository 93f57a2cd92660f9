//! Adapters that turn raw player input into vote symbols.
pub mod chat;
pub mod keys;

pub use chat::{ChatMessage, normalize_command, parse_privmsg};
pub use keys::{VoteKey, frame_votes};
