//! Two-player game session: turn order, selection, captures and the win rule.
//!
//! A [`GameSession`] consumes square selections one at a time. Selecting one
//! of your own pieces highlights its destinations; selecting a highlighted
//! square moves there. Capturing the opposing king ends the game and every
//! later selection is ignored until [`GameSession::reset`].

mod config;
mod controller;
mod ledger;
mod status;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, SessionConfig};
pub use controller::{Effect, GameSession, GameSnapshot, Selection};
pub use ledger::CapturedPieces;
pub use status::GameStatus;
