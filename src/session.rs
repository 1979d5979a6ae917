//! Running games concurrently.
//!
//! Each game is an actor task owning its [`RoundController`]. A
//! [`GameRegistry`] maps ids to [`GameHandle`]s; games share nothing else.
//!
//! [`RoundController`]: crate::round::RoundController

mod actor;
mod registry;
mod sink;

use std::fmt;

use crate::error::BoardError;
use crate::round::GameId;

pub use actor::{GameHandle, SessionInput};
pub use registry::GameRegistry;
pub use sink::{ChannelSink, Envelope, LoggingHooks, NotificationSink, PersistenceHooks, Recipient};

pub(crate) use actor::GameActor;

/// Errors talking to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The game task is no longer running.
    GameClosed(GameId),
    /// No game with this id is registered.
    NotFound(GameId),
    /// The board for a new game could not be built.
    Board(BoardError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::GameClosed(id) => write!(f, "{id} has stopped"),
            SessionError::NotFound(id) => write!(f, "{id} not found"),
            SessionError::Board(e) => write!(f, "board error: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for SessionError {
    fn from(e: BoardError) -> Self {
        SessionError::Board(e)
    }
}
