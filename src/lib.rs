// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Ricochet: a timed, multiplayer bid-then-demonstrate sliding robot puzzle.
//!
//! Players bid the fewest moves they think solve the current goal. The best
//! bidder then has to demonstrate it by sliding robots across a walled 16×16
//! board, within their claimed move count and before the demo timer runs
//! out. Otherwise the next bidder gets a go.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │  Session (tokio actor per game)     │
//! ├─────────────────────────────────────┤
//! │  Round state machine                │
//! ├─────────────────────────────────────┤
//! │  Board simulation                   │
//! └─────────────────────────────────────┘
//! ```
//!
//! The state machine is synchronous and never sleeps: it returns
//! [`Effect`]s that the session turns into notifications and timers.

pub mod board;
pub mod config;
pub mod error;
pub mod render;
pub mod round;
pub mod session;

pub use board::{Board, BoardSetup, Coord, Direction, Goal, GoalColor, GoalSequence, RobotColor};
pub use config::{GameConfig, Settings};
pub use error::{BoardError, Rejection, RoundResult};
pub use round::{ClientEvent, Effect, GameId, Notification, Phase, PlayerId, RoundController};
pub use session::{GameHandle, GameRegistry};
