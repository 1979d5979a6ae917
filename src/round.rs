//! Round protocol: players, bids, timers and the phase state machine.
//!
//! ```text
//! Join --start--> Bidding --timer--> Demonstrating --solved--> next round
//!                    ^                  |    |
//!                    |                  |    +--failed--> next bidder
//!                    +---no bids left---+
//! ```
//!
//! The game ends when the configured rounds are played, the goals run out,
//! or the last player leaves.

mod bids;
mod controller;
mod message;
mod players;
mod timer;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use bids::{Bid, BidLedger, BidPlacement, MIN_BID_MOVES};
pub use controller::{Effect, Phase, RoundController};
pub use message::{ClientEvent, MAX_CHAT_LEN, Notification};
pub use players::{Player, PlayerId, PlayerRegistry, Standing};
pub use timer::{TimerKind, TimerToken};

pub(crate) use timer::TimerSlot;

/// Identifier of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game-{}", self.0)
    }
}
