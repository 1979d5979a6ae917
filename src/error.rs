//! Error types for the board and the round state machine.

use std::fmt;

use crate::board::{Coord, Direction, RobotColor};
use crate::config::InvalidConfig;
use crate::round::{Phase, PlayerId, TimerToken};

/// Problems building a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A wall, goal or robot lies outside the 16×16 grid.
    OutOfBounds(Coord),
    /// Two goals share a tile.
    DuplicateGoal(Coord),
    /// Two robots share a tile.
    RobotCollision(Coord),
    /// A robot was placed in the center block.
    CenterBlocked(Coord),
    /// No free tile was left for this robot.
    NoFreeTile(RobotColor),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(c) => write!(f, "coordinate {c} is off the board"),
            BoardError::DuplicateGoal(c) => write!(f, "more than one goal on {c}"),
            BoardError::RobotCollision(c) => write!(f, "more than one robot on {c}"),
            BoardError::CenterBlocked(c) => write!(f, "robot placed in the center block at {c}"),
            BoardError::NoFreeTile(color) => write!(f, "no free tile left for the {color} robot"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Why an inbound event was refused.
///
/// Rejections never mutate game state and are never reported back to the
/// player who caused them; the session only logs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The event is not valid in the current phase.
    WrongPhase(Phase),
    /// Only the host may do this.
    NotHost(PlayerId),
    /// The sender is not in this game.
    UnknownPlayer(PlayerId),
    /// The player already joined.
    AlreadyJoined(PlayerId),
    /// Bids must claim at least two moves.
    BidTooLow {
        /// Claimed moves.
        moves: u32,
    },
    /// The same player already bid this number of moves this round.
    DuplicateBid {
        /// Claimed moves.
        moves: u32,
    },
    /// Only the current demonstrator may move robots.
    NotDemonstrator(PlayerId),
    /// The robot cannot move in that direction.
    NoMovement {
        /// Robot that was asked to move.
        robot: RobotColor,
        /// Requested direction.
        direction: Direction,
    },
    /// Chat messages must be 1 to 49 characters.
    InvalidChat,
    /// The proposed configuration is not usable.
    InvalidConfig(InvalidConfig),
    /// A timer fired after it had been replaced or cancelled.
    StaleTimer(TimerToken),
    /// The game has ended.
    GameOver,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::WrongPhase(phase) => write!(f, "not allowed during {phase}"),
            Rejection::NotHost(p) => write!(f, "player {p} is not the host"),
            Rejection::UnknownPlayer(p) => write!(f, "player {p} is not in this game"),
            Rejection::AlreadyJoined(p) => write!(f, "player {p} already joined"),
            Rejection::BidTooLow { moves } => write!(f, "bid of {moves} moves is below the minimum"),
            Rejection::DuplicateBid { moves } => write!(f, "bid of {moves} moves already placed"),
            Rejection::NotDemonstrator(p) => write!(f, "player {p} is not demonstrating"),
            Rejection::NoMovement { robot, direction } => {
                write!(f, "{robot} robot cannot move {direction}")
            }
            Rejection::InvalidChat => write!(f, "chat message length out of range"),
            Rejection::InvalidConfig(e) => write!(f, "{e}"),
            Rejection::StaleTimer(t) => write!(f, "stale timer {t}"),
            Rejection::GameOver => write!(f, "game is over"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Result type for controller operations.
pub type RoundResult<T = ()> = Result<T, Rejection>;
