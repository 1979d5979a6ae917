//! Inbound events and outbound notifications.
//!
//! Both are closed enums tagged by `category`. Transports deserialize into
//! [`ClientEvent`] at the boundary; anything that fails to parse never
//! reaches the state machine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Coord, Direction, Goal, RobotColor, RobotPlacement};
use crate::config::GameConfig;
use crate::round::{PlayerId, Standing};

/// Longest chat message accepted, exclusive.
pub const MAX_CHAT_LEN: usize = 50;

/// An event sent by a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Start the game. Host only.
    Start,
    /// Claim the current goal can be solved in `moves` moves.
    Bid {
        /// Claimed move count.
        moves: u32,
    },
    /// Slide a robot. Demonstrator only.
    Move {
        /// Robot to slide.
        robot: RobotColor,
        /// Direction to slide it.
        direction: Direction,
    },
    /// Say something to the table.
    Chat {
        /// Message text.
        msg: String,
    },
    /// Replace the round settings before the game starts. Host only.
    Configure {
        /// New settings.
        config: GameConfig,
    },
    /// Leave the game.
    Leave,
}

impl ClientEvent {
    /// Parse an event from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not a well-formed event.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// A message sent to one or all players of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Notification {
    /// Someone joined.
    PlayerJoined {
        /// Who joined.
        player: PlayerId,
        /// Their name.
        name: String,
    },
    /// Someone left.
    PlayerLeft {
        /// Who left.
        player: PlayerId,
        /// Their name.
        name: String,
    },
    /// Everything a newly joined player needs, sent only to them.
    CheckIn {
        /// The joining player's name.
        name: String,
        /// Whether they are the host.
        is_host: bool,
        /// Current round, 0 before the game starts.
        round: u32,
        /// Round settings.
        config: GameConfig,
        /// Everybody in the game, in join order.
        players: Vec<Standing>,
        /// Tiles with a wall on their right edge.
        right_walls: Vec<Coord>,
        /// Tiles with a wall on their bottom edge.
        bottom_walls: Vec<Coord>,
        /// Every goal on the board.
        goals: Vec<Goal>,
        /// Where the robots stand.
        robots: Vec<RobotPlacement>,
    },
    /// The host started the game.
    Started,
    /// The host changed the round settings.
    ConfigUpdated {
        /// New settings.
        config: GameConfig,
    },
    /// A chat line.
    Chat {
        /// Sender.
        player: PlayerId,
        /// Sender's name.
        name: String,
        /// Message text.
        msg: String,
    },
    /// A phase timer was armed.
    Timer {
        /// Seconds until it fires.
        seconds: u64,
    },
    /// Positions of all robots.
    RobotPositions {
        /// Every robot.
        robots: Vec<RobotPlacement>,
    },
    /// A new round began.
    RoundStarted {
        /// 1-based round number.
        round: u32,
        /// Goal to solve.
        goal: Goal,
    },
    /// A bid was accepted.
    BidAccepted {
        /// Bidder.
        player: PlayerId,
        /// Bidder's name.
        name: String,
        /// Claimed moves.
        moves: u32,
        /// Whether this is now the best bid.
        leading: bool,
    },
    /// A player must now demonstrate their bid.
    DemonstratorAssigned {
        /// Demonstrator.
        player: PlayerId,
        /// Demonstrator's name.
        name: String,
        /// Moves they have.
        moves: u32,
    },
    /// Sent only to the demonstrator.
    YourTurn {
        /// Moves they have.
        moves: u32,
    },
    /// A robot changed tile.
    RobotMoved {
        /// Which robot.
        color: RobotColor,
        /// Where it was.
        from: Coord,
        /// Where it is now.
        to: Coord,
    },
    /// A player's score changed.
    ScoreChanged {
        /// Whose score.
        player: PlayerId,
        /// Their name.
        name: String,
        /// Change applied.
        delta: i32,
        /// Score after the change.
        score: i32,
    },
    /// The round ended without anyone scoring.
    NoPointsAwarded {
        /// Round that ended.
        round: u32,
    },
    /// The game is over.
    GameEnded {
        /// Players tied for the highest score. Empty if nobody is left.
        winners: Vec<Standing>,
    },
}

impl Notification {
    /// Serialize to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Human-readable log line, as shown in a game's activity feed.
impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::PlayerJoined { name, .. } => write!(f, "{name} joined"),
            Notification::PlayerLeft { name, .. } => write!(f, "{name} left"),
            Notification::CheckIn {
                name,
                is_host,
                players,
                ..
            } => {
                write!(f, "welcome {name}, {} player(s) here", players.len())?;
                if *is_host {
                    write!(f, ", you are the host")?;
                }
                Ok(())
            }
            Notification::Started => write!(f, "game started"),
            Notification::ConfigUpdated { config } => write!(
                f,
                "config: {} rounds, {}s/{}s bidding, {}s demo",
                config.num_rounds,
                config.pre_bid_timeout.as_secs(),
                config.post_bid_timeout.as_secs(),
                config.demo_timeout.as_secs()
            ),
            Notification::Chat { name, msg, .. } => write!(f, "{name}: {msg}"),
            Notification::Timer { seconds } => write!(f, "timer: {seconds}s"),
            Notification::RobotPositions { robots } => {
                write!(f, "robots:")?;
                for r in robots {
                    write!(f, " {}{}", r.color.symbol(), r.coord)?;
                }
                Ok(())
            }
            Notification::RoundStarted { round, goal } => {
                write!(f, "beginning round {round}: {goal}")
            }
            Notification::BidAccepted {
                name,
                moves,
                leading,
                ..
            } => {
                write!(f, "{name} bids {moves} moves")?;
                if *leading {
                    write!(f, " (leading)")?;
                }
                Ok(())
            }
            Notification::DemonstratorAssigned { name, moves, .. } => {
                write!(f, "{name} demonstrating {moves} moves")
            }
            Notification::YourTurn { moves } => write!(f, "your turn: {moves} moves"),
            Notification::RobotMoved { color, from, to } => {
                write!(f, "{color} robot {from} -> {to}")
            }
            Notification::ScoreChanged {
                name, delta, score, ..
            } => {
                if *delta > 0 {
                    write!(f, "{name} wins this round! ({score} point(s))")
                } else {
                    write!(f, "{name} failed the demonstration ({score} point(s))")
                }
            }
            Notification::NoPointsAwarded { round } => {
                write!(f, "no points awarded in round {round}")
            }
            Notification::GameEnded { winners } => match winners.as_slice() {
                [] => write!(f, "where did everyone go?"),
                [only] => write!(f, "{} wins with {} point(s)!", only.name, only.score),
                [rest @ .., last] => {
                    let names: Vec<&str> = rest.iter().map(|w| w.name.as_str()).collect();
                    write!(
                        f,
                        "{} and {} tie for first with {} point(s)!",
                        names.join(", "),
                        last.name,
                        last.score
                    )
                }
            },
        }
    }
}
