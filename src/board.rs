//! Board simulation for Ricochet.
//!
//! Implements the physical puzzle:
//! - 16×16 grid with walls on tile edges
//! - Goals, one drawn per round
//! - Five robots that slide until blocked
//! - Position snapshot and reset between demonstrations

mod coord;
mod goal;
mod grid;
mod invariants;
mod layout;
mod robot;
mod tile;

pub use coord::{BOARD_SIZE, Coord, Direction, ParseDirectionError, TILE_COUNT};
pub use goal::{Goal, GoalColor, GoalSequence, GoalShape};
pub use grid::{Board, MAX_PLACEMENT_ATTEMPTS};
pub use invariants::{InvariantViolation, check_invariants};
pub use layout::{BoardSetup, Layout, UnknownSetup};
pub use robot::{ParseRobotError, ROBOT_COUNT, RobotColor, RobotPlacement, RobotPositions};
pub use tile::Tile;
