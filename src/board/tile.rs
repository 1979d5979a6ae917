//! Tile type.

use crate::board::{Goal, RobotColor};

/// A single tile on the board.
///
/// Walls are recorded on the tile to their left (`right_wall`) or above
/// (`bottom_wall`). A wall blocks movement across its edge in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    /// Wall along the right edge.
    pub right_wall: bool,
    /// Wall along the bottom edge.
    pub bottom_wall: bool,
    /// Robot currently standing here.
    pub occupant: Option<RobotColor>,
    /// Goal printed on this tile.
    pub goal: Option<Goal>,
}

impl Tile {
    /// Check if a robot is standing here.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}
