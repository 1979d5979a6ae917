//! Coordinates and movement directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Width and height of every board, in tiles.
pub const BOARD_SIZE: u8 = 16;

/// Number of tiles on a board.
pub const TILE_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// A coordinate on the board.
///
/// `x` grows to the right and `y` grows downward, so `(0, 0)` is the top-left
/// corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (column).
    pub x: u8,
    /// Y coordinate (row).
    pub y: u8,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check if this coordinate lies on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// Check if this coordinate is part of the 2×2 block at the board center.
    ///
    /// Robots are never placed there.
    #[must_use]
    pub const fn is_center(self) -> bool {
        let lo = BOARD_SIZE / 2 - 1;
        let hi = BOARD_SIZE / 2;
        lo <= self.x && self.x <= hi && lo <= self.y && self.y <= hi
    }

    /// The neighbouring coordinate in `direction`, or `None` at the board edge.
    #[must_use]
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let next = match direction {
            Direction::Up => Coord::new(self.x, self.y.checked_sub(1)?),
            Direction::Down => Coord::new(self.x, self.y + 1),
            Direction::Left => Coord::new(self.x.checked_sub(1)?, self.y),
            Direction::Right => Coord::new(self.x + 1, self.y),
        };
        next.in_bounds().then_some(next)
    }

    /// Row-major index into a tile array, or `None` when out of bounds.
    #[must_use]
    #[inline]
    pub(crate) fn index(self) -> Option<usize> {
        self.in_bounds()
            .then(|| usize::from(self.y) * usize::from(BOARD_SIZE) + usize::from(self.x))
    }

    /// Iterate over every coordinate on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord::new(x, y)))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction a robot can be slid in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward `y = 0`.
    Up,
    /// Toward `y = 15`.
    Down,
    /// Toward `x = 0`.
    Left,
    /// Toward `x = 15`.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Lowercase name as used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown direction name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(pub String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown direction '{}'", self.0)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_interior() {
        let c = Coord::new(5, 5);
        assert_eq!(c.step(Direction::Up), Some(Coord::new(5, 4)));
        assert_eq!(c.step(Direction::Down), Some(Coord::new(5, 6)));
        assert_eq!(c.step(Direction::Left), Some(Coord::new(4, 5)));
        assert_eq!(c.step(Direction::Right), Some(Coord::new(6, 5)));
    }

    #[test]
    fn test_step_edges() {
        assert_eq!(Coord::new(0, 0).step(Direction::Up), None);
        assert_eq!(Coord::new(0, 0).step(Direction::Left), None);
        assert_eq!(Coord::new(15, 15).step(Direction::Down), None);
        assert_eq!(Coord::new(15, 15).step(Direction::Right), None);
    }

    #[test]
    fn test_center_block() {
        assert!(Coord::new(7, 7).is_center());
        assert!(Coord::new(8, 8).is_center());
        assert!(Coord::new(7, 8).is_center());
        assert!(!Coord::new(6, 7).is_center());
        assert!(!Coord::new(9, 8).is_center());
    }

    #[test]
    fn test_index_row_major() {
        assert_eq!(Coord::new(0, 0).index(), Some(0));
        assert_eq!(Coord::new(3, 1).index(), Some(19));
        assert_eq!(Coord::new(16, 0).index(), None);
        assert_eq!(Coord::all().count(), TILE_COUNT);
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("Up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("r".parse::<Direction>(), Ok(Direction::Right));
        assert!("north".parse::<Direction>().is_err());
    }
}
