//! Robot colors and position tracking.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Coord;

/// Number of robots on every board.
pub const ROBOT_COUNT: usize = 5;

/// One of the five robots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RobotColor {
    /// Red robot.
    #[serde(rename = "r")]
    Red,
    /// Yellow robot.
    #[serde(rename = "y")]
    Yellow,
    /// Green robot.
    #[serde(rename = "g")]
    Green,
    /// Blue robot.
    #[serde(rename = "u")]
    Blue,
    /// Black robot. No goal carries this color, it can only solve the vortex.
    #[serde(rename = "b")]
    Black,
}

impl RobotColor {
    /// All robots in their fixed iteration order.
    pub const ALL: [RobotColor; ROBOT_COUNT] = [
        RobotColor::Red,
        RobotColor::Yellow,
        RobotColor::Green,
        RobotColor::Blue,
        RobotColor::Black,
    ];

    /// Position of this color in [`RobotColor::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter wire symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            RobotColor::Red => 'r',
            RobotColor::Yellow => 'y',
            RobotColor::Green => 'g',
            RobotColor::Blue => 'u',
            RobotColor::Black => 'b',
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RobotColor::Red => "red",
            RobotColor::Yellow => "yellow",
            RobotColor::Green => "green",
            RobotColor::Blue => "blue",
            RobotColor::Black => "black",
        }
    }
}

impl fmt::Display for RobotColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown robot name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRobotError(pub String);

impl fmt::Display for ParseRobotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown robot '{}'", self.0)
    }
}

impl std::error::Error for ParseRobotError {}

impl FromStr for RobotColor {
    type Err = ParseRobotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        RobotColor::ALL
            .into_iter()
            .find(|c| lower == c.name() || lower.chars().eq(std::iter::once(c.symbol())))
            .ok_or_else(|| ParseRobotError(s.to_string()))
    }
}

/// A robot together with where it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotPlacement {
    /// Which robot.
    pub color: RobotColor,
    /// Its tile.
    pub coord: Coord,
}

/// Position of every robot, indexed by color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotPositions([Coord; ROBOT_COUNT]);

impl RobotPositions {
    /// Build from an array ordered like [`RobotColor::ALL`].
    #[must_use]
    pub const fn new(coords: [Coord; ROBOT_COUNT]) -> Self {
        Self(coords)
    }

    /// Where `color` stands.
    #[must_use]
    #[inline]
    pub const fn get(&self, color: RobotColor) -> Coord {
        self.0[color.index()]
    }

    /// Move `color` to `coord` without touching any tile.
    #[inline]
    pub fn set(&mut self, color: RobotColor, coord: Coord) {
        self.0[color.index()] = coord;
    }

    /// Iterate in fixed color order.
    pub fn iter(&self) -> impl Iterator<Item = RobotPlacement> + '_ {
        RobotColor::ALL.into_iter().map(|color| RobotPlacement {
            color,
            coord: self.get(color),
        })
    }

    /// Collect into a list of placements.
    #[must_use]
    pub fn to_placements(&self) -> Vec<RobotPlacement> {
        self.iter().collect()
    }
}
