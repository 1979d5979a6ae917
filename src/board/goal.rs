//! Goals and the per-game goal queue.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::board::{Coord, RobotColor};

/// Color printed on a goal tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalColor {
    /// Needs the red robot.
    #[serde(rename = "r")]
    Red,
    /// Needs the yellow robot.
    #[serde(rename = "y")]
    Yellow,
    /// Needs the green robot.
    #[serde(rename = "g")]
    Green,
    /// Needs the blue robot.
    #[serde(rename = "u")]
    Blue,
    /// The vortex: any robot will do.
    #[serde(rename = "m")]
    Multi,
}

impl GoalColor {
    /// Check if `robot` satisfies this goal color.
    #[must_use]
    pub const fn accepts(self, robot: RobotColor) -> bool {
        matches!(
            (self, robot),
            (GoalColor::Multi, _)
                | (GoalColor::Red, RobotColor::Red)
                | (GoalColor::Yellow, RobotColor::Yellow)
                | (GoalColor::Green, RobotColor::Green)
                | (GoalColor::Blue, RobotColor::Blue)
        )
    }

    /// Single-letter wire symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            GoalColor::Red => 'r',
            GoalColor::Yellow => 'y',
            GoalColor::Green => 'g',
            GoalColor::Blue => 'u',
            GoalColor::Multi => 'm',
        }
    }
}

impl fmt::Display for GoalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GoalColor::Red => "red",
            GoalColor::Yellow => "yellow",
            GoalColor::Green => "green",
            GoalColor::Blue => "blue",
            GoalColor::Multi => "any",
        };
        f.write_str(name)
    }
}

/// Symbol printed on a goal tile. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalShape {
    /// Star.
    Star,
    /// Crescent moon.
    Crescent,
    /// Ringed planet.
    Planet,
    /// Gear.
    Gear,
    /// The multicolor vortex.
    Vortex,
}

impl fmt::Display for GoalShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GoalShape::Star => "star",
            GoalShape::Crescent => "crescent",
            GoalShape::Planet => "planet",
            GoalShape::Gear => "gear",
            GoalShape::Vortex => "vortex",
        };
        f.write_str(name)
    }
}

/// A target tile that a robot must come to rest on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Goal {
    /// Which robot(s) can solve it.
    pub color: GoalColor,
    /// Cosmetic symbol.
    pub shape: GoalShape,
    /// Tile holding the goal.
    pub coord: Coord,
}

impl Goal {
    /// Create a new goal.
    #[must_use]
    pub const fn new(color: GoalColor, shape: GoalShape, coord: Coord) -> Self {
        Self {
            color,
            shape,
            coord,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.color, self.shape, self.coord)
    }
}

/// Single-pass queue of goals, one drawn per round.
#[derive(Debug, Clone, Default)]
pub struct GoalSequence {
    /// Remaining goals; the next one to draw is at the end.
    remaining: Vec<Goal>,
}

impl GoalSequence {
    /// Shuffle `goals` uniformly (Fisher–Yates) into a new sequence.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(goals: &[Goal], rng: &mut R) -> Self {
        let mut remaining = goals.to_vec();
        remaining.shuffle(rng);
        Self { remaining }
    }

    /// Build a sequence that draws `goals` in the given order.
    #[must_use]
    pub fn in_order(goals: &[Goal]) -> Self {
        let mut remaining = goals.to_vec();
        remaining.reverse();
        Self { remaining }
    }

    /// Take the next goal, or `None` once every goal has been used.
    pub fn draw(&mut self) -> Option<Goal> {
        self.remaining.pop()
    }

    /// Check if the sequence is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Number of goals left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }
}
