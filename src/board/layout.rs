//! Fixed wall and goal layouts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Coord, Goal, GoalColor, GoalShape};

/// Walls and goals of a board, without robots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    /// Tiles with a wall on their right edge.
    pub right_walls: Vec<Coord>,
    /// Tiles with a wall on their bottom edge.
    pub bottom_walls: Vec<Coord>,
    /// Goals, in layout order.
    pub goals: Vec<Goal>,
}

/// Walls boxing in the 2×2 center block.
const CENTER_RIGHT_WALLS: [(u8, u8); 4] = [(6, 7), (6, 8), (8, 7), (8, 8)];
const CENTER_BOTTOM_WALLS: [(u8, u8); 4] = [(7, 6), (7, 8), (8, 6), (8, 8)];

impl Layout {
    /// A board with no walls and no goals at all.
    #[must_use]
    pub fn open() -> Self {
        Self::default()
    }

    /// A board holding only the walled center block.
    #[must_use]
    pub fn center_block() -> Self {
        Self {
            right_walls: CENTER_RIGHT_WALLS
                .iter()
                .map(|&(x, y)| Coord::new(x, y))
                .collect(),
            bottom_walls: CENTER_BOTTOM_WALLS
                .iter()
                .map(|&(x, y)| Coord::new(x, y))
                .collect(),
            goals: Vec::new(),
        }
    }

    /// Add a wall on the right edge of `coord`.
    #[must_use]
    pub fn with_right_wall(mut self, coord: Coord) -> Self {
        self.right_walls.push(coord);
        self
    }

    /// Add a wall on the bottom edge of `coord`.
    #[must_use]
    pub fn with_bottom_wall(mut self, coord: Coord) -> Self {
        self.bottom_walls.push(coord);
        self
    }

    /// Add a goal.
    #[must_use]
    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goals.push(goal);
        self
    }
}

/// One of the enumerated board setups a game can be played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BoardSetup {
    /// The first (and default) setup.
    #[default]
    Setup1,
}

impl BoardSetup {
    /// Every available setup.
    pub const ALL: [BoardSetup; 1] = [BoardSetup::Setup1];

    /// 1-based setup number as stored in configuration.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            BoardSetup::Setup1 => 1,
        }
    }

    /// Look up a setup by its 1-based number.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() == number)
    }

    /// Build the walls and goals of this setup.
    #[must_use]
    pub fn layout(self) -> Layout {
        match self {
            BoardSetup::Setup1 => setup_1(),
        }
    }
}

impl fmt::Display for BoardSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "setup {}", self.number())
    }
}

/// Error for an unknown setup number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownSetup(pub u8);

impl fmt::Display for UnknownSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown board setup {}", self.0)
    }
}

impl std::error::Error for UnknownSetup {}

impl TryFrom<u8> for BoardSetup {
    type Error = UnknownSetup;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or(UnknownSetup(number))
    }
}

impl From<BoardSetup> for u8 {
    fn from(setup: BoardSetup) -> u8 {
        setup.number()
    }
}

fn setup_1() -> Layout {
    const RIGHT: [(u8, u8); 21] = [
        (3, 0),
        (10, 0),
        (8, 1),
        (11, 1),
        (5, 2),
        (14, 2),
        (2, 4),
        (10, 4),
        (6, 5),
        (0, 6),
        (11, 6),
        (3, 9),
        (7, 10),
        (12, 10),
        (0, 11),
        (10, 11),
        (6, 12),
        (13, 12),
        (1, 14),
        (9, 14),
        (5, 15),
    ];
    const BOTTOM: [(u8, u8); 21] = [
        (9, 1),
        (14, 1),
        (5, 2),
        (2, 3),
        (0, 4),
        (10, 4),
        (15, 4),
        (1, 5),
        (7, 5),
        (12, 5),
        (3, 8),
        (15, 8),
        (8, 9),
        (13, 9),
        (1, 11),
        (10, 11),
        (6, 12),
        (14, 12),
        (0, 13),
        (2, 13),
        (9, 13),
    ];
    const GOALS: [(GoalColor, GoalShape, u8, u8); 17] = [
        (GoalColor::Green, GoalShape::Star, 9, 1),
        (GoalColor::Blue, GoalShape::Star, 5, 2),
        (GoalColor::Yellow, GoalShape::Star, 3, 9),
        (GoalColor::Red, GoalShape::Star, 13, 10),
        (GoalColor::Green, GoalShape::Crescent, 2, 4),
        (GoalColor::Yellow, GoalShape::Crescent, 14, 2),
        (GoalColor::Red, GoalShape::Crescent, 1, 11),
        (GoalColor::Blue, GoalShape::Crescent, 9, 14),
        (GoalColor::Green, GoalShape::Planet, 10, 11),
        (GoalColor::Red, GoalShape::Planet, 10, 4),
        (GoalColor::Yellow, GoalShape::Planet, 1, 6),
        (GoalColor::Blue, GoalShape::Planet, 6, 12),
        (GoalColor::Green, GoalShape::Gear, 2, 14),
        (GoalColor::Red, GoalShape::Gear, 7, 5),
        (GoalColor::Blue, GoalShape::Gear, 12, 6),
        (GoalColor::Yellow, GoalShape::Gear, 14, 12),
        (GoalColor::Multi, GoalShape::Vortex, 8, 10),
    ];

    let mut layout = Layout::center_block();
    layout
        .right_walls
        .extend(RIGHT.iter().map(|&(x, y)| Coord::new(x, y)));
    layout
        .bottom_walls
        .extend(BOTTOM.iter().map(|&(x, y)| Coord::new(x, y)));
    layout.goals.extend(
        GOALS
            .iter()
            .map(|&(color, shape, x, y)| Goal::new(color, shape, Coord::new(x, y))),
    );
    layout
}
