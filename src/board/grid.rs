//! The board: tiles, robots and slide movement.

use rand::Rng;

use crate::board::{
    BoardSetup, Coord, Direction, Goal, Layout, RobotColor, RobotPositions, Tile, BOARD_SIZE,
    ROBOT_COUNT, TILE_COUNT,
};
use crate::error::BoardError;

/// Random draws per robot before falling back to a row-major scan.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1024;

/// A 16×16 board with walls, goals and five robots.
#[derive(Debug, Clone)]
pub struct Board {
    /// Tiles stored in row-major order.
    tiles: Vec<Tile>,
    /// Goals in layout order.
    goals: Vec<Goal>,
    /// Where each robot stands right now.
    current: RobotPositions,
    /// Snapshot restored by [`Board::reset_robot_positions`].
    saved: RobotPositions,
}

impl Board {
    /// Build a board for `setup` and scatter the robots randomly.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is malformed or no free tile is left
    /// for a robot.
    pub fn new<R: Rng + ?Sized>(setup: BoardSetup, rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Self::empty(&setup.layout())?;
        board.place_robots_randomly(rng)?;
        Ok(board)
    }

    /// Build a board from `layout` with robots on explicit tiles.
    ///
    /// `coords` is ordered like [`RobotColor::ALL`].
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is malformed, a robot is off the board
    /// or in the center block, or two robots share a tile.
    pub fn with_robots(layout: &Layout, coords: [Coord; ROBOT_COUNT]) -> Result<Self, BoardError> {
        let mut board = Self::empty(layout)?;
        for (color, coord) in RobotColor::ALL.into_iter().zip(coords) {
            let tile = board.tile_mut(coord).ok_or(BoardError::OutOfBounds(coord))?;
            if coord.is_center() {
                return Err(BoardError::CenterBlocked(coord));
            }
            if tile.is_occupied() {
                return Err(BoardError::RobotCollision(coord));
            }
            tile.occupant = Some(color);
        }
        board.current = RobotPositions::new(coords);
        board.saved = board.current;
        Ok(board)
    }

    /// Walls and goals only; robot positions are placeholders until placed.
    fn empty(layout: &Layout) -> Result<Self, BoardError> {
        let mut tiles = vec![Tile::default(); TILE_COUNT];

        for &coord in &layout.right_walls {
            let idx = coord.index().ok_or(BoardError::OutOfBounds(coord))?;
            tiles[idx].right_wall = true;
        }
        for &coord in &layout.bottom_walls {
            let idx = coord.index().ok_or(BoardError::OutOfBounds(coord))?;
            tiles[idx].bottom_wall = true;
        }
        for goal in &layout.goals {
            let idx = goal.coord.index().ok_or(BoardError::OutOfBounds(goal.coord))?;
            if tiles[idx].goal.is_some() {
                return Err(BoardError::DuplicateGoal(goal.coord));
            }
            tiles[idx].goal = Some(*goal);
        }

        let origin = RobotPositions::new([Coord::new(0, 0); ROBOT_COUNT]);
        Ok(Self {
            tiles,
            goals: layout.goals.clone(),
            current: origin,
            saved: origin,
        })
    }

    /// Place every robot on a uniformly random free tile.
    ///
    /// A tile is free if it holds no robot, no goal and is outside the center
    /// block. Also takes the initial snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoFreeTile`] if the board has no free tile left.
    pub fn place_robots_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for tile in &mut self.tiles {
            tile.occupant = None;
        }

        for color in RobotColor::ALL {
            let coord = (0..MAX_PLACEMENT_ATTEMPTS)
                .map(|_| Coord::new(rng.gen_range(0..BOARD_SIZE), rng.gen_range(0..BOARD_SIZE)))
                .find(|&c| self.is_spot_available(c))
                .or_else(|| Coord::all().find(|&c| self.is_spot_available(c)))
                .ok_or(BoardError::NoFreeTile(color))?;

            if let Some(tile) = self.tile_mut(coord) {
                tile.occupant = Some(color);
            }
            self.current.set(color, coord);
        }

        self.saved = self.current;
        Ok(())
    }

    /// Check if a robot may be placed on `coord`.
    #[must_use]
    pub fn is_spot_available(&self, coord: Coord) -> bool {
        !coord.is_center()
            && self
                .tile(coord)
                .is_some_and(|t| !t.is_occupied() && t.goal.is_none())
    }

    /// Get the tile at `coord`.
    #[must_use]
    #[inline]
    pub fn tile(&self, coord: Coord) -> Option<&Tile> {
        coord.index().map(|idx| &self.tiles[idx])
    }

    #[inline]
    fn tile_mut(&mut self, coord: Coord) -> Option<&mut Tile> {
        coord.index().map(|idx| &mut self.tiles[idx])
    }

    /// Goals of this board, in layout order.
    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Current robot positions.
    #[must_use]
    pub const fn positions(&self) -> &RobotPositions {
        &self.current
    }

    /// Last saved robot positions.
    #[must_use]
    pub const fn saved_positions(&self) -> &RobotPositions {
        &self.saved
    }

    /// Where `color` currently stands.
    #[must_use]
    pub const fn position(&self, color: RobotColor) -> Coord {
        self.current.get(color)
    }

    /// Tiles with a wall on their right edge, row-major.
    #[must_use]
    pub fn right_walls(&self) -> Vec<Coord> {
        Coord::all()
            .filter(|&c| self.tile(c).is_some_and(|t| t.right_wall))
            .collect()
    }

    /// Tiles with a wall on their bottom edge, row-major.
    #[must_use]
    pub fn bottom_walls(&self) -> Vec<Coord> {
        Coord::all()
            .filter(|&c| self.tile(c).is_some_and(|t| t.bottom_wall))
            .collect()
    }

    /// The tile one step from `from` in `direction`, if a robot can enter it.
    ///
    /// `right_wall` blocks leaving its tile rightward and entering it
    /// leftward; `bottom_wall` does the same for down and up.
    fn next_tile(&self, from: Coord, direction: Direction) -> Option<Coord> {
        let to = from.step(direction)?;
        let here = self.tile(from)?;
        let there = self.tile(to)?;

        let walled = match direction {
            Direction::Right => here.right_wall,
            Direction::Left => there.right_wall,
            Direction::Down => here.bottom_wall,
            Direction::Up => there.bottom_wall,
        };

        (!walled && !there.is_occupied()).then_some(to)
    }

    /// Where `color` would stop if slid in `direction`.
    ///
    /// The robot travels until the next edge is walled, the next tile holds
    /// another robot, or it reaches the board edge. Returns `None` when the
    /// robot cannot move at all.
    #[must_use]
    pub fn slide(&self, color: RobotColor, direction: Direction) -> Option<Coord> {
        let origin = self.current.get(color);
        let mut pos = origin;
        while let Some(next) = self.next_tile(pos, direction) {
            pos = next;
        }
        (pos != origin).then_some(pos)
    }

    /// Slide `color` in `direction` and update occupancy.
    ///
    /// Returns the new coordinate, or `None` if the slide was a no-op, in
    /// which case nothing changes.
    pub fn move_robot(&mut self, color: RobotColor, direction: Direction) -> Option<Coord> {
        let destination = self.slide(color, direction)?;
        let origin = self.current.get(color);

        if let Some(tile) = self.tile_mut(origin) {
            tile.occupant = None;
        }
        if let Some(tile) = self.tile_mut(destination) {
            tile.occupant = Some(color);
        }
        self.current.set(color, destination);

        Some(destination)
    }

    /// Snapshot the current robot positions.
    pub fn save_robot_positions(&mut self) {
        self.saved = self.current;
    }

    /// Restore the last snapshot and return the positions from before the
    /// reset.
    pub fn reset_robot_positions(&mut self) -> RobotPositions {
        let previous = self.current;

        for placement in previous.iter() {
            if let Some(tile) = self.tile_mut(placement.coord) {
                tile.occupant = None;
            }
        }
        let saved = self.saved;
        self.current = saved;
        for placement in saved.iter() {
            if let Some(tile) = self.tile_mut(placement.coord) {
                tile.occupant = Some(placement.color);
            }
        }

        previous
    }

    /// Check if a robot that satisfies `goal` is resting on its tile.
    #[must_use]
    pub fn is_solved(&self, goal: &Goal) -> bool {
        self.tile(goal.coord)
            .and_then(|t| t.occupant)
            .is_some_and(|robot| goal.color.accepts(robot))
    }
}
