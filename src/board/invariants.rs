//! Board invariants - sanity checks that detect bugs.
//!
//! Movement and reset should never break these. If they do, occupancy and
//! the position table have drifted apart.

use std::collections::HashSet;

use crate::board::{Board, Coord, RobotColor, ROBOT_COUNT};

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all board invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(board: &Board) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    let mut seen = HashSet::new();
    for placement in board.positions().iter() {
        let coord = placement.coord;
        if !seen.insert(coord) {
            violations.push(InvariantViolation {
                message: format!("{} shares tile {coord} with another robot", placement.color),
            });
        }

        match board.tile(coord) {
            None => violations.push(InvariantViolation {
                message: format!("{} is off the board at {coord}", placement.color),
            }),
            Some(tile) if tile.occupant != Some(placement.color) => {
                violations.push(InvariantViolation {
                    message: format!(
                        "{} expected at {coord} but tile holds {:?}",
                        placement.color, tile.occupant
                    ),
                });
            }
            Some(_) => {}
        }
    }

    let occupied: Vec<(Coord, RobotColor)> = Coord::all()
        .filter_map(|c| board.tile(c).and_then(|t| t.occupant).map(|r| (c, r)))
        .collect();
    if occupied.len() != ROBOT_COUNT {
        violations.push(InvariantViolation {
            message: format!(
                "{} occupied tiles, expected {ROBOT_COUNT}",
                occupied.len()
            ),
        });
    }

    for (coord, robot) in occupied {
        if board.position(robot) != coord {
            violations.push(InvariantViolation {
                message: format!("stale {robot} marker left on {coord}"),
            });
        }
    }

    violations
}
