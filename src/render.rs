//! ASCII board renderer for terminal viewing.

use crate::board::{BOARD_SIZE, Board, Coord, Goal, RobotColor};

/// ANSI color codes for robots, in [`RobotColor::ALL`] order.
const ROBOT_COLORS: [&str; 5] = [
    "\x1b[31m", // Red
    "\x1b[33m", // Yellow
    "\x1b[32m", // Green
    "\x1b[34m", // Blue
    "\x1b[90m", // Black
];

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Render the board as text.
///
/// Robots are upper-case letters, goals lower-case, the center block `#`.
/// A `|` after a tile is a wall on its right edge; a `--` below a tile is a
/// wall on its bottom edge. The goal being played, if any, is shown in bold.
///
/// ```text
/// +--------------------------------+
/// |. . . . r . . . . . . . . . . . |
/// |    --                          |
/// |. . R|. . . . . . . . . . . . . |
/// ```
#[must_use]
pub fn render_board(board: &Board, current: Option<&Goal>, color: bool) -> String {
    let width = usize::from(BOARD_SIZE) * 2;
    let mut output = String::new();

    let border = format!("+{}+\n", "-".repeat(width));
    output.push_str(&border);

    for y in 0..BOARD_SIZE {
        output.push('|');
        for x in 0..BOARD_SIZE {
            let coord = Coord::new(x, y);
            render_tile(&mut output, board, coord, current, color);
            let walled = x + 1 < BOARD_SIZE
                && board.tile(coord).is_some_and(|t| t.right_wall);
            output.push(if walled { '|' } else { ' ' });
        }
        output.push_str("|\n");

        if y + 1 < BOARD_SIZE {
            let below: String = (0..BOARD_SIZE)
                .map(|x| {
                    let walled = board
                        .tile(Coord::new(x, y))
                        .is_some_and(|t| t.bottom_wall);
                    if walled { "--" } else { "  " }
                })
                .collect();
            if !below.trim().is_empty() {
                output.push('|');
                output.push_str(&below);
                output.push_str("|\n");
            }
        }
    }

    output.push_str(&border);
    output
}

fn render_tile(
    output: &mut String,
    board: &Board,
    coord: Coord,
    current: Option<&Goal>,
    color: bool,
) {
    let Some(tile) = board.tile(coord) else {
        output.push('?');
        return;
    };

    if let Some(robot) = tile.occupant {
        push_robot(output, robot, color);
        return;
    }

    match tile.goal {
        Some(goal) => {
            let symbol = goal.color.symbol();
            if color && current.is_some_and(|c| c.coord == coord) {
                output.push_str(BOLD);
                output.push(symbol);
                output.push_str(RESET);
            } else {
                output.push(symbol);
            }
        }
        None if coord.is_center() => output.push('#'),
        None => output.push('.'),
    }
}

fn push_robot(output: &mut String, robot: RobotColor, color: bool) {
    let symbol = robot.symbol().to_ascii_uppercase();
    if color {
        output.push_str(ROBOT_COLORS[robot.index()]);
        output.push(symbol);
        output.push_str(RESET);
    } else {
        output.push(symbol);
    }
}

/// One line per robot with its position.
#[must_use]
pub fn render_positions(board: &Board) -> String {
    RobotColor::ALL
        .iter()
        .map(|&robot| format!("{:<6} {}", robot.name(), board.position(robot)))
        .collect::<Vec<_>>()
        .join("\n")
}
