//! Output formatting for the play command.

use ricochet::board::{Board, Coord, Layout, ROBOT_COUNT, RobotPlacement};
use ricochet::render::render_board;
use ricochet::round::Notification;
use ricochet::session::{Envelope, Recipient};
use ricochet::{Goal, PlayerId};
use serde::Serialize;

/// JSON-serializable notification line.
#[derive(Debug, Serialize)]
pub(super) struct JsonLine<'a> {
    /// Source game.
    pub(super) game: u64,
    /// Addressee, null for everybody.
    pub(super) to: Option<PlayerId>,
    /// The notification itself.
    pub(super) message: &'a Notification,
}

impl<'a> JsonLine<'a> {
    /// Create from an envelope.
    pub(super) fn from_envelope(envelope: &'a Envelope) -> Self {
        Self {
            game: envelope.game.0,
            to: match envelope.recipient {
                Recipient::All => None,
                Recipient::Player(p) => Some(p),
            },
            message: &envelope.message,
        }
    }
}

/// Text renderer that keeps a copy of the board from the notifications it
/// has seen, so it can redraw it at the start of every round.
#[derive(Debug, Default)]
pub(super) struct TextView {
    layout: Option<Layout>,
    goal: Option<Goal>,
}

impl TextView {
    /// Format one envelope. `names` maps player ids to names.
    pub(super) fn format(&mut self, envelope: &Envelope, names: &[String]) -> String {
        let prefix = match envelope.recipient {
            Recipient::All => "[all]".to_string(),
            Recipient::Player(p) => format!("[{}]", player_name(names, p)),
        };
        let mut text = format!("{prefix} {}", envelope.message);

        match &envelope.message {
            Notification::CheckIn {
                right_walls,
                bottom_walls,
                goals,
                ..
            } if self.layout.is_none() => {
                let mut layout = Layout::open();
                for &c in right_walls {
                    layout = layout.with_right_wall(c);
                }
                for &c in bottom_walls {
                    layout = layout.with_bottom_wall(c);
                }
                for &g in goals {
                    layout = layout.with_goal(g);
                }
                self.layout = Some(layout);
            }
            Notification::RoundStarted { goal, .. } => self.goal = Some(*goal),
            Notification::RobotPositions { robots } => {
                if let Some(board) = self.board(robots) {
                    text.push('\n');
                    text.push_str(&render_board(&board, self.goal.as_ref(), false));
                }
            }
            _ => {}
        }
        text
    }

    fn board(&self, robots: &[RobotPlacement]) -> Option<Board> {
        let layout = self.layout.as_ref()?;
        let mut coords = [Coord::new(0, 0); ROBOT_COUNT];
        for placement in robots {
            coords[placement.color.index()] = placement.coord;
        }
        Board::with_robots(layout, coords).ok()
    }
}

/// Name for a player id; ids are 1-based positions in `names`.
pub(super) fn player_name(names: &[String], player: PlayerId) -> &str {
    usize::try_from(player.0)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| names.get(i))
        .map_or("?", String::as_str)
}
