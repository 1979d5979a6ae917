//! Board command implementation.

use super::CliError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ricochet::board::{Board, BoardSetup};
use ricochet::render::{render_board, render_positions};

/// Execute the board command.
///
/// # Errors
///
/// Returns an error if the setup is unknown or robots cannot be placed.
pub(crate) fn execute(setup: u8, seed: Option<u64>, color: bool) -> Result<(), CliError> {
    let setup = BoardSetup::try_from(setup)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let board = Board::new(setup, &mut rng)?;

    println!("Board {setup}");
    print!("{}", render_board(&board, None, color));
    println!();
    println!("{}", render_positions(&board));
    println!();
    println!("Goals ({}):", board.goals().len());
    for goal in board.goals() {
        println!("  {goal}");
    }
    Ok(())
}
