#![no_main]

//! Board movement fuzzer.
//!
//! Slides robots in arbitrary order on a randomly seeded board, with
//! occasional snapshot and reset, and checks occupancy stays consistent.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ricochet::board::{Board, BoardSetup, Direction, RobotColor, check_invariants};

/// A fuzzer-generated board operation.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzOp {
    /// Slide a robot.
    Move { robot: u8, direction: u8 },
    /// Snapshot positions.
    Save,
    /// Restore the snapshot.
    Reset,
}

/// Structured input for board fuzzing.
#[derive(Arbitrary, Debug)]
struct BoardInput {
    /// Seed for robot placement.
    seed: u64,
    /// Operations to apply.
    ops: Vec<FuzzOp>,
}

fuzz_target!(|input: BoardInput| {
    let mut rng = StdRng::seed_from_u64(input.seed);
    let Ok(mut board) = Board::new(BoardSetup::Setup1, &mut rng) else {
        return;
    };

    for op in input.ops.into_iter().take(200) {
        match op {
            FuzzOp::Move { robot, direction } => {
                let robot = RobotColor::ALL[usize::from(robot) % RobotColor::ALL.len()];
                let direction = Direction::ALL[usize::from(direction) % Direction::ALL.len()];
                let expected = board.slide(robot, direction);
                let moved = board.move_robot(robot, direction);
                assert_eq!(moved, expected);
            }
            FuzzOp::Save => board.save_robot_positions(),
            FuzzOp::Reset => {
                board.reset_robot_positions();
                assert_eq!(board.positions(), board.saved_positions());
            }
        }

        let violations = check_invariants(&board);
        assert!(violations.is_empty(), "invariants violated: {violations:?}");
    }
});
