//! Benchmarks for board movement and full rounds.
//!
//! Sliding is the hot path: every demonstration step and every solver probe
//! goes through it.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ricochet::board::{Board, BoardSetup, Direction, RobotColor};
use ricochet::config::Settings;
use ricochet::round::{ClientEvent, GameId, PlayerId, RoundController};

fn board(seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    match Board::new(BoardSetup::Setup1, &mut rng) {
        Ok(board) => board,
        Err(e) => panic!("board setup failed: {e}"),
    }
}

fn bench_slide(c: &mut Criterion) {
    let board = board(42);

    c.bench_function("slide_all_robots_all_directions", |b| {
        b.iter(|| {
            for robot in RobotColor::ALL {
                for dir in Direction::ALL {
                    black_box(board.slide(black_box(robot), black_box(dir)));
                }
            }
        });
    });
}

fn bench_move_and_reset(c: &mut Criterion) {
    let mut board = board(42);
    board.save_robot_positions();

    c.bench_function("move_sequence_then_reset", |b| {
        b.iter(|| {
            for (i, dir) in Direction::ALL.iter().cycle().take(20).enumerate() {
                let robot = RobotColor::ALL[i % RobotColor::ALL.len()];
                black_box(board.move_robot(robot, *dir));
            }
            black_box(board.reset_robot_positions())
        });
    });
}

fn bench_random_placement(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut board = board(7);

    c.bench_function("place_robots_randomly", |b| {
        b.iter(|| black_box(board.place_robots_randomly(&mut rng)));
    });
}

fn bench_round(c: &mut Criterion) {
    let settings = Settings {
        seed: Some(42),
        ..Settings::default()
    };
    let host = PlayerId(1);

    c.bench_function("full_game_no_bids", |b| {
        b.iter(|| {
            let Ok(mut game) = RoundController::from_settings(GameId(1), host, &settings) else {
                return;
            };
            let _ = game.add_player(host, "host");
            let _ = game.handle_event(host, ClientEvent::Start);
            while let Some((token, _)) = game.live_timer() {
                let _ = game.on_timer(token);
            }
            black_box(game.drain_effects());
        });
    });
}

criterion_group!(
    benches,
    bench_slide,
    bench_move_and_reset,
    bench_random_placement,
    bench_round
);
criterion_main!(benches);
