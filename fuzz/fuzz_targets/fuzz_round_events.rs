#![no_main]

//! Round state machine fuzzer.
//!
//! Feeds arbitrary player events and timer expiries into a controller and
//! checks that rejected inputs leave no effects behind and the board stays
//! consistent.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ricochet::board::{Direction, RobotColor, check_invariants};
use ricochet::config::Settings;
use ricochet::round::{ClientEvent, GameId, Phase, PlayerId, RoundController};

/// A fuzzer-generated input.
#[derive(Arbitrary, Debug, Clone)]
enum FuzzInput {
    Start { player: u8 },
    Bid { player: u8, moves: u8 },
    Move { player: u8, robot: u8, direction: u8 },
    Chat { player: u8, len: u8 },
    Leave { player: u8 },
    Join { player: u8 },
    /// Fire the live timer, if any.
    Timer,
}

#[derive(Arbitrary, Debug)]
struct RoundInput {
    seed: u64,
    inputs: Vec<FuzzInput>,
}

fn player(p: u8) -> PlayerId {
    PlayerId(u64::from(p % 4) + 1)
}

fuzz_target!(|input: RoundInput| {
    let settings = Settings {
        seed: Some(input.seed),
        ..Settings::default()
    };
    let Ok(mut game) = RoundController::from_settings(GameId(1), PlayerId(1), &settings) else {
        return;
    };
    for p in 1..=3 {
        let _ = game.add_player(PlayerId(p), format!("p{p}"));
    }
    game.drain_effects();

    for input in input.inputs.into_iter().take(300) {
        let result = match input {
            FuzzInput::Start { player: p } => game.handle_event(player(p), ClientEvent::Start),
            FuzzInput::Bid { player: p, moves } => {
                game.handle_event(player(p), ClientEvent::Bid { moves: u32::from(moves % 20) })
            }
            FuzzInput::Move { player: p, robot, direction } => game.handle_event(
                player(p),
                ClientEvent::Move {
                    robot: RobotColor::ALL[usize::from(robot) % RobotColor::ALL.len()],
                    direction: Direction::ALL[usize::from(direction) % Direction::ALL.len()],
                },
            ),
            FuzzInput::Chat { player: p, len } => game.handle_event(
                player(p),
                ClientEvent::Chat { msg: "x".repeat(usize::from(len % 60)) },
            ),
            FuzzInput::Leave { player: p } => game.handle_event(player(p), ClientEvent::Leave),
            FuzzInput::Join { player: p } => game.add_player(player(p), "late"),
            FuzzInput::Timer => match game.live_timer() {
                Some((token, _)) => game.on_timer(token),
                None => Ok(()),
            },
        };

        let effects = game.drain_effects();
        if result.is_err() {
            assert!(effects.is_empty(), "rejected input produced effects");
        }
        if game.phase() == Phase::Demonstrating {
            assert!(game.current_bid().is_some());
        }
        assert!(check_invariants(game.board()).is_empty());
    }
});
