//! Game actors driven through the registry, with tokio's clock paused so
//! phase timers fire deterministically.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;

use ricochet::config::{GameConfig, Settings};
use ricochet::round::{ClientEvent, GameId, Notification, PlayerId};
use ricochet::session::{
    ChannelSink, Envelope, GameRegistry, PersistenceHooks, Recipient, SessionError,
};

const HOST: PlayerId = PlayerId(1);
const GUEST: PlayerId = PlayerId(2);

#[derive(Debug, Default)]
struct RecordingHooks {
    ended: Mutex<Vec<GameId>>,
    removed: Mutex<Vec<(GameId, PlayerId)>>,
}

impl PersistenceHooks for RecordingHooks {
    fn on_game_ended(&self, game: GameId) {
        self.ended.lock().unwrap().push(game);
    }

    fn on_player_removed(&self, game: GameId, player: PlayerId) {
        self.removed.lock().unwrap().push((game, player));
    }
}

fn settings(num_rounds: u32) -> Settings {
    Settings {
        game: GameConfig {
            num_rounds,
            pre_bid_timeout: Duration::from_secs(10),
            post_bid_timeout: Duration::from_secs(5),
            demo_timeout: Duration::from_secs(3),
        },
        seed: Some(7),
        ..Settings::default()
    }
}

/// Receive until `pred` matches, returning everything seen including the
/// match.
async fn recv_until(
    rx: &mut UnboundedReceiver<Envelope>,
    pred: impl Fn(&Notification) -> bool,
) -> Vec<Envelope> {
    let mut seen = Vec::new();
    while let Some(envelope) = rx.recv().await {
        let done = pred(&envelope.message);
        seen.push(envelope);
        if done {
            return seen;
        }
    }
    panic!("channel closed before the expected notification");
}

async fn wait_until_removed(registry: &GameRegistry, id: GameId) {
    for _ in 0..100 {
        if !registry.contains(id).await {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("{id} still registered");
}

#[tokio::test(start_paused = true)]
async fn test_join_sends_private_check_in() {
    let registry = GameRegistry::new();
    let (sink, mut rx) = ChannelSink::new();
    let hooks = Arc::new(RecordingHooks::default());
    let game = registry
        .create(HOST, &settings(2), Arc::new(sink), hooks)
        .await
        .unwrap();

    game.join(HOST, "host").unwrap();
    let seen = recv_until(&mut rx, |n| matches!(n, Notification::CheckIn { .. })).await;

    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].recipient, Recipient::All);
    assert_eq!(seen[1].recipient, Recipient::Player(HOST));
    assert_eq!(seen[1].game, game.id());
    match &seen[1].message {
        Notification::CheckIn {
            is_host, goals, robots, ..
        } => {
            assert!(*is_host);
            assert_eq!(goals.len(), 17);
            assert_eq!(robots.len(), 5);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(registry.contains(game.id()).await);
}

#[tokio::test(start_paused = true)]
async fn test_pre_bid_timer_advances_round() {
    let registry = GameRegistry::new();
    let (sink, mut rx) = ChannelSink::new();
    let game = registry
        .create(HOST, &settings(3), Arc::new(sink), Arc::new(RecordingHooks::default()))
        .await
        .unwrap();
    game.join(HOST, "host").unwrap();
    game.join(GUEST, "guest").unwrap();
    game.send(HOST, ClientEvent::Start).unwrap();

    recv_until(&mut rx, |n| matches!(n, Notification::RoundStarted { round: 1, .. })).await;
    let start = tokio::time::Instant::now();

    let seen = recv_until(&mut rx, |n| matches!(n, Notification::RoundStarted { round: 2, .. })).await;
    assert!(seen
        .iter()
        .any(|e| e.message == Notification::NoPointsAwarded { round: 1 }));
    assert!(start.elapsed() >= Duration::from_secs(10));
}

#[tokio::test(start_paused = true)]
async fn test_first_bid_switches_to_post_bid_timer() {
    let registry = GameRegistry::new();
    let (sink, mut rx) = ChannelSink::new();
    let game = registry
        .create(HOST, &settings(3), Arc::new(sink), Arc::new(RecordingHooks::default()))
        .await
        .unwrap();
    game.join(HOST, "host").unwrap();
    game.join(GUEST, "guest").unwrap();
    game.send(HOST, ClientEvent::Start).unwrap();
    recv_until(&mut rx, |n| matches!(n, Notification::RoundStarted { .. })).await;

    let start = tokio::time::Instant::now();
    game.send(GUEST, ClientEvent::Bid { moves: 6 }).unwrap();
    let seen = recv_until(&mut rx, |n| matches!(n, Notification::BidAccepted { .. })).await;
    assert!(matches!(
        seen.last().map(|e| &e.message),
        Some(Notification::BidAccepted { moves: 6, leading: true, .. })
    ));

    let seen = recv_until(&mut rx, |n| matches!(n, Notification::DemonstratorAssigned { .. })).await;
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(5));
    assert!(elapsed < Duration::from_secs(10));
    assert!(matches!(
        seen.last().map(|e| &e.message),
        Some(Notification::DemonstratorAssigned { player, moves: 6, .. }) if *player == GUEST
    ));

    // Nobody moves: the demo timer runs out and costs the guest a point.
    let seen = recv_until(&mut rx, |n| matches!(n, Notification::ScoreChanged { .. })).await;
    assert!(matches!(
        seen.last().map(|e| &e.message),
        Some(Notification::ScoreChanged { delta: -1, score: -1, .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn test_game_end_unregisters_and_fires_hooks() {
    let registry = GameRegistry::new();
    let (sink, mut rx) = ChannelSink::new();
    let hooks = Arc::new(RecordingHooks::default());
    let game = registry
        .create(HOST, &settings(1), Arc::new(sink), hooks.clone())
        .await
        .unwrap();
    game.join(HOST, "host").unwrap();
    game.send(HOST, ClientEvent::Start).unwrap();

    let seen = recv_until(&mut rx, |n| matches!(n, Notification::GameEnded { .. })).await;
    assert_eq!(
        seen.last().map(|e| e.message.to_string()),
        Some("host wins with 0 point(s)!".to_string())
    );

    wait_until_removed(&registry, game.id()).await;
    assert_eq!(*hooks.ended.lock().unwrap(), vec![game.id()]);
    assert_eq!(
        registry.send(game.id(), HOST, ClientEvent::Start).await,
        Err(SessionError::NotFound(game.id()))
    );
}

#[tokio::test(start_paused = true)]
async fn test_everyone_leaving_ends_game() {
    let registry = GameRegistry::new();
    let (sink, mut rx) = ChannelSink::new();
    let hooks = Arc::new(RecordingHooks::default());
    let game = registry
        .create(HOST, &settings(5), Arc::new(sink), hooks.clone())
        .await
        .unwrap();
    game.join(HOST, "host").unwrap();
    game.join(GUEST, "guest").unwrap();

    game.send(GUEST, ClientEvent::Leave).unwrap();
    game.send(HOST, ClientEvent::Leave).unwrap();
    let seen = recv_until(&mut rx, |n| matches!(n, Notification::GameEnded { .. })).await;
    assert_eq!(
        seen.last().map(|e| e.message.to_string()),
        Some("where did everyone go?".to_string())
    );

    wait_until_removed(&registry, game.id()).await;
    assert_eq!(
        *hooks.removed.lock().unwrap(),
        vec![(game.id(), GUEST), (game.id(), HOST)]
    );
}

#[tokio::test(start_paused = true)]
async fn test_games_run_independently() {
    let registry = GameRegistry::new();
    let (sink, mut rx) = ChannelSink::new();
    let sink = Arc::new(sink);
    let first = registry
        .create(HOST, &settings(1), sink.clone(), Arc::new(RecordingHooks::default()))
        .await
        .unwrap();
    let second = registry
        .create(HOST, &settings(1), sink, Arc::new(RecordingHooks::default()))
        .await
        .unwrap();
    assert_ne!(first.id(), second.id());
    assert_eq!(registry.len().await, 2);

    first.join(HOST, "host").unwrap();
    second.join(HOST, "host").unwrap();
    first.send(HOST, ClientEvent::Leave).unwrap();

    let seen = recv_until(&mut rx, |n| matches!(n, Notification::GameEnded { .. })).await;
    assert_eq!(seen.last().map(|e| e.game), Some(first.id()));
    wait_until_removed(&registry, first.id()).await;
    assert_eq!(registry.ids().await, vec![second.id()]);
    assert!(!second.is_closed());
}
