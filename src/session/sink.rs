//! Collaborator seams: where notifications go and who hears about
//! lifecycle events.

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::round::{GameId, Notification, PlayerId};

/// Delivers notifications to players.
///
/// Calls are fire-and-forget. Implementations must not block and must
/// handle their own delivery failures.
pub trait NotificationSink: Send + Sync {
    /// Send to every player of `game`.
    fn broadcast(&self, game: GameId, message: &Notification);

    /// Send to one player of `game`.
    fn send_to(&self, game: GameId, player: PlayerId, message: &Notification);
}

/// Lifecycle callbacks for whatever stores games and players.
///
/// Failures stay inside the implementation; they never reach the game.
pub trait PersistenceHooks: Send + Sync {
    /// `game` reached its end.
    fn on_game_ended(&self, game: GameId);

    /// `player` left `game`.
    fn on_player_removed(&self, game: GameId, player: PlayerId);
}

/// Who a queued notification is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    /// Every player of the game.
    All,
    /// One player.
    Player(PlayerId),
}

/// A notification addressed to some players of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Source game.
    pub game: GameId,
    /// Addressee.
    pub recipient: Recipient,
    /// Payload.
    pub message: Notification,
}

/// Sink that queues envelopes on an unbounded channel for a transport to
/// pick up.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Envelope>,
}

impl ChannelSink {
    /// Create a sink and the receiving end of its queue.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Envelope>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn push(&self, game: GameId, recipient: Recipient, message: &Notification) {
        let envelope = Envelope {
            game,
            recipient,
            message: message.clone(),
        };
        if let Err(e) = self.tx.send(envelope) {
            warn!(%game, error = %e, "notification receiver gone");
        }
    }
}

impl NotificationSink for ChannelSink {
    fn broadcast(&self, game: GameId, message: &Notification) {
        self.push(game, Recipient::All, message);
    }

    fn send_to(&self, game: GameId, player: PlayerId, message: &Notification) {
        self.push(game, Recipient::Player(player), message);
    }
}

/// Hooks that only log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHooks;

impl PersistenceHooks for LoggingHooks {
    fn on_game_ended(&self, game: GameId) {
        info!(%game, "game ended");
    }

    fn on_player_removed(&self, game: GameId, player: PlayerId) {
        info!(%game, %player, "player removed");
    }
}
