//! One task per game.
//!
//! Player input and timer expiry share a single mailbox, so the controller
//! sees them strictly one after another. Timers are sleeping tasks that post
//! their token back into that mailbox; they hold only a weak sender and
//! never touch game state.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::round::{ClientEvent, Effect, GameId, PlayerId, RoundController, TimerToken};
use crate::session::{GameRegistry, NotificationSink, PersistenceHooks, SessionError};

/// Input to a game's mailbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    /// A player connected.
    Join {
        /// Session id.
        player: PlayerId,
        /// Display name.
        name: String,
    },
    /// A validated event from a player.
    Event {
        /// Sender.
        player: PlayerId,
        /// What they did.
        event: ClientEvent,
    },
    /// A scheduled timer ran out.
    TimerFired(TimerToken),
}

/// Cloneable address of a running game.
#[derive(Debug, Clone)]
pub struct GameHandle {
    id: GameId,
    tx: mpsc::UnboundedSender<SessionInput>,
}

impl GameHandle {
    pub(crate) const fn new(id: GameId, tx: mpsc::UnboundedSender<SessionInput>) -> Self {
        Self { id, tx }
    }

    /// The game this handle talks to.
    #[must_use]
    pub const fn id(&self) -> GameId {
        self.id
    }

    /// Add a player.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has stopped.
    pub fn join(&self, player: PlayerId, name: impl Into<String>) -> Result<(), SessionError> {
        self.post(SessionInput::Join {
            player,
            name: name.into(),
        })
    }

    /// Deliver an event from `player`.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has stopped.
    pub fn send(&self, player: PlayerId, event: ClientEvent) -> Result<(), SessionError> {
        self.post(SessionInput::Event { player, event })
    }

    /// Check if the game task has stopped.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    fn post(&self, input: SessionInput) -> Result<(), SessionError> {
        self.tx
            .send(input)
            .map_err(|_| SessionError::GameClosed(self.id))
    }
}

/// Owns a controller and carries out its effects.
pub(crate) struct GameActor {
    controller: RoundController,
    rx: mpsc::UnboundedReceiver<SessionInput>,
    mailbox: mpsc::WeakUnboundedSender<SessionInput>,
    sink: Arc<dyn NotificationSink>,
    hooks: Arc<dyn PersistenceHooks>,
    registry: GameRegistry,
    timer: Option<JoinHandle<()>>,
}

impl fmt::Debug for GameActor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameActor")
            .field("game", &self.controller.id())
            .field("phase", &self.controller.phase())
            .finish_non_exhaustive()
    }
}

impl GameActor {
    pub(crate) fn new(
        controller: RoundController,
        tx: &mpsc::UnboundedSender<SessionInput>,
        rx: mpsc::UnboundedReceiver<SessionInput>,
        sink: Arc<dyn NotificationSink>,
        hooks: Arc<dyn PersistenceHooks>,
        registry: GameRegistry,
    ) -> Self {
        Self {
            controller,
            rx,
            mailbox: tx.downgrade(),
            sink,
            hooks,
            registry,
            timer: None,
        }
    }

    /// Run until the game ends or every handle is dropped.
    pub(crate) async fn run(mut self) {
        let id = self.controller.id();
        debug!(game = %id, "game task started");

        while let Some(input) = self.rx.recv().await {
            let result = match input {
                SessionInput::Join { player, name } => self.controller.add_player(player, name),
                SessionInput::Event { player, event } => {
                    self.controller.handle_event(player, event)
                }
                SessionInput::TimerFired(token) => self.controller.on_timer(token),
            };
            if let Err(rejection) = result {
                debug!(game = %id, %rejection, "input rejected");
            }
            self.apply_effects();

            if self.controller.is_ended() {
                break;
            }
        }

        self.cancel_timer();
        self.rx.close();
        self.registry.remove(id).await;
        info!(game = %id, rounds = self.controller.round(), "game task stopped");
    }

    fn apply_effects(&mut self) {
        let id = self.controller.id();
        for effect in self.controller.drain_effects() {
            match effect {
                Effect::Broadcast(message) => self.sink.broadcast(id, &message),
                Effect::SendTo(player, message) => self.sink.send_to(id, player, &message),
                Effect::ArmTimer { token, duration } => self.schedule(token, duration),
                Effect::CancelTimer => self.cancel_timer(),
                Effect::PlayerRemoved(player) => self.hooks.on_player_removed(id, player),
                Effect::GameEnded => self.hooks.on_game_ended(id),
            }
        }
    }

    fn schedule(&mut self, token: TimerToken, duration: Duration) {
        self.cancel_timer();
        let mailbox = self.mailbox.clone();
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            if let Some(tx) = mailbox.upgrade() {
                if tx.send(SessionInput::TimerFired(token)).is_err() {
                    debug!(%token, "timer fired after game stopped");
                }
            }
        }));
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.abort();
        }
    }
}
