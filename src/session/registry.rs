//! Process-wide table of running games.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{RwLock, mpsc};
use tracing::info;

use crate::config::Settings;
use crate::round::{ClientEvent, GameId, PlayerId, RoundController};
use crate::session::{GameActor, GameHandle, NotificationSink, PersistenceHooks, SessionError};

/// Maps game ids to running games.
///
/// Games insert themselves on creation and remove themselves when they end.
/// Clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct GameRegistry {
    games: Arc<RwLock<HashMap<GameId, GameHandle>>>,
    next_id: Arc<AtomicU64>,
}

impl GameRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a game for `host` and start its task.
    ///
    /// Must be called from within a tokio runtime. The host still has to
    /// [`join`](GameHandle::join) like everyone else.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be built.
    pub async fn create(
        &self,
        host: PlayerId,
        settings: &Settings,
        sink: Arc<dyn NotificationSink>,
        hooks: Arc<dyn PersistenceHooks>,
    ) -> Result<GameHandle, SessionError> {
        let id = GameId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let controller = RoundController::from_settings(id, host, settings)?;

        let (tx, rx) = mpsc::unbounded_channel();
        let handle = GameHandle::new(id, tx.clone());
        self.games.write().await.insert(id, handle.clone());

        let actor = GameActor::new(controller, &tx, rx, sink, hooks, self.clone());
        tokio::spawn(actor.run());
        info!(game = %id, %host, setup = %settings.board_setup, "game created");
        Ok(handle)
    }

    /// Look up a running game.
    pub async fn get(&self, id: GameId) -> Option<GameHandle> {
        self.games.read().await.get(&id).cloned()
    }

    /// Deliver an event from `player` to game `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is unknown or has stopped.
    pub async fn send(
        &self,
        id: GameId,
        player: PlayerId,
        event: ClientEvent,
    ) -> Result<(), SessionError> {
        let handle = self.get(id).await.ok_or(SessionError::NotFound(id))?;
        handle.send(player, event)
    }

    /// Drop a game from the table.
    pub async fn remove(&self, id: GameId) -> Option<GameHandle> {
        self.games.write().await.remove(&id)
    }

    /// Check if a game is registered.
    pub async fn contains(&self, id: GameId) -> bool {
        self.games.read().await.contains_key(&id)
    }

    /// Number of running games.
    pub async fn len(&self) -> usize {
        self.games.read().await.len()
    }

    /// Check if no games are running.
    pub async fn is_empty(&self) -> bool {
        self.games.read().await.is_empty()
    }

    /// Ids of all running games, sorted.
    pub async fn ids(&self) -> Vec<GameId> {
        let mut ids: Vec<GameId> = self.games.read().await.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
