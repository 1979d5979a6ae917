//! Player registry and scoring.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a player's session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State for a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Session identifier.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Running score. Failed demonstrations can push it below zero.
    pub score: i32,
    /// Whether this player may start and configure the game.
    pub is_host: bool,
}

impl Player {
    /// Create a new player with a zero score.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, is_host: bool) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            is_host,
        }
    }

    /// Snapshot of this player's name and score.
    #[must_use]
    pub fn standing(&self) -> Standing {
        Standing {
            player: self.id,
            name: self.name.clone(),
            score: self.score,
        }
    }
}

/// A player's name and score as reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Session identifier.
    pub player: PlayerId,
    /// Display name.
    pub name: String,
    /// Score at the time of the report.
    pub score: i32,
}

/// Players of one game, kept in join order.
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player. Returns `false` if the id is already registered.
    pub fn add(&mut self, player: Player) -> bool {
        if self.contains(player.id) {
            return false;
        }
        self.players.push(player);
        true
    }

    /// Remove a player, returning them if they were registered.
    pub fn remove(&mut self, id: PlayerId) -> Option<Player> {
        let idx = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(idx))
    }

    /// Get a player by id.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Check if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.get(id).is_some()
    }

    /// Display name of `id`, or `"unknown"`.
    #[must_use]
    pub fn name_of(&self, id: PlayerId) -> &str {
        self.get(id).map_or("unknown", |p| p.name.as_str())
    }

    /// Add `delta` to a player's score and return the new score.
    pub fn adjust_score(&mut self, id: PlayerId, delta: i32) -> Option<i32> {
        let player = self.players.iter_mut().find(|p| p.id == id)?;
        player.score = player.score.saturating_add(delta);
        Some(player.score)
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check if nobody is left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Iterate in join order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Standings of every player in join order.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        self.players.iter().map(Player::standing).collect()
    }

    /// Players sharing the highest score, in join order.
    ///
    /// Empty when no players remain.
    #[must_use]
    pub fn winners(&self) -> Vec<&Player> {
        let mut winners: Vec<&Player> = Vec::new();
        for player in &self.players {
            match winners.first().map(|best| best.score) {
                Some(best) if player.score > best => {
                    winners.clear();
                    winners.push(player);
                }
                Some(best) if player.score < best => {}
                _ => winners.push(player),
            }
        }
        winners
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(scores: &[i32]) -> PlayerRegistry {
        let mut reg = PlayerRegistry::new();
        for (i, &score) in scores.iter().enumerate() {
            let mut p = Player::new(PlayerId(i as u64 + 1), format!("p{}", i + 1), i == 0);
            p.score = score;
            assert!(reg.add(p));
        }
        reg
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut reg = registry(&[0]);
        assert!(!reg.add(Player::new(PlayerId(1), "again", false)));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_score_can_go_negative() {
        let mut reg = registry(&[0]);
        assert_eq!(reg.adjust_score(PlayerId(1), -1), Some(-1));
        assert_eq!(reg.adjust_score(PlayerId(1), -1), Some(-2));
        assert_eq!(reg.adjust_score(PlayerId(9), 1), None);
    }

    #[test]
    fn test_winners_single() {
        let reg = registry(&[1, 3, 2]);
        let winners = reg.winners();
        assert_eq!(winners.len(), 1);
        assert_eq!(winners[0].id, PlayerId(2));
    }

    #[test]
    fn test_winners_tie_in_join_order() {
        let reg = registry(&[2, -1, 2, 0]);
        let ids: Vec<PlayerId> = reg.winners().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PlayerId(1), PlayerId(3)]);
    }

    #[test]
    fn test_winners_all_negative() {
        let reg = registry(&[-3, -1, -2]);
        let ids: Vec<PlayerId> = reg.winners().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PlayerId(2)]);
    }

    #[test]
    fn test_winners_empty() {
        assert!(PlayerRegistry::new().winners().is_empty());
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut reg = registry(&[0, 0, 0]);
        assert_eq!(reg.remove(PlayerId(2)).map(|p| p.name), Some("p2".to_string()));
        let ids: Vec<PlayerId> = reg.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PlayerId(1), PlayerId(3)]);
        assert!(reg.remove(PlayerId(2)).is_none());
    }
}
