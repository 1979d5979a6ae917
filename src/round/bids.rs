//! Ranked bids for the current round.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::round::PlayerId;

/// Fewest moves a bid may claim.
pub const MIN_BID_MOVES: u32 = 2;

/// A claim to solve the current goal in `moves` moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    /// Who placed the bid.
    pub player: PlayerId,
    /// Claimed move count. Counts down while demonstrating.
    pub moves: u32,
    /// Milliseconds since the game was created.
    pub timestamp: u64,
}

/// Where a newly accepted bid landed in the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidPlacement {
    /// The bid is now the best of the round.
    Leading,
    /// Another bid is still ahead.
    Trailing,
}

/// Bids of one round, best first.
///
/// Fewer moves rank higher; equal move counts keep their arrival order.
#[derive(Debug, Clone, Default)]
pub struct BidLedger {
    bids: VecDeque<Bid>,
}

impl BidLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `bid` behind every bid with the same or fewer moves.
    ///
    /// Returns `None` if this player already bid the same number of moves.
    pub fn push(&mut self, bid: Bid) -> Option<BidPlacement> {
        if self.contains(bid.player, bid.moves) {
            return None;
        }

        let idx = self
            .bids
            .iter()
            .rposition(|b| b.moves <= bid.moves)
            .map_or(0, |i| i + 1);
        self.bids.insert(idx, bid);

        Some(if idx == 0 {
            BidPlacement::Leading
        } else {
            BidPlacement::Trailing
        })
    }

    /// Remove and return the best bid.
    pub fn pop_best(&mut self) -> Option<Bid> {
        self.bids.pop_front()
    }

    /// The best bid, if any.
    #[must_use]
    pub fn best(&self) -> Option<&Bid> {
        self.bids.front()
    }

    /// Check if `player` already bid exactly `moves`.
    #[must_use]
    pub fn contains(&self, player: PlayerId, moves: u32) -> bool {
        self.bids
            .iter()
            .any(|b| b.player == player && b.moves == moves)
    }

    /// Drop every bid placed by `player`.
    pub fn remove_player(&mut self, player: PlayerId) {
        self.bids.retain(|b| b.player != player);
    }

    /// Check if no bids are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty()
    }

    /// Number of bids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bids.len()
    }

    /// Remove all bids.
    pub fn clear(&mut self) {
        self.bids.clear();
    }

    /// Iterate best first.
    pub fn iter(&self) -> impl Iterator<Item = &Bid> {
        self.bids.iter()
    }
}
