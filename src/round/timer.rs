//! The single phase timer of a game.
//!
//! The controller never sleeps. Arming a timer hands out a fresh token; the
//! session schedules the expiry and feeds the token back in. Only the most
//! recently armed token is honoured, so an expiry that lost a race with a
//! player event is dropped.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which phase a timer forces the end of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    /// Bidding window with no bids yet.
    PreBid,
    /// Grace period after the first bid.
    PostBid,
    /// Demonstration window.
    Demo,
}

impl fmt::Display for TimerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimerKind::PreBid => "pre-bid",
            TimerKind::PostBid => "post-bid",
            TimerKind::Demo => "demo",
        };
        f.write_str(name)
    }
}

/// Opaque handle identifying one arming of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl fmt::Display for TimerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Holder for the one live timer.
#[derive(Debug, Clone, Default)]
pub(crate) struct TimerSlot {
    generation: u64,
    live: Option<(TimerToken, TimerKind)>,
}

impl TimerSlot {
    /// Replace any live timer with a new one of `kind`.
    pub(crate) fn arm(&mut self, kind: TimerKind) -> TimerToken {
        self.generation += 1;
        let token = TimerToken(self.generation);
        self.live = Some((token, kind));
        token
    }

    /// Cancel the live timer. Returns `true` if one was live.
    pub(crate) fn cancel(&mut self) -> bool {
        self.live.take().is_some()
    }

    /// Consume the live timer if `token` is current.
    pub(crate) fn fire(&mut self, token: TimerToken) -> Option<TimerKind> {
        match self.live {
            Some((live, kind)) if live == token => {
                self.live = None;
                Some(kind)
            }
            _ => None,
        }
    }

    /// The live timer, if any.
    pub(crate) fn live(&self) -> Option<(TimerToken, TimerKind)> {
        self.live
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rearm_invalidates_old_token() {
        let mut slot = TimerSlot::default();
        let first = slot.arm(TimerKind::PreBid);
        let second = slot.arm(TimerKind::PostBid);
        assert_ne!(first, second);
        assert_eq!(slot.fire(first), None);
        assert_eq!(slot.fire(second), Some(TimerKind::PostBid));
        assert_eq!(slot.live(), None);
    }

    #[test]
    fn test_fire_only_once() {
        let mut slot = TimerSlot::default();
        let token = slot.arm(TimerKind::Demo);
        assert_eq!(slot.fire(token), Some(TimerKind::Demo));
        assert_eq!(slot.fire(token), None);
    }

    #[test]
    fn test_cancel() {
        let mut slot = TimerSlot::default();
        assert!(!slot.cancel());
        let token = slot.arm(TimerKind::Demo);
        assert!(slot.cancel());
        assert_eq!(slot.fire(token), None);
    }
}
