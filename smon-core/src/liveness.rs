//! Link liveness supervision
//!
//! Tracks when the last successfully decoded message arrived. The display
//! has three link conditions:
//!
//! - **Waiting**: nothing valid has ever been received. The dashboard is not
//!   shown; a static waiting screen is painted instead.
//! - **Fresh**: the last valid message is at most `stale_after` ms old.
//! - **Stale**: the link went quiet. The dashboard stays up and the face
//!   falls asleep; the waiting screen is never shown again.

use crate::Millis;

/// Link condition at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkStatus {
    /// No valid message received since boot
    Waiting,
    /// Data is recent
    Fresh,
    /// Data stopped arriving
    Stale,
}

/// Tracks recency of valid input
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LivenessSupervisor {
    stale_after: Millis,
    last_valid: Option<Millis>,
}

impl LivenessSupervisor {
    /// Create a supervisor with the given staleness window
    pub const fn new(stale_after: Millis) -> Self {
        Self {
            stale_after,
            last_valid: None,
        }
    }

    /// Record a successfully decoded message
    pub fn record_valid_message(&mut self, now: Millis) {
        self.last_valid = Some(now);
    }

    /// True once any valid message has been decoded
    pub fn has_ever_received_data(&self) -> bool {
        self.last_valid.is_some()
    }

    /// Time since the last valid message
    pub fn since_last(&self, now: Millis) -> Option<Millis> {
        self.last_valid.map(|last| now.saturating_sub(last))
    }

    /// True when no valid message arrived within the staleness window
    ///
    /// Before the first message the link counts as stale.
    pub fn is_stale(&self, now: Millis) -> bool {
        match self.since_last(now) {
            Some(age) => age > self.stale_after,
            None => true,
        }
    }

    /// Current link condition
    pub fn status(&self, now: Millis) -> LinkStatus {
        if !self.has_ever_received_data() {
            LinkStatus::Waiting
        } else if self.is_stale(now) {
            LinkStatus::Stale
        } else {
            LinkStatus::Fresh
        }
    }
}
