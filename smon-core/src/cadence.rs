//! Minimum-interval gate
//!
//! The display loop runs as often as bytes arrive, but frames are only drawn
//! at a capped rate. A `Cadence` answers "has enough time passed?" and
//! records the accepted call.

use crate::Millis;

/// Rate limiter for periodic work
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cadence {
    interval: Millis,
    last: Option<Millis>,
}

impl Cadence {
    /// Create a gate that opens at most once per `interval` ms
    pub const fn new(interval: Millis) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// True on the first call and whenever `interval` has elapsed
    pub fn ready(&mut self, now: Millis) -> bool {
        match self.last {
            Some(last) if now.saturating_sub(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}
