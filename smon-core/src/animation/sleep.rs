//! Sleep onset and the Zz bubble

use crate::Millis;

/// Load below which the low-load sleep timer runs
pub const SLEEP_LOAD_THRESHOLD: f32 = 0.22;

/// Minimum time between bubble steps while asleep
pub const BUBBLE_STEP_MS: Millis = 600;

/// Number of bubble animation steps
pub const BUBBLE_STEPS: u8 = 3;

/// Sleep tracking
///
/// The face falls asleep when the link goes stale or load stays low for too
/// long. It only wakes when load is up again *and* data is fresh, so a quiet
/// link keeps it asleep even if the last known load was high.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SleepState {
    pub sleeping: bool,
    /// Start of the current low-load stretch
    pub low_load_since: Option<Millis>,
    /// Zz bubble step, 0..3
    pub bubble_step: u8,
    /// Time of the last bubble step
    pub bubble_at: Millis,
}

impl SleepState {
    pub const fn new() -> Self {
        Self {
            sleeping: false,
            low_load_since: None,
            bubble_step: 0,
            bubble_at: 0,
        }
    }

    /// Advance one tick
    ///
    /// `stale` is the link condition at `now`; `sleep_after` is how long load
    /// must stay below [`SLEEP_LOAD_THRESHOLD`] before dozing off.
    pub fn advance(self, now: Millis, load: f32, stale: bool, sleep_after: Millis) -> Self {
        let mut next = self;
        if stale {
            next.sleeping = true;
        }

        if load < SLEEP_LOAD_THRESHOLD {
            let since = *next.low_load_since.get_or_insert(now);
            if !next.sleeping && now.saturating_sub(since) > sleep_after {
                next.sleeping = true;
            }
        } else {
            next.low_load_since = None;
            if !stale {
                next.sleeping = false;
            }
            next.bubble_step = 0;
        }

        if next.sleeping && now.saturating_sub(next.bubble_at) > BUBBLE_STEP_MS {
            next.bubble_at = now;
            next.bubble_step = (next.bubble_step + 1) % BUBBLE_STEPS;
        }
        next
    }
}
