//! Monitor facade
//!
//! Ties the snapshot, animation state, liveness supervisor and the two frame
//! cadences together behind the three calls the display loop needs:
//! [`Monitor::ingest_line`] for every completed line, [`Monitor::poll_frame`]
//! to ask whether (and what) to draw, and the accessors the renderer reads.

use smon_protocol::DecodeError;

use crate::animation::{AnimationState, Animator, Face};
use crate::cadence::Cadence;
use crate::config::TimingConfig;
use crate::liveness::{LinkStatus, LivenessSupervisor};
use crate::metrics;
use crate::random::RandomSource;
use crate::telemetry::{self, Snapshot};
use crate::Millis;

/// What the display loop should paint this time round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frame {
    /// Static waiting screen, nothing received yet
    Waiting,
    /// Animation advanced; draw the dashboard
    Dashboard,
}

/// Complete display-side state machine
pub struct Monitor<R> {
    snapshot: Snapshot,
    state: AnimationState,
    liveness: LivenessSupervisor,
    animator: Animator<R>,
    frame_gate: Cadence,
    waiting_gate: Cadence,
}

impl<R: RandomSource> Monitor<R> {
    pub fn new(rng: R, config: TimingConfig) -> Self {
        Self {
            snapshot: Snapshot::new(),
            state: AnimationState::new(),
            liveness: LivenessSupervisor::new(config.stale_after_ms),
            animator: Animator::new(rng, config),
            frame_gate: Cadence::new(config.frame_interval_ms),
            waiting_gate: Cadence::new(config.waiting_repaint_ms),
        }
    }

    /// Decode a completed line received at `now`
    ///
    /// On success the derived metrics are recomputed and the link counts as
    /// fresh. On failure nothing changes.
    pub fn ingest_line(&mut self, line: &[u8], now: Millis) -> Result<(), DecodeError> {
        telemetry::decode(line, &mut self.snapshot)?;
        metrics::recompute(&self.snapshot, &mut self.state);
        self.liveness.record_valid_message(now);
        Ok(())
    }

    /// Advance the animation unconditionally
    pub fn tick(&mut self, now: Millis) {
        self.animator.tick(now, &mut self.state, &self.liveness);
    }

    /// Decide what to draw at `now`, ticking the animation if due
    ///
    /// Returns `None` when the relevant cadence has not elapsed.
    pub fn poll_frame(&mut self, now: Millis) -> Option<Frame> {
        if self.is_waiting() {
            return self.waiting_gate.ready(now).then_some(Frame::Waiting);
        }
        if !self.frame_gate.ready(now) {
            return None;
        }
        self.tick(now);
        Some(Frame::Dashboard)
    }

    /// True until the first valid message
    pub fn is_waiting(&self) -> bool {
        !self.liveness.has_ever_received_data()
    }

    pub fn status(&self, now: Millis) -> LinkStatus {
        self.liveness.status(now)
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn face(&self, now: Millis) -> Face {
        self.state.face(now)
    }
}
