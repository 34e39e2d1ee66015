//! Configuration type definitions
//!
//! Timing tunables and the fixed panel geometry. The firmware fills
//! [`TimingConfig`] from its build-time validated `monitor.toml`; everything
//! else uses the defaults.

use crate::Millis;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Panel width in pixels
pub const SCREEN_WIDTH: i32 = 128;

/// Panel height in pixels
pub const SCREEN_HEIGHT: i32 = 64;

/// Horizontal advance of one glyph (5px glyph + 1px spacing)
pub const GLYPH_WIDTH: i32 = 6;

/// Height of one glyph row
pub const GLYPH_HEIGHT: i32 = 8;

/// Timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimingConfig {
    /// Minimum interval between animation ticks (~16 FPS)
    pub frame_interval_ms: Millis,
    /// Minimum interval between repaints of the waiting screen
    pub waiting_repaint_ms: Millis,
    /// Data older than this is considered stale
    pub stale_after_ms: Millis,
    /// Low load held longer than this puts the face to sleep
    pub low_load_sleep_ms: Millis,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 60,
            waiting_repaint_ms: 1000,
            stale_after_ms: 4000,
            low_load_sleep_ms: 9000,
        }
    }
}
