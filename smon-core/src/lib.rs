//! Board-agnostic core logic for the SMON display
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Telemetry snapshot with sticky field retention
//! - Derived gauge ratios, adaptive network scale and ticker text
//! - Tick-driven animator (easing, blink/wink/sweat timers, sleep)
//! - Link liveness supervision and frame cadence gating
//! - Timing configuration and the injectable random source
//!
//! Nothing here blocks or reads a clock. Every time-dependent entry point
//! takes `now` in milliseconds since boot.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod animation;
pub mod cadence;
pub mod config;
pub mod format;
pub mod liveness;
pub mod metrics;
pub mod monitor;
pub mod random;
pub mod telemetry;

/// Milliseconds since boot
pub type Millis = u64;

pub use animation::{AnimationState, Animator, Face, Mood};
pub use cadence::Cadence;
pub use config::TimingConfig;
pub use liveness::{LinkStatus, LivenessSupervisor};
pub use monitor::{Frame, Monitor};
pub use random::{RandomSource, XorShift32};
pub use telemetry::Snapshot;
