//! Tick-driven animation engine
//!
//! [`AnimationState`] holds everything the renderer needs between frames:
//! target and eased gauge ratios, the ticker, and the face's timed
//! sub-machines. [`Animator::tick`] advances all of it by one frame.
//!
//! Each sub-machine is a plain value with an `advance` transition taking
//! `now` (and a random source where needed) and returning the next value.

pub mod animator;
pub mod mood;
pub mod sleep;
pub mod state;
pub mod ticker;
pub mod timers;

pub use animator::{head_bob, Animator, EASE_FACTOR};
pub use mood::{Face, Mood};
pub use sleep::{SleepState, SLEEP_LOAD_THRESHOLD};
pub use state::{AnimationState, Ratios};
pub use ticker::{Ticker, TICKER_CAPACITY};
pub use timers::{Blink, Sweat, TimedFlag, Wink};
