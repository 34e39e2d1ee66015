//! Animation state container

use super::animator::head_bob;
use super::mood::{Face, Mood};
use super::sleep::SleepState;
use super::ticker::Ticker;
use super::timers::{Blink, Sweat, Wink};
use crate::Millis;

/// Initial and minimum network scale ceiling, KB/s
pub const NET_SCALE_FLOOR: f32 = 1.0;

/// Gauge ratios, each in [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ratios {
    pub cpu: f32,
    pub mem: f32,
    pub net: f32,
}

impl Ratios {
    /// Average of CPU and memory ratio
    pub fn load(&self) -> f32 {
        0.5 * (self.cpu + self.mem)
    }

    /// Move every ratio `factor` of the way toward `target`, clamped to [0, 1]
    pub fn ease_toward(self, target: Ratios, factor: f32) -> Ratios {
        Ratios {
            cpu: ease(self.cpu, target.cpu, factor),
            mem: ease(self.mem, target.mem, factor),
            net: ease(self.net, target.net, factor),
        }
    }
}

fn ease(current: f32, target: f32, factor: f32) -> f32 {
    (current + (target - current) * factor).clamp(0.0, 1.0)
}

/// Everything animated between frames
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationState {
    /// Ratios derived from the latest snapshot
    pub target: Ratios,
    /// Eased ratios shown on the gauges
    pub current: Ratios,
    /// Adaptive ceiling for rx + tx throughput, >= 1
    pub net_scale_max: f32,
    pub ticker: Ticker,
    pub blink: Blink,
    pub wink: Wink,
    pub sweat: Sweat,
    pub sleep: SleepState,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    /// Zeroed state with the idle ticker
    pub fn new() -> Self {
        Self {
            target: Ratios::default(),
            current: Ratios::default(),
            net_scale_max: NET_SCALE_FLOOR,
            ticker: Ticker::new(),
            blink: Blink::new(),
            wink: Wink::new(),
            sweat: Sweat::new(),
            sleep: SleepState::new(),
        }
    }

    /// Current load (average of eased CPU and memory ratio)
    pub fn load(&self) -> f32 {
        self.current.load()
    }

    /// True while the face is asleep
    pub fn is_sleeping(&self) -> bool {
        self.sleep.sleeping
    }

    /// Expression for this frame; sleep overrides the load mood
    pub fn mood(&self) -> Mood {
        if self.sleep.sleeping {
            Mood::Asleep
        } else {
            Mood::classify(self.load())
        }
    }

    /// Everything the renderer needs to draw the face at `now`
    pub fn face(&self, now: Millis) -> Face {
        let blinking = self.blink.is_active();
        Face {
            mood: self.mood(),
            left_eye_closed: blinking || self.wink.is_active(),
            right_eye_closed: blinking,
            sweating: self.sweat.is_active(),
            bob: head_bob(now),
            bubble_step: self.sleep.bubble_step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_moves_fraction_of_gap() {
        let current = Ratios::default();
        let target = Ratios { cpu: 1.0, mem: 0.5, net: 0.0 };
        let next = current.ease_toward(target, 0.15);
        assert!((next.cpu - 0.15).abs() < 1e-6);
        assert!((next.mem - 0.075).abs() < 1e-6);
        assert_eq!(next.net, 0.0);
    }

    #[test]
    fn test_ease_clamps() {
        let current = Ratios { cpu: 1.0, mem: 0.0, net: 0.5 };
        let target = Ratios { cpu: 5.0, mem: -3.0, net: 0.5 };
        let next = current.ease_toward(target, 0.15);
        assert_eq!(next.cpu, 1.0);
        assert_eq!(next.mem, 0.0);
        assert_eq!(next.net, 0.5);
    }

    #[test]
    fn test_new_state_defaults() {
        let state = AnimationState::new();
        assert_eq!(state.net_scale_max, 1.0);
        assert_eq!(state.load(), 0.0);
        assert!(!state.is_sleeping());
        assert_eq!(state.mood(), Mood::Happy);
    }

    #[test]
    fn test_sleep_overrides_mood() {
        let mut state = AnimationState::new();
        state.current = Ratios { cpu: 0.9, mem: 0.9, net: 0.0 };
        assert_eq!(state.mood(), Mood::Sad);
        state.sleep.sleeping = true;
        assert_eq!(state.mood(), Mood::Asleep);
        assert_eq!(state.face(0).mood, Mood::Asleep);
    }
}
