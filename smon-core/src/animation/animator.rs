//! Per-frame animation step

use super::state::AnimationState;
use crate::config::{TimingConfig, SCREEN_WIDTH};
use crate::liveness::LivenessSupervisor;
use crate::random::RandomSource;
use crate::Millis;

/// Fraction of the remaining gap closed per tick
pub const EASE_FACTOR: f32 = 0.15;

/// Head bob amplitude in pixels
const BOB_AMPLITUDE: f64 = 1.5;
/// Head bob period divisor, ms per radian
const BOB_MS_PER_RADIAN: f64 = 400.0;

/// Vertical head offset at `now`, in -2..=2
pub fn head_bob(now: Millis) -> i32 {
    libm::round(BOB_AMPLITUDE * libm::sin(now as f64 / BOB_MS_PER_RADIAN)) as i32
}

/// Advances an [`AnimationState`] one frame at a time
///
/// Holds the random source and timing configuration. The caller owns the
/// state and decides when to tick.
pub struct Animator<R> {
    rng: R,
    config: TimingConfig,
}

impl<R: RandomSource> Animator<R> {
    pub fn new(rng: R, config: TimingConfig) -> Self {
        Self { rng, config }
    }

    /// Advance all animations to `now`
    pub fn tick(&mut self, now: Millis, state: &mut AnimationState, liveness: &LivenessSupervisor) {
        state.current = state.current.ease_toward(state.target, EASE_FACTOR);
        state.ticker.scroll(SCREEN_WIDTH);

        state.blink = state.blink.advance(now, &mut self.rng);
        state.wink = state.wink.advance(now, state.blink.is_active(), &mut self.rng);
        state.sweat = state.sweat.advance(now, state.load(), &mut self.rng);

        let stale = liveness.is_stale(now);
        state.sleep = state
            .sleep
            .advance(now, state.load(), stale, self.config.low_load_sleep_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Mood, Ratios};
    use crate::random::testing::Scripted;

    fn animator() -> Animator<Scripted> {
        // 99 never wins a wink or sweat roll
        Animator::new(Scripted::new(&[99]), TimingConfig::default())
    }

    fn fresh_at(now: Millis) -> LivenessSupervisor {
        let mut liveness = LivenessSupervisor::new(TimingConfig::default().stale_after_ms);
        liveness.record_valid_message(now);
        liveness
    }

    #[test]
    fn test_easing_converges_without_overshoot() {
        let mut animator = animator();
        let mut state = AnimationState::new();
        state.target = Ratios { cpu: 0.9, mem: 0.3, net: 1.0 };

        let mut previous = state.current;
        for tick in 0..60u64 {
            let now = tick * 60;
            animator.tick(now, &mut state, &fresh_at(now));
            assert!(state.current.cpu >= previous.cpu && state.current.cpu <= 0.9);
            assert!(state.current.mem >= previous.mem && state.current.mem <= 0.3);
            assert!(state.current.net <= 1.0);
            previous = state.current;
        }
        assert!((state.current.cpu - 0.9).abs() < 0.01);
        assert!((state.current.mem - 0.3).abs() < 0.01);

        state.target = Ratios::default();
        for tick in 60..120u64 {
            let now = tick * 60;
            animator.tick(now, &mut state, &fresh_at(now));
            assert!(state.current.cpu <= previous.cpu && state.current.cpu >= 0.0);
            previous = state.current;
        }
        assert!(state.current.cpu < 0.01);
    }

    #[test]
    fn test_sleep_onset_after_low_load_window() {
        let mut animator = animator();
        let mut state = AnimationState::new();

        animator.tick(0, &mut state, &fresh_at(0));
        assert_eq!(state.sleep.low_load_since, Some(0));
        animator.tick(9000, &mut state, &fresh_at(9000));
        assert!(!state.is_sleeping());
        animator.tick(9060, &mut state, &fresh_at(9060));
        assert!(state.is_sleeping());
        assert_eq!(state.mood(), Mood::Asleep);
    }

    #[test]
    fn test_fresh_idle_data_does_not_wake() {
        let mut animator = animator();
        let mut state = AnimationState::new();
        state.sleep.sleeping = true;

        for tick in 0..20u64 {
            let now = tick * 60;
            animator.tick(now, &mut state, &fresh_at(now));
            assert!(state.is_sleeping());
        }
    }

    #[test]
    fn test_stale_link_sleeps_and_load_wakes_when_fresh() {
        let mut animator = animator();
        let mut state = AnimationState::new();
        state.current = Ratios { cpu: 0.8, mem: 0.8, net: 0.0 };
        state.target = state.current;

        let mut liveness = LivenessSupervisor::new(4000);
        liveness.record_valid_message(0);
        animator.tick(4000, &mut state, &liveness);
        assert!(!state.is_sleeping());
        animator.tick(4001, &mut state, &liveness);
        assert!(state.is_sleeping());
        assert_eq!(state.mood(), Mood::Asleep);

        liveness.record_valid_message(5000);
        animator.tick(5000, &mut state, &liveness);
        assert!(!state.is_sleeping());
        assert_eq!(state.mood(), Mood::Sad);
    }

    #[test]
    fn test_ticker_scrolls_each_tick() {
        let mut animator = animator();
        let mut state = AnimationState::new();
        state.ticker.set_text(" Smart Monitor   ");
        animator.tick(0, &mut state, &fresh_at(0));
        animator.tick(60, &mut state, &fresh_at(60));
        assert_eq!(state.ticker.offset(), SCREEN_WIDTH - 2);
    }

    #[test]
    fn test_blink_closes_both_eyes() {
        let mut animator = Animator::new(Scripted::new(&[99, 0]), TimingConfig::default());
        let mut state = AnimationState::new();
        animator.tick(0, &mut state, &fresh_at(0));
        let deadline = state.blink.next_deadline().unwrap();

        animator.tick(deadline + 1, &mut state, &fresh_at(deadline + 1));
        let face = state.face(deadline + 1);
        assert!(face.left_eye_closed);
        assert!(face.right_eye_closed);
    }

    #[test]
    fn test_head_bob_range() {
        assert_eq!(head_bob(0), 0);
        let mut seen_up = false;
        let mut seen_down = false;
        for now in (0..20_000).step_by(17) {
            let bob = head_bob(now);
            assert!((-2..=2).contains(&bob));
            seen_up |= bob > 0;
            seen_down |= bob < 0;
        }
        assert!(seen_up && seen_down);
    }
}
