//! Blink, wink and sweat timers
//!
//! All three share the same shape: a [`TimedFlag`] that switches on for a
//! fixed duration, plus the time of the next roll or deadline.

use crate::random::RandomSource;
use crate::Millis;

/// How long a blink keeps the eyes shut
pub const BLINK_DURATION_MS: Millis = 120;
/// Minimum gap between blinks
pub const BLINK_GAP_MS: Millis = 2000;
/// Random extra gap between blinks
pub const BLINK_JITTER_MS: u32 = 3000;

/// How long a wink keeps the left eye shut
pub const WINK_DURATION_MS: Millis = 120;
/// Minimum gap between wink rolls
pub const WINK_GAP_MS: Millis = 1500;
/// Random extra gap between wink rolls
pub const WINK_JITTER_MS: u32 = 2000;
/// Wink probability per roll, percent
pub const WINK_CHANCE: u32 = 10;

/// How long a sweat drop stays visible
pub const SWEAT_DURATION_MS: Millis = 500;
/// Minimum gap between sweat rolls
pub const SWEAT_GAP_MS: Millis = 2000;
/// Random extra gap between sweat rolls
pub const SWEAT_JITTER_MS: u32 = 2000;
/// Sweat probability at or below the stress threshold, percent
pub const SWEAT_BASE_CHANCE: u32 = 5;
/// Load above which sweat becomes more likely
pub const SWEAT_LOAD_THRESHOLD: f32 = 0.7;

/// Boolean that stays on until a deadline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimedFlag {
    active: bool,
    until: Millis,
}

impl TimedFlag {
    pub const fn new() -> Self {
        Self {
            active: false,
            until: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Switch on until `now + duration`
    pub fn start(self, now: Millis, duration: Millis) -> Self {
        Self {
            active: true,
            until: now + duration,
        }
    }

    /// Switch off once `now` is past the deadline
    pub fn expire(self, now: Millis) -> Self {
        if self.active && now > self.until {
            Self::new()
        } else {
            self
        }
    }
}

fn schedule<R: RandomSource>(now: Millis, gap: Millis, jitter: u32, rng: &mut R) -> Millis {
    now + gap + Millis::from(rng.below(jitter))
}

/// Periodic blink of both eyes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Blink {
    flag: TimedFlag,
    /// `None` until the first tick schedules a deadline
    next: Option<Millis>,
}

impl Blink {
    pub const fn new() -> Self {
        Self {
            flag: TimedFlag::new(),
            next: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.flag.is_active()
    }

    /// Deadline of the next blink, once scheduled
    pub fn next_deadline(&self) -> Option<Millis> {
        self.next
    }

    pub fn advance<R: RandomSource>(self, now: Millis, rng: &mut R) -> Self {
        let mut next = self;
        match self.next {
            None => {
                next.next = Some(schedule(now, BLINK_GAP_MS, BLINK_JITTER_MS, rng));
            }
            Some(deadline) if now > deadline => {
                next.flag = next.flag.start(now, BLINK_DURATION_MS);
                next.next = Some(schedule(now, BLINK_GAP_MS, BLINK_JITTER_MS, rng));
            }
            Some(_) => {}
        }
        next.flag = next.flag.expire(now);
        next
    }
}

/// Occasional wink of the left eye
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Wink {
    flag: TimedFlag,
    /// `None` rolls on the next tick
    next_roll: Option<Millis>,
}

impl Wink {
    pub const fn new() -> Self {
        Self {
            flag: TimedFlag::new(),
            next_roll: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.flag.is_active()
    }

    /// Roll for a wink when due; never starts one while `blinking`
    pub fn advance<R: RandomSource>(self, now: Millis, blinking: bool, rng: &mut R) -> Self {
        let mut next = self;
        let due = self.next_roll.map_or(true, |at| now > at);
        if due {
            if rng.below(100) < WINK_CHANCE && !blinking {
                next.flag = next.flag.start(now, WINK_DURATION_MS);
            }
            next.next_roll = Some(schedule(now, WINK_GAP_MS, WINK_JITTER_MS, rng));
        }
        next.flag = next.flag.expire(now);
        next
    }
}

/// Sweat drop, more likely under heavy load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sweat {
    flag: TimedFlag,
    next_roll: Option<Millis>,
}

impl Sweat {
    pub const fn new() -> Self {
        Self {
            flag: TimedFlag::new(),
            next_roll: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.flag.is_active()
    }

    /// Chance of sweating at `load`, percent
    pub fn chance(load: f32) -> u32 {
        let stress = (load - SWEAT_LOAD_THRESHOLD).max(0.0) * 100.0;
        SWEAT_BASE_CHANCE + stress as u32
    }

    pub fn advance<R: RandomSource>(self, now: Millis, load: f32, rng: &mut R) -> Self {
        let mut next = self;
        let due = self.next_roll.map_or(true, |at| now > at);
        if due {
            if rng.below(100) < Self::chance(load) {
                next.flag = next.flag.start(now, SWEAT_DURATION_MS);
            }
            next.next_roll = Some(schedule(now, SWEAT_GAP_MS, SWEAT_JITTER_MS, rng));
        }
        next.flag = next.flag.expire(now);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::Scripted;

    #[test]
    fn test_timed_flag_expires_after_deadline() {
        let flag = TimedFlag::new().start(1000, 120);
        assert!(flag.expire(1120).is_active());
        assert!(!flag.expire(1121).is_active());
    }

    #[test]
    fn test_first_blink_only_schedules() {
        let mut rng = Scripted::new(&[500]);
        let blink = Blink::new().advance(100, &mut rng);
        assert!(!blink.is_active());
        assert_eq!(blink.next_deadline(), Some(2600));
    }

    #[test]
    fn test_blink_cycle() {
        let mut rng = Scripted::new(&[0, 1000]);
        let blink = Blink::new().advance(0, &mut rng);
        assert_eq!(blink.next_deadline(), Some(2000));

        // Deadline is exclusive
        let blink = blink.advance(2000, &mut rng);
        assert!(!blink.is_active());

        let blink = blink.advance(2001, &mut rng);
        assert!(blink.is_active());
        assert_eq!(blink.next_deadline(), Some(2001 + 2000 + 1000));

        let blink = blink.advance(2121, &mut rng);
        assert!(blink.is_active());
        let blink = blink.advance(2122, &mut rng);
        assert!(!blink.is_active());
    }

    #[test]
    fn test_blink_interval_bounds() {
        let mut rng = crate::XorShift32::new(7);
        let mut blink = Blink::new().advance(0, &mut rng);
        let mut now = 0;
        for _ in 0..50 {
            let deadline = blink.next_deadline().unwrap();
            assert!(deadline >= now + 2000 && deadline < now + 5000);
            now = deadline + 1;
            blink = blink.advance(now, &mut rng);
            assert!(blink.is_active());
        }
    }

    #[test]
    fn test_wink_rolls_on_first_tick() {
        let mut rng = Scripted::new(&[3, 0]);
        let wink = Wink::new().advance(0, false, &mut rng);
        assert!(wink.is_active());
        let wink = wink.advance(121, false, &mut rng);
        assert!(!wink.is_active());
    }

    #[test]
    fn test_wink_suppressed_while_blinking() {
        let mut rng = Scripted::new(&[0]);
        let wink = Wink::new().advance(0, true, &mut rng);
        assert!(!wink.is_active());
    }

    #[test]
    fn test_wink_roll_failure_waits_for_next_roll() {
        let mut rng = Scripted::new(&[50, 0, 0]);
        let wink = Wink::new().advance(10, false, &mut rng);
        assert!(!wink.is_active());
        // Next roll at 10 + 1500
        let wink = wink.advance(1510, false, &mut rng);
        assert!(!wink.is_active());
        let wink = wink.advance(1511, false, &mut rng);
        assert!(wink.is_active());
    }

    #[test]
    fn test_sweat_chance() {
        assert_eq!(Sweat::chance(0.0), 5);
        assert_eq!(Sweat::chance(0.7), 5);
        assert_eq!(Sweat::chance(0.95), 30);
        assert_eq!(Sweat::chance(1.0), 35);
    }

    #[test]
    fn test_sweat_under_load() {
        // Roll 20 fails at idle (chance 5) but succeeds at full load (chance 35)
        let mut rng = Scripted::new(&[20, 0]);
        let idle = Sweat::new().advance(0, 0.1, &mut rng);
        assert!(!idle.is_active());

        let mut rng = Scripted::new(&[20, 0]);
        let busy = Sweat::new().advance(0, 1.0, &mut rng);
        assert!(busy.is_active());
        assert!(busy.advance(500, 1.0, &mut rng).is_active());
        assert!(!busy.advance(501, 1.0, &mut rng).is_active());
    }
}
