//! Random source for the idle animations
//!
//! Blink, wink and sweat timing only needs cheap, roughly uniform numbers.
//! The animator takes any [`RandomSource`], so tests can script the exact
//! sequence and the firmware can seed [`XorShift32`] from hardware entropy.

/// Source of bounded random numbers
pub trait RandomSource {
    /// Return a value in `0..bound` (0 when `bound` is 0)
    fn below(&mut self, bound: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, bound: u32) -> u32 {
        (**self).below(bound)
    }
}

/// Marsaglia xorshift32 generator
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Seed used when the caller supplies 0 (a zero state never changes)
    const FALLBACK_SEED: u32 = 0x2545_F491;

    /// Create a generator from a seed
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Next raw 32-bit value
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl RandomSource for XorShift32 {
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32() % bound
    }
}
