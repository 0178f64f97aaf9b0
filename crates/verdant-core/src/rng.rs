#![forbid(unsafe_code)]

//! Deterministic xorshift32 PRNG.
//!
//! Decorative effects must be reproducible under a fixed seed so tests and
//! golden frames are stable. No external RNG crate is used; xorshift32 is
//! more than enough for visual jitter.

/// A seeded xorshift32 generator.
///
/// A zero seed is remapped to a fixed non-zero constant, since xorshift
/// has an all-zero fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Create a generator from a seed.
    #[inline]
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }

    /// Next raw 32-bit value (never zero).
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform f32 in `[0, 1)`.
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        // 24 mantissa bits keep the conversion exact.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform f32 in `[lo, hi)`. `lo >= hi` yields `lo`.
    #[inline]
    pub fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        if lo >= hi {
            return lo;
        }
        lo + self.next_f32() * (hi - lo)
    }

    /// Uniform f32 in `[-half, half)`; symmetric around zero.
    #[inline]
    pub fn symmetric_f32(&mut self, half: f32) -> f32 {
        self.range_f32(-half, half)
    }
}
