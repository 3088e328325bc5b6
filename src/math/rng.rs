//! SplitMix32 deterministic random source
//!
//! Every placement and tie-breaking decision in the generator draws from this
//! one stream, so a fixed seed reproduces a level byte for byte. The mixing
//! function follows the SplitMix32 construction: a golden-ratio increment
//! followed by two xorshift/multiply rounds and a final xorshift.

use rand::{RngCore, SeedableRng};

/// Golden-ratio increment applied to the state before mixing
const GOLDEN_GAMMA: u32 = 0x9E37_79B9;

/// Largest integer exactly representable in an f64 mantissa (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Seeded pseudo-random number generator with a 32-bit state
///
/// Implements [`RngCore`] and [`SeedableRng`] so it composes with the rand
/// ecosystem (slice shuffling, distributions) while keeping the raw draw
/// sequence under this crate's control.
#[derive(Debug, Clone)]
pub struct SplitMix32 {
    state: u32,
    starting_seed: u32,
}

impl SplitMix32 {
    /// Create a generator from a 32-bit seed
    pub const fn new(seed: u32) -> Self {
        Self {
            state: seed,
            starting_seed: seed,
        }
    }

    /// Reseed the generator, restarting its sequence
    pub const fn reseed(&mut self, seed: u32) {
        self.state = seed;
        self.starting_seed = seed;
    }

    /// The seed the generator was constructed or last reseeded with
    pub const fn starting_seed(&self) -> u32 {
        self.starting_seed
    }

    /// Advance the state and return the next mixed 32-bit value
    fn next_mixed(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);

        let mut t = self.state ^ (self.state >> 16);
        t = t.wrapping_mul(0x21F0_AAAD);
        t ^= t >> 15;
        t = t.wrapping_mul(0x735A_2D97);
        t ^ (t >> 15)
    }

    /// Next value in `[0, 1)`
    pub fn next_float(&mut self) -> f64 {
        self.next_mixed() as f64 / 4_294_967_296.0
    }

    /// Next non-negative integer below 2^53
    pub fn next_int(&mut self) -> i64 {
        (self.next_float() * MAX_SAFE_INTEGER) as i64
    }

    /// Uniform integer in `[min, max)`, truncated toward zero
    pub fn range(&mut self, min: i32, max: i32) -> i32 {
        (min as f64 + self.next_float() * (max - min) as f64) as i32
    }

    /// Approximately Gaussian value with mean 0.5 and standard deviation 1/6
    ///
    /// Box–Muller over two independent uniform draws; zero draws are
    /// rejected so the logarithm stays finite.
    pub fn normal(&mut self) -> f64 {
        let mean = 0.5;
        let stddev = 1.0 / 6.0;

        let mut u = 0.0;
        let mut v = 0.0;

        while u == 0.0 {
            u = self.next_float();
        }
        while v == 0.0 {
            v = self.next_float();
        }

        let n = (-2.0 * u.ln()).sqrt() * (2.0 * std::f64::consts::PI * v).cos();

        n.mul_add(stddev, mean)
    }
}

impl RngCore for SplitMix32 {
    fn next_u32(&mut self) -> u32 {
        self.next_mixed()
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_mixed());
        let low = u64::from(self.next_mixed());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_mixed().to_le_bytes();
            let len = chunk.len();
            if let Some(src) = bytes.get(..len) {
                chunk.copy_from_slice(src);
            }
        }
    }
}

impl SeedableRng for SplitMix32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
