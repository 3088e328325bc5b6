//! Deterministic randomness and noise for the generator

/// Fractal simplex noise seeded from the random source
pub mod noise;
/// SplitMix32 seeded random number generation
pub mod rng;

pub use noise::{FractalNoise, NoiseParams};
pub use rng::SplitMix32;
