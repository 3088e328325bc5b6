//! Fractal simplex noise seeded from the deterministic random source
//!
//! The tile grid's bulk density fill samples this collaborator. The gradient
//! permutation table is shuffled with a [`SplitMix32`] stream, so noise output
//! is reproducible from the level seed alone.

use crate::math::rng::SplitMix32;
use rand::seq::SliceRandom;

/// Skew factor for 3-D simplex noise: 1/3
const F3: f64 = 1.0 / 3.0;
/// Unskew factor for 3-D simplex noise: 1/6
const G3: f64 = 1.0 / 6.0;

/// The twelve edge-midpoint gradients of a cube
const GRADIENTS: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Parameters controlling fractal accumulation of noise octaves
#[derive(Debug, Clone, Copy)]
pub struct NoiseParams {
    /// Number of octaves to sum
    pub octaves: u32,
    /// Base sampling frequency
    pub frequency: f64,
    /// Amplitude decay per octave
    pub persistence: f64,
    /// Overall amplitude scale
    pub amplitude: f64,
    /// Frequency growth per octave
    pub lacunarity: f64,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            octaves: 1,
            frequency: 0.01,
            persistence: 0.5,
            amplitude: 1.0,
            lacunarity: 2.0,
        }
    }
}

/// Deterministic 3-D simplex noise with fractal accumulation
///
/// Output of [`fractal3`](Self::fractal3) lies in `[-1, 1]`; consumers
/// normalize with `(1 + n) / 2` when a unit range is needed.
#[derive(Debug, Clone)]
pub struct FractalNoise {
    perm: [u8; 512],
}

impl FractalNoise {
    /// Build a noise source, consuming the random stream for table setup
    pub fn new(rng: &mut SplitMix32) -> Self {
        let mut table: [u8; 256] = std::array::from_fn(|i| i as u8);
        table.shuffle(rng);

        let perm = std::array::from_fn(|i| {
            let index = i % 256;
            table.get(index).copied().unwrap_or(0)
        });

        Self { perm }
    }

    fn hash(&self, i: usize) -> usize {
        usize::from(self.perm.get(i & 511).copied().unwrap_or(0))
    }

    fn gradient(index: usize) -> [f64; 3] {
        GRADIENTS.get(index % 12).copied().unwrap_or([0.0; 3])
    }

    /// Contribution of one simplex corner at offset (x, y, z)
    fn corner(&self, gi: usize, x: f64, y: f64, z: f64) -> f64 {
        let t = 0.6 - x * x - y * y - z * z;
        if t < 0.0 {
            return 0.0;
        }

        let [gx, gy, gz] = Self::gradient(gi);
        let t2 = t * t;
        t2 * t2 * gz.mul_add(z, gx.mul_add(x, gy * y))
    }

    /// Raw simplex noise at a 3-D point, in roughly `[-1, 1]`
    pub fn sample3(&self, x: f64, y: f64, z: f64) -> f64 {
        // Skew input space to determine the containing simplex cell
        let s = (x + y + z) * F3;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let k = (z + s).floor();

        let t = (i + j + k) * G3;
        let x0 = x - (i - t);
        let y0 = y - (j - t);
        let z0 = z - (k - t);

        // Rank the fractional coordinates to pick the simplex traversal order
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - f64::from(i1) + G3;
        let y1 = y0 - f64::from(j1) + G3;
        let z1 = z0 - f64::from(k1) + G3;
        let x2 = x0 - f64::from(i2) + 2.0 * G3;
        let y2 = y0 - f64::from(j2) + 2.0 * G3;
        let z2 = z0 - f64::from(k2) + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;
        let kk = (k as i64 & 255) as usize;

        let gi0 = self.hash(ii + self.hash(jj + self.hash(kk)));
        let gi1 =
            self.hash(ii + i1 as usize + self.hash(jj + j1 as usize + self.hash(kk + k1 as usize)));
        let gi2 =
            self.hash(ii + i2 as usize + self.hash(jj + j2 as usize + self.hash(kk + k2 as usize)));
        let gi3 = self.hash(ii + 1 + self.hash(jj + 1 + self.hash(kk + 1)));

        let n0 = self.corner(gi0, x0, y0, z0);
        let n1 = self.corner(gi1, x1, y1, z1);
        let n2 = self.corner(gi2, x2, y2, z2);
        let n3 = self.corner(gi3, x3, y3, z3);

        // Scale so output covers roughly [-1, 1]
        32.0 * (n0 + n1 + n2 + n3)
    }

    /// Fractal (summed-octave) noise at a 3-D point, normalized to `[-1, 1]`
    pub fn fractal3(&self, x: f64, y: f64, z: f64, params: &NoiseParams) -> f64 {
        let mut height = 0.0;

        for octave in 0..params.octaves {
            let freq = params.frequency * params.lacunarity.powi(octave as i32);
            let mult = params.amplitude * params.persistence.powi(octave as i32);
            height += self.sample3(x * freq, y * freq, z * freq) * mult;
        }

        // Normalize by the geometric series of octave amplitudes
        let norm = 2.0 - 1.0 / f64::from(2_u32.pow(params.octaves.saturating_sub(1)));
        height / norm
    }
}
