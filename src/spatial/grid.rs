//! Dense square tile grid with sentinel bounds behavior
//!
//! Every generation stage mutates one shared grid in place. Reads outside the
//! grid return a sentinel and writes outside it are ignored, so callers never
//! branch on bounds; the sentinel also drives the door heuristic, which relies
//! on out-of-range neighbors never comparing equal to an empty tile.

use crate::math::{FractalNoise, NoiseParams};
use ndarray::Array2;

/// Unexcavated tile
pub const TILE_EMPTY: i32 = 0;
/// Room interior tile
pub const TILE_FLOOR: i32 = 1;
/// Corridor tile
pub const TILE_PATH: i32 = 2;
/// Perimeter wall tile
pub const TILE_WALL: i32 = 3;

/// Value returned for reads outside the grid
pub const OUT_OF_BOUNDS: i32 = -1;

/// A grid coordinate as `[x, y]`
pub type Point = [i32; 2];

/// Parameters for the bulk fractal-noise density fill
#[derive(Debug, Clone)]
pub struct NoiseFillParams {
    /// Fixed z-slice sampled from the 3-D noise
    pub z: f64,
    /// Only cells currently holding this value are replaced; `None` replaces any
    pub mask: Option<i32>,
    /// Replacement values, one per equal-width height bucket
    pub values: Vec<i32>,
    /// Fractal accumulation parameters
    pub noise: NoiseParams,
}

impl Default for NoiseFillParams {
    fn default() -> Self {
        Self {
            z: 0.0,
            mask: None,
            values: vec![TILE_EMPTY, TILE_FLOOR, TILE_PATH, TILE_WALL],
            noise: NoiseParams::default(),
        }
    }
}

/// Square matrix of small integer tile codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    cells: Array2<i32>,
    size: usize,
}

impl TileGrid {
    /// Create a grid of the given side length filled with one value
    pub fn new(size: usize, fill: i32) -> Self {
        Self {
            cells: Array2::from_elem((size, size), fill),
            size,
        }
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Whether a coordinate lies inside the grid
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    /// Read a cell, returning [`OUT_OF_BOUNDS`] outside the grid
    pub fn get(&self, x: i32, y: i32) -> i32 {
        if self.in_bounds(x, y) {
            self.cells
                .get((y as usize, x as usize))
                .copied()
                .unwrap_or(OUT_OF_BOUNDS)
        } else {
            OUT_OF_BOUNDS
        }
    }

    /// Write a cell; writes outside the grid are ignored
    pub fn set(&mut self, x: i32, y: i32, value: i32) {
        if !self.in_bounds(x, y) {
            return;
        }
        if let Some(cell) = self.cells.get_mut((y as usize, x as usize)) {
            *cell = value;
        }
    }

    /// Visit every cell in row-major order
    pub fn for_each(&self, mut callback: impl FnMut(i32, i32, i32)) {
        for ((y, x), &value) in self.cells.indexed_iter() {
            callback(x as i32, y as i32, value);
        }
    }

    /// Count cells holding a given value
    pub fn count(&self, value: i32) -> usize {
        self.cells.iter().filter(|&&v| v == value).count()
    }

    /// The grid contents as rows of tile values
    pub fn rows(&self) -> Vec<Vec<i32>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect()
    }

    /// Replace masked cells with bucketed fractal-noise values
    ///
    /// Each matching cell samples the noise collaborator at its coordinate,
    /// normalizes the signed result to `[0, 1]`, and picks the replacement
    /// whose equal-width bucket contains the height. In-place only.
    pub fn apply_noise_fill(&mut self, noise: &FractalNoise, params: &NoiseFillParams) {
        if params.values.is_empty() {
            return;
        }

        let buckets = params.values.len();

        for y in 0..self.size as i32 {
            for x in 0..self.size as i32 {
                let current = self.get(x, y);
                if params.mask.is_some_and(|mask| current != mask) {
                    continue;
                }

                let height =
                    (1.0 + noise.fractal3(f64::from(x), f64::from(y), params.z, &params.noise))
                        * 0.5;

                let bucket = ((height * buckets as f64) as usize).min(buckets - 1);
                if let Some(&value) = params.values.get(bucket) {
                    self.set(x, y, value);
                }
            }
        }
    }
}
