//! Generation constants and runtime configuration defaults

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u32 = 42;

/// Default side length of the square tile grid
pub const DEFAULT_MAP_SIZE: usize = 64;

/// Default smallest room extent
pub const DEFAULT_MIN_ROOM_SIZE: i32 = 3;

/// Default largest room extent
pub const DEFAULT_MAX_ROOM_SIZE: i32 = 9;

/// Default clearance kept between rooms
pub const DEFAULT_ROOM_PADDING: i32 = 2;

/// Default number of room placement attempts
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

// Corridor construction defaults
/// Default number of runner-up pairs recorded per spanning round
pub const DEFAULT_EXTRA_LOOP_LEVEL: usize = 0;

/// Default survival probability for a recorded loop candidate
pub const DEFAULT_EXTRA_LOOP_DENSITY: f64 = 0.1;

/// Default wall-clock budget for spanning construction
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

// PNG export settings
/// RGBA colors for empty, floor, path, and wall tiles in order
pub const TILE_COLORS: [[u8; 4]; 4] = [
    [0, 0, 0, 0],
    [212, 196, 160, 255],
    [150, 150, 160, 255],
    [72, 56, 44, 255],
];

/// RGBA color for tile values outside the color table
pub const UNKNOWN_TILE_COLOR: [u8; 4] = [255, 0, 255, 255];

/// Glyphs for the terminal preview, indexed like [`TILE_COLORS`]
pub const TILE_GLYPHS: [char; 4] = [' ', '.', '+', '#'];
