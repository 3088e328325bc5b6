//! Deterministic procedural dungeon layout generation
//!
//! Places non-overlapping rooms on a square tile grid by rejection sampling,
//! connects them through a Prim's-style near-minimum spanning tree carved
//! with A* corridors, detects doorway tiles at corridor endpoints, and
//! optionally plots perimeter walls. A fixed seed reproduces a level byte
//! for byte.

#![forbid(unsafe_code)]

/// Room placement, pathfinding, connection, and the generation pipeline
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Deterministic randomness and fractal noise
pub mod math;
/// Tile grid and room rectangle data structures
pub mod spatial;

pub use algorithm::{GeneratedLevel, LevelConfig, LevelGenerator};
pub use io::error::{GenerationError, Result};
pub use math::SplitMix32;
pub use spatial::{Rect, TileGrid};
