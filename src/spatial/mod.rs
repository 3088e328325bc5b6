//! Spatial data structures backing the generator
//!
//! This module contains the dense tile grid every pipeline stage mutates and
//! the room rectangles produced by placement.

/// Tile grid storage, tile constants, and the bulk noise fill
pub mod grid;
/// Axis-aligned room rectangles
pub mod rect;

pub use grid::{NoiseFillParams, Point, TileGrid};
pub use rect::Rect;
