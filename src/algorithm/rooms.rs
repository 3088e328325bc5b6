//! Rejection-sampled room placement
//!
//! Candidate rectangles are drawn uniformly inside the grid margin and kept
//! only when they clear every previously accepted room by the configured
//! padding. Accepted rooms are never revisited, so the room count is bounded
//! by the iteration budget rather than guaranteed.

use crate::math::SplitMix32;
use crate::spatial::{Rect, TileGrid};

/// Room placement parameters
#[derive(Debug, Clone, Copy)]
pub struct RoomConfig {
    /// Smallest allowed room extent, at least 1
    pub min_room_size: i32,
    /// Largest allowed room extent, at least `min_room_size`
    pub max_room_size: i32,
    /// Clearance kept between accepted rooms
    pub padding: i32,
    /// Number of placement attempts
    pub max_iterations: u32,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            min_room_size: crate::io::configuration::DEFAULT_MIN_ROOM_SIZE,
            max_room_size: crate::io::configuration::DEFAULT_MAX_ROOM_SIZE,
            padding: crate::io::configuration::DEFAULT_ROOM_PADDING,
            max_iterations: crate::io::configuration::DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Sample a room extent biased toward square aspect ratios
fn sample_dimensions(rng: &mut SplitMix32, config: &RoomConfig) -> (i32, i32) {
    let base_size = rng.range(config.min_room_size, config.max_room_size);
    let aspect_ratio = rng.normal().mul_add(0.5, 0.75);

    let width = (f64::from(base_size) * aspect_ratio).round() as i32;
    let height = (f64::from(base_size) / aspect_ratio).round() as i32;

    (
        width.clamp(config.min_room_size, config.max_room_size),
        height.clamp(config.min_room_size, config.max_room_size),
    )
}

/// Place non-overlapping rooms on a square grid of side `size`
///
/// Runs exactly `max_iterations` attempts; each samples an origin in
/// `[1, size - max_room_size)` on both axes and an extent in
/// `[min_room_size, max_room_size]`, and keeps the candidate only if it
/// clears all accepted rooms with `padding` margin. The result preserves
/// acceptance order and may be empty.
pub fn place_rooms(rng: &mut SplitMix32, size: usize, config: &RoomConfig) -> Vec<Rect> {
    let mut rooms: Vec<Rect> = Vec::new();
    let upper = size as i32 - config.max_room_size;

    for _ in 0..config.max_iterations {
        let x = rng.range(1, upper);
        let y = rng.range(1, upper);
        let (w, h) = sample_dimensions(rng, config);

        let candidate = Rect::new(x, y, w, h);

        if !rooms
            .iter()
            .any(|existing| candidate.intersects(existing, config.padding))
        {
            rooms.push(candidate);
        }
    }

    rooms
}

/// Write `tile` over every room footprint
///
/// The footprint is inclusive of `[x, x + w] x [y, y + h]`, one tile beyond
/// the nominal extent, so adjacent walls and perimeter points share a border
/// tile with the room interior.
pub fn plot_rooms(grid: &mut TileGrid, rooms: &[Rect], tile: i32) {
    for room in rooms {
        for y in room.y..=room.y + room.h {
            for x in room.x..=room.x + room.w {
                grid.set(x, y, tile);
            }
        }
    }
}
