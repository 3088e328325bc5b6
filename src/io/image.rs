//! PNG export of a finished tile grid

use crate::io::configuration::{TILE_COLORS, UNKNOWN_TILE_COLOR};
use crate::io::error::{GenerationError, Result};
use crate::spatial::TileGrid;
use image::{ImageBuffer, Rgba};
use std::path::Path;

/// RGBA color for a tile value
///
/// Empty tiles render transparent; values beyond the color table get a
/// saturated marker color so stray tile codes are visible at a glance.
fn tile_color(value: i32) -> [u8; 4] {
    usize::try_from(value)
        .ok()
        .and_then(|index| TILE_COLORS.get(index))
        .copied()
        .unwrap_or(UNKNOWN_TILE_COLOR)
}

/// Export the grid as a one-pixel-per-tile PNG
///
/// # Errors
///
/// Returns an error if the image cannot be saved to the given path.
pub fn export_grid_as_png(grid: &TileGrid, output_path: &Path) -> Result<()> {
    let side = grid.size() as u32;
    let mut img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::new(side, side);

    grid.for_each(|x, y, value| {
        img.put_pixel(x as u32, y as u32, Rgba(tile_color(value)));
    });

    img.save(output_path).map_err(|source| GenerationError::ImageExport {
        path: output_path.to_path_buf(),
        source,
    })
}
