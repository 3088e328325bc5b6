//! Corridor, door, and wall plotting over the finished grid

use crate::spatial::TileGrid;
use crate::spatial::grid::{Point, TILE_EMPTY, TILE_FLOOR, TILE_WALL};

/// The eight surrounding neighbor offsets
const NEIGHBORS: [Point; 8] = [
    [-1, 0],
    [-1, -1],
    [0, -1],
    [1, -1],
    [1, 0],
    [1, 1],
    [0, 1],
    [-1, 1],
];

/// Write `tile` at every point of every path
pub fn plot_paths(grid: &mut TileGrid, paths: &[Vec<Point>], tile: i32) {
    for path in paths {
        for point in path {
            grid.set(point[0], point[1], tile);
        }
    }
}

/// Whether a corridor endpoint reads as a doorway
///
/// A door is flanked by unexcavated cells on both sides of one axis. Reads
/// beyond the grid return the sentinel, which never equals an empty tile, so
/// border-adjacent points are never classified as doors.
fn is_door(grid: &TileGrid, point: Point) -> bool {
    let [x, y] = point;

    (grid.get(x, y - 1) == TILE_EMPTY && grid.get(x, y + 1) == TILE_EMPTY)
        || (grid.get(x - 1, y) == TILE_EMPTY && grid.get(x + 1, y) == TILE_EMPTY)
}

/// Trim path endpoints and classify them as doorway tiles
///
/// For each non-empty path the first point, and the last point when any
/// remain, are removed from the path and considered as door candidates.
/// The paths are mutated in place; the returned list holds the candidates
/// that passed the flanking test.
pub fn detect_doors(grid: &TileGrid, paths: &mut [Vec<Point>]) -> Vec<Point> {
    let mut candidates: Vec<Point> = Vec::new();

    for path in paths.iter_mut() {
        if path.is_empty() {
            continue;
        }

        candidates.push(path.remove(0));

        if let Some(last) = path.pop() {
            candidates.push(last);
        }
    }

    candidates
        .into_iter()
        .filter(|&point| is_door(grid, point))
        .collect()
}

/// Surround every floor tile with walls
///
/// Each cell holding exactly [`TILE_FLOOR`] converts its empty 8-neighbors to
/// [`TILE_WALL`]. Corridor tiles are left open to the surrounding void.
/// Running the pass twice changes nothing, since walls are no longer empty.
pub fn plot_walls(grid: &mut TileGrid) {
    let mut floors: Vec<Point> = Vec::new();

    grid.for_each(|x, y, value| {
        if value == TILE_FLOOR {
            floors.push([x, y]);
        }
    });

    for [x, y] in floors {
        for [dx, dy] in NEIGHBORS {
            let (nx, ny) = (x + dx, y + dy);
            if grid.get(nx, ny) == TILE_EMPTY {
                grid.set(nx, ny, TILE_WALL);
            }
        }
    }
}
