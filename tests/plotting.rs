//! Validates corridor plotting, the door heuristic, and wall plotting

use roomweave::algorithm::plotting::{detect_doors, plot_paths, plot_walls};
use roomweave::spatial::TileGrid;
use roomweave::spatial::grid::{Point, TILE_EMPTY, TILE_FLOOR, TILE_PATH, TILE_WALL};

#[test]
fn test_corridor_endpoint_flanked_by_empty_is_a_door() {
    let mut grid = TileGrid::new(7, TILE_EMPTY);
    let mut paths = vec![vec![[2, 3], [3, 3], [4, 3]]];

    plot_paths(&mut grid, &paths, TILE_PATH);
    let doors = detect_doors(&grid, &mut paths);

    // Both trimmed endpoints have empty cells north and south
    assert_eq!(doors, vec![[2, 3], [4, 3]]);
    assert_eq!(paths, vec![vec![[3, 3]]]);
}

#[test]
fn test_endpoint_flanked_by_floor_is_not_a_door() {
    let mut grid = TileGrid::new(7, TILE_EMPTY);
    let mut paths = vec![vec![[2, 3], [3, 3], [4, 3]]];

    plot_paths(&mut grid, &paths, TILE_PATH);

    // Block the perpendicular flanks of both endpoints
    for x in [2, 4] {
        grid.set(x, 2, TILE_FLOOR);
        grid.set(x, 4, TILE_FLOOR);
    }

    let doors = detect_doors(&grid, &mut paths);

    assert!(doors.is_empty());
}

#[test]
fn test_border_adjacent_endpoint_is_never_a_door() {
    let mut grid = TileGrid::new(5, TILE_EMPTY);

    // Corner endpoint: both flank reads on each axis hit the sentinel
    let mut paths = vec![vec![[0, 0], [1, 0]]];
    plot_paths(&mut grid, &paths, TILE_PATH);

    let doors = detect_doors(&grid, &mut paths);

    assert!(doors.is_empty());
}

#[test]
fn test_empty_paths_are_skipped() {
    let grid = TileGrid::new(5, TILE_EMPTY);
    let mut paths: Vec<Vec<Point>> = vec![Vec::new(), Vec::new()];

    let doors = detect_doors(&grid, &mut paths);

    assert!(doors.is_empty());
    assert!(paths.iter().all(Vec::is_empty));
}

#[test]
fn test_single_point_path_trims_to_nothing() {
    let mut grid = TileGrid::new(5, TILE_EMPTY);
    let mut paths = vec![vec![[2, 2]]];
    plot_paths(&mut grid, &paths, TILE_PATH);

    let doors = detect_doors(&grid, &mut paths);

    assert_eq!(doors, vec![[2, 2]]);
    assert!(paths[0].is_empty());
}

#[test]
fn test_walls_surround_floors_but_not_corridors() {
    let mut grid = TileGrid::new(8, TILE_EMPTY);

    // A 2x2 floor block and a detached corridor tile
    for y in 3..5 {
        for x in 3..5 {
            grid.set(x, y, TILE_FLOOR);
        }
    }
    grid.set(0, 0, TILE_PATH);

    plot_walls(&mut grid);

    // The floor block gains a full wall ring
    assert_eq!(grid.get(2, 2), TILE_WALL);
    assert_eq!(grid.get(5, 5), TILE_WALL);
    assert_eq!(grid.get(4, 2), TILE_WALL);
    assert_eq!(grid.count(TILE_WALL), 12);

    // The corridor tile stays open to the void
    assert_eq!(grid.get(1, 0), TILE_EMPTY);
    assert_eq!(grid.get(0, 1), TILE_EMPTY);
    assert_eq!(grid.get(1, 1), TILE_EMPTY);
}

#[test]
fn test_wall_plotting_is_idempotent() {
    let mut grid = TileGrid::new(10, TILE_EMPTY);

    for y in 2..6 {
        for x in 2..7 {
            grid.set(x, y, TILE_FLOOR);
        }
    }

    plot_walls(&mut grid);
    let once = grid.clone();

    plot_walls(&mut grid);

    assert_eq!(grid, once);
}
