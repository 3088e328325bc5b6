//! Performance measurement for corridor pathfinding

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use roomweave::algorithm::SearchConfig;
use roomweave::algorithm::pathfinding::find_path;
use roomweave::spatial::TileGrid;
use roomweave::spatial::grid::{TILE_EMPTY, TILE_FLOOR};
use std::hint::black_box;

/// Measures a corner-to-corner search across an unobstructed 128x128 grid
fn bench_open_grid_search(c: &mut Criterion) {
    let grid = TileGrid::new(128, TILE_EMPTY);
    let config = SearchConfig::default();

    c.bench_function("astar_open_128", |b| {
        b.iter(|| {
            let path = find_path(&grid, [0, 0], [127, 127], &config);
            black_box(path.len());
        });
    });
}

/// Measures a search forced through staggered barrier gaps
fn bench_barrier_grid_search(c: &mut Criterion) {
    let mut grid = TileGrid::new(128, TILE_EMPTY);

    // Horizontal barriers every eight rows, each with one offset gap
    for (index, y) in (8..120).step_by(8).enumerate() {
        let gap = ((index * 31) % 126) as i32;
        for x in 0..128 {
            if x != gap {
                grid.set(x, y as i32, TILE_FLOOR);
            }
        }
    }

    let config = SearchConfig::default();

    c.bench_function("astar_barriers_128", |b| {
        b.iter(|| {
            let path = find_path(&grid, [0, 0], [127, 127], &config);
            black_box(path.len());
        });
    });
}

criterion_group!(benches, bench_open_grid_search, bench_barrier_grid_search);
criterion_main!(benches);
