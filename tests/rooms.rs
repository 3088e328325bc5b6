//! Validates room placement constraints and floor plotting

use roomweave::algorithm::RoomConfig;
use roomweave::algorithm::rooms::{place_rooms, plot_rooms};
use roomweave::math::SplitMix32;
use roomweave::spatial::TileGrid;
use roomweave::spatial::grid::{TILE_EMPTY, TILE_FLOOR};

const SIZE: usize = 32;

fn config() -> RoomConfig {
    RoomConfig {
        min_room_size: 3,
        max_room_size: 9,
        padding: 2,
        max_iterations: 1000,
    }
}

#[test]
fn test_placement_is_deterministic() {
    let mut rng_a = SplitMix32::new(7);
    let mut rng_b = SplitMix32::new(7);

    let first = place_rooms(&mut rng_a, SIZE, &config());
    let second = place_rooms(&mut rng_b, SIZE, &config());

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_accepted_rooms_never_overlap() {
    let mut rng = SplitMix32::new(42);
    let rooms = place_rooms(&mut rng, SIZE, &config());

    assert!(rooms.len() > 1, "expected several rooms on a 32x32 grid");

    for (i, a) in rooms.iter().enumerate() {
        for b in rooms.iter().skip(i + 1) {
            assert!(
                !a.intersects(b, config().padding),
                "rooms {a:?} and {b:?} overlap within padding"
            );
        }
    }
}

#[test]
fn test_rooms_stay_inside_margin_and_size_bounds() {
    let mut rng = SplitMix32::new(99);
    let cfg = config();
    let rooms = place_rooms(&mut rng, SIZE, &cfg);

    let upper = SIZE as i32 - cfg.max_room_size;

    for room in &rooms {
        assert!(room.x >= 1 && room.x < upper, "origin x out of range: {room:?}");
        assert!(room.y >= 1 && room.y < upper, "origin y out of range: {room:?}");
        assert!(
            room.w >= cfg.min_room_size && room.w <= cfg.max_room_size,
            "width out of bounds: {room:?}"
        );
        assert!(
            room.h >= cfg.min_room_size && room.h <= cfg.max_room_size,
            "height out of bounds: {room:?}"
        );
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut rng_a = SplitMix32::new(1);
    let mut rng_b = SplitMix32::new(2);

    let first = place_rooms(&mut rng_a, SIZE, &config());
    let second = place_rooms(&mut rng_b, SIZE, &config());

    assert_ne!(first, second);
}

#[test]
fn test_plotted_footprint_is_inclusive() {
    let mut grid = TileGrid::new(16, TILE_EMPTY);
    let room = roomweave::spatial::Rect::new(3, 4, 5, 3);

    plot_rooms(&mut grid, &[room], TILE_FLOOR);

    // Footprint covers [x, x+w] x [y, y+h], one tile beyond the extent
    assert_eq!(grid.get(3, 4), TILE_FLOOR);
    assert_eq!(grid.get(8, 7), TILE_FLOOR);
    assert_eq!(grid.get(9, 7), TILE_EMPTY);
    assert_eq!(grid.get(8, 8), TILE_EMPTY);
    assert_eq!(grid.get(2, 4), TILE_EMPTY);

    assert_eq!(grid.count(TILE_FLOOR), 6 * 4);
}
