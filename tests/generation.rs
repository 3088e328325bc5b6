//! End-to-end pipeline behavior: determinism, the seed-42 scenario,
//! configuration validation, and export formats

use roomweave::algorithm::{ConnectorConfig, LevelConfig, LevelGenerator, RoomConfig};
use roomweave::io::export::LevelExport;
use roomweave::io::image::export_grid_as_png;
use roomweave::math::SplitMix32;
use roomweave::spatial::TileGrid;
use roomweave::spatial::grid::{TILE_EMPTY, TILE_FLOOR, TILE_PATH, TILE_WALL};
use std::time::Duration;

fn scenario(plot_walls: bool) -> LevelConfig {
    LevelConfig {
        size: 32,
        rooms: RoomConfig {
            min_room_size: 3,
            max_room_size: 9,
            padding: 2,
            max_iterations: 1000,
        },
        connector: ConnectorConfig {
            extra_loop_level: 0,
            extra_loop_density: 0.1,
            timeout: Duration::from_secs(5),
        },
        plot_walls,
    }
}

#[test]
fn test_same_seed_reproduces_the_level() {
    let generator = LevelGenerator::new(scenario(true)).unwrap();

    let mut rng_a = SplitMix32::new(42);
    let mut rng_b = SplitMix32::new(42);

    let first = generator.generate(&mut rng_a);
    let second = generator.generate(&mut rng_b);

    assert_eq!(first.grid, second.grid);
    assert_eq!(first.rooms, second.rooms);
    assert_eq!(first.paths, second.paths);
    assert_eq!(first.doors, second.doors);
}

#[test]
fn test_seed_42_scenario_produces_a_full_level() {
    let generator = LevelGenerator::new(scenario(true)).unwrap();
    let mut rng = SplitMix32::new(42);

    let level = generator.generate(&mut rng);

    assert!(!level.rooms.is_empty());
    assert!(level.paths.iter().any(|path| !path.is_empty()));
    assert!(level.grid.count(TILE_FLOOR) > 0);
    assert!(level.grid.count(TILE_PATH) > 0);
    assert!(level.grid.count(TILE_WALL) > 0);
}

#[test]
fn test_walls_are_optional() {
    let generator = LevelGenerator::new(scenario(false)).unwrap();
    let mut rng = SplitMix32::new(42);

    let level = generator.generate(&mut rng);

    assert_eq!(level.grid.count(TILE_WALL), 0);
}

#[test]
fn test_doors_sit_on_corridor_tiles() {
    let generator = LevelGenerator::new(scenario(false)).unwrap();
    let mut rng = SplitMix32::new(42);

    let level = generator.generate(&mut rng);

    for door in &level.doors {
        assert_eq!(
            level.grid.get(door[0], door[1]),
            TILE_PATH,
            "door {door:?} should be a plotted corridor tile"
        );
    }
}

#[test]
fn test_generate_into_respects_the_grid_size() {
    let generator = LevelGenerator::new(scenario(false)).unwrap();
    let mut rng = SplitMix32::new(9);

    let grid = TileGrid::new(48, TILE_EMPTY);
    let level = generator.generate_into(grid, &mut rng);

    assert_eq!(level.grid.size(), 48);
}

#[test]
fn test_invalid_configurations_are_rejected() {
    let mut bad = scenario(false);
    bad.rooms.min_room_size = 0;
    assert!(LevelGenerator::new(bad).is_err());

    let mut bad = scenario(false);
    bad.rooms.max_room_size = 2;
    assert!(LevelGenerator::new(bad).is_err());

    let mut bad = scenario(false);
    bad.rooms.padding = -1;
    assert!(LevelGenerator::new(bad).is_err());

    let mut bad = scenario(false);
    bad.rooms.max_iterations = 0;
    assert!(LevelGenerator::new(bad).is_err());

    let mut bad = scenario(false);
    bad.size = 10;
    assert!(LevelGenerator::new(bad).is_err());

    let mut bad = scenario(false);
    bad.connector.extra_loop_density = 1.5;
    assert!(LevelGenerator::new(bad).is_err());
}

#[test]
fn test_json_export_round_trips_structurally() {
    let generator = LevelGenerator::new(scenario(true)).unwrap();
    let mut rng = SplitMix32::new(42);
    let level = generator.generate(&mut rng);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("level.json");

    LevelExport::from_level(&level, 42).write_json(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["seed"], 42);
    assert_eq!(value["size"], 32);
    assert_eq!(value["grid"].as_array().unwrap().len(), 32);
    assert_eq!(
        value["rooms"].as_array().unwrap().len(),
        level.rooms.len()
    );
    assert_eq!(
        value["doors"].as_array().unwrap().len(),
        level.doors.len()
    );
}

#[test]
fn test_png_export_writes_a_file() {
    let generator = LevelGenerator::new(scenario(true)).unwrap();
    let mut rng = SplitMix32::new(42);
    let level = generator.generate(&mut rng);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("level.png");

    export_grid_as_png(&level.grid, &path).unwrap();

    assert!(path.exists());
    let meta = std::fs::metadata(&path).unwrap();
    assert!(meta.len() > 0);
}
