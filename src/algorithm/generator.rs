//! Level generation pipeline
//!
//! Fixed sequence with no branching beyond configuration flags: place rooms,
//! plot floors, connect rooms, plot corridors, detect doors, and optionally
//! plot walls. The generator owns the grid and lends it mutably to each stage
//! in turn; no stage retains a reference afterwards.

use crate::algorithm::connector::{ConnectorConfig, connect_rooms};
use crate::algorithm::plotting::{detect_doors, plot_paths, plot_walls};
use crate::algorithm::rooms::{RoomConfig, place_rooms, plot_rooms};
use crate::io::error::{Result, invalid_parameter};
use crate::math::SplitMix32;
use crate::spatial::grid::{Point, TILE_EMPTY, TILE_FLOOR, TILE_PATH};
use crate::spatial::{Rect, TileGrid};
use serde::Serialize;

/// Full generation parameters
#[derive(Debug, Clone, Copy)]
pub struct LevelConfig {
    /// Side length of the square grid
    pub size: usize,
    /// Room placement parameters
    pub rooms: RoomConfig,
    /// Corridor construction parameters
    pub connector: ConnectorConfig,
    /// Whether to surround floors with wall tiles
    pub plot_walls: bool,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            size: crate::io::configuration::DEFAULT_MAP_SIZE,
            rooms: RoomConfig::default(),
            connector: ConnectorConfig::default(),
            plot_walls: false,
        }
    }
}

/// A finished level: the tile grid plus the structures that shaped it
///
/// External consumers read the grid as a 2-D array of small integers and the
/// rooms, corridor paths (endpoint-trimmed), and doors as coordinate lists.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedLevel {
    /// The tile grid, mutated in place by every stage
    #[serde(serialize_with = "serialize_grid")]
    pub grid: TileGrid,
    /// Accepted rooms in acceptance order
    pub rooms: Vec<Rect>,
    /// One corridor per retained edge; endpoints trimmed by door detection
    pub paths: Vec<Vec<Point>>,
    /// Corridor endpoints that passed the doorway test
    pub doors: Vec<Point>,
}

fn serialize_grid<S: serde::Serializer>(grid: &TileGrid, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    grid.rows().serialize(serializer)
}

/// Validated level generator bound to a configuration
#[derive(Debug, Clone)]
pub struct LevelGenerator {
    config: LevelConfig,
}

impl LevelGenerator {
    /// Validate a configuration and build a generator from it
    ///
    /// # Errors
    ///
    /// Returns an error if room size bounds are inverted or non-positive,
    /// the grid cannot fit the largest room inside its margin, padding is
    /// negative, the iteration budget is zero, or the loop density falls
    /// outside `[0, 1]`.
    pub fn new(config: LevelConfig) -> Result<Self> {
        let rooms = &config.rooms;

        if rooms.min_room_size < 1 {
            return Err(invalid_parameter(
                "min_room_size",
                &rooms.min_room_size,
                &"must be at least 1",
            ));
        }

        if rooms.max_room_size < rooms.min_room_size {
            return Err(invalid_parameter(
                "max_room_size",
                &rooms.max_room_size,
                &"must be at least min_room_size",
            ));
        }

        if rooms.padding < 0 {
            return Err(invalid_parameter(
                "padding",
                &rooms.padding,
                &"must be non-negative",
            ));
        }

        if rooms.max_iterations == 0 {
            return Err(invalid_parameter(
                "max_iterations",
                &rooms.max_iterations,
                &"must be positive",
            ));
        }

        if (config.size as i32) <= rooms.max_room_size + 1 {
            return Err(invalid_parameter(
                "size",
                &config.size,
                &"grid must fit max_room_size inside a one-tile margin",
            ));
        }

        let density = config.connector.extra_loop_density;
        if !(0.0..=1.0).contains(&density) {
            return Err(invalid_parameter(
                "extra_loop_density",
                &density,
                &"must lie in [0, 1]",
            ));
        }

        Ok(Self { config })
    }

    /// The configuration this generator was built with
    pub const fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Generate a level on a fresh empty grid
    ///
    /// Generation never fails: sparse, empty, or disconnected levels are
    /// legal outcomes absorbed into the returned data.
    pub fn generate(&self, rng: &mut SplitMix32) -> GeneratedLevel {
        let grid = TileGrid::new(self.config.size, TILE_EMPTY);
        self.generate_into(grid, rng)
    }

    /// Generate a level onto a caller-supplied grid
    ///
    /// The grid's own side length wins over the configured size, mirroring
    /// callers that pre-fill a grid (for example with a noise density pass)
    /// before carving the level into it.
    pub fn generate_into(&self, mut grid: TileGrid, rng: &mut SplitMix32) -> GeneratedLevel {
        let rooms = place_rooms(rng, grid.size(), &self.config.rooms);

        plot_rooms(&mut grid, &rooms, TILE_FLOOR);

        let mut paths = connect_rooms(&grid, &rooms, rng, &self.config.connector);

        plot_paths(&mut grid, &paths, TILE_PATH);

        let doors = detect_doors(&grid, &mut paths);

        if self.config.plot_walls {
            plot_walls(&mut grid);
        }

        GeneratedLevel {
            grid,
            rooms,
            paths,
            doors,
        }
    }
}
