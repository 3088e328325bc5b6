//! Command-line interface for generating and exporting levels

use crate::algorithm::{ConnectorConfig, LevelConfig, LevelGenerator, RoomConfig};
use crate::io::configuration::{
    DEFAULT_EXTRA_LOOP_DENSITY, DEFAULT_EXTRA_LOOP_LEVEL, DEFAULT_MAP_SIZE, DEFAULT_MAX_ITERATIONS,
    DEFAULT_MAX_ROOM_SIZE, DEFAULT_MIN_ROOM_SIZE, DEFAULT_ROOM_PADDING, DEFAULT_SEED,
    DEFAULT_TIMEOUT_MS, TILE_GLYPHS,
};
use crate::io::error::Result;
use crate::io::export::LevelExport;
use crate::io::image::export_grid_as_png;
use crate::math::{FractalNoise, NoiseParams, SplitMix32};
use crate::spatial::TileGrid;
use crate::spatial::grid::{NoiseFillParams, TILE_EMPTY, TILE_WALL};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "roomweave")]
#[command(
    author,
    version,
    about = "Generate room-and-corridor dungeon layouts deterministically"
)]
/// Command-line arguments for the level generation tool
pub struct Cli {
    /// Side length of the square tile grid
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAP_SIZE)]
    pub size: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u32,

    /// Smallest room extent
    #[arg(long, default_value_t = DEFAULT_MIN_ROOM_SIZE)]
    pub min_room_size: i32,

    /// Largest room extent
    #[arg(long, default_value_t = DEFAULT_MAX_ROOM_SIZE)]
    pub max_room_size: i32,

    /// Clearance kept between rooms
    #[arg(short, long, default_value_t = DEFAULT_ROOM_PADDING)]
    pub padding: i32,

    /// Room placement attempts
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub iterations: u32,

    /// Runner-up connection pairs recorded per spanning round
    #[arg(long, default_value_t = DEFAULT_EXTRA_LOOP_LEVEL)]
    pub extra_loops: usize,

    /// Survival probability for recorded loop candidates
    #[arg(long, default_value_t = DEFAULT_EXTRA_LOOP_DENSITY)]
    pub loop_density: f64,

    /// Wall-clock budget for corridor construction, in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Surround room floors with wall tiles
    #[arg(short, long)]
    pub walls: bool,

    /// Scatter noise-driven rubble through the unexcavated void
    #[arg(long)]
    pub noise: bool,

    /// Write the level as a one-pixel-per-tile PNG
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Write the level as structural JSON
    #[arg(short, long)]
    pub json: Option<PathBuf>,

    /// Suppress the terminal preview
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Assemble the generation configuration from the arguments
    pub const fn level_config(&self) -> LevelConfig {
        LevelConfig {
            size: self.size,
            rooms: RoomConfig {
                min_room_size: self.min_room_size,
                max_room_size: self.max_room_size,
                padding: self.padding,
                max_iterations: self.iterations,
            },
            connector: ConnectorConfig {
                extra_loop_level: self.extra_loops,
                extra_loop_density: self.loop_density,
                timeout: Duration::from_millis(self.timeout_ms),
            },
            plot_walls: self.walls,
        }
    }
}

/// Render the grid as glyph rows for the terminal
fn preview(grid: &TileGrid) -> String {
    let mut out = String::with_capacity(grid.size() * (grid.size() + 1));
    let mut row = -1;

    grid.for_each(|_, y, value| {
        if y != row {
            if row >= 0 {
                out.push('\n');
            }
            row = y;
        }

        let glyph = usize::try_from(value)
            .ok()
            .and_then(|index| TILE_GLYPHS.get(index))
            .copied()
            .unwrap_or('?');
        out.push(glyph);
    });

    out.push('\n');
    out
}

/// Generate one level from the arguments and perform the requested exports
///
/// # Errors
///
/// Returns an error if the configuration fails validation or an export
/// cannot be written.
// Terminal preview is the tool's primary output
#[allow(clippy::print_stdout)]
pub fn run(cli: &Cli) -> Result<()> {
    let generator = LevelGenerator::new(cli.level_config())?;

    let mut rng = SplitMix32::new(cli.seed);
    let mut level = generator.generate(&mut rng);

    if cli.noise {
        // Density fill over the void only; carved tiles are left untouched
        let noise = FractalNoise::new(&mut rng);
        level.grid.apply_noise_fill(
            &noise,
            &NoiseFillParams {
                z: 0.0,
                mask: Some(TILE_EMPTY),
                values: vec![TILE_EMPTY, TILE_EMPTY, TILE_WALL],
                noise: NoiseParams {
                    octaves: 3,
                    frequency: 0.08,
                    ..NoiseParams::default()
                },
            },
        );
    }

    if !cli.quiet {
        print!("{}", preview(&level.grid));
        println!(
            "seed {} | {} rooms | {} corridors | {} doors",
            cli.seed,
            level.rooms.len(),
            level.paths.len(),
            level.doors.len()
        );
    }

    if let Some(path) = &cli.out {
        export_grid_as_png(&level.grid, path)?;
    }

    if let Some(path) = &cli.json {
        LevelExport::from_level(&level, cli.seed).write_json(path)?;
    }

    Ok(())
}
