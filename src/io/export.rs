//! JSON structural export of a generated level
//!
//! The interop format is deliberately plain: the grid as nested arrays of
//! tile codes and rooms, paths, and doors as coordinate arrays. Downstream
//! renderers and gameplay placement consume this without any schema beyond
//! the field names.

use crate::algorithm::GeneratedLevel;
use crate::io::error::{GenerationError, Result};
use crate::spatial::Rect;
use crate::spatial::grid::Point;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Serializable snapshot of a generated level
#[derive(Debug, Serialize)]
pub struct LevelExport {
    /// Seed the level was generated from
    pub seed: u32,
    /// Side length of the grid
    pub size: usize,
    /// Grid rows of tile codes
    pub grid: Vec<Vec<i32>>,
    /// Accepted rooms in acceptance order
    pub rooms: Vec<Rect>,
    /// Endpoint-trimmed corridor paths
    pub paths: Vec<Vec<Point>>,
    /// Doorway tiles
    pub doors: Vec<Point>,
}

impl LevelExport {
    /// Build an export snapshot from a generated level
    pub fn from_level(level: &GeneratedLevel, seed: u32) -> Self {
        Self {
            seed,
            size: level.grid.size(),
            grid: level.grid.rows(),
            rooms: level.rooms.clone(),
            paths: level.paths.clone(),
            doors: level.doors.clone(),
        }
    }

    /// Write the snapshot as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or serialization fails.
    pub fn write_json(&self, output_path: &Path) -> Result<()> {
        let file = File::create(output_path).map_err(|source| GenerationError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create",
            source,
        })?;

        serde_json::to_writer_pretty(BufWriter::new(file), self).map_err(|source| {
            GenerationError::Serialization {
                path: output_path.to_path_buf(),
                source,
            }
        })
    }
}
