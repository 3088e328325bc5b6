//! Core generation algorithms
//!
//! Room placement, corridor pathfinding, spanning-tree connection, door and
//! wall plotting, and the orchestrating pipeline.

/// Prim's-style room connection and corridor selection
pub mod connector;
/// Level generation pipeline and configuration
pub mod generator;
/// A* grid search
pub mod pathfinding;
/// Corridor, door, and wall plotting passes
pub mod plotting;
/// Rejection-sampled room placement
pub mod rooms;

pub use connector::ConnectorConfig;
pub use generator::{GeneratedLevel, LevelConfig, LevelGenerator};
pub use pathfinding::SearchConfig;
pub use rooms::RoomConfig;
