//! Input/output surface: CLI, exports, constants, and error handling

/// Command-line interface
pub mod cli;
/// Default constants for generation and export
pub mod configuration;
/// Error types and result alias
pub mod error;
/// JSON structural export
pub mod export;
/// PNG rendering of finished grids
pub mod image;
