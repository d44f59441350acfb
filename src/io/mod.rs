//! Input/output operations and error handling

/// Plain-text board file parsing and rendering
pub mod board_file;
/// Command-line argument parsing and orchestration
pub mod cli;
/// Board limits and runtime defaults
pub mod configuration;
/// Error types for all crate operations
pub mod error;
/// Solver progress display
pub mod progress;
