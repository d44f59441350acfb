//! Board limits, solver defaults and runtime configuration constants

// Rows are stored as u128 bitmasks
/// Maximum allowed board height or width
pub const MAX_BOARD_DIMENSION: usize = 128;

/// Default board height and width when none is given
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Fixed seed for reproducible placement sampling
pub const DEFAULT_SEED: u64 = 42;

/// Solver steps between progress observer callbacks
pub const PROGRESS_REPORT_INTERVAL: usize = 4096;

/// Spinner redraw interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 80;

// Board file glyphs
/// Characters marking an allowed cell in board files
pub const ALLOWED_GLYPHS: &[char] = &['.', '1'];
/// Characters marking a forbidden cell in board files
pub const FORBIDDEN_GLYPHS: &[char] = &['#', 'x', 'X', '0'];
/// Prefix of comment lines in board files
pub const COMMENT_PREFIX: &str = "//";
