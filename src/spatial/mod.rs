//! Board representation
//!
//! Boards store one bitmask per row so structural tests and derived boards
//! are cheap word operations.

/// Row-bitmask board with allowed and forbidden cells
pub mod board;

pub use board::BitBoard;
