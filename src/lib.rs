//! Exact rook polynomials for rectangular boards with forbidden cells
//!
//! The coefficient of `x^k` in the rook polynomial counts the ways to place
//! `k` non-attacking rooks on the allowed cells. Boards are stored as one
//! bitmask per row and solved with a memoized deletion-expansion recurrence
//! that short-circuits solid rectangles with a closed form.

#![forbid(unsafe_code)]

/// Bit utilities, rectangle detection, memoization and the solver
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Exact polynomial arithmetic and closed-form counting
pub mod math;
/// Board representation
pub mod spatial;

pub use algorithm::solver::{DecompositionSolver, SolverConfig, solve};
pub use io::error::{Result, RookError};
pub use math::polynomial::Polynomial;
pub use spatial::board::{BitBoard, build_board};
