//! Mathematical utilities for rook polynomials

/// Factorials, binomials and the rectangle closed form
pub mod combinatorics;
/// Exact integer polynomial arithmetic
pub mod polynomial;
