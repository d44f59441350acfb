/// Bit scanning helpers over row masks
pub mod bits;
/// Bitvec-backed set of row or column indices
pub mod bitset;
/// Memoization cache for solved board states
pub mod cache;
/// Random non-attacking rook placements
pub mod placement;
/// Detection of solid rectangular boards
pub mod rectangle;
/// Memoized deletion-expansion solver
pub mod solver;
