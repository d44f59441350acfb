//! Random non-attacking rook placements on a board
//!
//! Placements are drawn uniformly by walking the solver's decomposition. With
//! `k` rooks left on board `B` and canonical cell `c`, a rook goes on `c` with
//! probability `r_{k-1}(B without row(c) and col(c)) / r_k(B)`; otherwise `c`
//! is forbidden and the walk continues on `B without c`.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use rand::Rng;
use tracing::debug;

use crate::algorithm::bitset::LineSet;
use crate::algorithm::solver::{canonical_cell, solve};
use crate::io::error::{Result, placement_unavailable};
use crate::spatial::board::BitBoard;

/// Board coordinates `(row, col)` of placed rooks, sorted row-major
pub type Placement = Vec<(usize, usize)>;

/// Draw a uniformly random placement of `rooks` non-attacking rooks
///
/// # Errors
///
/// Returns `PlacementUnavailable` if the board cannot hold `rooks`
/// non-attacking rooks
pub fn sample_placement<R: Rng>(
    board: &BitBoard,
    rooks: usize,
    rng: &mut R,
) -> Result<Placement> {
    let polynomial = solve(board);
    let maximum = polynomial.degree().unwrap_or(0);
    if rooks > maximum {
        return Err(placement_unavailable(
            rooks,
            &format!("the board holds at most {maximum}"),
        ));
    }

    let mut current = board.clone();
    // Placements of the remaining rooks on `current`
    let mut weight = polynomial.coefficient(rooks);
    let mut placement: Placement = Vec::with_capacity(rooks);

    while placement.len() < rooks {
        let remaining = rooks - placement.len();
        let cell = canonical_cell(&current);
        let (Some((row, bit)), Some(draw)) = (cell, random_below(rng, &weight)) else {
            return Err(placement_unavailable(
                rooks,
                &format!("no cells left for the last {remaining}"),
            ));
        };

        let include = current.without_row_and_column(row, bit);
        let include_weight = solve(&include).coefficient(remaining - 1);
        if draw < include_weight {
            placement.push((row, current.width() - 1 - bit as usize));
            current = include;
            weight = include_weight;
        } else {
            current = current.without_cell(row, bit);
            weight -= include_weight;
        }
    }

    debug!(rooks, ?placement, "sampled placement");
    Ok(placement)
}

/// Test that every rook sits on an allowed cell and no two share a line
pub fn is_valid_placement(board: &BitBoard, placement: &[(usize, usize)]) -> bool {
    let mut used_rows = LineSet::new(board.height());
    let mut used_cols = LineSet::new(board.width());
    placement.iter().all(|&(row, col)| {
        board.is_allowed(row, col) && used_rows.insert(row) && used_cols.insert(col)
    })
}

/// Uniform integer in `0..bound`, or `None` if `bound` is not positive
fn random_below<R: Rng>(rng: &mut R, bound: &BigInt) -> Option<BigInt> {
    let bound = bound.to_biguint().filter(|bound| !bound.is_zero())?;
    let bits = bound.bits();
    let words = bits.div_ceil(32);
    let spare = (words * 32 - bits) as u32;
    // Rejection sampling over `bits` random bits
    loop {
        let mut digits: Vec<u32> = (0..words).map(|_| rng.random()).collect();
        if let Some(top) = digits.last_mut() {
            *top >>= spare;
        }
        let candidate = BigUint::new(digits);
        if candidate < bound {
            return Some(BigInt::from(candidate));
        }
    }
}
