//! Closed-form counting for solid rectangular boards

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::math::polynomial::Polynomial;

/// Exact factorial `n!`
pub fn factorial(n: usize) -> BigInt {
    (1..=n).fold(BigInt::one(), |acc, k| acc * k)
}

/// Exact binomial coefficient `C(n, k)`, zero when `k > n`
pub fn binomial(n: usize, k: usize) -> BigInt {
    if k > n {
        return BigInt::zero();
    }
    let k = k.min(n - k);
    // Each partial product is itself a binomial coefficient, so the division is exact
    (0..k).fold(BigInt::one(), |acc, i| acc * (n - i) / (i + 1))
}

/// Rook polynomial of a fully allowed `width` x `height` block
///
/// The coefficient of `x^k` is `C(width, k) * C(height, k) * k!`: choose the
/// rows, choose the columns, then match them up.
pub fn rectangle_rook_polynomial(width: usize, height: usize) -> Polynomial {
    (0..=width.min(height))
        .map(|k| binomial(width, k) * binomial(height, k) * factorial(k))
        .collect()
}
