//! Exact integer polynomials in one variable
//!
//! Coefficients are stored from degree 0 upward and kept normalized: trailing
//! zeros are stripped on construction, so the zero polynomial has no
//! coefficients and structural equality is polynomial equality.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Polynomial with arbitrary-precision integer coefficients
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Polynomial {
    coefs: Vec<BigInt>,
}

impl Polynomial {
    /// Create a polynomial from coefficients ordered by ascending degree
    pub fn new(coefs: Vec<BigInt>) -> Self {
        let mut polynomial = Self { coefs };
        polynomial.normalize();
        polynomial
    }

    /// The polynomial `x`
    pub fn x() -> Self {
        Self::from(vec![0, 1])
    }

    /// Coefficients ordered by ascending degree, without trailing zeros
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefs
    }

    /// Coefficient of `x^k`, zero beyond the degree
    pub fn coefficient(&self, k: usize) -> BigInt {
        self.coefs.get(k).cloned().unwrap_or_default()
    }

    /// Degree of the polynomial
    ///
    /// The zero polynomial has no degree and yields `None`.
    pub fn degree(&self) -> Option<usize> {
        self.coefs.len().checked_sub(1)
    }

    /// Multiply by `x^n`
    #[must_use]
    pub fn shifted(&self, n: usize) -> Self {
        if self.coefs.is_empty() {
            return Self::zero();
        }
        let mut coefs = vec![BigInt::zero(); n];
        coefs.extend(self.coefs.iter().cloned());
        Self { coefs }
    }

    /// Evaluate at `x` using Horner's scheme
    pub fn evaluate(&self, x: &BigInt) -> BigInt {
        self.coefs
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, coef| acc * x + coef)
    }

    /// Render for the math typesetting widget
    ///
    /// Every coefficient up to the degree is emitted as `c` `x^{d}`, zeros
    /// included, joined with `+` and wrapped in `$` delimiters, e.g.
    /// `$1x^{0}+4x^{1}+2x^{2}$`. The zero polynomial renders as `$0x^{0}$`.
    pub fn format_latex(&self) -> String {
        let terms: Vec<String> = if self.coefs.is_empty() {
            vec!["0x^{0}".to_string()]
        } else {
            self.coefs
                .iter()
                .enumerate()
                .map(|(degree, coef)| format!("{coef}x^{{{degree}}}"))
                .collect()
        };
        format!("${}$", terms.join("+"))
    }

    fn normalize(&mut self) {
        while self.coefs.last().is_some_and(Zero::is_zero) {
            self.coefs.pop();
        }
    }
}

impl From<Vec<i64>> for Polynomial {
    fn from(coefs: Vec<i64>) -> Self {
        Self::new(coefs.into_iter().map(BigInt::from).collect())
    }
}

impl FromIterator<BigInt> for Polynomial {
    fn from_iter<T: IntoIterator<Item = BigInt>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, other: &Polynomial) -> Polynomial {
        let (longer, shorter) = if self.coefs.len() >= other.coefs.len() {
            (&self.coefs, &other.coefs)
        } else {
            (&other.coefs, &self.coefs)
        };
        let mut coefs = longer.clone();
        for (sum, coef) in coefs.iter_mut().zip(shorter) {
            *sum += coef;
        }
        Polynomial::new(coefs)
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, other: &Polynomial) -> Polynomial {
        let length = self.coefs.len().max(other.coefs.len());
        let mut coefs = self.coefs.clone();
        coefs.resize(length, BigInt::zero());
        for (difference, coef) in coefs.iter_mut().zip(&other.coefs) {
            *difference -= coef;
        }
        Polynomial::new(coefs)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &Polynomial) -> Polynomial {
        if self.coefs.is_empty() || other.coefs.is_empty() {
            return Polynomial::zero();
        }
        let mut coefs = vec![BigInt::zero(); self.coefs.len() + other.coefs.len() - 1];
        for (deg1, coef1) in self.coefs.iter().enumerate() {
            // Products land at the sum of the two degrees
            for (product, coef2) in coefs.iter_mut().skip(deg1).zip(&other.coefs) {
                *product += coef1 * coef2;
            }
        }
        Polynomial::new(coefs)
    }
}

macro_rules! forward_owned_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Polynomial {
            type Output = Self;

            fn $method(self, other: Self) -> Self {
                (&self).$method(&other)
            }
        }
    };
}

forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);

impl Zero for Polynomial {
    fn zero() -> Self {
        Self { coefs: Vec::new() }
    }

    fn is_zero(&self) -> bool {
        self.coefs.is_empty()
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Self {
            coefs: vec![BigInt::one()],
        }
    }
}

impl fmt::Display for Polynomial {
    /// Human-readable form such as `1 + 4*x^1 + 2*x^2`, skipping zero terms
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (degree, coef) in self.coefs.iter().enumerate() {
            if coef.is_zero() {
                continue;
            }
            let magnitude = coef.abs();
            match (first, coef.is_negative()) {
                (true, false) => write!(f, "{magnitude}*x^{degree}")?,
                (true, true) => write!(f, "-{magnitude}*x^{degree}")?,
                (false, false) => write!(f, " + {magnitude}*x^{degree}")?,
                (false, true) => write!(f, " - {magnitude}*x^{degree}")?,
            }
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
