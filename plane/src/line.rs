//! Line coefficients and their canonical form.
//!
//! A line of `AG(2, q)` is `a·x + b·y + c = 0` with `(a, b) ≠ (0, 0)`.
//! Nonzero scalar multiples of a triple describe the same line, so each
//! triple is scaled by the inverse of its leading nonzero coefficient:
//!
//! ```text
//! a = 0  →  (0, 1, c·b⁻¹)
//! a ≠ 0  →  (1, b·a⁻¹, c·a⁻¹)
//! ```

use std::fmt;

use crate::error::PlaneError;
use crate::field::{fermat_inverse, mul};
use crate::modulus::Modulus;

/// Raw coefficients `(a, b, c)` of `a·x + b·y + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCoefficients {
    /// Coefficient of `x`.
    pub a: u64,
    /// Coefficient of `y`.
    pub b: u64,
    /// Constant term.
    pub c: u64,
}

impl LineCoefficients {
    /// Creates a coefficient triple.
    #[inline]
    #[must_use]
    pub const fn new(a: u64, b: u64, c: u64) -> Self {
        Self { a, b, c }
    }

    /// Multiplies every coefficient by `k` mod `q`.
    #[inline]
    #[must_use]
    pub const fn scale(self, k: u64, q: Modulus) -> Self {
        Self::new(mul(self.a, k, q), mul(self.b, k, q), mul(self.c, k, q))
    }

    /// Returns true if `(a, b) ≡ (0, 0) mod q`.
    #[inline]
    #[must_use]
    pub const fn is_degenerate(self, q: Modulus) -> bool {
        q.reduce(self.a) == 0 && q.reduce(self.b) == 0
    }

    /// Canonical representative, or `None` for a degenerate triple.
    #[inline]
    #[must_use]
    pub fn normalize(self, q: Modulus) -> Option<NormalizedLine> {
        normalize_coefficients(self.a, self.b, self.c, q)
    }
}

impl fmt::Display for LineCoefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.a, self.b, self.c)
    }
}

/// Canonical line triple: the first coordinate is 1, or it is 0 and the
/// second is 1.
///
/// Deserialization goes through [`TryFrom<LineCoefficients>`], so only the
/// canonical shape is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "LineCoefficients", into = "LineCoefficients")
)]
pub struct NormalizedLine(LineCoefficients);

impl NormalizedLine {
    /// The normalized coefficients.
    #[inline]
    #[must_use]
    pub const fn coefficients(self) -> LineCoefficients {
        self.0
    }
}

impl TryFrom<LineCoefficients> for NormalizedLine {
    type Error = PlaneError;

    /// Accepts `(1, b, c)` and `(0, 1, c)`. Residues are not range-checked
    /// because no modulus is known here.
    fn try_from(line: LineCoefficients) -> Result<Self, Self::Error> {
        match (line.a, line.b) {
            (1, _) | (0, 1) => Ok(Self(line)),
            _ => Err(PlaneError::NonCanonicalLine { line }),
        }
    }
}

impl From<NormalizedLine> for LineCoefficients {
    fn from(line: NormalizedLine) -> Self {
        line.0
    }
}

impl fmt::Display for NormalizedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Normalizes `(a, b, c)` mod `q` to its canonical triple.
///
/// Returns `None` when `a ≡ b ≡ 0`, which is not a line.
///
/// # Example
///
/// ```
/// use affine_plane::{normalize_coefficients, LineCoefficients, Modulus, ModulusPolicy};
///
/// let q = Modulus::new(5, ModulusPolicy::PrimeOnly).unwrap();
///
/// // 2x + 4y + 1 = 0 is x + 2y + 3 = 0 (2⁻¹ = 3 mod 5)
/// let line = normalize_coefficients(2, 4, 1, q).unwrap();
/// assert_eq!(line.coefficients(), LineCoefficients::new(1, 2, 3));
///
/// // 0x + 3y + 3 = 0 is y + 1 = 0
/// let line = normalize_coefficients(0, 3, 3, q).unwrap();
/// assert_eq!(line.coefficients(), LineCoefficients::new(0, 1, 1));
///
/// assert_eq!(normalize_coefficients(0, 0, 2, q), None);
/// ```
#[must_use]
pub fn normalize_coefficients(a: u64, b: u64, c: u64, q: Modulus) -> Option<NormalizedLine> {
    let (a, b, c) = (q.reduce(a), q.reduce(b), q.reduce(c));

    if a == 0 {
        if b == 0 {
            return None;
        }
        let inv = fermat_inverse(b, q);
        return Some(NormalizedLine(LineCoefficients::new(0, 1, mul(c, inv, q))));
    }

    let inv = fermat_inverse(a, q);
    Some(NormalizedLine(LineCoefficients::new(
        1,
        mul(b, inv, q),
        mul(c, inv, q),
    )))
}
