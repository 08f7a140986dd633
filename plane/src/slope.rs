//! Slope keys for grouping lines into parallel classes.

use std::fmt;

use crate::field::{fermat_inverse, mul};
use crate::modulus::Modulus;

/// Direction of a line, independent of its intercept.
///
/// Lines with `b = 0` share the key `(1, 0)`; every other line is keyed by
/// `(a·b⁻¹, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlopeKey {
    /// Normalized `x` coefficient.
    pub a: u64,
    /// Normalized `y` coefficient (0 only for the `b = 0` class).
    pub b: u64,
}

impl SlopeKey {
    /// Key shared by all lines `a·x + c = 0`.
    pub const VERTICAL: Self = Self { a: 1, b: 0 };

    /// Returns true for the `b = 0` class.
    #[inline]
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        self.b == 0
    }
}

impl fmt::Display for SlopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// Slope key of `(a, b)` mod `q`, or `None` if both are zero.
///
/// # Example
///
/// ```
/// use affine_plane::{normalize_slope, Modulus, ModulusPolicy, SlopeKey};
///
/// let q = Modulus::new(7, ModulusPolicy::PrimeOnly).unwrap();
/// assert_eq!(normalize_slope(3, 0, q), Some(SlopeKey::VERTICAL));
/// // 6·2⁻¹ = 6·4 = 3 mod 7
/// assert_eq!(normalize_slope(6, 2, q), Some(SlopeKey { a: 3, b: 1 }));
/// assert_eq!(normalize_slope(0, 0, q), None);
/// ```
#[must_use]
pub fn normalize_slope(a: u64, b: u64, q: Modulus) -> Option<SlopeKey> {
    let (a, b) = (q.reduce(a), q.reduce(b));

    if b == 0 {
        return (a != 0).then_some(SlopeKey::VERTICAL);
    }

    let inv = fermat_inverse(b, q);
    Some(SlopeKey {
        a: mul(a, inv, q),
        b: 1,
    })
}
