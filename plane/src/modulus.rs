//! Validated field modulus.
//!
//! Every routine in this crate takes a [`Modulus`] rather than a raw integer,
//! so `q >= 2` is checked once at construction. Whether composite moduli are
//! accepted is decided by the [`ModulusPolicy`].

use std::fmt;

use tracing::warn;

use crate::error::PlaneError;

/// Whether a composite modulus is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ModulusPolicy {
    /// Reject composite moduli with [`PlaneError::NonPrimeModulus`].
    #[default]
    PrimeOnly,
    /// Accept composite moduli. Inverses are still computed with Fermat's
    /// little theorem and are not guaranteed to be inverses.
    Unchecked,
}

/// A modulus `q >= 2`, remembered together with its primality.
///
/// # Example
///
/// ```
/// use affine_plane::{Modulus, ModulusPolicy, PlaneError};
///
/// let q = Modulus::new(7, ModulusPolicy::PrimeOnly).unwrap();
/// assert_eq!(q.get(), 7);
/// assert!(q.is_prime());
///
/// assert_eq!(
///     Modulus::new(4, ModulusPolicy::PrimeOnly),
///     Err(PlaneError::NonPrimeModulus { q: 4, factor: 2 })
/// );
/// assert!(!Modulus::new(4, ModulusPolicy::Unchecked).unwrap().is_prime());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modulus {
    q: u64,
    prime: bool,
}

impl Modulus {
    /// Largest accepted modulus. Products of two residues must fit in `u64`.
    pub const MAX: u64 = u32::MAX as u64;

    /// Validates `q` under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::InvalidModulus`] if `q < 2` or `q > Modulus::MAX`,
    /// and [`PlaneError::NonPrimeModulus`] if `q` is composite under
    /// [`ModulusPolicy::PrimeOnly`].
    pub fn new(q: u64, policy: ModulusPolicy) -> Result<Self, PlaneError> {
        if !(2..=Self::MAX).contains(&q) {
            return Err(PlaneError::InvalidModulus { q });
        }

        match smallest_factor(q) {
            None => Ok(Self { q, prime: true }),
            Some(factor) => match policy {
                ModulusPolicy::PrimeOnly => Err(PlaneError::NonPrimeModulus { q, factor }),
                ModulusPolicy::Unchecked => {
                    warn!(q, factor, "accepting composite modulus");
                    Ok(Self { q, prime: false })
                }
            },
        }
    }

    /// Returns the raw modulus.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.q
    }

    /// Returns true if the modulus is prime.
    #[inline]
    #[must_use]
    pub const fn is_prime(self) -> bool {
        self.prime
    }

    /// Reduces `x` into `[0, q)`.
    #[inline]
    #[must_use]
    pub const fn reduce(self, x: u64) -> u64 {
        x % self.q
    }

    /// Iterates every residue `0..q`.
    #[inline]
    pub fn residues(self) -> std::ops::Range<u64> {
        0..self.q
    }

    /// Expected number of lines in `AG(2, q)`: `q² + q`.
    #[inline]
    #[must_use]
    pub const fn expected_lines(self) -> u64 {
        self.q * self.q + self.q
    }

    /// Expected number of parallel classes in `AG(2, q)`: `q + 1`.
    #[inline]
    #[must_use]
    pub const fn expected_classes(self) -> u64 {
        self.q + 1
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.q)
    }
}

/// Smallest divisor `d` of `n` with `1 < d < n`, or `None` if `n` is prime.
///
/// Trial division up to `sqrt(n)`; `n` is at most [`Modulus::MAX`].
///
/// # Example
///
/// ```
/// use affine_plane::modulus::smallest_factor;
///
/// assert_eq!(smallest_factor(13), None);
/// assert_eq!(smallest_factor(50), Some(2));
/// assert_eq!(smallest_factor(91), Some(7));
/// ```
#[must_use]
pub fn smallest_factor(n: u64) -> Option<u64> {
    if n < 4 {
        return None;
    }
    if n % 2 == 0 {
        return Some(2);
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return Some(d);
        }
        d += 2;
    }
    None
}

/// Greatest common divisor (Euclid).
#[inline]
#[must_use]
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
