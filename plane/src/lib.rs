//! Lines and parallel classes of the finite affine plane `AG(2, q)`.
//!
//! The plane over a field of order `q` has `q²` points and `q² + q` lines,
//! split into `q + 1` parallel classes of `q` lines each. This crate
//! enumerates the lines by brute force and checks those identities.
//!
//! # Normalization
//!
//! A line `a·x + b·y + c = 0` is stored as coefficients `(a, b, c)` with
//! `(a, b) ≠ (0, 0)`. Scalar multiples are collapsed by dividing through by
//! the leading nonzero coefficient:
//!
//! | Input | Canonical | Slope key |
//! |-------|-----------|-----------|
//! | `a = 0, b ≠ 0` | `(0, 1, c·b⁻¹)` | `(0, 1)` |
//! | `a ≠ 0, b = 0` | `(1, 0, c·a⁻¹)` | `(1, 0)` |
//! | `a ≠ 0, b ≠ 0` | `(1, b·a⁻¹, c·a⁻¹)` | `(a·b⁻¹, 1)` |
//!
//! # Moduli
//!
//! Inverses are computed as `x^(q−2) mod q`, which is only correct for
//! prime `q`. A [`Modulus`] is validated once under a [`ModulusPolicy`]:
//! `PrimeOnly` rejects composites, `Unchecked` accepts them and keeps a
//! primality flag so callers can report the unsound arithmetic.
//!
//! # Example
//!
//! ```
//! use affine_plane::{count_distinct_lines, distinct_lines_and_parallel_classes};
//!
//! assert_eq!(count_distinct_lines(5).unwrap(), 30);
//!
//! let summary = distinct_lines_and_parallel_classes(5).unwrap();
//! assert_eq!(summary.class_count, 6);
//! assert_eq!(summary.total_lines, 30);
//! assert!(summary.is_valid());
//!
//! assert!(count_distinct_lines(1).is_err());
//! assert!(count_distinct_lines(4).is_err());
//! ```

#![deny(missing_docs, clippy::missing_errors_doc)]
#![cfg_attr(
    not(test),
    deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]

pub mod enumerate;
pub mod error;
pub mod field;
pub mod line;
pub mod modulus;
pub mod slope;

pub use enumerate::{parallel_classes, ClassSummary, ClassViolation, ParallelClasses};
pub use error::PlaneError;
pub use field::modular_inverse;
pub use line::{normalize_coefficients, LineCoefficients, NormalizedLine};
pub use modulus::{Modulus, ModulusPolicy};
pub use slope::{normalize_slope, SlopeKey};

/// Counts the distinct lines of `AG(2, q)` for a prime `q`.
///
/// # Errors
///
/// Returns [`PlaneError::InvalidModulus`] for `q < 2` and
/// [`PlaneError::NonPrimeModulus`] for composite `q`.
pub fn count_distinct_lines(q: u64) -> Result<u64, PlaneError> {
    let q = Modulus::new(q, ModulusPolicy::PrimeOnly)?;
    Ok(enumerate::count_distinct_lines(q))
}

/// Groups the lines of `AG(2, q)` into parallel classes for a prime `q`.
///
/// # Errors
///
/// Returns [`PlaneError::InvalidModulus`] for `q < 2` and
/// [`PlaneError::NonPrimeModulus`] for composite `q`.
pub fn distinct_lines_and_parallel_classes(q: u64) -> Result<ClassSummary, PlaneError> {
    let q = Modulus::new(q, ModulusPolicy::PrimeOnly)?;
    Ok(enumerate::distinct_lines_and_parallel_classes(q))
}
