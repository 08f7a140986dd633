//! Error type for modulus validation and field arithmetic.

use thiserror::Error;

/// Errors raised by the affine plane routines.
///
/// Only input validation fails. Broken plane invariants are reported as
/// [`ClassViolation`](crate::ClassViolation) values, never as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaneError {
    /// The modulus is below 2 or too large for `u64` residue products.
    #[error("invalid modulus {q}: expected 2 <= q <= {}", crate::Modulus::MAX)]
    InvalidModulus {
        /// The rejected modulus.
        q: u64,
    },

    /// The modulus is composite and the policy only accepts primes.
    #[error("modulus {q} is not prime (divisible by {factor})")]
    NonPrimeModulus {
        /// The rejected modulus.
        q: u64,
        /// Smallest nontrivial divisor of `q`.
        factor: u64,
    },

    /// A multiplicative inverse was requested for a residue congruent to 0.
    #[error("0 has no multiplicative inverse mod {q}")]
    ZeroHasNoInverse {
        /// The modulus in use.
        q: u64,
    },

    /// A triple offered as a normalized line is not in canonical form.
    #[error("{line} is not a normalized line")]
    NonCanonicalLine {
        /// The rejected triple.
        line: crate::LineCoefficients,
    },
}
