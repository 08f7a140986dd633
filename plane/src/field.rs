//! Residue arithmetic mod `q`.
//!
//! The inverse follows Fermat's little theorem, `x⁻¹ = x^(q−2) mod q`.
//! That is exact for prime `q`. For a composite modulus (only constructible
//! under [`ModulusPolicy::Unchecked`](crate::ModulusPolicy::Unchecked)) the
//! same formula is evaluated and the result need not satisfy `x·y ≡ 1`.

use crate::error::PlaneError;
use crate::modulus::Modulus;

/// `(a · b) mod q`.
///
/// Both operands are reduced first; `q <= u32::MAX` keeps the product in `u64`.
#[inline]
#[must_use]
pub const fn mul(a: u64, b: u64, q: Modulus) -> u64 {
    (q.reduce(a) * q.reduce(b)) % q.get()
}

/// `base^exp mod q` by square-and-multiply.
///
/// # Example
///
/// ```
/// use affine_plane::{field, Modulus, ModulusPolicy};
///
/// let q = Modulus::new(7, ModulusPolicy::PrimeOnly).unwrap();
/// assert_eq!(field::pow(3, 0, q), 1);
/// assert_eq!(field::pow(3, 5, q), 5); // 243 = 34·7 + 5
/// ```
#[must_use]
pub const fn pow(base: u64, mut exp: u64, q: Modulus) -> u64 {
    let mut result = 1 % q.get();
    let mut b = q.reduce(base);

    while exp > 0 {
        if exp & 1 == 1 {
            result = mul(result, b, q);
        }
        b = mul(b, b, q);
        exp >>= 1;
    }

    result
}

/// Multiplicative inverse of `x` mod `q`, computed as `x^(q−2) mod q`.
///
/// `x` is reduced mod `q` first. For a composite modulus the returned value
/// is whatever the Fermat formula yields; use [`is_inverse`] to check it.
///
/// # Errors
///
/// Returns [`PlaneError::ZeroHasNoInverse`] if `x ≡ 0 (mod q)`.
///
/// # Example
///
/// ```
/// use affine_plane::{field, Modulus, ModulusPolicy};
///
/// let q = Modulus::new(5, ModulusPolicy::PrimeOnly).unwrap();
/// assert_eq!(field::modular_inverse(2, q), Ok(3));
/// assert!(field::modular_inverse(10, q).is_err());
/// ```
pub fn modular_inverse(x: u64, q: Modulus) -> Result<u64, PlaneError> {
    let x = q.reduce(x);
    if x == 0 {
        return Err(PlaneError::ZeroHasNoInverse { q: q.get() });
    }
    Ok(fermat_inverse(x, q))
}

/// Fermat inverse of a residue already known to be nonzero.
#[inline]
pub(crate) const fn fermat_inverse(x: u64, q: Modulus) -> u64 {
    pow(x, q.get() - 2, q)
}

/// Returns true if `x · y ≡ 1 (mod q)`.
#[inline]
#[must_use]
pub const fn is_inverse(x: u64, y: u64, q: Modulus) -> bool {
    mul(x, y, q) == 1 % q.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modulus::ModulusPolicy;

    fn prime(q: u64) -> Modulus {
        Modulus::new(q, ModulusPolicy::PrimeOnly).unwrap()
    }

    fn unchecked(q: u64) -> Modulus {
        Modulus::new(q, ModulusPolicy::Unchecked).unwrap()
    }

    #[test]
    fn inverse_property_for_primes() {
        for q in [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31] {
            let m = prime(q);
            for x in 1..q {
                let y = modular_inverse(x, m).unwrap();
                assert!(y < q);
                assert!(is_inverse(x, y, m), "{x}⁻¹ = {y} mod {q}");
            }
        }
    }

    #[test]
    fn zero_has_no_inverse() {
        let m = prime(7);
        assert_eq!(
            modular_inverse(0, m),
            Err(PlaneError::ZeroHasNoInverse { q: 7 })
        );
        assert_eq!(
            modular_inverse(14, m),
            Err(PlaneError::ZeroHasNoInverse { q: 7 })
        );
    }

    #[test]
    fn fermat_values_for_q4() {
        // x^2 mod 4: 2 gets 0, 3 gets 1 instead of its real inverse 3.
        let m = unchecked(4);
        assert_eq!(modular_inverse(1, m), Ok(1));
        assert_eq!(modular_inverse(2, m), Ok(0));
        assert_eq!(modular_inverse(3, m), Ok(1));
        assert!(!is_inverse(2, 0, m));
        assert!(!is_inverse(3, 1, m));
    }

    #[test]
    fn pow_reduces_base() {
        let m = prime(11);
        assert_eq!(pow(13, 2, m), 4);
        assert_eq!(pow(0, 0, m), 1);
    }

    #[test]
    fn mul_near_modulus_max() {
        let m = unchecked(Modulus::MAX);
        let a = Modulus::MAX - 1;
        assert_eq!(mul(a, a, m), 1);
    }
}
