//! Property-based tests for coefficient and slope normalization.
//!
//! Moduli are drawn from small primes; residues and scalars are drawn
//! relative to the chosen modulus.

use affine_plane::field::{is_inverse, modular_inverse};
use affine_plane::{
    normalize_coefficients, normalize_slope, LineCoefficients, Modulus, ModulusPolicy,
};
use proptest::prelude::*;

/// Largest prime below `2³¹`.
const M31: u64 = (1 << 31) - 1;

const PRIMES: [u64; 14] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 101, 65_521, M31];

fn modulus() -> impl Strategy<Value = Modulus> {
    prop::sample::select(PRIMES.to_vec()).prop_map(|q| {
        Modulus::new(q, ModulusPolicy::PrimeOnly).expect("listed moduli are prime")
    })
}

/// A prime modulus with a non-degenerate triple and a nonzero scalar.
fn line_and_scalar() -> impl Strategy<Value = (Modulus, LineCoefficients, u64)> {
    modulus().prop_flat_map(|q| {
        let n = q.get();
        (Just(q), 0..n, 0..n, 0..n, 1..n)
            .prop_filter("degenerate line", |(_, a, b, _, _)| *a != 0 || *b != 0)
            .prop_map(|(q, a, b, c, k)| (q, LineCoefficients::new(a, b, c), k))
    })
}

// =============================================================================
// Coefficient normalization
// =============================================================================

proptest! {
    /// Scaling a line by any nonzero k leaves its canonical form unchanged.
    #[test]
    fn prop_scalar_multiple_invariance((q, line, k) in line_and_scalar()) {
        prop_assert_eq!(line.normalize(q), line.scale(k, q).normalize(q));
    }

    /// normalize(normalize(x)) = normalize(x)
    #[test]
    fn prop_normalization_idempotent((q, line, _k) in line_and_scalar()) {
        let once = line.normalize(q).expect("non-degenerate");
        prop_assert_eq!(once.coefficients().normalize(q), Some(once));
    }

    /// The canonical form leads with 1, or with (0, 1).
    #[test]
    fn prop_canonical_shape((q, line, _k) in line_and_scalar()) {
        let n = line.normalize(q).expect("non-degenerate").coefficients();
        prop_assert!(n.a == 1 || (n.a == 0 && n.b == 1));
        prop_assert!(n.b < q.get() && n.c < q.get());
    }

    /// The canonical form describes the same point set as the input:
    /// it is the input scaled by some nonzero factor.
    #[test]
    fn prop_canonical_is_a_multiple((q, line, _k) in line_and_scalar()) {
        let n = line.normalize(q).expect("non-degenerate").coefficients();
        let lead = if line.a != 0 { line.a } else { line.b };
        let inv = modular_inverse(lead, q).expect("lead is nonzero");
        prop_assert_eq!(line.scale(inv, q), n);
    }

    /// (0, 0, c) is never a line.
    #[test]
    fn prop_degenerate_rejected(q in modulus(), c: u64) {
        prop_assert_eq!(normalize_coefficients(0, 0, c, q), None);
    }
}

// =============================================================================
// Slopes and inverses
// =============================================================================

proptest! {
    /// Lines differing only by scale or intercept share a slope key.
    #[test]
    fn prop_slope_invariance((q, line, k) in line_and_scalar()) {
        let scaled = line.scale(k, q);
        prop_assert_eq!(
            normalize_slope(line.a, line.b, q),
            normalize_slope(scaled.a, scaled.b, q)
        );
    }

    /// x · x⁻¹ ≡ 1 for every nonzero residue of a prime modulus.
    #[test]
    fn prop_inverse_property((q, x) in modulus().prop_flat_map(|q| (Just(q), 1..q.get()))) {
        let y = modular_inverse(x, q).expect("x is nonzero");
        prop_assert!(y < q.get());
        prop_assert!(is_inverse(x, y, q));
    }
}
