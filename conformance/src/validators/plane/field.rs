//! Field inverse validator.
//!
//! Checks `x · x⁻¹ ≡ 1 (mod q)` for every nonzero residue. Always holds for
//! prime `q`; fails for composite `q`, where the Fermat formula yields a
//! value that is not an inverse.

use affine_plane::field::{is_inverse, modular_inverse, mul};
use affine_plane::modulus::gcd;
use affine_plane::Modulus;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "field/inverse";

/// Validates the Fermat inverse of every nonzero residue mod `q`.
pub fn validate(q: Modulus) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let mut details = Vec::new();

    for x in 1..q.get() {
        match modular_inverse(x, q) {
            Ok(y) if is_inverse(x, y, q) => {}
            Ok(y) => {
                let mut detail = format!("{x} * {y} = {} (mod {q})", mul(x, y, q));
                let shared = gcd(x, q.get());
                if shared != 1 {
                    detail.push_str(&format!(", no inverse exists: gcd({x}, {q}) = {shared}"));
                }
                details.push(detail);
            }
            Err(err) => details.push(format!("{x}: {err}")),
        }
    }

    if details.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            q.get(),
            format!("All {} nonzero residues invert correctly", q.get() - 1),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            q.get(),
            format!(
                "{} residue(s) have no correct inverse mod {q}",
                details.len()
            ),
            details,
        ));
    }

    report
}
