//! Modulus acceptance.
//!
//! Decides whether the rest of the suite runs for a given `q`:
//! - `q < 2` (or too large) fails
//! - composite `q` under `prime-only` is skipped with a warning
//! - composite `q` under `unchecked` runs, with a warning that inverses are
//!   computed unsoundly

use affine_plane::{Modulus, ModulusPolicy, PlaneError};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "modulus";

/// Validates `q` under `policy` and returns the modulus if the suite should
/// continue with it.
pub fn validate(q: u64, policy: ModulusPolicy) -> (ConformanceReport, Option<Modulus>) {
    let mut report = ConformanceReport::new();

    let modulus = match Modulus::new(q, policy) {
        Ok(modulus) => modulus,
        Err(PlaneError::NonPrimeModulus { factor, .. }) => {
            report.push(TestResult::warn(
                VALIDATOR,
                q,
                format!("Skipped q = {q}: not prime (divisible by {factor})"),
            ));
            return (report, None);
        }
        Err(err) => {
            report.push(TestResult::fail(VALIDATOR, q, format!("Rejected: {err}")));
            return (report, None);
        }
    };

    if modulus.is_prime() {
        report.push(TestResult::pass(VALIDATOR, q, format!("q = {q} is prime")));
    } else {
        report.push(TestResult::warn(
            VALIDATOR,
            q,
            format!("q = {q} is composite; Fermat inverses are not guaranteed"),
        ));
    }

    (report, Some(modulus))
}
