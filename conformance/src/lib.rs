//! AG(2, q) conformance suite.
//!
//! Runs the `affine-plane` routines over a sweep of moduli and checks the
//! identities every affine plane must satisfy, collecting each outcome as a
//! [`TestResult`] instead of stopping at the first failure.
//!
//! # Validators
//!
//! | Validator | Checks |
//! |-----------|--------|
//! | `modulus` | `q >= 2`; primality under the configured policy |
//! | `field/inverse` | `x · x⁻¹ ≡ 1` for every nonzero residue |
//! | `lines/count` | `q² + q` distinct lines |
//! | `lines/normalization` | canonical form, idempotence, scalar-multiple invariance |
//! | `classes/parallel` | `q + 1` classes of `q` lines each |
//!
//! # Entry Point
//!
//! ```
//! use affine_plane::ModulusPolicy;
//! use affine_plane_conformance::{run_all, SweepConfig};
//!
//! let config = SweepConfig {
//!     moduli: vec![2, 3, 5, 7],
//!     policy: ModulusPolicy::PrimeOnly,
//! };
//! let report = run_all(&config);
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod report;
pub mod validators;

use tracing::{info, warn};

pub use config::{ConfigError, SweepConfig, DEFAULT_MODULI};
pub use report::{ConformanceReport, Severity, Summary, TestResult};

use validators::plane::{classes, field, lines, modulus};

/// Runs all validators for every configured modulus and returns the
/// aggregated report.
///
/// For each modulus, validators run in this order:
/// 1. Modulus acceptance (a rejected or skipped modulus stops here)
/// 2. Field inverses
/// 3. Line count
/// 4. Line normalization
/// 5. Parallel classes
pub fn run_all(config: &SweepConfig) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    for &q in &config.moduli {
        let before = report.failure_count();

        let (accepted, checked) = modulus::validate(q, config.policy);
        report.extend(accepted);
        let Some(m) = checked else {
            info!(q, "modulus not checked");
            continue;
        };

        report.extend(field::validate(m));
        report.extend(lines::validate_count(m));
        report.extend(lines::validate_normalization(m));
        report.extend(classes::validate(m));

        let failures = report.failure_count() - before;
        if failures == 0 {
            info!(q, "modulus conforms");
        } else {
            warn!(q, failures, "modulus has failing checks");
        }
    }

    let summary = report.summary();
    info!(
        passed = summary.passed,
        warnings = summary.warnings,
        failed = summary.failed,
        "conformance sweep finished"
    );
    report
}
