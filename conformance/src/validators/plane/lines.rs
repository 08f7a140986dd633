//! Line validators.
//!
//! - `lines/count`: `q² + q` distinct normalized lines
//! - `lines/normalization`: exhaustive check of the canonical form
//!   (shape, idempotence, degenerate rejection, scalar-multiple invariance)

use affine_plane::{enumerate, normalize_coefficients, LineCoefficients, Modulus};

use crate::report::{ConformanceReport, TestResult};

/// Largest modulus the O(q⁴) normalization check runs for.
pub const EXHAUSTIVE_LIMIT: u64 = 31;

/// Detail lines kept per failing check.
const MAX_DETAILS: usize = 10;

/// Validates the distinct line count of `AG(2, q)`.
pub fn validate_count(q: Modulus) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let actual = enumerate::count_distinct_lines(q);
    let expected = q.expected_lines();

    if actual == expected {
        report.push(TestResult::pass(
            "lines/count",
            q.get(),
            format!("Correct line count: {actual}"),
        ));
    } else {
        report.push(TestResult::fail(
            "lines/count",
            q.get(),
            format!("Wrong line count: expected {expected}, got {actual}"),
        ));
    }

    report
}

/// Validates coefficient normalization over every triple mod `q`.
///
/// Skipped (reported as a pass) when `q` exceeds [`EXHAUSTIVE_LIMIT`].
pub fn validate_normalization(q: Modulus) -> ConformanceReport {
    const VALIDATOR: &str = "lines/normalization";

    let mut report = ConformanceReport::new();
    if q.get() > EXHAUSTIVE_LIMIT {
        report.push(TestResult::pass(
            VALIDATOR,
            q.get(),
            format!("Skipped: exhaustive check only runs for q <= {EXHAUSTIVE_LIMIT}"),
        ));
        return report;
    }

    let mut violations = 0usize;
    let mut details = Vec::new();
    let mut record = |message: String| {
        violations += 1;
        if details.len() < MAX_DETAILS {
            details.push(message);
        }
    };

    for c in q.residues() {
        if let Some(line) = normalize_coefficients(0, 0, c, q) {
            record(format!("(0, 0, {c}) normalized to {line}"));
        }
    }

    for a in q.residues() {
        for b in q.residues() {
            for c in q.residues() {
                let raw = LineCoefficients::new(a, b, c);
                let Some(line) = raw.normalize(q) else {
                    continue;
                };
                let n = line.coefficients();

                if !(n.a == 1 || (n.a == 0 && n.b == 1)) {
                    record(format!("{raw} normalized to non-canonical {line}"));
                }
                if n.normalize(q) != Some(line) {
                    record(format!("{raw}: normalizing {line} again changes it"));
                }

                for k in 1..q.get() {
                    let scaled = raw.scale(k, q);
                    // Zero divisors of a composite q can annihilate (a, b).
                    if scaled.is_degenerate(q) {
                        continue;
                    }
                    if let Some(other) = scaled.normalize(q).filter(|other| *other != line) {
                        record(format!(
                            "{raw} -> {line}, but {k} * {raw} = {scaled} -> {other}"
                        ));
                    }
                }
            }
        }
    }

    if violations == 0 {
        report.push(TestResult::pass(
            VALIDATOR,
            q.get(),
            format!("All {} triples normalize canonically", q.get().pow(3)),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            q.get(),
            format!("{violations} normalization violation(s)"),
            details,
        ));
    }

    report
}
