//! Parallel-class validator.
//!
//! Verifies `q + 1` classes, `q` lines per class, and `q² + q` lines in
//! total. Every violated identity becomes one detail line.

use affine_plane::{enumerate, Modulus};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "classes/parallel";

/// Validates the parallel classes of `AG(2, q)`.
pub fn validate(q: Modulus) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let summary = enumerate::distinct_lines_and_parallel_classes(q);

    let mut details: Vec<String> = summary.violations.iter().map(ToString::to_string).collect();
    if summary.total_lines != q.expected_lines() {
        details.push(format!(
            "classes hold {} lines in total, expected {}",
            summary.total_lines,
            q.expected_lines()
        ));
    }

    if details.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            q.get(),
            format!(
                "{} classes of {} lines ({} total)",
                summary.class_count,
                q.get(),
                summary.total_lines
            ),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            q.get(),
            format!("{} parallel-class identity violation(s)", details.len()),
            details,
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use affine_plane::{ModulusPolicy, PlaneError};

    #[test]
    fn q5_passes_with_six_classes() -> Result<(), PlaneError> {
        let report = validate(Modulus::new(5, ModulusPolicy::PrimeOnly)?);
        assert_eq!(report.results.len(), 1);
        assert!(report.all_passed());
        assert_eq!(report.results[0].message, "6 classes of 5 lines (30 total)");
        Ok(())
    }

    #[test]
    fn composite_class_counts_still_hold() -> Result<(), PlaneError> {
        for q in [4, 6, 8, 9, 10] {
            let report = validate(Modulus::new(q, ModulusPolicy::Unchecked)?);
            assert_eq!(report.results.len(), 1);
            assert!(report.all_passed(), "q = {q}: {:?}", report.results);
        }
        Ok(())
    }
}
