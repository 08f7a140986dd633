//! Brute-force enumeration of the lines of `AG(2, q)`.
//!
//! Both routines walk every coefficient triple, so they cost O(q³). That is
//! fine for verification-sized moduli (q = 50 is 125 000 triples).

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

use tracing::debug;

use crate::line::{normalize_coefficients, NormalizedLine};
use crate::modulus::Modulus;
use crate::slope::{normalize_slope, SlopeKey};

/// Counts the distinct normalized lines of `AG(2, q)`.
///
/// Every `(a, b, c) ∈ [0, q)³` with `(a, b) ≠ (0, 0)` is normalized and
/// deduplicated. For prime `q` the result is `q² + q`.
///
/// # Example
///
/// ```
/// use affine_plane::{enumerate, Modulus, ModulusPolicy};
///
/// let q = Modulus::new(5, ModulusPolicy::PrimeOnly).unwrap();
/// assert_eq!(enumerate::count_distinct_lines(q), 30);
/// ```
#[must_use]
pub fn count_distinct_lines(q: Modulus) -> u64 {
    let lines = distinct_lines(q);
    debug!(q = q.get(), lines = lines.len(), "enumerated lines");
    lines.len() as u64
}

/// The set of distinct normalized lines of `AG(2, q)`.
#[must_use]
pub fn distinct_lines(q: Modulus) -> HashSet<NormalizedLine> {
    let mut lines = HashSet::new();
    for a in q.residues() {
        for b in q.residues() {
            if a == 0 && b == 0 {
                continue;
            }
            for c in q.residues() {
                lines.extend(normalize_coefficients(a, b, c, q));
            }
        }
    }
    lines
}

/// Lines of `AG(2, q)` grouped by slope: each key maps to the intercepts
/// `c` seen for that slope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParallelClasses {
    classes: BTreeMap<SlopeKey, BTreeSet<u64>>,
}

impl ParallelClasses {
    /// Number of distinct slope keys.
    #[inline]
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Sum of the class sizes.
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.classes.values().map(BTreeSet::len).sum()
    }

    /// Intercepts recorded for `slope`.
    #[must_use]
    pub fn get(&self, slope: &SlopeKey) -> Option<&BTreeSet<u64>> {
        self.classes.get(slope)
    }

    /// Iterates the classes in slope-key order.
    pub fn iter(&self) -> impl Iterator<Item = (&SlopeKey, &BTreeSet<u64>)> {
        self.classes.iter()
    }

    /// Compares the classes against the `AG(2, q)` identities and collects
    /// every mismatch.
    #[must_use]
    pub fn summarize(&self, q: Modulus) -> ClassSummary {
        let expected_size = q.get() as usize;
        let mut violations: Vec<ClassViolation> = self
            .classes
            .iter()
            .filter(|(_, intercepts)| intercepts.len() != expected_size)
            .map(|(slope, intercepts)| ClassViolation::ClassSize {
                slope: *slope,
                expected: q.get(),
                actual: intercepts.len() as u64,
            })
            .collect();

        let class_count = self.class_count() as u64;
        if class_count != q.expected_classes() {
            violations.push(ClassViolation::ClassCount {
                expected: q.expected_classes(),
                actual: class_count,
            });
        }

        ClassSummary {
            class_count,
            total_lines: self.total_lines() as u64,
            violations,
        }
    }
}

/// Builds the parallel classes of `AG(2, q)`.
///
/// For every non-degenerate `(a, b)` and every `c ∈ [0, q)`, the raw `c` is
/// added to the class of `normalize_slope(a, b)`.
#[must_use]
pub fn parallel_classes(q: Modulus) -> ParallelClasses {
    let mut classes: BTreeMap<SlopeKey, BTreeSet<u64>> = BTreeMap::new();
    for a in q.residues() {
        for b in q.residues() {
            let Some(slope) = normalize_slope(a, b, q) else {
                continue;
            };
            classes.entry(slope).or_default().extend(q.residues());
        }
    }
    ParallelClasses { classes }
}

/// Parallel-class counts for `AG(2, q)` together with every identity that
/// failed to hold.
///
/// # Example
///
/// ```
/// use affine_plane::{enumerate, Modulus, ModulusPolicy};
///
/// let q = Modulus::new(5, ModulusPolicy::PrimeOnly).unwrap();
/// let summary = enumerate::distinct_lines_and_parallel_classes(q);
/// assert_eq!((summary.class_count, summary.total_lines), (6, 30));
/// assert!(summary.is_valid());
/// ```
#[must_use]
pub fn distinct_lines_and_parallel_classes(q: Modulus) -> ClassSummary {
    let summary = parallel_classes(q).summarize(q);
    debug!(
        q = q.get(),
        classes = summary.class_count,
        lines = summary.total_lines,
        violations = summary.violations.len(),
        "built parallel classes"
    );
    summary
}

/// Result of [`distinct_lines_and_parallel_classes`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassSummary {
    /// Number of parallel classes found.
    pub class_count: u64,
    /// Lines summed over all classes.
    pub total_lines: u64,
    /// Every identity that did not hold.
    pub violations: Vec<ClassViolation>,
}

impl ClassSummary {
    /// Returns true if no violation was collected.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A parallel-class identity of `AG(2, q)` that failed to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum ClassViolation {
    /// A class does not hold exactly `q` lines.
    ClassSize {
        /// Slope of the offending class.
        slope: SlopeKey,
        /// `q`.
        expected: u64,
        /// Lines found in the class.
        actual: u64,
    },
    /// The number of classes is not `q + 1`.
    ClassCount {
        /// `q + 1`.
        expected: u64,
        /// Classes found.
        actual: u64,
    },
}

impl fmt::Display for ClassViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClassSize {
                slope,
                expected,
                actual,
            } => write!(
                f,
                "class for slope {slope} has {actual} lines, expected {expected}"
            ),
            Self::ClassCount { expected, actual } => {
                write!(f, "found {actual} parallel classes, expected {expected}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modulus::ModulusPolicy;

    const PRIMES: [u64; 11] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31];

    fn prime(q: u64) -> Modulus {
        Modulus::new(q, ModulusPolicy::PrimeOnly).unwrap()
    }

    #[test]
    fn line_count_is_q_squared_plus_q() {
        for q in PRIMES {
            assert_eq!(count_distinct_lines(prime(q)), q * q + q, "q = {q}");
        }
    }

    #[test]
    fn class_identities_hold_for_primes() {
        for q in PRIMES {
            let summary = distinct_lines_and_parallel_classes(prime(q));
            assert_eq!(summary.class_count, q + 1, "q = {q}");
            assert_eq!(summary.total_lines, q * q + q, "q = {q}");
            assert!(summary.is_valid(), "q = {q}: {:?}", summary.violations);
        }
    }

    #[test]
    fn every_class_has_q_members() {
        for q in PRIMES {
            let classes = parallel_classes(prime(q));
            for (slope, intercepts) in classes.iter() {
                assert_eq!(intercepts.len() as u64, q, "q = {q}, slope {slope}");
            }
        }
    }

    #[test]
    fn q5_scenario() {
        let q = prime(5);
        assert_eq!(count_distinct_lines(q), 30);
        let summary = distinct_lines_and_parallel_classes(q);
        assert_eq!((summary.class_count, summary.total_lines), (6, 30));
        assert!(parallel_classes(q).get(&SlopeKey::VERTICAL).is_some());
    }

    #[test]
    fn q4_unchecked_counts_still_match() {
        let q = Modulus::new(4, ModulusPolicy::Unchecked).unwrap();
        assert_eq!(count_distinct_lines(q), 20);
        let summary = distinct_lines_and_parallel_classes(q);
        assert_eq!((summary.class_count, summary.total_lines), (5, 20));
        assert!(summary.is_valid());
    }

    #[test]
    fn summarize_collects_every_violation() {
        let q = prime(3);
        let mut classes = parallel_classes(q);
        let mut keys = classes.classes.keys().copied();
        let first = keys.next().unwrap();
        let second = keys.next().unwrap();
        classes.classes.get_mut(&first).unwrap().remove(&0);
        classes.classes.remove(&second);

        let summary = classes.summarize(q);
        assert!(!summary.is_valid());
        assert_eq!(summary.class_count, 3);
        assert_eq!(summary.total_lines, 8);
        assert_eq!(
            summary.violations,
            vec![
                ClassViolation::ClassSize {
                    slope: first,
                    expected: 3,
                    actual: 2,
                },
                ClassViolation::ClassCount {
                    expected: 4,
                    actual: 3,
                },
            ]
        );
    }

    #[test]
    fn deterministic() {
        let q = prime(7);
        assert_eq!(parallel_classes(q), parallel_classes(q));
        assert_eq!(
            distinct_lines_and_parallel_classes(q),
            distinct_lines_and_parallel_classes(q)
        );
    }
}
