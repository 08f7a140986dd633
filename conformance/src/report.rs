//! Conformance report types: results, severity levels, and report aggregation.

use serde::Serialize;

/// Severity level of a conformance check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The check identified a warning (non-blocking).
    Warning,
    /// The check failed (blocks conformance).
    Failure,
}

/// A single conformance check result.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    /// Short identifier of the validator that produced this result.
    pub validator: String,
    /// Modulus the check ran against.
    pub q: u64,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Optional additional detail lines.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl TestResult {
    fn new(
        validator: impl Into<String>,
        q: u64,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            validator: validator.into(),
            q,
            message: message.into(),
            severity,
            details: Vec::new(),
        }
    }

    /// Creates a passing result.
    pub fn pass(validator: impl Into<String>, q: u64, message: impl Into<String>) -> Self {
        Self::new(validator, q, message, Severity::Pass)
    }

    /// Creates a failure result.
    pub fn fail(validator: impl Into<String>, q: u64, message: impl Into<String>) -> Self {
        Self::new(validator, q, message, Severity::Failure)
    }

    /// Creates a failure result with additional detail lines.
    pub fn fail_with_details(
        validator: impl Into<String>,
        q: u64,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            details,
            ..Self::fail(validator, q, message)
        }
    }

    /// Creates a warning result.
    pub fn warn(validator: impl Into<String>, q: u64, message: impl Into<String>) -> Self {
        Self::new(validator, q, message, Severity::Warning)
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Pass / warning / failure counts of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Checks that passed.
    pub passed: usize,
    /// Non-blocking warnings.
    pub warnings: usize,
    /// Checks that failed.
    pub failed: usize,
}

/// Aggregated conformance report from all validators.
#[derive(Debug, Serialize)]
pub struct ConformanceReport {
    /// All individual test results across all validators.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Extends this report with results from another report.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Returns the count of failed checks.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// Returns true if all checks passed (no failures).
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// Results produced for modulus `q`.
    pub fn for_modulus(&self, q: u64) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(move |r| r.q == q)
    }

    /// Tallies results by severity.
    pub fn summary(&self) -> Summary {
        self.results.iter().fold(Summary::default(), |mut acc, r| {
            match r.severity {
                Severity::Pass => acc.passed += 1,
                Severity::Warning => acc.warnings += 1,
                Severity::Failure => acc.failed += 1,
            }
            acc
        })
    }

    /// Renders `{"results": [...], "summary": {...}}` as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct Document<'a> {
            results: &'a [TestResult],
            summary: Summary,
        }

        serde_json::to_string_pretty(&Document {
            results: &self.results,
            summary: self.summary(),
        })
    }
}

impl Default for ConformanceReport {
    fn default() -> Self {
        Self::new()
    }
}
