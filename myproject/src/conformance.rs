//! myproject — Conformance Runner
//!
//! Replays fixture cases through the arithmetic and collects mismatches.

use crate::fixtures::Case;

/// A case whose result differed from the expected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub case: Case,
    pub actual: i32,
}

/// Outcome of a conformance run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub total: usize,
    pub passed: usize,
    pub failures: Vec<Failure>,
}

impl Report {
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run every case and return the report.
pub fn run_cases(cases: &[Case]) -> Report {
    let mut report = Report::default();
    for case in cases {
        let actual = case.op.apply(case.a, case.b);
        report.total += 1;
        if actual == case.expected {
            tracing::debug!(%case, "case passed");
            report.passed += 1;
        } else {
            tracing::warn!(%case, actual, "case failed");
            report.failures.push(Failure {
                case: case.clone(),
                actual,
            });
        }
    }
    report
}
