use serde::Serialize;

use crate::rule::RuleResult;

/// Ordered outcomes of one run. Built once and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    results: Vec<RuleResult>,
}

impl RunReport {
    pub fn results(&self) -> &[RuleResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &RuleResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    pub fn summary(&self) -> ReportSummary<'_> {
        ReportSummary {
            all_passed: self.all_passed(),
            total: self.len(),
            failed: self.failed_count(),
            results: &self.results,
        }
    }
}

impl FromIterator<RuleResult> for RunReport {
    fn from_iter<I: IntoIterator<Item = RuleResult>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

/// Serializable view of a report with its derived totals.
#[derive(Debug, Serialize)]
pub struct ReportSummary<'a> {
    pub all_passed: bool,
    pub total: usize,
    pub failed: usize,
    pub results: &'a [RuleResult],
}

/// Concatenate reports in the order given.
pub fn aggregate<I>(reports: I) -> RunReport
where
    I: IntoIterator<Item = RunReport>,
{
    reports.into_iter().flat_map(|r| r.results).collect()
}
