use std::time::Instant;

use crate::report::RunReport;
use crate::rule::{Rule, RuleResult};

/// Ordered rules for one subject (layout, migrations, schema, docs).
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: String,
    title: String,
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            rules: Vec::new(),
        }
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule in declaration order. A failing rule never stops the rest.
    pub fn run(&self) -> RunReport {
        let report: RunReport = self.rules.iter().map(|rule| self.evaluate(rule)).collect();
        tracing::info!(
            suite = %self.name,
            passed = report.len() - report.failed_count(),
            total = report.len(),
            "suite finished"
        );
        report
    }

    fn evaluate(&self, rule: &Rule) -> RuleResult {
        let start = Instant::now();
        let result = rule.evaluate().in_suite(&self.name);
        tracing::debug!(
            suite = %self.name,
            rule = %result.name,
            passed = result.passed,
            elapsed = ?start.elapsed(),
            "evaluated rule"
        );
        result
    }
}

impl Extend<Rule> for RuleSet {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}
