pub mod config;
pub mod error;
pub mod matcher;
pub mod predicate;
pub mod probe;
pub mod report;
pub mod reporter;
pub mod rule;
pub mod rule_set;
pub mod suites;
pub mod walker;

use config::ConformConfig;
use report::RunReport;
use rule_set::RuleSet;

/// Build the named suites in catalog order, or all of them when `only` is empty.
pub fn build_suites(config: &ConformConfig, only: &[String]) -> Vec<RuleSet> {
    suites::ALL
        .iter()
        .filter(|(name, _)| only.is_empty() || only.iter().any(|o| o == name))
        .map(|(_, build)| build(config))
        .collect()
}

pub fn run_suites(sets: &[RuleSet]) -> RunReport {
    report::aggregate(sets.iter().map(RuleSet::run))
}

pub fn run_all_checks(config: &ConformConfig) -> RunReport {
    run_suites(&build_suites(config, &[]))
}
