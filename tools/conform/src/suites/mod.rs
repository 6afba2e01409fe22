pub mod docs;
pub mod layout;
pub mod migrations;
pub mod schema;

use crate::config::ConformConfig;
use crate::probe::CheckTarget;
use crate::rule::{ContentCheck, ContentPattern, ExpectationKind, Rule};
use crate::rule_set::RuleSet;

pub type SuiteFn = fn(&ConformConfig) -> RuleSet;

/// Every suite in report order, keyed by the name accepted on the command line.
pub const ALL: &[(&str, SuiteFn)] = &[
    (layout::NAME, layout::suite),
    (migrations::NAME, migrations::suite),
    (schema::NAME, schema::suite),
    (docs::NAME, docs::suite),
];

/// Shorthands shared by the suite builders; all paths are relative to the project root.
pub(crate) struct Builder<'a> {
    config: &'a ConformConfig,
    set: RuleSet,
}

impl<'a> Builder<'a> {
    pub(crate) fn new(config: &'a ConformConfig, name: &str, title: &str) -> Self {
        Self {
            config,
            set: RuleSet::new(name, title),
        }
    }

    pub(crate) fn target(&self, rel: &str) -> CheckTarget {
        CheckTarget::new(&self.config.root_dir, rel)
    }

    pub(crate) fn dir(&mut self, rel: &str) -> &mut Self {
        self.path(format!("{rel} is a directory"), rel, ExpectationKind::ExistsAsDirectory)
    }

    pub(crate) fn file(&mut self, rel: &str) -> &mut Self {
        self.path(format!("{rel} is a file"), rel, ExpectationKind::ExistsAsFile)
    }

    pub(crate) fn path(&mut self, name: String, rel: &str, kind: ExpectationKind) -> &mut Self {
        let rule = Rule::structural(name, self.target(rel), kind);
        self.set.push(rule);
        self
    }

    pub(crate) fn not_empty(&mut self, rel: &str) -> &mut Self {
        let rule = Rule::content(format!("{rel} is not empty"), self.target(rel), ContentCheck::NotEmpty);
        self.set.push(rule);
        self
    }

    pub(crate) fn pattern(&mut self, name: String, rel: &str, pattern: ContentPattern) -> &mut Self {
        let rule = Rule::content(name, self.target(rel), ContentCheck::Pattern(pattern));
        self.set.push(rule);
        self
    }

    pub(crate) fn push(&mut self, rule: Rule) -> &mut Self {
        self.set.push(rule);
        self
    }

    pub(crate) fn finish(self) -> RuleSet {
        self.set
    }
}
