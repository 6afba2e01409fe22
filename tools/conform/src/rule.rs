use std::fs;

use serde::Serialize;

use crate::error::{CheckError, Result};
use crate::matcher;
use crate::predicate::Predicate;
use crate::probe::{self, CheckTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectationKind {
    ExistsAsFile,
    ExistsAsDirectory,
    MustNotExist,
}

impl ExpectationKind {
    fn describe(self) -> &'static str {
        match self {
            ExpectationKind::ExistsAsFile => "a file",
            ExpectationKind::ExistsAsDirectory => "a directory",
            ExpectationKind::MustNotExist => "absent",
        }
    }

    fn is_met(self, observed: probe::Probe) -> bool {
        match self {
            ExpectationKind::ExistsAsFile => observed.exists && !observed.is_dir,
            ExpectationKind::ExistsAsDirectory => observed.exists && observed.is_dir,
            ExpectationKind::MustNotExist => !observed.exists,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathExpectation {
    pub target: CheckTarget,
    pub kind: ExpectationKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Whitespace runs collapsed and case folded on both sides.
    #[default]
    Normalized,
    IgnoreCase,
    Literal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentPattern {
    pub pattern: String,
    pub message: String,
    pub mode: MatchMode,
}

impl ContentPattern {
    pub fn sql(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_mode(pattern, message, MatchMode::Normalized)
    }

    pub fn ignore_case(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_mode(pattern, message, MatchMode::IgnoreCase)
    }

    pub fn literal(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_mode(pattern, message, MatchMode::Literal)
    }

    fn with_mode(pattern: impl Into<String>, message: impl Into<String>, mode: MatchMode) -> Self {
        Self {
            pattern: pattern.into(),
            message: message.into(),
            mode,
        }
    }

    /// An empty pattern would match anything, so it is a configuration error.
    pub fn validate(&self) -> Result<()> {
        if self.pattern.trim().is_empty() {
            return Err(CheckError::Config {
                reason: format!("empty pattern (message: {:?})", self.message),
            });
        }
        Ok(())
    }

    /// Whether `haystack` contains the pattern.
    pub fn matches(&self, haystack: &str) -> Result<bool> {
        self.validate()?;
        Ok(match self.mode {
            MatchMode::Normalized => matcher::contains(haystack, &self.pattern),
            MatchMode::IgnoreCase => matcher::contains_ignore_case(haystack, &self.pattern),
            MatchMode::Literal => haystack.contains(&self.pattern),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum ContentCheck {
    Pattern(ContentPattern),
    Predicate(Predicate),
    /// Non-empty once surrounding whitespace is trimmed.
    NotEmpty,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentExpectation {
    pub target: CheckTarget,
    pub check: ContentCheck,
}

/// One independent verification, built from plain data.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    Structural {
        name: String,
        expectation: PathExpectation,
    },
    Content {
        name: String,
        expectation: ContentExpectation,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleResult {
    pub suite: String,
    pub name: String,
    pub passed: bool,
    /// Empty whenever `passed` is true.
    pub detail: String,
}

impl RuleResult {
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            suite: String::new(),
            name: name.into(),
            passed: true,
            detail: String::new(),
        }
    }

    pub fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            suite: String::new(),
            name: name.into(),
            passed: false,
            detail: detail.into(),
        }
    }

    pub fn in_suite(mut self, suite: &str) -> Self {
        self.suite = suite.to_string();
        self
    }
}

enum Outcome {
    Met,
    Unmet(String),
}

impl Rule {
    pub fn structural(
        name: impl Into<String>,
        target: CheckTarget,
        kind: ExpectationKind,
    ) -> Self {
        Rule::Structural {
            name: name.into(),
            expectation: PathExpectation { target, kind },
        }
    }

    pub fn content(name: impl Into<String>, target: CheckTarget, check: ContentCheck) -> Self {
        Rule::Content {
            name: name.into(),
            expectation: ContentExpectation { target, check },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Rule::Structural { name, .. } | Rule::Content { name, .. } => name,
        }
    }

    pub fn target(&self) -> &CheckTarget {
        match self {
            Rule::Structural { expectation, .. } => &expectation.target,
            Rule::Content { expectation, .. } => &expectation.target,
        }
    }

    /// Human-readable statement of what the rule expects.
    pub fn expectation_summary(&self) -> String {
        match self {
            Rule::Structural { expectation, .. } => {
                format!("{} is {}", expectation.target.display(), expectation.kind.describe())
            }
            Rule::Content { expectation, .. } => {
                let path = expectation.target.display();
                match &expectation.check {
                    ContentCheck::Pattern(p) => format!("{path} contains {:?}", p.pattern),
                    ContentCheck::Predicate(p) => format!("{path}: {}", p.description),
                    ContentCheck::NotEmpty => format!("{path} is not empty"),
                }
            }
        }
    }

    /// Evaluate the rule. Never fails: infrastructure errors become a failing result
    /// carrying the error message.
    pub fn evaluate(&self) -> RuleResult {
        let outcome = match self {
            Rule::Structural { expectation, .. } => evaluate_structural(expectation),
            Rule::Content { expectation, .. } => evaluate_content(expectation),
        };
        match outcome {
            Ok(Outcome::Met) => RuleResult::pass(self.name()),
            Ok(Outcome::Unmet(detail)) => RuleResult::fail(self.name(), detail),
            Err(e) => {
                tracing::warn!(rule = self.name(), error = %e, "rule could not be evaluated");
                RuleResult::fail(self.name(), e.to_string())
            }
        }
    }
}

fn evaluate_structural(expectation: &PathExpectation) -> Result<Outcome> {
    let observed = probe::probe(&expectation.target)?;
    if expectation.kind.is_met(observed) {
        return Ok(Outcome::Met);
    }
    Ok(Outcome::Unmet(format!(
        "expected {} to be {}, found {}",
        expectation.target.display(),
        expectation.kind.describe(),
        observed.describe(),
    )))
}

fn evaluate_content(expectation: &ContentExpectation) -> Result<Outcome> {
    if let ContentCheck::Pattern(pattern) = &expectation.check {
        pattern.validate()?;
    }

    let path = expectation.target.display();
    let text = fs::read_to_string(expectation.target.absolute()).map_err(|source| {
        CheckError::Read {
            path: path.clone(),
            source,
        }
    })?;

    let outcome = match &expectation.check {
        ContentCheck::Pattern(pattern) => {
            if pattern.matches(&text)? {
                Outcome::Met
            } else {
                Outcome::Unmet(format!(
                    "{}\n  file: {}\n  expected pattern: {}\n  actual content:\n{}",
                    pattern.message, path, pattern.pattern, text
                ))
            }
        }
        ContentCheck::Predicate(predicate) => {
            if predicate.check(&text) {
                Outcome::Met
            } else {
                Outcome::Unmet(format!(
                    "{} failed for {}: {}",
                    predicate.name, path, predicate.description
                ))
            }
        }
        ContentCheck::NotEmpty => {
            if text.trim().is_empty() {
                Outcome::Unmet(format!("{path} is empty"))
            } else {
                Outcome::Met
            }
        }
    };
    Ok(outcome)
}
