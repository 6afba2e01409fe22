use std::fmt;

use serde::Serialize;

/// A named, pure check over raw document text.
///
/// Stored as a plain function pointer so predicate tables can live in `const`s and be
/// listed, serialized and unit-tested without touching the filesystem.
#[derive(Clone, Copy, Serialize)]
pub struct Predicate {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    test: fn(&str) -> bool,
}

impl Predicate {
    pub const fn new(name: &'static str, description: &'static str, test: fn(&str) -> bool) -> Self {
        Self {
            name,
            description,
            test,
        }
    }

    pub fn check(&self, text: &str) -> bool {
        (self.test)(text)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// True if a top-level `# ` heading starts one of the first `max_lines` lines.
pub fn heading_within(text: &str, max_lines: usize) -> bool {
    text.lines()
        .take(max_lines)
        .any(|line| line.trim().starts_with("# "))
}

/// True if, after the first top-level heading, some non-heading line is longer than
/// `min_len` bytes once trimmed.
pub fn prose_after_title(text: &str, min_len: usize) -> bool {
    let mut found_title = false;
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("# ") {
            found_title = true;
            continue;
        }
        if found_title && trimmed.len() > min_len && !trimmed.starts_with('#') {
            return true;
        }
    }
    false
}

pub fn has_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

pub fn has_all(text: &str, needles: &[&str]) -> bool {
    needles.iter().all(|n| text.contains(n))
}

/// Case-insensitive `has_any`. Needles are expected in lowercase.
pub fn mentions_any(text: &str, needles: &[&str]) -> bool {
    has_any(&text.to_lowercase(), needles)
}

/// Case-insensitive `has_all`. Needles are expected in lowercase.
pub fn mentions_all(text: &str, needles: &[&str]) -> bool {
    has_all(&text.to_lowercase(), needles)
}

pub fn occurrences_at_least(text: &str, marker: &str, min: usize) -> bool {
    text.matches(marker).count() >= min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_must_be_inside_window() {
        let late = format!("{}# Title\n", "line\n".repeat(11));
        assert!(!heading_within(&late, 11));
        let early = format!("{}# Title\n", "line\n".repeat(10));
        assert!(heading_within(&early, 11));
    }

    #[test]
    fn subheading_is_not_a_title() {
        assert!(!heading_within("## Setup\n", 11));
        assert!(heading_within("   # Indented title\n", 11));
    }

    #[test]
    fn prose_requires_a_title_first() {
        let text = "A long enough description line here\n# Title\n";
        assert!(!prose_after_title(text, 20));
    }

    #[test]
    fn prose_ignores_short_lines_and_headings() {
        assert!(!prose_after_title("# Title\nshort\n## A heading that is long enough\n", 20));
        assert!(prose_after_title("# Title\n\nA todo app with a REST backend.\n", 20));
    }

    #[test]
    fn occurrence_counting() {
        assert!(occurrences_at_least("✅ a ✅ b ✅ c", "✅", 3));
        assert!(!occurrences_at_least("✅ a ✅ b", "✅", 3));
    }

    #[test]
    fn mentions_are_case_insensitive() {
        assert!(mentions_any("See TROUBLESHOOTING below", &["troubleshooting"]));
        assert!(mentions_all("React, Express and PostgreSQL", &["react", "express", "postgresql"]));
        assert!(!mentions_all("React only", &["react", "express"]));
    }

    #[test]
    fn predicate_runs_its_function() {
        let p = Predicate::new("non-empty", "has text", |t| !t.is_empty());
        assert!(p.check("x"));
        assert!(!p.check(""));
        assert!(format!("{p:?}").contains("non-empty"));
    }
}
