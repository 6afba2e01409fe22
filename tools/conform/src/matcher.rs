//! Whitespace- and case-insensitive containment for hand-formatted SQL and Markdown.
//!
//! This is purely structural: a fragment inside a SQL comment matches the same as a real
//! statement.

/// Collapse every whitespace run to a single space and uppercase the result.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase()
}

/// Whether the normalized pattern occurs in the normalized haystack.
///
/// An empty pattern is contained in everything; callers reject it before matching.
pub fn contains(haystack: &str, pattern: &str) -> bool {
    normalize(haystack).contains(&normalize(pattern))
}

pub fn contains_ignore_case(haystack: &str, pattern: &str) -> bool {
    haystack.to_lowercase().contains(&pattern.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_uppercases() {
        assert_eq!(normalize("  create\ttable\n\n  users ( "), "CREATE TABLE USERS (");
    }

    #[test]
    fn empty_input_normalizes_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in [
            "",
            "DROP TABLE users;",
            "  id   SERIAL\n PRIMARY KEY,\r\n",
            "título varchar(200)",
            "ß straße",
        ] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input: {s:?}");
        }
    }

    #[test]
    fn contains_ignores_case_and_layout() {
        assert!(contains(
            "Title   VARCHAR(200)\nNOT NULL",
            "title varchar(200) not null"
        ));
    }

    #[test]
    fn contains_rejects_split_tokens() {
        assert!(!contains("VARCHAR (200)", "VARCHAR(200)"));
    }

    #[test]
    fn contains_matches_inside_comments() {
        assert!(contains("-- DROP TABLE users\nTRUNCATE users;", "drop table"));
    }

    #[test]
    fn ignore_case_keeps_whitespace() {
        assert!(contains_ignore_case("Run the Migration", "migration"));
        assert!(!contains_ignore_case("run the\nmigration", "the migration"));
    }
}
