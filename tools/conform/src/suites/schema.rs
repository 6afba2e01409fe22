use crate::config::ConformConfig;
use crate::rule::ContentPattern;
use crate::rule_set::RuleSet;
use crate::suites::Builder;

pub const NAME: &str = "schema";

const SCHEMA: &str = "database/schema.sql";
const README: &str = "database/README.md";

const SCHEMA_PATTERNS: &[&str] = &[
    "CREATE TABLE todos",
    "id SERIAL PRIMARY KEY",
    "title VARCHAR(200) NOT NULL",
    "completed BOOLEAN DEFAULT false",
    "created_at TIMESTAMP DEFAULT NOW()",
];

const REQUIRED_COLUMNS: &[&str] = &["ID", "TITLE", "COMPLETED", "CREATED_AT"];

/// (literal text, what it documents)
const README_FACTS: &[(&str, &str)] = &[
    ("todo_db", "the database name todo_db"),
    ("PostgreSQL", "PostgreSQL"),
    ("todos", "the todos table"),
];

pub fn suite(config: &ConformConfig) -> RuleSet {
    let mut b = Builder::new(config, NAME, "Database schema");
    b.dir("database").file(SCHEMA).file(README).not_empty(SCHEMA);

    for pattern in SCHEMA_PATTERNS {
        b.pattern(
            format!("schema.sql defines `{pattern}`"),
            SCHEMA,
            ContentPattern::sql(*pattern, format!("schema.sql does not define `{pattern}`")),
        );
    }
    for column in REQUIRED_COLUMNS {
        b.pattern(
            format!("schema.sql has column {column}"),
            SCHEMA,
            ContentPattern::ignore_case(*column, format!("required column {column} not found in schema.sql")),
        );
    }
    for (text, fact) in README_FACTS {
        b.pattern(
            format!("{README} mentions {fact}"),
            README,
            ContentPattern::literal(*text, format!("{README} does not mention {fact}")),
        );
    }
    b.finish()
}
