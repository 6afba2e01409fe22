use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::ConformConfig;
use crate::rule::{ContentPattern, ExpectationKind};
use crate::rule_set::RuleSet;
use crate::suites::Builder;
use crate::walker;

pub const NAME: &str = "migrations";

const DIR: &str = "database/migrations";

static MIGRATION_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{3})_([a-z0-9_]+)\.(up|down)\.sql$").unwrap());

struct Migration {
    stem: &'static str,
    table: &'static str,
    /// (pattern, failure message) required in the up script.
    up: &'static [(&'static str, &'static str)],
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        stem: "001_create_users_table",
        table: "users",
        up: &[
            ("CREATE TABLE users", "CREATE TABLE users statement not found"),
            ("id SERIAL PRIMARY KEY", "id column is not SERIAL PRIMARY KEY"),
            ("username VARCHAR", "username column is not defined"),
            ("NOT NULL", "username has no NOT NULL constraint"),
            ("UNIQUE", "username has no UNIQUE constraint"),
            ("email VARCHAR", "email column is not defined"),
            ("created_at TIMESTAMP", "created_at column is not defined"),
        ],
    },
    Migration {
        stem: "002_create_posts_table",
        table: "posts",
        up: &[
            ("CREATE TABLE posts", "CREATE TABLE posts statement not found"),
            ("id SERIAL PRIMARY KEY", "id column is not SERIAL PRIMARY KEY"),
            ("user_id INTEGER", "user_id column is not defined"),
            ("FOREIGN KEY", "foreign key constraint is not defined"),
            ("REFERENCES users", "reference to users table is not defined"),
            ("title VARCHAR", "title column is not defined"),
            ("content TEXT", "content column is not defined"),
            ("created_at TIMESTAMP", "created_at column is not defined"),
        ],
    },
    Migration {
        stem: "003_create_comments_table",
        table: "comments",
        up: &[
            ("CREATE TABLE comments", "CREATE TABLE comments statement not found"),
            ("id SERIAL PRIMARY KEY", "id column is not SERIAL PRIMARY KEY"),
            ("post_id INTEGER", "post_id column is not defined"),
            ("REFERENCES posts", "reference to posts table is not defined"),
            ("user_id INTEGER", "user_id column is not defined"),
            ("REFERENCES users", "reference to users table is not defined"),
            ("content TEXT", "content column is not defined"),
            ("created_at TIMESTAMP", "created_at column is not defined"),
        ],
    },
];

const README_TERMS: &[(&str, &str)] = &[
    ("migration", "migrations"),
    ("実行", "how to run them"),
    ("database", "the database"),
];

pub fn suite(config: &ConformConfig) -> RuleSet {
    let mut b = Builder::new(config, NAME, "Database migrations");
    b.dir(DIR);

    for m in MIGRATIONS {
        let up = format!("{DIR}/{}.up.sql", m.stem);
        let down = format!("{DIR}/{}.down.sql", m.stem);
        b.file(&up).file(&down).not_empty(&up).not_empty(&down);

        for (pattern, message) in m.up {
            b.pattern(
                format!("{}.up.sql contains `{pattern}`", m.stem),
                &up,
                ContentPattern::sql(*pattern, *message),
            );
        }
        b.pattern(
            format!("{}.down.sql contains `DROP TABLE`", m.stem),
            &down,
            ContentPattern::sql("DROP TABLE", "DROP TABLE statement not found"),
        );
        b.pattern(
            format!("{}.down.sql drops {}", m.stem, m.table),
            &down,
            ContentPattern::sql(m.table, format!("{} table is not dropped", m.table)),
        );
    }

    let readme = format!("{DIR}/README.md");
    b.file(&readme);
    for (term, topic) in README_TERMS {
        b.pattern(
            format!("{readme} mentions {topic}"),
            &readme,
            ContentPattern::ignore_case(*term, format!("{readme} does not mention {topic}")),
        );
    }

    discovered_rules(config, &mut b);
    b.finish()
}

/// Pairing rules for migrations found on disk beyond the fixed catalog, plus a
/// failing rule for every .sql file that does not follow `NNN_description.(up|down).sql`.
fn discovered_rules(config: &ConformConfig, b: &mut Builder<'_>) {
    let known: BTreeSet<&str> = MIGRATIONS.iter().map(|m| m.stem).collect();
    let mut stems = BTreeSet::new();

    let files = match walker::collect_files(&config.migrations_dir, ".sql") {
        Ok(files) => files,
        Err(e) => {
            tracing::warn!(
                dir = %config.migrations_dir.display(),
                error = %e,
                "could not list migrations; skipping discovery"
            );
            return;
        }
    };

    for path in files {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        match MIGRATION_FILE.captures(file_name) {
            Some(caps) => {
                let stem = format!("{}_{}", &caps[1], &caps[2]);
                if !known.contains(stem.as_str()) {
                    stems.insert(stem);
                }
            }
            None => {
                b.path(
                    format!("{file_name} follows NNN_description.(up|down).sql"),
                    &format!("{DIR}/{file_name}"),
                    ExpectationKind::MustNotExist,
                );
            }
        }
    }

    for stem in stems {
        b.file(&format!("{DIR}/{stem}.up.sql"))
            .file(&format!("{DIR}/{stem}.down.sql"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naming_convention() {
        assert!(MIGRATION_FILE.is_match("001_create_users_table.up.sql"));
        assert!(MIGRATION_FILE.is_match("042_add_index.down.sql"));
        assert!(!MIGRATION_FILE.is_match("1_create.up.sql"));
        assert!(!MIGRATION_FILE.is_match("001_create_users_table.sql"));
        assert!(!MIGRATION_FILE.is_match("001_Create.up.sql"));
    }

    #[test]
    fn fixed_catalog_size_without_discovery() {
        let root = tempfile::tempdir().unwrap();
        let config = ConformConfig::from_root(root.path());
        let set = suite(&config);
        let per_migration: usize = MIGRATIONS.iter().map(|m| 4 + m.up.len() + 2).sum();
        assert_eq!(set.len(), 1 + per_migration + 1 + README_TERMS.len());
    }

    #[test]
    fn unlistable_migrations_dir_keeps_fixed_catalog() {
        let config = ConformConfig::from_root(std::path::Path::new("bad\0root"));
        let set = suite(&config);
        let per_migration: usize = MIGRATIONS.iter().map(|m| 4 + m.up.len() + 2).sum();
        assert_eq!(set.len(), 1 + per_migration + 1 + README_TERMS.len());
    }
}
