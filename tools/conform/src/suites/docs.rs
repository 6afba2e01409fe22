//! Documentation requirements for the project README and its component READMEs.

use crate::config::ConformConfig;
use crate::predicate::{
    has_all, has_any, heading_within, mentions_all, mentions_any, occurrences_at_least,
    prose_after_title, Predicate,
};
use crate::rule::{ContentCheck, ContentPattern, ExpectationKind, Rule};
use crate::rule_set::RuleSet;
use crate::suites::Builder;

pub const NAME: &str = "docs";

const ROOT_README: &str = "README.md";

const TITLE_WINDOW: usize = 11;
const MIN_DESCRIPTION_LEN: usize = 20;
const MIN_FEATURE_MARKS: usize = 3;

const COMPONENT_READMES: &[&str] = &["backend/README.md", "frontend/README.md", "database/README.md"];

pub const ROOT_README_PREDICATES: &[Predicate] = &[
    Predicate::new(
        "project title",
        "a top-level `# ` heading within the first lines",
        title,
    ),
    Predicate::new(
        "project description",
        "a descriptive paragraph after the title",
        description,
    ),
    Predicate::new(
        "setup instructions",
        "a quick start, installation or setup section",
        setup,
    ),
    Predicate::new(
        "prerequisites",
        "required environment listed, including Node.js and PostgreSQL",
        prerequisites,
    ),
    Predicate::new(
        "database setup",
        "concrete PostgreSQL setup steps (create database)",
        database_setup,
    ),
    Predicate::new(
        "backend setup",
        "backend start steps with npm install and npm start or npm run dev",
        backend_setup,
    ),
    Predicate::new(
        "frontend setup",
        "frontend start steps with npm install and npm run dev or npm start",
        frontend_setup,
    ),
    Predicate::new(
        "api reference",
        "REST API endpoints covering GET, POST, PUT and DELETE",
        api_reference,
    ),
    Predicate::new(
        "data types",
        "the Todo data type with id, title and completed",
        data_types,
    ),
    Predicate::new(
        "feature list",
        "a features section with at least three ✅ items",
        feature_list,
    ),
    Predicate::new(
        "running tests",
        "test commands such as npm test or go test",
        running_tests,
    ),
    Predicate::new(
        "tech stack",
        "a tech stack section naming React, Express and PostgreSQL",
        tech_stack,
    ),
    Predicate::new(
        "troubleshooting",
        "common problems and their fixes",
        troubleshooting,
    ),
    Predicate::new(
        "ports",
        "backend port 3001 and frontend port 5173",
        ports,
    ),
    Predicate::new(
        "related documents",
        "links to backend, frontend and database READMEs",
        related_documents,
    ),
    Predicate::new(
        "project structure",
        "the directory layout covering backend, frontend and database",
        project_structure,
    ),
    Predicate::new(
        "development workflow",
        "a TDD red/green/refactor workflow",
        development_workflow,
    ),
    Predicate::new(
        "code blocks",
        "fenced code blocks tagged bash and typescript",
        code_blocks,
    ),
    Predicate::new(
        "docker compose",
        "starting everything with docker compose up",
        docker_compose,
    ),
    Predicate::new(
        "environment variables",
        "an example .env with DB_HOST or DATABASE_URL",
        environment_variables,
    ),
    Predicate::new("license", "a license section", license),
    Predicate::new(
        "contributing",
        "contribution guidelines mentioning pull requests",
        contributing,
    ),
    Predicate::new(
        "versions",
        "versions of the main dependencies",
        versions,
    ),
    Predicate::new(
        "architecture diagram",
        "an architecture overview drawn as a code block or tree",
        architecture_diagram,
    ),
    Predicate::new("ci/cd", "the CI/CD pipeline", ci_cd),
    Predicate::new("deployment", "how to deploy to production", deployment),
    Predicate::new(
        "security",
        "security notes on .env files or credentials",
        security,
    ),
    Predicate::new(
        "performance",
        "performance or optimization notes",
        performance,
    ),
];

fn title(text: &str) -> bool {
    heading_within(text, TITLE_WINDOW)
}

fn description(text: &str) -> bool {
    prose_after_title(text, MIN_DESCRIPTION_LEN)
}

fn setup(text: &str) -> bool {
    mentions_any(
        text,
        &[
            "セットアップ",
            "setup",
            "インストール",
            "installation",
            "クイックスタート",
            "quick start",
            "getting started",
        ],
    )
}

fn prerequisites(text: &str) -> bool {
    mentions_any(text, &["前提条件", "prerequisite", "requirements"])
        && mentions_any(text, &["node.js", "nodejs"])
        && mentions_any(text, &["postgresql"])
}

fn database_setup(text: &str) -> bool {
    mentions_any(text, &["database"]) && mentions_any(text, &["create database", "データベース作成"])
}

fn backend_setup(text: &str) -> bool {
    has_all(text, &["backend", "npm install"]) && has_any(text, &["npm start", "npm run dev"])
}

fn frontend_setup(text: &str) -> bool {
    has_all(text, &["frontend", "npm install"]) && has_any(text, &["npm run dev", "npm start"])
}

fn api_reference(text: &str) -> bool {
    text.contains("API") && has_all(&text.to_uppercase(), &["GET", "POST", "PUT", "DELETE"])
}

fn data_types(text: &str) -> bool {
    mentions_any(text, &["interface todo", "データ型"]) && has_all(text, &["id", "title", "completed"])
}

fn feature_list(text: &str) -> bool {
    mentions_any(text, &["機能", "features"]) && occurrences_at_least(text, "✅", MIN_FEATURE_MARKS)
}

fn running_tests(text: &str) -> bool {
    mentions_any(text, &["テスト", "test"]) && has_any(text, &["npm test", "go test", "npm run test"])
}

fn tech_stack(text: &str) -> bool {
    mentions_any(text, &["技術スタック", "tech stack", "technology"])
        && mentions_all(text, &["react", "express", "postgresql"])
}

fn troubleshooting(text: &str) -> bool {
    mentions_any(text, &["トラブルシューティング", "troubleshooting", "common issues"])
}

fn ports(text: &str) -> bool {
    has_all(text, &["3001", "5173"])
}

fn related_documents(text: &str) -> bool {
    has_all(text, COMPONENT_READMES)
}

fn project_structure(text: &str) -> bool {
    mentions_any(text, &["プロジェクト構成", "project structure"])
        && has_all(text, &["backend", "frontend", "database"])
}

fn development_workflow(text: &str) -> bool {
    mentions_any(text, &["tdd", "test-driven development"])
        && mentions_any(text, &["red", "green", "refactor"])
}

fn code_blocks(text: &str) -> bool {
    text.contains("```bash") && has_any(text, &["```typescript", "```ts"])
}

fn docker_compose(text: &str) -> bool {
    mentions_any(text, &["docker"]) && has_any(text, &["docker-compose up", "docker compose up"])
}

fn environment_variables(text: &str) -> bool {
    text.contains(".env") && has_any(text, &["DB_HOST", "DATABASE_URL"])
}

fn license(text: &str) -> bool {
    mentions_any(text, &["ライセンス", "license"])
}

fn contributing(text: &str) -> bool {
    mentions_any(text, &["貢献", "contribution", "contributing"])
        && mentions_any(text, &["プルリクエスト", "pull request"])
}

fn versions(text: &str) -> bool {
    has_any(text, &["React 19", "Node.js (v18", "PostgreSQL 16"])
}

fn architecture_diagram(text: &str) -> bool {
    mentions_any(text, &["architecture", "アーキテクチャ"]) && has_any(text, &["```", "├──", "└──"])
}

fn ci_cd(text: &str) -> bool {
    mentions_any(text, &["ci/cd", "github actions", "continuous integration"])
}

fn deployment(text: &str) -> bool {
    mentions_any(text, &["deploy", "デプロイ"])
}

fn security(text: &str) -> bool {
    mentions_any(text, &["security", "セキュリティ"])
        && (text.contains(".env") || mentions_any(text, &["credential", "認証情報"]))
}

fn performance(text: &str) -> bool {
    mentions_any(text, &["performance", "optimization", "パフォーマンス", "最適化"])
}

pub fn suite(config: &ConformConfig) -> RuleSet {
    let mut b = Builder::new(config, NAME, "Documentation");

    for predicate in ROOT_README_PREDICATES {
        let rule = Rule::content(
            format!("README.md: {}", predicate.name),
            b.target(ROOT_README),
            ContentCheck::Predicate(*predicate),
        );
        b.push(rule);
    }

    for readme in COMPONENT_READMES {
        b.file(readme);
    }

    for readme in COMPONENT_READMES {
        let link = format!("./{readme}");
        b.pattern(
            format!("README.md links to {link}"),
            ROOT_README,
            ContentPattern::literal(link.clone(), format!("README.md does not link to {link}")),
        );
        b.path(format!("link target {link} exists"), readme, ExpectationKind::ExistsAsFile);
    }
    b.finish()
}
