use crate::config::ConformConfig;
use crate::rule_set::RuleSet;
use crate::suites::Builder;

pub const NAME: &str = "layout";

const DIRECTORIES: &[&str] = &["backend", "frontend", "database", "shared", "docker", "frontend/src"];

const FILES: &[&str] = &[
    "README.md",
    "backend/README.md",
    "backend/package.json",
    "backend/server.js",
    "backend/.gitignore",
    "frontend/package.json",
    "frontend/index.html",
    "frontend/vite.config.js",
    "frontend/.gitignore",
    "shared/README.md",
    "docker/docker-compose.yml",
    "docker/Dockerfile",
    "docker/README.md",
];

pub fn suite(config: &ConformConfig) -> RuleSet {
    let mut b = Builder::new(config, NAME, "Directory layout");
    for dir in DIRECTORIES {
        b.dir(dir);
    }
    for file in FILES {
        b.file(file);
    }
    b.not_empty("README.md");
    b.finish()
}
