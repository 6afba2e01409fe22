use std::path::{Path, PathBuf};

use crate::error::{CheckError, Result};

pub struct ConformConfig {
    pub root_dir: PathBuf,
    pub migrations_dir: PathBuf,
}

impl ConformConfig {
    pub fn from_root(root: &Path) -> Self {
        Self {
            root_dir: root.to_path_buf(),
            migrations_dir: root.join("database/migrations"),
        }
    }

    /// Discover the project root by walking up from cwd to find a .git directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            if dir.join(".git").exists() {
                return Some(Self::from_root(&dir));
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Every rule resolves against the root, so a missing root is fatal for the run.
    pub fn validate(&self) -> Result<()> {
        if self.root_dir.is_dir() {
            Ok(())
        } else {
            Err(CheckError::RootNotFound(self.root_dir.clone()))
        }
    }
}
