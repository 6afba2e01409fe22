use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{CheckError, Result};

/// A path relative to a fixed project root. The root never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckTarget {
    #[serde(skip)]
    root: PathBuf,
    #[serde(rename = "path")]
    relative: PathBuf,
}

impl CheckTarget {
    pub fn new(root: impl Into<PathBuf>, relative: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            relative: relative.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn relative(&self) -> &Path {
        &self.relative
    }

    pub fn absolute(&self) -> PathBuf {
        self.root.join(&self.relative)
    }

    /// Root-relative path with forward slashes, used in diagnostics.
    pub fn display(&self) -> String {
        self.relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub exists: bool,
    pub is_dir: bool,
}

impl Probe {
    pub const ABSENT: Probe = Probe { exists: false, is_dir: false };

    pub fn describe(&self) -> &'static str {
        match (self.exists, self.is_dir) {
            (false, _) => "nothing",
            (true, true) => "a directory",
            (true, false) => "a file",
        }
    }
}

/// Report whether the target exists and whether it is a directory.
/// "Not found" is a normal answer; any other metadata failure is an error.
pub fn probe(target: &CheckTarget) -> Result<Probe> {
    match fs::metadata(target.absolute()) {
        Ok(meta) => Ok(Probe {
            exists: true,
            is_dir: meta.is_dir(),
        }),
        // A file standing where a parent directory should be means the path cannot exist.
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            Ok(Probe::ABSENT)
        }
        Err(source) => Err(CheckError::Probe {
            path: target.display(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_is_absent_not_error() {
        let root = tempfile::tempdir().unwrap();
        let target = CheckTarget::new(root.path(), "nope/missing.txt");
        assert_eq!(probe(&target).unwrap(), Probe::ABSENT);
    }

    #[test]
    fn path_under_a_file_is_absent_not_error() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("database")).unwrap();
        fs::write(root.path().join("database/migrations"), "not a directory").unwrap();

        let target = CheckTarget::new(root.path(), "database/migrations/seed.sql");
        assert_eq!(probe(&target).unwrap(), Probe::ABSENT);
    }

    #[test]
    fn invalid_path_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        let target = CheckTarget::new(root.path(), "bad\0path");
        let err = probe(&target).unwrap_err();
        assert!(matches!(err, CheckError::Probe { .. }));
        assert!(err.to_string().starts_with("failed to inspect bad"), "{err}");
    }

    #[test]
    fn reports_file_and_directory_kinds() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("database")).unwrap();
        fs::write(root.path().join("database/schema.sql"), "x").unwrap();

        let dir = probe(&CheckTarget::new(root.path(), "database")).unwrap();
        assert!(dir.exists && dir.is_dir);

        let file = probe(&CheckTarget::new(root.path(), "database/schema.sql")).unwrap();
        assert!(file.exists && !file.is_dir);
    }

    #[test]
    fn display_joins_with_forward_slashes() {
        let target = CheckTarget::new("/root", Path::new("database").join("migrations"));
        assert_eq!(target.display(), "database/migrations");
        assert_eq!(target.root(), Path::new("/root"));
    }

    #[test]
    fn describe_names_observed_kind() {
        assert_eq!(Probe::ABSENT.describe(), "nothing");
        assert_eq!(Probe { exists: true, is_dir: true }.describe(), "a directory");
        assert_eq!(Probe { exists: true, is_dir: false }.describe(), "a file");
    }
}
