use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Files directly inside `dir` whose name ends with `extension`, sorted by name.
/// A missing directory (or a file in its place) yields nothing, since rules on the
/// directory itself report that. Any other listing failure is returned.
pub fn collect_files(dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            return Ok(Vec::new())
        }
        Err(e) => return Err(e),
    };

    let mut results: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|name| name.ends_with(extension))
        })
        .collect();
    results.sort();
    Ok(results)
}
