use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions that mark a candidate source file.
const SOURCE_EXTENSIONS: [&str; 2] = ["c", "cpp"];

pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Enumerate candidate source files under `path`.
///
/// A file argument yields itself (if it is a `.c`/`.cpp` file); a directory
/// is walked recursively. Traversal order is preserved, since the Makefile
/// suggestion lists the files in the order they were found.
pub fn discover_sources(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        if is_source_file(path) {
            return vec![path.to_path_buf()];
        }
        return Vec::new();
    }

    WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_source_file(p))
        .collect()
}
