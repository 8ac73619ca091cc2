//! Source file enumeration.
//!
//! Walks a project tree and yields candidate source files for scanning.
//! Hidden paths, virtual environments, and vendored dependency trees are
//! pruned so the scan only sees first-party code.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Extensions treated as source code.
const SOURCE_EXTENSIONS: &[&str] = &[
    "py", "rs", "js", "ts", "jsx", "tsx", "go", "rb", "java", "kt", "c", "h", "cc", "cpp", "hpp",
    "cs", "php", "swift", "sh",
];

/// Directory names that hold third-party or generated code, never scanned.
const EXCLUDED_DIRS: &[&str] = &[
    "venv",
    "env",
    "site-packages",
    "node_modules",
    "vendor",
    "target",
    "__pycache__",
    "dist",
    "build",
];

/// Check whether a directory entry should be descended into / yielded.
///
/// Hidden names (leading `.`) and the excluded directory set are pruned.
/// The walk root itself is always kept, even if the project lives in a
/// hidden directory.
fn keep_entry(entry: &walkdir::DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    match entry.file_name().to_str() {
        Some(name) => !name.starts_with('.') && !EXCLUDED_DIRS.contains(&name),
        // Non-UTF-8 names cannot match a needle set defined over text anyway.
        None => false,
    }
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SOURCE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Lazily enumerate candidate source files under `root`.
///
/// Unreadable entries below the root are skipped; the walk itself never
/// fails. Enumeration order is filesystem order, no guarantee beyond that.
pub fn walk_source_files(root: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(keep_entry)
        .filter_map(|entry| match entry {
            Ok(e) if e.file_type().is_file() && is_source_file(e.path()) => Some(e.into_path()),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("skipping unreadable entry during walk: {}", e);
                None
            }
        })
}
