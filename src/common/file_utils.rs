use crate::error::{AnalysisError, DockGenError};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directories that never contain marker files worth inspecting.
const IGNORED_DIRS: &[&str] = &["node_modules", ".git", "target", "vendor", "build", "dist", ".next"];

/// Validates a project path before any analysis runs
pub fn validate_project_path(path: &Path) -> Result<PathBuf, DockGenError> {
    // Canonicalize can fail for valid paths on some platforms, fall back
    // to the given path if it exists
    let canonical = match path.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            if path.exists() {
                path.to_path_buf()
            } else {
                return Err(AnalysisError::InvalidPath {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
                .into());
            }
        }
    };

    if !canonical.is_dir() {
        return Err(AnalysisError::InvalidPath {
            path: canonical,
            reason: "not a directory".to_string(),
        }
        .into());
    }

    Ok(canonical)
}

/// Enumerates every non-directory entry under `root`, returned as paths
/// relative to `root`. Detection only needs names, never file content.
pub fn collect_project_files(root: &Path) -> Result<Vec<PathBuf>, DockGenError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_ignored(e, root))
    {
        let entry = entry?;

        if entry.file_type().is_file() {
            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .to_path_buf();
            files.push(relative);
        }
    }

    log::debug!("Collected {} files under {}", files.len(), root.display());
    Ok(files)
}

/// Checks if a directory entry should be skipped during the walk
fn is_ignored(entry: &DirEntry, root: &Path) -> bool {
    if entry.path() == root {
        return false;
    }

    let name = match entry.file_name().to_str() {
        Some(n) => n,
        None => return false,
    };

    if IGNORED_DIRS.contains(&name) {
        return true;
    }

    // Skip hidden entries except the .env family, which environment
    // detection reads
    if name.starts_with('.') && !name.starts_with(".env") {
        return true;
    }

    false
}
