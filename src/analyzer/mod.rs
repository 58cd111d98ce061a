//! # Analyzer Module
//!
//! Project inspection: enumerates the files under a project root and answers
//! the marker-file queries that ecosystem detection and environment
//! collection are built on.

use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub mod env_collector;
pub mod secrets;

pub use env_collector::collect_environment;
pub use secrets::is_secret_like;

/// Mapping of environment variable names to values. Parsed `.env` entries
/// are authoritative; ecosystem defaults only fill absent keys.
pub type EnvironmentMap = BTreeMap<String, String>;

/// Immutable view of a project directory: its root and every non-directory
/// entry beneath it, as relative paths.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectInspector {
    project_root: PathBuf,
    files: Vec<PathBuf>,
}

impl ProjectInspector {
    /// Builds an inspector over an already-enumerated file list. Primarily
    /// useful in tests; `analyze_project` performs the walk for real runs.
    pub fn from_files(project_root: PathBuf, files: Vec<PathBuf>) -> Self {
        Self { project_root, files }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// True iff some entry's base name equals `name` case-insensitively.
    /// Case folding tolerates filesystem differences across platforms.
    pub fn has_marker_file(&self, name: &str) -> bool {
        self.files.iter().any(|file| {
            file.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
        })
    }

    /// True iff some entry's lower-cased path ends with one of the suffixes.
    pub fn has_file_with_extension(&self, extensions: &[&str]) -> bool {
        self.files.iter().any(|file| {
            let path = file.to_string_lossy().to_lowercase();
            extensions.iter().any(|ext| path.ends_with(ext))
        })
    }
}

/// Walks a project directory and returns an inspector over its files.
///
/// # Examples
/// ```no_run
/// use dockgen::analyzer::analyze_project;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let inspector = analyze_project(Path::new("./my-project"))?;
/// if inspector.has_marker_file("go.mod") {
///     println!("Go project");
/// }
/// # Ok(())
/// # }
/// ```
pub fn analyze_project(path: &Path) -> Result<ProjectInspector> {
    let project_root = crate::common::file_utils::validate_project_path(path)?;

    log::info!("Analyzing project: {}", project_root.display());

    let files = crate::common::file_utils::collect_project_files(&project_root)?;
    log::debug!("Found {} files", files.len());

    Ok(ProjectInspector { project_root, files })
}

#[cfg(test)]
pub(crate) fn inspector_with(files: &[&str]) -> ProjectInspector {
    ProjectInspector::from_files(
        PathBuf::from("."),
        files.iter().map(PathBuf::from).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_marker_file_is_case_insensitive() {
        let inspector = inspector_with(&["gemfile", "src/main.rb"]);
        assert!(inspector.has_marker_file("Gemfile"));
    }

    #[test]
    fn test_has_marker_file_matches_nested_entries() {
        let inspector = inspector_with(&["backend/package.json"]);
        assert!(inspector.has_marker_file("package.json"));
    }

    #[test]
    fn test_has_marker_file_absent_yields_false() {
        let inspector = inspector_with(&["README.md"]);
        assert!(!inspector.has_marker_file("go.mod"));
    }

    #[test]
    fn test_has_file_with_extension() {
        let inspector = inspector_with(&["public/Index.PHP", "assets/style.css"]);
        assert!(inspector.has_file_with_extension(&[".php"]));
        assert!(!inspector.has_file_with_extension(&[".rb"]));
    }

    #[test]
    fn test_empty_file_set() {
        let inspector = inspector_with(&[]);
        assert!(!inspector.has_marker_file("package.json"));
        assert!(!inspector.has_file_with_extension(&[".php"]));
    }
}
