//! Discovery and parsing of `.env`-style environment definition files.

use crate::analyzer::EnvironmentMap;
use crate::error::{AnalysisError, DockGenError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Environment file names checked at the project root, first hit wins.
const ENV_FILE_NAMES: &[&str] = &[".env", ".env.example", ".env.template", ".env.default"];

static VARIABLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(.*)$").unwrap());

/// Locates and parses the first environment file present at the project root.
///
/// Returns `None` when no environment file exists. An existing but unreadable
/// file is an error, surfaced before any generation takes place.
pub fn discover_env_file(root: &Path) -> Result<Option<EnvironmentMap>, DockGenError> {
    for name in ENV_FILE_NAMES {
        let path = root.join(name);
        match fs::read_to_string(&path) {
            Ok(content) => {
                log::info!("Found environment file: {}", path.display());
                return Ok(Some(parse_env_content(&content)));
            }
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(AnalysisError::EnvFileRead {
                    file: path,
                    reason: e.to_string(),
                }
                .into());
            }
        }
    }
    Ok(None)
}

/// Parses `KEY=VALUE` lines into a mapping.
///
/// Blank lines and `#`-comments are ignored; malformed lines are skipped
/// rather than fatal. Surrounding single or double quotes are stripped from
/// values.
pub fn parse_env_content(content: &str) -> EnvironmentMap {
    let mut variables = EnvironmentMap::new();

    for raw_line in content.lines() {
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(captures) = VARIABLE_PATTERN.captures(line) {
            let key = captures[1].to_string();
            let value = captures[2]
                .trim_matches(|c| c == '"' || c == '\'')
                .to_string();
            variables.insert(key, value);
        } else {
            log::debug!("Skipping malformed env line: {}", line);
        }
    }

    variables
}
