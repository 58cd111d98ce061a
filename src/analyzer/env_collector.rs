//! Environment collection: merges parsed `.env` entries with the defaults
//! the detected ecosystem conventionally expects.

use crate::analyzer::{EnvironmentMap, ProjectInspector};
use crate::generator::profiles::EcosystemProfile;

/// Builds the merged environment map for a project.
///
/// Entries from the parsed environment file are authoritative and never
/// overwritten. Defaults fill absent keys only, which makes collection
/// idempotent.
pub fn collect_environment(
    inspector: &ProjectInspector,
    parsed_env_file: Option<EnvironmentMap>,
) -> EnvironmentMap {
    let mut environment = parsed_env_file.unwrap_or_default();

    if let Some(profile) = default_contributing_profile(inspector) {
        for (key, value) in profile.template().default_env {
            environment
                .entry((*key).to_string())
                .or_insert_with(|| (*value).to_string());
        }
        log::debug!(
            "Collected {} environment variables with {:?} defaults",
            environment.len(),
            profile
        );
    }

    environment
}

/// Selects the ecosystem whose default table applies, using the profile
/// priority order restricted to the ecosystems that contribute defaults.
/// Go and Java contribute none, so a Go project with a stray Gemfile still
/// picks up the Ruby environment defaults, matching the behavior the rule
/// tables were lifted from (see DESIGN.md).
fn default_contributing_profile(inspector: &ProjectInspector) -> Option<EcosystemProfile> {
    if inspector.has_marker_file("package.json") {
        Some(EcosystemProfile::NodeJs)
    } else if inspector.has_marker_file("requirements.txt") || inspector.has_marker_file("Pipfile")
    {
        Some(EcosystemProfile::Python)
    } else if inspector.has_marker_file("Gemfile") {
        Some(EcosystemProfile::Ruby)
    } else if inspector.has_marker_file("composer.json")
        || inspector.has_file_with_extension(&[".php"])
    {
        Some(EcosystemProfile::Php)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::inspector_with;

    fn env(pairs: &[(&str, &str)]) -> EnvironmentMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_node_defaults_fill_empty_environment() {
        let inspector = inspector_with(&["package.json"]);
        let environment = collect_environment(&inspector, None);

        assert_eq!(environment["NODE_ENV"], "production");
        assert_eq!(environment["PORT"], "3000");
    }

    #[test]
    fn test_user_values_are_authoritative() {
        let inspector = inspector_with(&["package.json"]);
        let parsed = env(&[("PORT", "9999")]);

        let environment = collect_environment(&inspector, Some(parsed));

        assert_eq!(environment["PORT"], "9999");
        assert_eq!(environment["NODE_ENV"], "production");
    }

    #[test]
    fn test_ruby_default_yields_to_env_file() {
        let inspector = inspector_with(&["Gemfile"]);
        let parsed = env(&[("RAILS_ENV", "staging")]);

        let environment = collect_environment(&inspector, Some(parsed));

        assert_eq!(environment["RAILS_ENV"], "staging");
        assert_eq!(environment["RACK_ENV"], "production");
    }

    #[test]
    fn test_go_contributes_no_defaults() {
        let inspector = inspector_with(&["go.mod"]);
        let environment = collect_environment(&inspector, None);
        assert!(environment.is_empty());
    }

    #[test]
    fn test_go_project_with_gemfile_still_gets_ruby_defaults() {
        let inspector = inspector_with(&["go.mod", "Gemfile"]);
        let environment = collect_environment(&inspector, None);

        assert_eq!(environment["RAILS_ENV"], "production");
    }

    #[test]
    fn test_generic_keeps_parsed_entries_untouched() {
        let inspector = inspector_with(&["README.md"]);
        let parsed = env(&[("CUSTOM", "value")]);

        let environment = collect_environment(&inspector, Some(parsed.clone()));
        assert_eq!(environment, parsed);
    }

    #[test]
    fn test_collect_is_idempotent() {
        let inspector = inspector_with(&["requirements.txt"]);

        let once = collect_environment(&inspector, Some(env(&[("FLASK_ENV", "dev")])));
        let twice = collect_environment(&inspector, Some(once.clone()));

        assert_eq!(once, twice);
    }
}
