//! # Generator Module
//!
//! Turns detected project signals into a [`BuildConfig`] and renders it as
//! either a Dockerfile or a Docker Compose file.

use crate::analyzer::{EnvironmentMap, ProjectInspector};
use crate::error::Result;
use serde::Serialize;

pub mod compose_gen;
pub mod dockerfile_gen;
pub mod profiles;

pub use profiles::EcosystemProfile;

/// Which output format a run was asked for. `Both` covers the `--all` mode
/// that emits the Dockerfile and the compose file in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RenderTarget {
    Dockerfile,
    Compose,
    Both,
}

/// The synthesized build configuration for one project. Created once per
/// invocation and consumed by exactly one renderer.
#[derive(Debug, Clone, Serialize)]
pub struct BuildConfig {
    pub profile: EcosystemProfile,
    pub base_image: String,
    pub instructions: Vec<String>,
    pub ports: Vec<String>,
    pub environment: EnvironmentMap,
    pub target: RenderTarget,
}

/// Selects the ecosystem profile for a project and instantiates its template
/// into a build configuration.
pub fn synthesize(
    inspector: &ProjectInspector,
    environment: EnvironmentMap,
    target: RenderTarget,
) -> BuildConfig {
    let profile = EcosystemProfile::detect(inspector);
    let template = profile.template();

    log::info!("Detected ecosystem: {:?}", profile);

    BuildConfig {
        profile,
        base_image: template.base_image.to_string(),
        instructions: template.instructions.iter().map(|s| s.to_string()).collect(),
        ports: template.ports.iter().map(|s| s.to_string()).collect(),
        environment,
        target,
    }
}

/// Renders a Dockerfile from a build configuration
pub fn generate_dockerfile(config: &BuildConfig) -> Result<String> {
    Ok(dockerfile_gen::generate(config))
}

/// Renders a Docker Compose file from a build configuration
pub fn generate_compose(config: &BuildConfig) -> Result<String> {
    Ok(compose_gen::generate(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::inspector_with;

    #[test]
    fn test_synthesize_node_project() {
        let inspector = inspector_with(&["package.json"]);
        let config = synthesize(&inspector, EnvironmentMap::new(), RenderTarget::Dockerfile);

        assert_eq!(config.profile, EcosystemProfile::NodeJs);
        assert_eq!(config.base_image, "node:18-alpine");
        assert!(config.instructions.contains(&"RUN npm install".to_string()));
        assert!(config.instructions.contains(&"EXPOSE 3000".to_string()));
        assert_eq!(config.ports, vec!["3000:3000"]);
    }

    #[test]
    fn test_synthesize_empty_project_is_generic() {
        let inspector = inspector_with(&[]);
        let config = synthesize(&inspector, EnvironmentMap::new(), RenderTarget::Compose);

        assert_eq!(config.profile, EcosystemProfile::Generic);
        assert_eq!(config.base_image, "ubuntu:latest");
        assert!(config.ports.is_empty());
    }
}
