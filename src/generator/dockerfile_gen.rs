//! Dockerfile rendering.

use crate::generator::BuildConfig;

/// Renders a Dockerfile: base image, build arguments for every environment
/// key (values supplied at build time), the profile's instruction list, and
/// an environment block. Total over any valid configuration.
pub fn generate(config: &BuildConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!("FROM {}\n\n", config.base_image));

    if !config.environment.is_empty() {
        out.push_str("# Build arguments\n");
        for key in config.environment.keys() {
            out.push_str(&format!("ARG {}\n", key));
        }
        out.push('\n');
    }

    for instruction in &config.instructions {
        out.push_str(instruction);
        out.push('\n');
    }

    if !config.environment.is_empty() {
        out.push_str("\n# Environment variables\n");
        for (key, value) in &config.environment {
            out.push_str(&format!("ENV {}={}\n", key, value));
        }
    }

    out
}
