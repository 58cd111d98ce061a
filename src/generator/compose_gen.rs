//! Docker Compose rendering.

use crate::analyzer::is_secret_like;
use crate::generator::BuildConfig;

/// Renders a Docker Compose file with a single `app` service.
///
/// Secret-like environment keys become compose secrets backed by the shared
/// `.env` file; everything else lands in the plain environment list. Every
/// key appears in exactly one of the two.
pub fn generate(config: &BuildConfig) -> String {
    let mut out = String::new();

    out.push_str("version: '3.8'\n\n");

    let secrets: Vec<&String> = config
        .environment
        .keys()
        .filter(|key| is_secret_like(key))
        .collect();

    if !secrets.is_empty() {
        out.push_str("secrets:\n");
        for key in &secrets {
            out.push_str(&format!("  {}:\n", key.to_lowercase()));
            out.push_str("    file: .env\n");
        }
        out.push('\n');
    }

    out.push_str("services:\n");
    out.push_str("  app:\n");
    out.push_str(&format!("    image: {}\n", config.base_image));
    out.push_str("    build:\n");
    out.push_str("      context: .\n");

    if !config.ports.is_empty() {
        out.push_str("    ports:\n");
        for port in &config.ports {
            out.push_str(&format!("      - {}\n", port));
        }
    }

    let plain: Vec<String> = config
        .environment
        .iter()
        .filter(|(key, _)| !is_secret_like(key))
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();

    if !plain.is_empty() {
        out.push_str("    environment:\n");
        for entry in &plain {
            out.push_str(&format!("      - {}\n", entry));
        }
    }

    if !secrets.is_empty() {
        out.push_str("    secrets:\n");
        for key in &secrets {
            out.push_str(&format!("      - {}\n", key.to_lowercase()));
        }
    }

    out
}
