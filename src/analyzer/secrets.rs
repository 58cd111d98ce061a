//! Secret-like variable detection, shared by environment collection and the
//! compose renderer so both route the same keys to the secrets mechanism.

use once_cell::sync::Lazy;
use regex::Regex;

static SECRET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)password|secret|token|key|auth|credential|cert").unwrap());

/// Classifies a variable name as secret-like.
///
/// Advisory only: a match routes the variable to the compose secrets block
/// instead of the plain environment list. Nothing is redacted or stored.
pub fn is_secret_like(key: &str) -> bool {
    SECRET_PATTERN.is_match(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_common_secret_names() {
        assert!(is_secret_like("DB_PASSWORD"));
        assert!(is_secret_like("apiKey"));
        assert!(is_secret_like("AUTH_TOKEN"));
        assert!(is_secret_like("JWT_SECRET"));
        assert!(is_secret_like("aws_credentials"));
        assert!(is_secret_like("TLS_CERT_PATH"));
    }

    #[test]
    fn test_plain_variables_are_not_secrets() {
        assert!(!is_secret_like("PORT"));
        assert!(!is_secret_like("NODE_ENV"));
        assert!(!is_secret_like("RAILS_ENV"));
        assert!(!is_secret_like("DB_HOST"));
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        assert!(is_secret_like("MySecretValue"));
        assert!(is_secret_like("github_TOKEN_expiry"));
    }
}
