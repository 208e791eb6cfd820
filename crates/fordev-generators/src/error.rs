//! Error types for the generator client.

use fordev_core::ConfigError;
use thiserror::Error;

/// Longest raw snippet kept on a [`GeneratorError::Parse`].
const SNIPPET_LIMIT: usize = 200;

/// Errors that can occur while generating data.
///
/// Variants are listed in the order a call can hit them: caller input is
/// validated before any request is built, and the response is parsed last.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Caller input rejected before any network call
    #[error("invalid filter '{field}': {reason}")]
    Validation {
        /// Offending filter name
        field: String,
        /// Violated constraint
        reason: String,
    },

    /// Connection, DNS or timeout failure; not retried
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Site answered with a non-2xx status
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        /// Response status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Response no longer matches the expected shape
    #[error("failed to parse {operation} response: {reason} (snippet: {snippet:?})")]
    Parse {
        /// Operation whose response was parsed
        operation: String,
        /// What was missing or malformed
        reason: String,
        /// Raw text around the failure, truncated
        snippet: String,
    },

    /// Internal operation table is inconsistent
    #[error("operation table error for {operation}: {reason}")]
    Spec {
        /// Operation with the bad descriptor
        operation: String,
        /// Description of the inconsistency
        reason: String,
    },

    /// Client configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl GeneratorError {
    pub(crate) fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(
        operation: impl Into<String>,
        reason: impl Into<String>,
        raw: &str,
    ) -> Self {
        Self::Parse {
            operation: operation.into(),
            reason: reason.into(),
            snippet: truncate_snippet(raw),
        }
    }

    pub(crate) fn spec(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Spec {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Whether the caller can reasonably retry the same call.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

fn truncate_snippet(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.char_indices().nth(SNIPPET_LIMIT) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeneratorError::validation("state", "'ZZ' is not a Brazilian federative unit");
        assert_eq!(
            err.to_string(),
            "invalid filter 'state': 'ZZ' is not a Brazilian federative unit"
        );

        let err = GeneratorError::HttpStatus {
            status: 503,
            url: "https://www.4devs.com.br/ferramentas_online.php".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP 503 from https://www.4devs.com.br/ferramentas_online.php"
        );
    }

    #[test]
    fn test_parse_snippet_truncated() {
        let raw = "x".repeat(500);
        let err = GeneratorError::parse("cpf", "unexpected markup", &raw);
        let GeneratorError::Parse { snippet, .. } = err else {
            panic!("expected parse error");
        };
        assert_eq!(snippet.len(), SNIPPET_LIMIT + 3);
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn test_parse_snippet_multibyte() {
        let raw = "ã".repeat(300);
        let err = GeneratorError::parse("city", "no options", &raw);
        assert!(err.to_string().contains("ããã"));
    }

    #[test]
    fn test_only_network_is_retryable() {
        assert!(!GeneratorError::validation("age", "out of range").is_retryable());
        assert!(!GeneratorError::spec("cpf", "bad table").is_retryable());
        assert!(!GeneratorError::HttpStatus {
            status: 500,
            url: String::new()
        }
        .is_retryable());
    }
}
