//! HTTP transport for form submissions.

use crate::error::{GeneratorError, Result};
use crate::request::FormRequest;
use async_trait::async_trait;
use fordev_core::{ClientConfig, ConfigError};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, ORIGIN, REFERER};
use reqwest::Client;

/// Content type of every form submission.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Sends a built request and returns the raw response text.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Submit one form request.
    ///
    /// Implementations make exactly one attempt; failures are not retried.
    async fn send(&self, request: &FormRequest) -> Result<String>;
}

/// reqwest-backed transport posting to the configured site.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport with the configured timeout and user agent.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Requested-With",
            HeaderValue::from_static("XMLHttpRequest"),
        );

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                field: "user_agent".to_string(),
                reason: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Site root without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &FormRequest) -> Result<String> {
        let url = self.url_for(request.endpoint);
        let referer = self.url_for(request.referer);

        tracing::debug!(
            operation = %request.operation,
            url = %url,
            fields = request.fields.len(),
            "Submitting form"
        );

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(ORIGIN, self.base_url.as_str())
            .header(REFERER, referer)
            .body(request.body())
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(operation = %request.operation, "Request failed: {e}");
                GeneratorError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                operation = %request.operation,
                status = status.as_u16(),
                "Site returned error status"
            );
            return Err(GeneratorError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let text = response.text().await?;
        tracing::debug!(
            operation = %request.operation,
            bytes = text.len(),
            "Received response"
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9/".to_string(),
            ..ClientConfig::default()
        };
        let transport = HttpTransport::new(&config).expect("transport builds");
        assert_eq!(transport.base_url(), "http://127.0.0.1:9");
        assert_eq!(
            transport.url_for("ferramentas_online.php"),
            "http://127.0.0.1:9/ferramentas_online.php"
        );
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ClientConfig {
            timeout_secs: 0,
            ..ClientConfig::default()
        };
        let err = HttpTransport::new(&config).expect_err("zero timeout");
        assert!(matches!(err, GeneratorError::Config(_)));
    }

    #[test]
    fn test_bad_user_agent_is_config_error() {
        let config = ClientConfig {
            user_agent: "fordev\r\nX-Injected: 1".to_string(),
            ..ClientConfig::default()
        };
        let err = HttpTransport::new(&config).expect_err("header injection");
        assert!(matches!(
            err,
            GeneratorError::Config(ConfigError::InvalidValue { ref field, .. }) if field == "user_agent"
        ));
        assert!(!err.is_retryable());
    }
}
