//! HTTP implementation of [`ApiClient`]
//!
//! Every backend response is wrapped in `{ "message", "data" }`. This module
//! sends the request, logs it, and unwraps the envelope:
//! - 2xx: `data` is decoded into the target type
//! - other statuses: `message` becomes [`CoreError::Api`], falling back to the raw body
//!
//! The session token (if any) is forwarded as the backend's session cookie and is
//! never written to the log.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::COOKIE;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{CoreError, CoreResult};
use crate::traits::ApiClient;
use crate::types::{ApiResponse, ScheduleTemplate, UserInfo};

/// Name of the cookie the backend reads the session token from
pub const SESSION_COOKIE: &str = "__ecnc_shift_manager_token";

/// Maximum number of characters of a response body written to the log
const LOG_BODY_LIMIT: usize = 256;

/// HTTP client settings
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// API root, always ending with `/`
    pub base_url: Url,
    /// Session token forwarded as cookie
    pub session_token: Option<String>,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl HttpClientConfig {
    /// Build a config from a base URL string such as `https://example.com/api`
    pub fn new(base_url: &str) -> CoreResult<Self> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url = Url::parse(&normalized)
            .map_err(|e| CoreError::Config(format!("invalid api_base_url {base_url:?}: {e}")))?;

        Ok(Self {
            base_url,
            session_token: None,
            timeout: Duration::from_secs(10),
        })
    }

    #[must_use]
    pub fn with_session_token(mut self, token: Option<String>) -> Self {
        self.session_token = token.filter(|t| !t.is_empty());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve an API path (without leading slash) against the base URL
    pub fn endpoint(&self, path: &str) -> CoreResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| CoreError::Config(format!("invalid endpoint {path:?}: {e}")))
    }
}

/// reqwest-backed API client
pub struct HttpApiClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpApiClient {
    pub fn new(config: HttpClientConfig) -> CoreResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CoreError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    /// Build a request with the session cookie attached
    fn request(&self, method: Method, path: &str) -> CoreResult<(RequestBuilder, Url)> {
        let url = self.config.endpoint(path)?;
        let mut builder = self.client.request(method, url.clone());
        if let Some(token) = &self.config.session_token {
            builder = builder.header(COOKIE, format!("{SESSION_COOKIE}={token}"));
        }
        Ok((builder, url))
    }

    /// Send a request and return the status code and body text
    async fn execute_request(
        request_builder: RequestBuilder,
        method: &Method,
        url: &Url,
    ) -> CoreResult<(u16, String)> {
        log::debug!("{method} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                CoreError::Timeout(format!("{method} {url}"))
            } else {
                CoreError::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("{method} {url} -> {status}");

        let body = response
            .text()
            .await
            .map_err(|e| CoreError::Network(format!("Failed to read response body: {e}")))?;

        log::trace!("Response body: {}", truncate_for_log(&body));

        Ok((status, body))
    }

    /// Send a request and unwrap the envelope
    async fn call<T>(&self, method: Method, path: &str) -> CoreResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let (builder, url) = self.request(method.clone(), path)?;
        let result = match Self::execute_request(builder, &method, &url).await {
            Ok((status, body)) => parse_envelope(status, &body),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            if e.is_expected() {
                log::warn!("{method} {url} failed: {e}");
            } else {
                log::error!("{method} {url} failed: {e}");
            }
        }
        result
    }

    /// Like [`Self::call`], but a missing `data` field is a parse error
    async fn call_required<T>(&self, method: Method, path: &str) -> CoreResult<T>
    where
        T: DeserializeOwned,
    {
        self.call(method, path)
            .await?
            .ok_or_else(|| CoreError::Parse(format!("response to {path} carried no data")))
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn list_schedule_templates(&self) -> CoreResult<Vec<ScheduleTemplate>> {
        Ok(self
            .call(Method::GET, "schedule-templates")
            .await?
            .unwrap_or_default())
    }

    async fn get_schedule_template(&self, id: i64) -> CoreResult<ScheduleTemplate> {
        let mut template: ScheduleTemplate = self
            .call_required(Method::GET, &format!("schedule-templates/{id}"))
            .await?;
        // 详情接口的 meta 不一定带 id
        if template.meta.id == 0 {
            template.meta.id = id;
        }
        Ok(template)
    }

    async fn delete_schedule_template(&self, id: i64) -> CoreResult<()> {
        self.call::<serde_json::Value>(Method::DELETE, &format!("schedule-templates/{id}"))
            .await?;
        Ok(())
    }

    async fn get_my_info(&self) -> CoreResult<UserInfo> {
        self.call_required(Method::GET, "my-info").await
    }
}

/// Decode a `{ message, data }` envelope
///
/// Non-2xx statuses become [`CoreError::Api`] carrying the backend message.
pub fn parse_envelope<T>(status: u16, body: &str) -> CoreResult<Option<T>>
where
    T: DeserializeOwned,
{
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(body)
            .ok()
            .map(|r| r.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("HTTP {status}")
                } else {
                    truncate_for_log(body.trim())
                }
            });
        return Err(CoreError::Api { status, message });
    }

    serde_json::from_str::<ApiResponse<T>>(body)
        .map(|r| r.data)
        .map_err(|e| {
            log::error!("JSON parse failed: {e}; raw response: {}", truncate_for_log(body));
            CoreError::Parse(e.to_string())
        })
}

/// Cut a body down to [`LOG_BODY_LIMIT`] characters for logging
fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(LOG_BODY_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash_so_paths_nest() {
        let config = HttpClientConfig::new("https://shift.example.com/api").unwrap();
        let url = config.endpoint("schedule-templates/3").unwrap();
        assert_eq!(url.as_str(), "https://shift.example.com/api/schedule-templates/3");

        let url = config.endpoint("/my-info").unwrap();
        assert_eq!(url.as_str(), "https://shift.example.com/api/my-info");
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        let err = HttpClientConfig::new("not a url").unwrap_err();
        assert!(matches!(err, CoreError::Config(_)), "{err:?}");
    }

    #[test]
    fn empty_session_token_is_dropped() {
        let config = HttpClientConfig::new("http://localhost/api")
            .unwrap()
            .with_session_token(Some(String::new()));
        assert!(config.session_token.is_none());
    }

    #[test]
    fn envelope_success_yields_data() {
        let body = r#"{ "message": "获取用户信息成功", "data": { "id": 42 } }"#;
        let info: Option<UserInfo> = parse_envelope(200, body).unwrap();
        assert_eq!(info.unwrap().id.to_string(), "42");
    }

    #[test]
    fn envelope_null_data_is_none() {
        let body = r#"{ "message": "删除成功", "data": null }"#;
        let value: Option<serde_json::Value> = parse_envelope(200, body).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn error_status_uses_backend_message() {
        let body = r#"{ "message": "用户未登录", "data": null }"#;
        let err = parse_envelope::<UserInfo>(401, body).unwrap_err();
        assert_eq!(
            err,
            CoreError::Api {
                status: 401,
                message: "用户未登录".to_string()
            }
        );
    }

    #[test]
    fn error_status_without_json_falls_back_to_body_or_status() {
        let err = parse_envelope::<UserInfo>(502, "Bad Gateway").unwrap_err();
        assert_eq!(err.to_string(), "Bad Gateway");

        let err = parse_envelope::<UserInfo>(500, "").unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn malformed_success_body_is_parse_error() {
        let err = parse_envelope::<UserInfo>(200, "not json").unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)), "{err:?}");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let s = "班".repeat(LOG_BODY_LIMIT + 10);
        let out = truncate_for_log(&s);
        assert!(out.starts_with(&"班".repeat(LOG_BODY_LIMIT)));
        assert!(out.contains("[truncated, total"));
        assert_eq!(truncate_for_log("short"), "short");
    }
}
