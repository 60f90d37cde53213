//! HTTP transport and the typed clients for each upstream API.

pub mod dog_api;
pub mod dog_ceo;
pub mod polygon;
pub mod tradestie;
pub mod zenquotes;

use crate::domain::errors::{AppError, AppResult, NetworkError};
use crate::domain::logging::LogComponent;
use crate::{log_info, log_warn};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use std::rc::Rc;
use url::Url;

/// Status and body of a completed request. Non-2xx statuses are not errors here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx status into the generic HTTP error
    pub fn ensure_ok(self) -> AppResult<Self> {
        if self.ok() {
            Ok(self)
        } else {
            Err(NetworkError::Status(self.status).into())
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> AppResult<T> {
        serde_json::from_str(&self.body).map_err(|e| NetworkError::Decode(e.to_string()).into())
    }
}

/// Read-only HTTP transport
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    async fn get(&self, url: &Url) -> AppResult<HttpResponse>;
}

impl<T: HttpClient> HttpClient for Rc<T> {
    async fn get(&self, url: &Url) -> AppResult<HttpResponse> {
        (**self).get(url).await
    }
}

/// Browser `fetch` through gloo-net
#[derive(Clone, Debug)]
pub struct GlooHttpClient {
    default_headers: Vec<(String, String)>,
}

impl Default for GlooHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GlooHttpClient {
    pub fn new() -> Self {
        Self {
            default_headers: vec![("Accept".to_string(), "application/json".to_string())],
        }
    }

    pub fn add_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((key.into(), value.into()));
        self
    }
}

impl HttpClient for GlooHttpClient {
    async fn get(&self, url: &Url) -> AppResult<HttpResponse> {
        log_info!(LogComponent::Infrastructure("HTTP"), "🌐 GET {}", redact(url));

        let mut request = Request::get(url.as_str());
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }

        let response = request.send().await.map_err(|e| {
            log_warn!(LogComponent::Infrastructure("HTTP"), "request failed: {e}");
            NetworkError::Transport(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NetworkError::Transport(format!("Failed to read response: {e}")))?;

        log_info!(
            LogComponent::Infrastructure("HTTP"),
            "✅ {} -> {} ({} bytes)",
            url.path(),
            status,
            body.len()
        );
        Ok(HttpResponse { status, body })
    }
}

/// `base` with `segments` appended to its path and `query` as its query string
pub fn endpoint(base: &str, segments: &[&str], query: &[(&str, &str)]) -> AppResult<Url> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| AppError::Validation(format!("Invalid endpoint base: {base}")))?
        .pop_if_empty()
        .extend(segments);
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
}

/// URL safe for logs: the API key value is masked
fn redact(url: &Url) -> String {
    let mut shown = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key.eq_ignore_ascii_case("apikey") {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();
    if !pairs.is_empty() {
        shown.query_pairs_mut().clear().extend_pairs(pairs);
    }
    shown.to_string()
}
