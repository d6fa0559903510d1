//! Blocking HTTP client for the remote deck service.
//!
//! One [`RemoteDeckClient::call`] is one GET round trip. Transport, HTTP,
//! JSON and application-level failures are all folded into [`DeckError`];
//! nothing is retried, since draw and shuffle calls change remote state.

use crate::config;
use crate::error::{DeckError, Result};
use crate::request::DeckRequest;
use reqwest::blocking::Client;
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;

/// Issues deck service calls against a fixed base URL.
#[derive(Debug, Clone)]
pub struct RemoteDeckClient {
    base_url: String,
    base: Url,
    timeout: Duration,
    client: Client,
}

impl RemoteDeckClient {
    /// Create a client for `base_url` with a per-call `timeout`.
    ///
    /// Trailing slashes on the base URL are ignored. The base must be an
    /// absolute `http(s)` URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let base = Url::parse(&base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                DeckError::RemoteUnavailable(format!(
                    "Invalid deck service base URL '{}'.",
                    base_url
                ))
            })?;

        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| {
                DeckError::RemoteUnavailable(format!("Unable to build HTTP client: {}", e))
            })?;
        Ok(Self {
            base_url,
            base,
            timeout,
            client,
        })
    }

    /// Client for the public service with the default timeout.
    pub fn with_defaults() -> Result<Self> {
        Self::new(config::DEFAULT_BASE_URL, config::DEFAULT_TIMEOUT)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL for `request` under the base URL.
    pub fn url_for(&self, request: &DeckRequest) -> Result<Url> {
        request.url(&self.base)
    }

    /// Send one GET request and return the parsed JSON object.
    ///
    /// Fails if the service is unreachable, times out, answers with a
    /// non-2xx status, returns something other than a JSON object, or
    /// reports `"success": false`.
    pub fn call(&self, request: &DeckRequest) -> Result<Value> {
        let url = self.url_for(request)?;
        log::debug!("GET {}", url);

        let result = self.send(url.clone()).and_then(|body| parse_body(&body));
        if let Err(e) = &result {
            log::warn!("deck service call to {} failed: {}", url, e);
        }
        result
    }

    fn send(&self, url: Url) -> Result<String> {
        let resp = self.client.get(url).send().map_err(transport_error)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DeckError::RemoteProtocol(format!(
                "Deck service returned HTTP {} for {}.",
                status.as_u16(),
                resp.url()
            )));
        }
        resp.text().map_err(transport_error)
    }
}

fn transport_error(e: reqwest::Error) -> DeckError {
    if e.is_timeout() {
        DeckError::RemoteUnavailable("Deck service did not respond in time.".to_string())
    } else {
        DeckError::RemoteUnavailable(format!("Unable to reach the deck service: {}", e))
    }
}

/// Parse a response body and enforce the service's `success` flag.
pub fn parse_body(body: &str) -> Result<Value> {
    let data: Value = serde_json::from_str(body)
        .map_err(|_| DeckError::RemoteProtocol("Deck service returned invalid JSON.".to_string()))?;

    if !data.is_object() {
        return Err(DeckError::RemoteProtocol(
            "Deck service returned invalid JSON.".to_string(),
        ));
    }

    if data.get("success").and_then(Value::as_bool) == Some(false) {
        let message = data
            .get("error")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or("Deck service reported an error.");
        return Err(DeckError::RemoteProtocol(message.to_string()));
    }

    Ok(data)
}
