//! Mist HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::config::api;
use crate::error::{GwError, Result};
use crate::mist::credentials::Credentials;
use crate::mist::traits::{ListResponse, MistResource};

/// Mist API client
pub struct MistClient {
    client: Client,
    token: String,
    /// Normalized base URL, ends with the API version suffix
    base_url: String,
}

impl MistClient {
    /// Create a new client with bounded request timeouts
    pub fn new(credentials: &Credentials) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("gwstats/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token: credentials.token.clone(),
            base_url: credentials.base_url.clone(),
        }
    }

    /// Base URL for API requests
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Token {}", self.token))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// GET `path` (relative to the base URL) and decode the JSON body
    ///
    /// Non-success statuses surface the status code and body; bodies that are
    /// not JSON surface the decode error.
    pub(crate) async fn fetch_json(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url(), path);
        debug!("GET {}", url);

        let response = self.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GwError::Api {
                status: status.as_u16(),
                body: pretty_body(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// GET a list endpoint accepting a bare array or a `results` wrapper
    pub(crate) async fn fetch_list<T: MistResource>(&self, path: &str, resource: &str) -> Result<Vec<T>> {
        let payload = self.fetch_json(path).await?;
        let items = match serde_json::from_value::<ListResponse>(payload.clone()) {
            Ok(list) => list.into_items(),
            Err(_) => return Err(unexpected_format(resource, &payload)),
        };
        debug!("Fetched {} {}", items.len(), resource);
        Ok(items.into_iter().map(T::from_raw).collect())
    }

    /// GET an endpoint that must answer with a single JSON object
    pub(crate) async fn fetch_object<T: MistResource>(&self, path: &str, resource: &str) -> Result<T> {
        let payload = self.fetch_json(path).await?;
        if !payload.is_object() {
            return Err(unexpected_format(resource, &payload));
        }
        Ok(T::from_raw(payload))
    }
}

/// Percent-encode a value used as a URL path segment
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn unexpected_format(resource: &str, payload: &Value) -> GwError {
    GwError::UnexpectedFormat {
        resource: resource.to_string(),
        raw: serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string()),
    }
}

/// Pretty-print an error body when it is JSON, otherwise keep it verbatim
fn pretty_body(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| serde_json::to_string_pretty(&v).ok())
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
impl MistClient {
    /// Create a test client pointing at a mock server
    pub fn test_client(server_uri: &str) -> Self {
        Self::new(&Credentials {
            token: "test-token".to_string(),
            org_id: Some("org-1".to_string()),
            base_url: crate::mist::normalize_base_url(server_uri),
        })
    }
}
