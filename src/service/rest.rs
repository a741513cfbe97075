//! REST transport for service-query backends.
//!
//! Maps the five service operations onto HTTP in the usual convention:
//!
//! - `find` -> `GET /{resource}?<query>` with the flattened query mapping
//! - `get` -> `GET /{resource}/{id}`
//! - `create` -> `POST /{resource}` with a JSON body
//! - `update` -> `PUT /{resource}/{id}` with a JSON body
//! - `remove` -> `DELETE /{resource}/{id}`
//!
//! Non-2xx responses become errors carrying the status; bodies are parsed as
//! JSON, with an empty body standing in for `null`. Nothing is retried.

use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::Method;
use serde_json::{Map, Value};
use url::Url;

use super::{Client, FindParams, Service};

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging: strip non-printable characters and
/// truncate long bodies.
fn sanitize_for_log(body: &str) -> String {
    let sanitized: String = body
        .chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .take(MAX_LOG_BODY_LENGTH)
        .collect();

    if sanitized.len() < body.len() {
        format!("{}... [truncated, {} bytes total]", sanitized, body.len())
    } else {
        sanitized
    }
}

/// HTTP client for a service-query backend rooted at a base URL.
#[derive(Clone)]
pub struct RestClient {
    base_url: Url,
    http: reqwest::Client,
    token: Option<String>,
}

impl RestClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).context("Invalid base URL")?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("svcbridge/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url,
            http,
            token: None,
        })
    }

    /// Attach a static bearer token sent with every request.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }
}

impl Client for RestClient {
    fn service(&self, resource: &str) -> Arc<dyn Service> {
        Arc::new(RestService {
            client: self.clone(),
            resource: resource.to_string(),
        })
    }
}

/// Per-resource handle over [`RestClient`].
struct RestService {
    client: RestClient,
    resource: String,
}

impl RestService {
    /// URL of the resource collection.
    fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.client.base_url.as_str().trim_end_matches('/'),
            self.resource
        )
    }

    /// URL of a single record, with the identifier percent-encoded.
    fn record_url(&self, id: &Value) -> String {
        format!(
            "{}/{}",
            self.collection_url(),
            urlencoding::encode(&id_segment(id))
        )
    }

    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.http.request(method, url);
        if let Some(token) = &self.client.token {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let response = request.send().await.context("Failed to send request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        if !status.is_success() {
            tracing::error!("service error: {} - {}", status, sanitize_for_log(&body));
            return Err(anyhow::anyhow!("Service request failed: {}", status));
        }

        if body.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).context("Failed to parse response JSON")
    }
}

#[async_trait::async_trait]
impl Service for RestService {
    async fn find(&self, params: FindParams) -> Result<Value> {
        let mut url = Url::parse(&self.collection_url()).context("Invalid resource URL")?;
        let pairs = flatten_query(&params.query);
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        tracing::debug!("GET {}", url);
        self.execute(self.request(Method::GET, url.as_str())).await
    }

    async fn get(&self, id: Value) -> Result<Value> {
        let url = self.record_url(&id);
        tracing::debug!("GET {}", url);
        self.execute(self.request(Method::GET, &url)).await
    }

    async fn create(&self, data: Value) -> Result<Value> {
        let url = self.collection_url();
        tracing::debug!("POST {}", url);
        self.execute(self.request(Method::POST, &url).json(&data))
            .await
    }

    async fn update(&self, id: Value, data: Value) -> Result<Value> {
        let url = self.record_url(&id);
        tracing::debug!("PUT {}", url);
        self.execute(self.request(Method::PUT, &url).json(&data))
            .await
    }

    async fn remove(&self, id: Value) -> Result<Value> {
        let url = self.record_url(&id);
        tracing::debug!("DELETE {}", url);
        self.execute(self.request(Method::DELETE, &url)).await
    }
}

/// Render an identifier as a path segment. Strings go in raw; everything
/// else uses its JSON rendering.
fn id_segment(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Flatten a query mapping into URL pairs. Scalars render bare, nested
/// objects use bracketed keys (`_id[$in]`), and arrays repeat the key per
/// element.
fn flatten_query(query: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in query {
        push_pairs(&mut pairs, key, value);
    }
    pairs
}

fn push_pairs(pairs: &mut Vec<(String, String)>, key: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            for (sub, nested) in map {
                push_pairs(pairs, &format!("{}[{}]", key, sub), nested);
            }
        }
        Value::Array(items) => {
            for item in items {
                push_pairs(pairs, key, item);
            }
        }
        Value::String(s) => pairs.push((key.to_string(), s.clone())),
        other => pairs.push((key.to_string(), other.to_string())),
    }
}
