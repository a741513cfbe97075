//! Dispatch layer
//!
//! This module is the bridge's entry point. A dispatch takes an action kind,
//! a resource name, and request parameters, issues exactly one call against
//! the backend client, and normalizes the raw response into the shape the
//! admin side expects.
//!
//! # Architecture
//!
//! - `request` - Maps each action kind to the one backend call it performs
//! - `response` - Normalizes raw backend responses (id aliasing, list reshaping)
//!
//! # Example
//!
//! ```ignore
//! use svcbridge::{DataProvider, Options, Params, RestClient};
//!
//! let client = RestClient::new("https://api.example.com")?;
//! let provider = DataProvider::with_options(client, Options { id: "_id".into() });
//! let response = provider.dispatch("GET_ONE", "posts", Params {
//!     id: Some(1.into()),
//!     ..Params::default()
//! }).await?;
//! ```

mod request;
mod response;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::action::Action;
use crate::error::Result;
use crate::params::Params;
use crate::service::Client;

/// Provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Name of the backend's primary-key field. Every normalized response
    /// carries its value under the canonical `id` property, and sorts on
    /// `id` are rewritten to this field.
    pub id: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            id: "id".to_string(),
        }
    }
}

/// Translates admin-interface requests into service-query backend calls.
///
/// Holds a backend [`Client`] and immutable [`Options`]; concurrent
/// dispatches share both and do not interact.
pub struct DataProvider {
    client: Arc<dyn Client>,
    options: Options,
}

impl DataProvider {
    /// Create a provider whose backend already uses the canonical `id` field.
    pub fn new<C: Client + 'static>(client: C) -> Self {
        Self::with_options(client, Options::default())
    }

    /// Create a provider with explicit options.
    pub fn with_options<C: Client + 'static>(client: C, options: Options) -> Self {
        Self {
            client: Arc::new(client),
            options,
        }
    }

    /// Handle one admin request: resolve the service handle for `resource`,
    /// issue the backend call the action maps to, and normalize the result.
    ///
    /// The action is given as its wire constant (`GET_LIST`, `CREATE`, ...).
    /// Anything outside the closed set fails with
    /// [`Error::UnsupportedAction`](crate::Error::UnsupportedAction) before
    /// the backend is touched; backend failures propagate unchanged.
    pub async fn dispatch(&self, action: &str, resource: &str, params: Params) -> Result<Value> {
        self.dispatch_action(action.parse()?, resource, params).await
    }

    /// [`dispatch`](Self::dispatch) with the action already parsed.
    pub async fn dispatch_action(
        &self,
        action: Action,
        resource: &str,
        params: Params,
    ) -> Result<Value> {
        tracing::debug!("dispatch: action={}, resource={}", action, resource);

        let service = self.client.service(resource);
        let raw = request::issue(service.as_ref(), action, &params, &self.options.id).await?;
        Ok(response::normalize(action, raw, &params, &self.options.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn options_default_to_the_canonical_id_field() {
        assert_eq!(Options::default().id, "id");
    }

    #[test]
    fn options_deserialize_with_and_without_an_id() {
        let options: Options = serde_json::from_value(json!({})).unwrap();
        assert_eq!(options, Options::default());

        let options: Options = serde_json::from_value(json!({ "id": "_id" })).unwrap();
        assert_eq!(options.id, "_id");
    }
}
