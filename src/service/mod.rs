//! Backend service abstraction.
//!
//! The backend is resource-oriented: a [`Client`] hands out one [`Service`]
//! handle per resource name, and the handle exposes the five service
//! operations, JSON in and out. The dispatch layer is written against these
//! traits only. The built-in REST transport (behind the `rest` feature) is
//! one implementation; callers can supply their own over any transport.
//!
//! Backend failures travel as [`anyhow::Error`] and reach the caller
//! unchanged; the dispatch layer neither inspects nor rewraps them.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[cfg(feature = "rest")]
pub mod rest;

/// Options for a [`Service::find`] call: the flattened query mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FindParams {
    pub query: Map<String, Value>,
}

/// Per-resource backend API surface.
#[async_trait]
pub trait Service: Send + Sync {
    /// List records matching the query.
    async fn find(&self, params: FindParams) -> Result<Value>;

    /// Fetch a single record by identifier.
    async fn get(&self, id: Value) -> Result<Value>;

    /// Create a record from the given payload.
    async fn create(&self, data: Value) -> Result<Value>;

    /// Replace the record with the given identifier.
    async fn update(&self, id: Value, data: Value) -> Result<Value>;

    /// Delete the record with the given identifier, returning it.
    async fn remove(&self, id: Value) -> Result<Value>;
}

/// Backend client: hands out service handles by resource name.
pub trait Client: Send + Sync {
    fn service(&self, resource: &str) -> Arc<dyn Service>;
}
