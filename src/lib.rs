//! Data-provider bridge between admin interfaces and service-query backends.
//!
//! Admin frameworks speak a fixed contract: an action kind (`GET_LIST`,
//! `GET_ONE`, `CREATE`, ...), a resource name, and a bag of parameters. A
//! service-query backend speaks another: per-resource handles exposing
//! `find`/`get`/`create`/`update`/`remove`, with Mongo-style query directives
//! (`$limit`, `$skip`, `$sort[<field>]`, `{"$in": [...]}`). This crate
//! translates between the two, including the id-field aliasing scheme that
//! maps a configurable primary-key field (for example `_id`) onto the
//! canonical `id` property the admin side expects.
//!
//! # Module Structure
//!
//! - [`action`] - The closed set of action kinds and their wire constants
//! - [`params`] - Request parameter shapes (pagination, sort, filter)
//! - [`query`] - Backend query construction from request parameters
//! - [`provider`] - The dispatch entry point and response normalization
//! - [`service`] - Backend client/service traits and the REST transport
//! - [`error`] - The two failure categories: unsupported action, backend error
//!
//! # Example
//!
//! ```ignore
//! use svcbridge::{DataProvider, Options, Params, RestClient};
//!
//! let client = RestClient::new("https://api.example.com")?.with_token("secret");
//! let provider = DataProvider::with_options(client, Options { id: "_id".into() });
//!
//! let params = Params {
//!     ids: Some(vec![1.into(), 2.into(), 3.into()]),
//!     ..Params::default()
//! };
//! let records = provider.dispatch("GET_MANY", "posts", params).await?;
//! ```

pub mod action;
pub mod error;
pub mod params;
pub mod provider;
pub mod query;
pub mod service;

pub use action::Action;
pub use error::{Error, Result};
pub use params::{Pagination, Params, Sort, SortOrder};
pub use provider::{DataProvider, Options};
pub use query::Query;
pub use service::{Client, FindParams, Service};

#[cfg(feature = "rest")]
pub use service::rest::RestClient;
