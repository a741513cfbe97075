//! Request parameter shapes of the admin data-provider contract.
//!
//! The admin framework sends a JSON parameter object whose meaningful fields
//! depend on the action kind, so every field here is optional. Wire keys are
//! camelCase (`perPage`); identifiers and record payloads stay dynamic
//! [`Value`]s because the backend decides their types, not the adapter.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Parameters accompanying a dispatched action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Single record identifier (GET_ONE, UPDATE, DELETE).
    pub id: Option<Value>,
    /// Batch of record identifiers (GET_MANY).
    pub ids: Option<Vec<Value>>,
    /// Record payload (CREATE, UPDATE).
    pub data: Option<Value>,
    /// Page window (GET_LIST, GET_MANY_REFERENCE).
    pub pagination: Option<Pagination>,
    /// Sort directive (GET_LIST, GET_MANY_REFERENCE).
    pub sort: Option<Sort>,
    /// Caller-supplied filter entries, merged into the query verbatim.
    pub filter: Option<Map<String, Value>>,
}

/// One-based page window. A `page` or `perPage` of zero means "unset" in the
/// admin contract and suppresses the pagination directives entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub per_page: u64,
}

impl Pagination {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }
    }
}

/// Sort directive. A `field` of `id` is aliased to the configured id field
/// before it reaches the backend; every other field passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: String,
    #[serde(default)]
    pub order: SortOrder,
}

impl Sort {
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            order: SortOrder::Asc,
        }
    }

    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            order: SortOrder::Desc,
        }
    }
}

/// Sort direction. The admin contract sends `"ASC"` or `"DESC"`; anything
/// that is not exactly `"DESC"` sorts ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl SortOrder {
    /// Numeric direction the backend understands: `1` ascending, `-1`
    /// descending.
    pub fn direction(self) -> i8 {
        match self {
            SortOrder::Asc => 1,
            SortOrder::Desc => -1,
        }
    }
}

impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(if s == "DESC" {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        })
    }
}
