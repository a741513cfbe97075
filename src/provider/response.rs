//! Response normalization
//!
//! Reshapes raw backend responses into the admin-side contract: single
//! records are wrapped under `data` with the configured id field aliased to
//! `id`, list responses are rebuilt around their record array, and the
//! many-by-id actions pass the backend value through untouched.

use serde_json::{Map, Value};

use crate::action::Action;
use crate::params::Params;

/// Normalize a raw backend response for `action`.
pub(crate) fn normalize(action: Action, raw: Value, params: &Params, id_field: &str) -> Value {
    match action {
        Action::GetOne | Action::Update | Action::Delete => wrap(with_id(raw, id_field)),
        Action::Create => wrap(created_record(raw, params, id_field)),
        Action::GetList => normalize_list(raw, id_field),
        Action::GetMany | Action::GetManyReference => raw,
    }
}

fn wrap(record: Value) -> Value {
    let mut envelope = Map::new();
    envelope.insert("data".to_string(), record);
    Value::Object(envelope)
}

/// Shallow-copy a record, injecting `id` from the configured id field.
/// A missing field (or a non-object response) yields `"id": null`.
fn with_id(raw: Value, id_field: &str) -> Value {
    let mut record = match raw {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    let id = record.get(id_field).cloned().unwrap_or(Value::Null);
    record.insert("id".to_string(), id);
    Value::Object(record)
}

/// The created record is the request's `data` payload; only the identifier
/// comes from the backend response.
fn created_record(raw: Value, params: &Params, id_field: &str) -> Value {
    let mut record = match params.data.clone() {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };
    let id = raw.get(id_field).cloned().unwrap_or(Value::Null);
    record.insert("id".to_string(), id);
    Value::Object(record)
}

/// Rebuild a list response around its record array.
///
/// Accepts both the paginated object shape (`{"data": [...], "total": n,
/// ...}`) and a bare array (pagination disabled server-side). Every other
/// field of the object shape is preserved; `total` is recomputed from the
/// record count and `id` is injected per record when the configured id
/// field is not already `id`.
fn normalize_list(raw: Value, id_field: &str) -> Value {
    let (mut records, mut envelope) = match raw {
        Value::Array(items) => (items, Map::new()),
        Value::Object(mut map) => {
            let records = match map.remove("data") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            };
            (records, map)
        }
        _ => (Vec::new(), Map::new()),
    };

    if id_field != "id" {
        for record in &mut records {
            if let Value::Object(map) = record {
                let id = map.get(id_field).cloned().unwrap_or(Value::Null);
                map.insert("id".to_string(), id);
            }
        }
    }

    envelope.insert("total".to_string(), Value::from(records.len() as u64));
    envelope.insert("data".to_string(), Value::Array(records));
    Value::Object(envelope)
}
