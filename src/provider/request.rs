//! Request mapping
//!
//! Maps each action kind to the one backend call it performs.

use anyhow::Result;
use serde_json::Value;

use crate::action::Action;
use crate::params::Params;
use crate::query::Query;
use crate::service::{FindParams, Service};

/// Issue the backend call for `action` and return the raw response.
///
/// The list-shaped actions go through [`Query`] construction and `find`;
/// the single-record actions forward `id`/`data` as given, with missing
/// parameters standing in as JSON `null`.
pub(crate) async fn issue(
    service: &dyn Service,
    action: Action,
    params: &Params,
    id_field: &str,
) -> Result<Value> {
    match action {
        Action::GetMany => {
            let ids = params.ids.clone().unwrap_or_default();
            let query = Query::for_ids(id_field, ids).into_map();
            service.find(FindParams { query }).await
        }
        Action::GetList | Action::GetManyReference => {
            let query = Query::for_list(params, id_field).into_map();
            service.find(FindParams { query }).await
        }
        Action::GetOne => service.get(param_id(params)).await,
        Action::Create => service.create(param_data(params)).await,
        Action::Update => service.update(param_id(params), param_data(params)).await,
        Action::Delete => service.remove(param_id(params)).await,
    }
}

fn param_id(params: &Params) -> Value {
    params.id.clone().unwrap_or(Value::Null)
}

fn param_data(params: &Params) -> Value {
    params.data.clone().unwrap_or(Value::Null)
}
