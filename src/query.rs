//! Backend query construction.
//!
//! The backend's `find` operation takes a flat mapping of Mongo-style
//! directives: `$limit`, `$skip`, `$sort[<field>]`, and per-field constraints
//! such as `{"$in": [...]}`. [`Query`] keeps the typed directives apart from
//! the caller-supplied filter entries until [`Query::into_map`] flattens them;
//! the filter overlay is applied last, so filter keys win over the typed
//! directives on collision. Filter keys are caller-supplied and open-ended.

use serde_json::{json, Map, Value};

use crate::params::{Params, SortOrder};

/// A find query under construction: typed directives plus a dynamic overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    limit: Option<u64>,
    skip: Option<u64>,
    sort: Option<(String, SortOrder)>,
    id_in: Option<(String, Vec<Value>)>,
    extra: Map<String, Value>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query for a batch read: constrain `id_field` to the given identifier
    /// set and cap the page at the number of identifiers requested.
    pub fn for_ids(id_field: &str, ids: Vec<Value>) -> Self {
        Query::new().limit(ids.len() as u64).id_in(id_field, ids)
    }

    /// Query for a list read: pagination window, sort directive, and filter
    /// overlay, per the admin contract.
    ///
    /// Pagination directives are emitted only when both `page` and `perPage`
    /// are present and nonzero; the window is `$limit = perPage`,
    /// `$skip = perPage * (page - 1)`. A window whose skip does not fit in
    /// `u64` is treated like an absent one. A sort on `id` is aliased to the
    /// configured id field.
    pub fn for_list(params: &Params, id_field: &str) -> Self {
        let mut query = Query::new();

        if let Some(window) = &params.pagination {
            if window.page > 0 && window.per_page > 0 {
                if let Some(skip) = window.per_page.checked_mul(window.page - 1) {
                    query = query.limit(window.per_page).skip(skip);
                }
            }
        }

        if let Some(sort) = &params.sort {
            let field = if sort.field == "id" {
                id_field
            } else {
                &sort.field
            };
            query = query.sort(field, sort.order);
        }

        if let Some(filter) = &params.filter {
            query = query.filter(filter.clone());
        }

        query
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Sort on `field`, already in backend terms.
    pub fn sort(mut self, field: &str, order: SortOrder) -> Self {
        self.sort = Some((field.to_string(), order));
        self
    }

    /// Constrain `field` to a set of identifiers (`$in`).
    pub fn id_in(mut self, field: &str, ids: Vec<Value>) -> Self {
        self.id_in = Some((field.to_string(), ids));
        self
    }

    /// Overlay caller-supplied filter entries.
    pub fn filter(mut self, entries: Map<String, Value>) -> Self {
        self.extra.extend(entries);
        self
    }

    /// Flatten to the backend's flat key convention. Sort directions travel
    /// as stringified numbers (`"1"` / `"-1"`); `$limit` and `$skip` stay
    /// numeric.
    pub fn into_map(self) -> Map<String, Value> {
        let mut map = Map::new();

        if let Some((field, ids)) = self.id_in {
            map.insert(field, json!({ "$in": ids }));
        }
        if let Some(limit) = self.limit {
            map.insert("$limit".to_string(), json!(limit));
        }
        if let Some(skip) = self.skip {
            map.insert("$skip".to_string(), json!(skip));
        }
        if let Some((field, order)) = self.sort {
            map.insert(
                format!("$sort[{}]", field),
                Value::String(order.direction().to_string()),
            );
        }
        for (key, value) in self.extra {
            map.insert(key, value);
        }

        map
    }
}
