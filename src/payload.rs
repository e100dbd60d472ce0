use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Pagination;

/// Query string pairs to attach to a request URL.
#[derive(Debug, Default)]
pub(crate) struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// In the case that `value` is some and not empty, adds the key-value pair.
    pub(crate) fn add_if_some<T: Display>(mut self, key: &'static str, value: Option<T>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.is_empty() {
                self.pairs.push((key, value));
            }
        }
        self
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub(crate) fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Anything that can be encoded into query parameters.
pub(crate) trait QueryOptions {
    fn to_query(&self, query: Query) -> Query;
}

impl QueryOptions for () {
    fn to_query(&self, query: Query) -> Query {
        query
    }
}

impl<T: QueryOptions> QueryOptions for Option<&T> {
    fn to_query(&self, query: Query) -> Query {
        match self {
            Some(options) => options.to_query(query),
            None => query,
        }
    }
}

/// The `{"record": ...}` wrapper of the v1 records API.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct RecordEnvelope<T> {
    pub(crate) record: T,
}

/// The `{"data": ..., "pagination": ...}` wrapper of the v2 API.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub(crate) data: T,
    #[serde(default)]
    pub(crate) pagination: Option<Pagination>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ZonePayload<'a> {
    pub(crate) zone: &'a str,
}
