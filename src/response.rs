use reqwest::{StatusCode, header::HeaderMap};
use serde::{Deserialize, Serialize};

use crate::payload::{DataEnvelope, Query, QueryOptions};

/// A response from the API: the HTTP metadata paired with the decoded payload.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub data: T,
    /// Only present for list endpoints that paginate.
    pub pagination: Option<Pagination>,
}

impl<T> ApiResponse<T> {
    /// Maps the payload, keeping the HTTP metadata.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        ApiResponse {
            status: self.status,
            headers: self.headers,
            data: f(self.data),
            pagination: self.pagination,
        }
    }

    /// Discards the metadata, returning the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T> ApiResponse<DataEnvelope<T>> {
    pub(crate) fn unwrap_envelope(self) -> ApiResponse<T> {
        ApiResponse {
            status: self.status,
            headers: self.headers,
            pagination: self.data.pagination,
            data: self.data.data,
        }
    }
}

/// Pagination details returned with paginated lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u64,
    pub per_page: u64,
    pub total_entries: u64,
    pub total_pages: u64,
}

/// Pagination and sorting options for list endpoints.
///
/// Unset options are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    /// Sort order, for example `"id:asc"` or `"name:desc"`.
    pub sort: Option<String>,
}

impl ListOptions {
    pub fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u64) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn sort(mut self, sort: &str) -> Self {
        self.sort = Some(sort.to_string());
        self
    }
}

impl QueryOptions for ListOptions {
    fn to_query(&self, query: Query) -> Query {
        query
            .add_if_some("page", self.page)
            .add_if_some("per_page", self.per_page)
            .add_if_some("sort", self.sort.as_deref())
    }
}
