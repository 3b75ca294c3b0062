//! Data models module
//!
//! Defines request and response shapes exchanged with the schoolcore backend

use serde::{Deserialize, Serialize};

pub mod auth;
pub mod school;

/// Paginated listing envelope returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of records across all pages
    pub count: u64,
    /// Page number that was served
    pub page: u32,
    /// Page size that was applied
    pub page_size: u32,
    /// Records on this page
    pub results: Vec<T>,
}

/// Error body shapes produced by the backend
///
/// Standard errors carry a `detail` field; the pagination layer reports
/// bad page parameters as `{"has_error": true, "error": "..."}` instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_error: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Best-effort human readable message from either error shape
    pub fn message(&self) -> Option<&str> {
        self.detail.as_deref().or(self.error.as_deref())
    }
}

/// A listing response body
///
/// The pagination layer answers bad page parameters with a 200 response
/// whose body is an error object rather than an envelope, so both shapes
/// have to be accepted when decoding.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListReply<T> {
    Page(Page<T>),
    Error(ApiErrorBody),
}
