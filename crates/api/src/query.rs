//! Shared query parameter types for API handlers.
//!
//! Values are taken as raw strings so a malformed `page` or `limit` falls
//! back to the default instead of rejecting the request.

use serde::Deserialize;
use vidhub_core::pagination::PageRequest;

/// Generic pagination parameters (`?page=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PaginationParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}

/// Query parameters for `GET /videos`.
#[derive(Debug, Default, Deserialize)]
pub struct VideoListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    /// Case-insensitive substring matched against the title.
    pub query: Option<String>,
    pub sort_by: Option<String>,
    /// `asc`; anything else sorts descending.
    pub sort_type: Option<String>,
    /// Restrict to one owner.
    pub user_id: Option<String>,
}

impl VideoListParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}
