//! Octopus Energy API response types

use serde::Deserialize;

/// Paginated response envelope used by list endpoints
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    /// Total number of results across all pages
    pub count: Option<u64>,
    /// Absolute URL of the next page, absent on the last page
    pub next: Option<String>,
    /// Absolute URL of the previous page, absent on the first page
    pub previous: Option<String>,
    /// Results of this page, in service order
    pub results: Vec<T>,
}

/// Body of the meter point endpoint
#[derive(Debug, Deserialize)]
pub struct MeterPointResponse {
    /// GSP group id (e.g. "_A"), resolved against the static table
    pub gsp: String,
    pub mpan: String,
    pub profile_class: u8,
}

/// One entry of an industry grid-supply-point lookup
#[derive(Debug, Deserialize)]
pub struct GroupIdResult {
    pub group_id: String,
}
