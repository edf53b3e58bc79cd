use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every 4xx/5xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub message: String,
}

/// Hypermedia link attached to list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LinkDto {
    /// Relation of the target to the current page (`self`, `prev`, `next`).
    pub rel: String,
    pub href: String,
    pub method: String,
}

/// One page of a listing together with its navigation links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedDto<T> {
    pub items: Vec<T>,
    /// 1-based page number.
    pub page: u64,
    pub page_size: u64,
    pub total_count: u64,
    pub total_pages: u64,
    pub links: Vec<LinkDto>,
}
