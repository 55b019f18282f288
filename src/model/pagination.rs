use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single page of results along with the totals needed to page through the rest.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageDto<T> {
    pub content: Vec<T>,
    /// Zero-indexed page number.
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}
