use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Raw pagination query parameters.
///
/// Kept as strings so malformed values fall back to defaults instead of failing
/// query extraction.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct PageQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}
