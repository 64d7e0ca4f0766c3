//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Query string of `GET /posts`.
///
/// Page and limit are signed so that out-of-range values reach the
/// server's normalisation instead of failing to parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<String>,
    pub keyword: Option<String>,
}

/// Body of category create and rename requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryRequest {
    #[serde(default)]
    pub name: String,
}
