//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Request body for creating a post.
///
/// Unknown fields are rejected. `tags` may be omitted or `null`, both are
/// treated as an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub author: String,
    pub text: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub due: DateTime<FixedOffset>,
}

/// Response body for a successful create: just the assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostIdResponse {
    pub id: i64,
}
