//! Data Transfer Objects - request/response types for the API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a post. All fields are required and non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    pub password: String,
}

/// Request to edit a post; the password must match the one given at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
    pub password: String,
}

/// Request to delete a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePostRequest {
    pub password: String,
}

/// A post as exposed over the API. The stored password is never echoed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Weekly statistics payload for `GET /api/stats`.
///
/// Field names are camelCase on the wire; `posts_by_day` keys are ISO
/// calendar dates (`YYYY-MM-DD`) of the poster's local day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStatsResponse {
    pub week_start: String,
    pub total_posts: u64,
    pub total_characters: u64,
    pub average_characters_per_post: u64,
    pub posts_by_day: BTreeMap<String, u64>,
}
