//! Data Transfer Objects - request/response types for the API.
//!
//! Response types rename to camelCase so the wire format matches what the
//! platform's clients already consume (`likesCount`, `totalPages`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Request to register a new user.
///
/// Fields default to empty so an absent field surfaces as a field-level
/// validation error instead of a body deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Partial profile update - absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Post create/update body. Both fields are optional at the validation
/// layer; creation additionally requires both to be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostBody {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Body for adding a comment to a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentRequest {
    #[serde(default)]
    pub text: String,
}

/// Body for adding a reply to a comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplyRequest {
    #[serde(default)]
    pub text: String,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// A user's public profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Token issued on login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Minimal `{id, name}` projection of a referenced user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
}

/// A reply as stored, author unresolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyRecord {
    pub id: Uuid,
    pub text: String,
    pub author: Uuid,
}

/// A comment as stored, authors unresolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRecord {
    pub id: Uuid,
    pub text: String,
    pub author: Uuid,
    pub replies: Vec<ReplyRecord>,
}

/// A full post record as stored - returned by mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Uuid,
    pub likes: Vec<Uuid>,
    pub comments: Vec<CommentRecord>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A reply with its author resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyView {
    pub id: Uuid,
    pub text: String,
    pub author: UserSummary,
}

/// A comment with authors resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentView {
    pub id: Uuid,
    pub text: String,
    pub author: UserSummary,
    pub replies: Vec<ReplyView>,
}

/// Full detail of a single post with all user references resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: UserSummary,
    pub likes: Vec<UserSummary>,
    pub comments: Vec<CommentView>,
    pub likes_count: usize,
    pub comments_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One post in the paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListItem {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: UserSummary,
    pub likes_count: usize,
    pub comments_count: usize,
}

/// Paginated post listing with page metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListResponse {
    pub posts: Vec<PostListItem>,
    pub total_count: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

/// Like state after a toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatusResponse {
    pub total_likes: usize,
    pub likes_by: Vec<Uuid>,
    pub is_liked: bool,
}
