use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment entity - text left by a user on a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
    pub post_id: i64,
}

/// Serialized comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub text: String,
    pub user_id: i64,
    pub post_id: i64,
}

impl Comment {
    pub fn serialize(&self) -> CommentResponse {
        CommentResponse {
            id: self.id,
            text: self.text.clone(),
            user_id: self.user_id,
            post_id: self.post_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    pub user_id: i64,
    pub post_id: i64,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentChanges {
    pub text: Option<String>,
}
