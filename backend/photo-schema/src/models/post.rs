use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::iso8601;

/// Post entity - an image shared by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub image_url: String,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
}

/// Serialized post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub image_url: String,
    pub caption: Option<String>,
    pub user_id: i64,
    pub created_at: String,
    pub likes_count: i64,
}

impl Post {
    /// `likes_count` must be the size of the post's like collection at the
    /// time of the call. Outside this crate use `PostRepository::serialize`,
    /// which counts it from the `like` table.
    pub(crate) fn serialize(&self, likes_count: i64) -> PostResponse {
        PostResponse {
            id: self.id,
            image_url: self.image_url.clone(),
            caption: self.caption.clone(),
            user_id: self.user_id,
            created_at: iso8601(&self.created_at),
            likes_count,
        }
    }
}

/// Insert payload for a post; `created_at` is set to the insert time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub user_id: i64,
    pub image_url: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// Partial update for a post
///
/// `caption: Some(None)` clears the caption, `None` leaves it as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostChanges {
    pub image_url: Option<String>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub caption: Option<Option<String>>,
}

/// Distinguishes an absent field from an explicit `null`
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Option<Option<String>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer).map(Some)
    }
}
