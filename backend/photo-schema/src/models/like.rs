use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::iso8601;

/// Like entity - a user liking a post
///
/// Identified by `(user_id, post_id)`; there is no surrogate id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Like {
    pub user_id: i64,
    pub post_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Serialized like
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeResponse {
    pub user_id: i64,
    pub post_id: i64,
    pub created_at: String,
}

impl Like {
    pub fn serialize(&self) -> LikeResponse {
        LikeResponse {
            user_id: self.user_id,
            post_id: self.post_id,
            created_at: iso8601(&self.created_at),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLike {
    pub user_id: i64,
    pub post_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_serialize_shape() {
        let like = Like {
            user_id: 1,
            post_id: 2,
            created_at: Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap(),
        };

        let value = serde_json::to_value(like.serialize()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert_eq!(object["user_id"], 1);
        assert_eq!(object["post_id"], 2);
        assert_eq!(object["created_at"], "2023-12-31T23:59:59.000000Z");
    }
}
