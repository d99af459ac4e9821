use crate::error::SchemaResult;
use crate::models::{Like, NewLike, Post, User};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, instrument};

/// Repository for Like operations
#[derive(Clone)]
pub struct LikeRepository {
    pool: SqlitePool,
}

impl LikeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a like
    ///
    /// Not idempotent: liking the same post twice fails with a primary-key
    /// violation (reported as a unique violation).
    #[instrument(skip(self))]
    pub async fn create(&self, new: NewLike) -> SchemaResult<Like> {
        let like = sqlx::query_as::<_, Like>(
            r#"
            INSERT INTO "like" (user_id, post_id, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING user_id, post_id, created_at
            "#,
        )
        .bind(new.user_id)
        .bind(new.post_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        info!("Like created");
        Ok(like)
    }

    pub async fn find(&self, user_id: i64, post_id: i64) -> SchemaResult<Option<Like>> {
        let like = sqlx::query_as::<_, Like>(
            r#"
            SELECT user_id, post_id, created_at
            FROM "like"
            WHERE user_id = ?1 AND post_id = ?2
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(like)
    }

    /// Check if user has liked a post
    pub async fn exists(&self, user_id: i64, post_id: i64) -> SchemaResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM "like"
                WHERE user_id = ?1 AND post_id = ?2
            )
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Remove a like; false if there was nothing to remove
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: i64, post_id: i64) -> SchemaResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM "like"
            WHERE user_id = ?1 AND post_id = ?2
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// The user who gave the like; `None` when no such like exists
    pub async fn user(&self, user_id: i64, post_id: i64) -> SchemaResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.email, u.password, u.is_active
            FROM "user" u
            JOIN "like" l ON l.user_id = u.id
            WHERE l.user_id = ?1 AND l.post_id = ?2
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// The liked post; `None` when no such like exists
    pub async fn post(&self, user_id: i64, post_id: i64) -> SchemaResult<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT p.id, p.image_url, p.caption, p.created_at, p.user_id
            FROM post p
            JOIN "like" l ON l.post_id = p.id
            WHERE l.user_id = ?1 AND l.post_id = ?2
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }
}
