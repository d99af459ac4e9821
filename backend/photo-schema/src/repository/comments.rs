use crate::error::SchemaResult;
use crate::models::{Comment, CommentChanges, NewComment, Post, User};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, instrument};

/// Repository for Comment operations
#[derive(Clone)]
pub struct CommentRepository {
    pool: SqlitePool,
}

impl CommentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a comment; both the user and the post must exist
    #[instrument(skip(self, new), fields(user_id = new.user_id, post_id = new.post_id))]
    pub async fn create(&self, new: &NewComment) -> SchemaResult<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comment (text, created_at, user_id, post_id)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, text, created_at, user_id, post_id
            "#,
        )
        .bind(&new.text)
        .bind(Utc::now())
        .bind(new.user_id)
        .bind(new.post_id)
        .fetch_one(&self.pool)
        .await?;

        info!(comment_id = comment.id, "Comment created");
        Ok(comment)
    }

    pub async fn find_by_id(&self, comment_id: i64) -> SchemaResult<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, text, created_at, user_id, post_id
            FROM comment
            WHERE id = ?1
            "#,
        )
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    pub async fn update(
        &self,
        comment_id: i64,
        changes: &CommentChanges,
    ) -> SchemaResult<Option<Comment>> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            UPDATE comment
            SET text = COALESCE(?1, text)
            WHERE id = ?2
            RETURNING id, text, created_at, user_id, post_id
            "#,
        )
        .bind(changes.text.as_deref())
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(comment)
    }

    pub async fn delete(&self, comment_id: i64) -> SchemaResult<bool> {
        let result = sqlx::query("DELETE FROM comment WHERE id = ?1")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// The user who wrote the comment
    pub async fn author(&self, comment_id: i64) -> SchemaResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.email, u.password, u.is_active
            FROM "user" u
            JOIN comment c ON c.user_id = u.id
            WHERE c.id = ?1
            "#,
        )
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// The post the comment belongs to
    pub async fn post(&self, comment_id: i64) -> SchemaResult<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT p.id, p.image_url, p.caption, p.created_at, p.user_id
            FROM post p
            JOIN comment c ON c.post_id = p.id
            WHERE c.id = ?1
            "#,
        )
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }
}
