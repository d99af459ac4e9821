use crate::error::SchemaResult;
use crate::models::{Comment, Like, NewPost, Post, PostChanges, PostResponse, User};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

/// Repository for Post operations
#[derive(Clone)]
pub struct PostRepository {
    pool: SqlitePool,
}

impl PostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a post stamped with the current time
    ///
    /// Fails with a foreign-key violation if `user_id` does not exist.
    #[instrument(skip(self, new), fields(user_id = new.user_id))]
    pub async fn create(&self, new: &NewPost) -> SchemaResult<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO post (image_url, caption, created_at, user_id)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, image_url, caption, created_at, user_id
            "#,
        )
        .bind(&new.image_url)
        .bind(new.caption.as_deref())
        .bind(Utc::now())
        .bind(new.user_id)
        .fetch_one(&self.pool)
        .await?;

        info!(post_id = post.id, "Post created");
        Ok(post)
    }

    pub async fn find_by_id(&self, post_id: i64) -> SchemaResult<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, image_url, caption, created_at, user_id
            FROM post
            WHERE id = ?1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        debug!(post_id, found = post.is_some(), "Post lookup");
        Ok(post)
    }

    #[instrument(skip(self, changes))]
    pub async fn update(&self, post_id: i64, changes: &PostChanges) -> SchemaResult<Option<Post>> {
        let (set_caption, caption) = match &changes.caption {
            Some(caption) => (true, caption.as_deref()),
            None => (false, None),
        };

        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE post
            SET image_url = COALESCE(?1, image_url),
                caption = CASE WHEN ?2 THEN ?3 ELSE caption END
            WHERE id = ?4
            RETURNING id, image_url, caption, created_at, user_id
            "#,
        )
        .bind(changes.image_url.as_deref())
        .bind(set_caption)
        .bind(caption)
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        if post.is_some() {
            info!(post_id, "Post updated");
        }
        Ok(post)
    }

    /// Delete a post together with its comments and likes
    #[instrument(skip(self))]
    pub async fn delete(&self, post_id: i64) -> SchemaResult<bool> {
        let result = sqlx::query("DELETE FROM post WHERE id = ?1")
            .bind(post_id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!(post_id, "Post deleted with dependent comments and likes");
        }
        Ok(deleted)
    }

    /// The user who owns the post
    pub async fn author(&self, post_id: i64) -> SchemaResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.email, u.password, u.is_active
            FROM "user" u
            JOIN post p ON p.user_id = u.id
            WHERE p.id = ?1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Comments on the post, oldest first
    pub async fn comments(&self, post_id: i64) -> SchemaResult<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, text, created_at, user_id, post_id
            FROM comment
            WHERE post_id = ?1
            ORDER BY id
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    /// Likes on the post, in the order they were given
    pub async fn likes(&self, post_id: i64) -> SchemaResult<Vec<Like>> {
        let likes = sqlx::query_as::<_, Like>(
            r#"
            SELECT user_id, post_id, created_at
            FROM "like"
            WHERE post_id = ?1
            ORDER BY rowid
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(likes)
    }

    pub async fn likes_count(&self, post_id: i64) -> SchemaResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "like" WHERE post_id = ?1"#)
            .bind(post_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Load and serialize a post with its current like count
    pub async fn serialize(&self, post_id: i64) -> SchemaResult<Option<PostResponse>> {
        let Some(post) = self.find_by_id(post_id).await? else {
            return Ok(None);
        };
        let likes_count = self.likes_count(post_id).await?;

        Ok(Some(post.serialize(likes_count)))
    }
}
