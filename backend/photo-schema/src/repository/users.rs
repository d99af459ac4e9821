use crate::error::SchemaResult;
use crate::models::{Comment, Like, NewUser, Post, User, UserChanges};
use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

/// Repository for User operations
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user; a taken email fails with a unique violation
    #[instrument(skip(self, new))]
    pub async fn create(&self, new: &NewUser) -> SchemaResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO "user" (email, password, is_active)
            VALUES (?1, ?2, ?3)
            RETURNING id, email, password, is_active
            "#,
        )
        .bind(&new.email)
        .bind(&new.password)
        .bind(new.is_active)
        .fetch_one(&self.pool)
        .await?;

        info!(user_id = user.id, "User created");
        Ok(user)
    }

    pub async fn find_by_id(&self, user_id: i64) -> SchemaResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, is_active
            FROM "user"
            WHERE id = ?1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        debug!(user_id, found = user.is_some(), "User lookup");
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> SchemaResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, is_active
            FROM "user"
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Apply `changes`; `Ok(None)` when the user does not exist
    #[instrument(skip(self, changes))]
    pub async fn update(&self, user_id: i64, changes: &UserChanges) -> SchemaResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE "user"
            SET email = COALESCE(?1, email),
                password = COALESCE(?2, password),
                is_active = COALESCE(?3, is_active)
            WHERE id = ?4
            RETURNING id, email, password, is_active
            "#,
        )
        .bind(changes.email.as_deref())
        .bind(changes.password.as_deref())
        .bind(changes.is_active)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        if user.is_some() {
            info!(user_id, "User updated");
        }
        Ok(user)
    }

    /// Delete a user together with their posts, comments and likes
    ///
    /// Returns false if no such user existed.
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: i64) -> SchemaResult<bool> {
        let result = sqlx::query(r#"DELETE FROM "user" WHERE id = ?1"#)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!(user_id, "User deleted with dependent posts, comments and likes");
        }
        Ok(deleted)
    }

    /// Posts owned by the user, oldest first
    pub async fn posts(&self, user_id: i64) -> SchemaResult<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, image_url, caption, created_at, user_id
            FROM post
            WHERE user_id = ?1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    /// Comments written by the user, oldest first
    pub async fn comments(&self, user_id: i64) -> SchemaResult<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, text, created_at, user_id, post_id
            FROM comment
            WHERE user_id = ?1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    /// Likes given by the user, in the order they were given
    pub async fn likes(&self, user_id: i64) -> SchemaResult<Vec<Like>> {
        let likes = sqlx::query_as::<_, Like>(
            r#"
            SELECT user_id, post_id, created_at
            FROM "like"
            WHERE user_id = ?1
            ORDER BY rowid
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(likes)
    }
}
