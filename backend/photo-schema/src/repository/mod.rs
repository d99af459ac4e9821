//! Data access for the four entities.
//!
//! Each repository owns a pool handle and is cheap to clone. Relationship
//! collections (`user.posts`, `post.likes`, ...) are exposed as queries on
//! the owning side's repository.

pub mod comments;
pub mod likes;
pub mod posts;
pub mod users;

pub use comments::CommentRepository;
pub use likes::LikeRepository;
pub use posts::PostRepository;
pub use users::UserRepository;

use sqlx::SqlitePool;

/// All repositories over one pool
#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
    pub posts: PostRepository,
    pub comments: CommentRepository,
    pub likes: LikeRepository,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            posts: PostRepository::new(pool.clone()),
            comments: CommentRepository::new(pool.clone()),
            likes: LikeRepository::new(pool),
        }
    }
}
