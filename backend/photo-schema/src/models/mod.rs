//! Row types for the four tables and their serialized representations.
//!
//! Every entity exposes a `serialize` method returning a `*Response`
//! struct: the mapping handed to API clients. Row types are never sent
//! over the wire directly.

pub mod comment;
pub mod like;
pub mod post;
pub mod user;

pub use comment::{Comment, CommentChanges, CommentResponse, NewComment};
pub use like::{Like, LikeResponse, NewLike};
pub use post::{NewPost, Post, PostChanges, PostResponse};
pub use user::{NewUser, User, UserChanges, UserResponse};

use chrono::{DateTime, SecondsFormat, Utc};

/// ISO-8601 text for a stored timestamp, microsecond precision, UTC `Z` suffix
pub fn iso8601(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}
