//! Persistence schema for a photo-sharing application.
//!
//! Users own posts, comments and likes; posts own comments and likes.
//! Deleting an owner cascades to everything it owns. Each entity has a
//! `serialize` method producing the JSON shape exposed to clients.

pub mod config;
pub mod diagram;
pub mod error;
pub mod models;
pub mod repository;
pub mod schema;

pub use error::{SchemaError, SchemaResult};
pub use repository::Repositories;
