/// Error types for photo-schema
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Diagram error: {0}")]
    Diagram(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SchemaError {
    /// The database's own classification of a constraint failure
    /// (unique, foreign key, not null, check), if this is one.
    pub fn constraint(&self) -> Option<ErrorKind> {
        match self {
            SchemaError::Database(sqlx::Error::Database(db)) => match db.kind() {
                ErrorKind::Other => None,
                kind => Some(kind),
            },
            _ => None,
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(self.constraint(), Some(ErrorKind::UniqueViolation))
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self.constraint(), Some(ErrorKind::ForeignKeyViolation))
    }

    pub fn is_check_violation(&self) -> bool {
        matches!(self.constraint(), Some(ErrorKind::CheckViolation))
    }
}

/// Result type alias for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
