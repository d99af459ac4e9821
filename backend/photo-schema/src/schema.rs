//! Persisted layout: embedded migrations and live schema introspection.
//!
//! Tables: `user`, `post`, `comment`, `like`. Every foreign key is
//! `ON DELETE CASCADE`, so deleting a user or a post removes the rows that
//! depend on it.

use db_pool::{create_pool, DbConfig};
use serde::Serialize;
use sqlx::migrate::Migrator;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::SchemaResult;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Tables owned by this schema, parents before children
pub const TABLES: [&str; 4] = ["user", "post", "comment", "like"];

/// Apply all pending migrations
pub async fn migrate(pool: &SqlitePool) -> SchemaResult<()> {
    debug!("Running database migrations");

    MIGRATOR.run(pool).await?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// Create a pool for `config` and bring the schema up to date
pub async fn open(config: DbConfig) -> SchemaResult<SqlitePool> {
    config.log_config();
    let pool = create_pool(config).await?;
    migrate(&pool).await?;
    Ok(pool)
}

/// Fresh in-memory database with the schema applied
pub async fn open_in_memory() -> SchemaResult<SqlitePool> {
    open(DbConfig::memory("photo-schema")).await
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    /// Declared type, e.g. `VARCHAR(120)`
    pub data_type: String,
    pub not_null: bool,
    /// 1-based position within the primary key, 0 when not part of it
    pub primary_key: u32,
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKeyInfo {
    pub column: String,
    pub references_table: String,
    pub references_column: String,
    pub on_delete: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableInfo {
    pub name: String,
    pub columns: Vec<ColumnInfo>,
    pub foreign_keys: Vec<ForeignKeyInfo>,
}

impl TableInfo {
    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn primary_key(&self) -> Vec<&str> {
        let mut pk: Vec<&ColumnInfo> = self.columns.iter().filter(|c| c.primary_key > 0).collect();
        pk.sort_by_key(|c| c.primary_key);
        pk.into_iter().map(|c| c.name.as_str()).collect()
    }
}

/// Read the live schema: every user table with its columns and foreign keys
pub async fn describe(pool: &SqlitePool) -> SchemaResult<Vec<TableInfo>> {
    let names: Vec<String> = sqlx::query_scalar(
        r#"
        SELECT name FROM sqlite_master
        WHERE type = 'table'
          AND name NOT LIKE 'sqlite_%'
          AND name != '_sqlx_migrations'
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut tables = Vec::with_capacity(names.len());
    for name in names {
        let columns = sqlx::query_as::<_, (String, String, i64, Option<String>, i64)>(
            r#"
            SELECT name, type, "notnull", dflt_value, pk
            FROM pragma_table_info(?1)
            ORDER BY cid
            "#,
        )
        .bind(&name)
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|(name, data_type, not_null, default, pk)| ColumnInfo {
            name,
            data_type,
            not_null: not_null != 0,
            primary_key: pk as u32,
            default,
        })
        .collect();

        let foreign_keys = sqlx::query_as::<_, (String, String, Option<String>, String)>(
            r#"
            SELECT "from", "table", "to", on_delete
            FROM pragma_foreign_key_list(?1)
            ORDER BY id, seq
            "#,
        )
        .bind(&name)
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|(column, references_table, to, on_delete)| ForeignKeyInfo {
            column,
            references_table,
            // NULL means the parent's primary key
            references_column: to.unwrap_or_else(|| "id".to_string()),
            on_delete,
        })
        .collect();

        tables.push(TableInfo {
            name,
            columns,
            foreign_keys,
        });
    }

    debug!(tables = tables.len(), "Schema introspected");
    Ok(tables)
}
