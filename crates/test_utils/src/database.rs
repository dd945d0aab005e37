//! Database test helpers

use sqlx::sqlite::SqlitePoolOptions;

use infra_db::{init_schema, DatabasePool};

/// Creates an in-memory SQLite pool with the claims schema applied.
///
/// The pool is capped at a single connection: every connection to
/// `sqlite::memory:` opens its own private database, so a larger pool would
/// hand tests a different empty store on each acquire.
pub async fn memory_pool() -> DatabasePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    init_schema(&pool).await.expect("failed to apply schema");
    pool
}
