//! Database connection pool.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::config::database_url;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

const MAX_CONNECTIONS: u32 = 5;

/// Get or initialize the database connection pool.
pub async fn get_pool() -> Result<&'static PgPool, sqlx::Error> {
    POOL.get_or_try_init(|| async {
        let url = database_url().map_err(|e| sqlx::Error::Configuration(e.to_string().into()))?;

        PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(&url)
            .await
    })
    .await
}
