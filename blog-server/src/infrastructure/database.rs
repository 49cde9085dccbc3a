use anyhow::Result;
use sqlx::{postgres::PgPoolOptions, PgPool};

/// Connects the pool. The connection limit comes in from startup config
/// with the rest of the environment reads.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    tracing::info!(
        "Database pool ready (max {} connections)",
        max_connections
    );
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;

    tracing::info!("Database schema is up to date");
    Ok(())
}
