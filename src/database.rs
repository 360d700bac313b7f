// src/database.rs
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Applies the migrations embedded from `migrations/`.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}

/// Confirms the database is reachable.
pub async fn status_check(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT true").fetch_one(pool).await?;
    Ok(())
}
