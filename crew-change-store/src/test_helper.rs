//! Test helper module for database-backed tests
//!
//! Tests using this module need a reachable Postgres (see `DATABASE_URL`) and
//! must be marked `#[serial]`, since every setup truncates the tables.

use crate::config::PostgresConfig;
use crate::repository::postgres::{db_init, PgChangeRequestRepositoryImpl};
use std::sync::Arc;

/// Connect, apply the schema and start from empty tables
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// #[ignore]
/// #[serial]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let repo = setup_test_repository().await?;
///     // Perform test operations...
///     Ok(())
/// }
/// ```
pub async fn setup_test_repository() -> Result<PgChangeRequestRepositoryImpl, Box<dyn std::error::Error + Send + Sync>> {
    let mut config = PostgresConfig::from_env()?;
    config.max_connections = 1;

    let pool = db_init::connect(&config).await?;
    db_init::init_database(&pool).await?;
    sqlx::raw_sql("TRUNCATE change_log, change_request RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await?;

    Ok(PgChangeRequestRepositoryImpl::new(Arc::new(pool)))
}
