//! Database connection and schema setup
//!
//! Schema changes live as plain SQL files under `migrations/` and are undone by
//! the files under `cleanup/`.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::config::PostgresConfig;

/// Open a connection pool sized from the configuration
pub async fn connect(config: &PostgresConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await?;
    info!(max_connections = config.max_connections, "Connected to change request database");
    Ok(pool)
}

/// Initialize the database by executing migration files in ascending order
///
/// The migrations are idempotent, so this can run on every startup.
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use crew_change_store::repository::postgres::db_init::init_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let migrations_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations");
    execute_sql_files_in_order(pool, &migrations_dir, true).await
}

/// Cleanup the database by executing cleanup files in descending order
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let cleanup_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("cleanup");
    execute_sql_files_in_order(pool, &cleanup_dir, false).await
}

/// Execute SQL files from a directory in the specified order
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `dir` - Directory containing SQL files
/// * `ascending` - If true, execute in ascending order; if false, in descending order
async fn execute_sql_files_in_order(
    pool: &PgPool,
    dir: &Path,
    ascending: bool,
) -> Result<(), sqlx::Error> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .map_err(sqlx::Error::Io)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().and_then(|s| s.to_str()) == Some("sql"))
        .collect();

    entries.sort_by(|a, b| {
        let ordering = a.file_name().cmp(&b.file_name());
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });

    for entry in entries {
        let sql = fs::read_to_string(entry.path()).map_err(sqlx::Error::Io)?;
        sqlx::raw_sql(&sql).execute(pool).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_init_and_cleanup() -> Result<(), Box<dyn std::error::Error>> {
        let pool = connect(&PostgresConfig::from_env()?).await?;

        init_database(&pool).await?;
        // Running twice must be harmless
        init_database(&pool).await?;
        cleanup_database(&pool).await?;
        init_database(&pool).await?;

        Ok(())
    }
}
