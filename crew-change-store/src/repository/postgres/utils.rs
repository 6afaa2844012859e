use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
use std::str::FromStr;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    HeaplessString::from_str(&s).map_err(|_| {
        format!("Value for column '{col_name}' is too long (max {N} bytes)").into()
    })
}

/// Retrieves an optional `HeaplessString` from a row.
pub fn get_optional_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<Option<HeaplessString<N>>, Box<dyn Error + Send + Sync>> {
    let s: Option<String> = row.try_get(col_name)?;
    s.map(|val| HeaplessString::from_str(&val))
        .transpose()
        .map_err(|_| {
            format!("Value for column '{col_name}' is too long (max {N} bytes)").into()
        })
}

/// Retrieves a TEXT column holding the string form of an enum.
pub fn get_parsed<T>(row: &PgRow, col_name: &str) -> Result<T, Box<dyn Error + Send + Sync>>
where
    T: FromStr<Err = String>,
{
    let s: String = row.try_get(col_name)?;
    Ok(s.parse::<T>()?)
}

/// Allocates the next id of a BIGSERIAL column without inserting a row.
pub async fn next_id<'e, E>(executor: E, table: &str) -> Result<i64, sqlx::Error>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query_scalar("SELECT nextval(pg_get_serial_sequence($1, 'id'))")
        .bind(table)
        .fetch_one(executor)
        .await
}
