//! Connection setup for the SQLite store.

use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::str::FromStr;
use std::time::Duration;

/// How long a writer waits for the database lock before giving up.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Parse `database_url` into connect options. The database file is created if
/// missing and foreign keys are enforced on every connection. File databases
/// run in WAL mode so readers never block the single writer.
pub fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url).map_err(|e| {
        AppError::Config(ConfigError::Load(format!("invalid DATABASE_URL: {}", e)))
    })?;
    let opts = opts
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(BUSY_TIMEOUT);
    if is_in_memory(database_url) {
        Ok(opts)
    } else {
        Ok(opts.journal_mode(SqliteJournalMode::Wal))
    }
}

/// Open a pool on `database_url`. In-memory databases get a single connection
/// that is never recycled, since each connection would otherwise see its own database.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let opts = connect_options(database_url)?;
    let in_memory = is_in_memory(database_url);
    let pool_opts = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections.max(1))
    };
    let pool = pool_opts.connect_with(opts).await?;
    tracing::debug!(database_url, in_memory, "pool connected");
    Ok(pool)
}

/// Open a transaction that holds the write lock from its first statement.
///
/// A deferred transaction that reads and then writes cannot be upgraded while
/// another connection is writing; SQLite fails it with SQLITE_BUSY at once.
/// `BEGIN IMMEDIATE` takes the lock up front, so concurrent writers wait out
/// [`BUSY_TIMEOUT`] in turn instead.
pub async fn begin_write(pool: &SqlitePool) -> Result<Transaction<'static, Sqlite>, AppError> {
    let tx = pool.begin_with("BEGIN IMMEDIATE").await?;
    Ok(tx)
}

/// Round-trip a trivial query to confirm the pool can still reach the database.
pub async fn ping(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query_scalar::<_, i64>("SELECT 1").fetch_one(pool).await?;
    Ok(())
}
