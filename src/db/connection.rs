// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Clear error propagation
// - Thread-safe access

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::time::Duration;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Per-connection settings
///
/// - Foreign keys enabled (not default in SQLite)
/// - LIKE compares case-sensitively, matching the search contract
/// - Busy timeout bounds every lock wait
fn configure_connection(conn: &Connection, busy_timeout: Duration) -> rusqlite::Result<()> {
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;
         PRAGMA case_sensitive_like = ON;",
    )?;
    conn.busy_timeout(busy_timeout)?;
    Ok(())
}

/// Create a connection pool
///
/// Pool configuration:
/// - Size and timeouts from `Config`
/// - SQLite in WAL mode for better concurrency
/// - Parent directory created when missing
pub fn create_connection_pool(config: &Config) -> AppResult<ConnectionPool> {
    if let Some(parent) = config.database_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(AppError::Io)?;
        }
    }

    let busy_timeout = config.busy_timeout;
    let manager = SqliteConnectionManager::file(&config.database_path).with_init(move |conn| {
        configure_connection(conn, busy_timeout)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )
    });

    let pool = Pool::builder()
        .max_size(config.pool_max_size)
        .connection_timeout(config.connection_timeout)
        .build(manager)
        .map_err(|e| AppError::Pool(format!("Failed to create connection pool: {}", e)))?;

    Ok(pool)
}

/// Create a single-connection in-memory pool
///
/// Every pooled in-memory connection is its own database, so the pool is
/// capped at one connection that is never recycled.
pub fn create_memory_pool() -> AppResult<ConnectionPool> {
    let manager = SqliteConnectionManager::memory()
        .with_init(|conn| configure_connection(conn, Duration::from_millis(5000)));

    Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .build(manager)
        .map_err(|e| AppError::Pool(format!("Failed to create memory pool: {}", e)))
}

/// Get a connection from the pool
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Pool(format!("Failed to get database connection: {}", e)))
}

/// Run `f` on a pooled connection, tagging any failure with `op`.
pub fn with_connection<T, F>(pool: &ConnectionPool, op: &'static str, f: F) -> AppResult<T>
where
    F: FnOnce(&mut PooledConn) -> AppResult<T>,
{
    let mut conn = get_connection(pool).map_err(|e| AppError::in_operation(op, e))?;
    f(&mut conn).map_err(|e| AppError::in_operation(op, e))
}
