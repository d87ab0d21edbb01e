// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Schema initialization
// - Database utilities

pub mod connection;
pub mod migrations;

pub use connection::{
    create_connection_pool, create_memory_pool, get_connection, with_connection, ConnectionPool,
    PooledConn,
};

pub use migrations::{
    get_database_stats, initialize_database, verify_database_integrity, DatabaseStats,
    CURRENT_SCHEMA_VERSION,
};
