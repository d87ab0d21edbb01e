// src/repositories/user_repository.rs
//
// Users and role membership

use std::sync::Arc;
use rusqlite::{params, OptionalExtension, TransactionBehavior};

use crate::db::{with_connection, ConnectionPool};
use crate::domain::{Credentials, ROLE_ADMIN, ROLE_USER};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Store a new user with the default role. Fails with `UserExists`
    /// when the username is taken.
    fn save(&self, credentials: &Credentials) -> AppResult<i64>;

    /// Id of the user matching both fields exactly.
    fn find_id(&self, credentials: &Credentials) -> AppResult<Option<i64>>;

    /// Whether any of the user's roles is the admin role.
    fn is_admin(&self, user_id: i64) -> AppResult<bool>;

    /// Link an existing role to the user.
    fn grant_role(&self, user_id: i64, role_name: &str) -> AppResult<()>;
}

pub struct SqliteUserRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

fn role_id(conn: &rusqlite::Connection, role_name: &str) -> AppResult<i64> {
    conn.query_row(
        "SELECT role_id FROM roles WHERE role_name = ?1 ORDER BY role_id LIMIT 1",
        params![role_name],
        |row| row.get(0),
    )
    .optional()?
    .ok_or_else(|| AppError::UnknownRole(role_name.to_string()))
}

impl UserRepository for SqliteUserRepository {
    fn save(&self, credentials: &Credentials) -> AppResult<i64> {
        with_connection(&self.pool, "repositories.user.save", |conn| {
            // IMMEDIATE takes the write lock before the existence check,
            // so two signups for one name cannot both pass it.
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

            let taken: bool = tx.query_row(
                "SELECT EXISTS(SELECT 1 FROM users WHERE username = ?1)",
                params![credentials.username],
                |row| row.get(0),
            )?;
            if taken {
                return Err(AppError::UserExists);
            }

            tx.execute(
                "INSERT INTO users (username, password) VALUES (?1, ?2)",
                params![credentials.username, credentials.password],
            )?;
            let user_id = tx.last_insert_rowid();

            let default_role = role_id(&tx, ROLE_USER)?;
            tx.execute(
                "INSERT INTO user_role (user_id, role_id) VALUES (?1, ?2)",
                params![user_id, default_role],
            )?;

            tx.commit()?;
            Ok(user_id)
        })
    }

    fn find_id(&self, credentials: &Credentials) -> AppResult<Option<i64>> {
        with_connection(&self.pool, "repositories.user.find_id", |conn| {
            let user_id = conn
                .query_row(
                    "SELECT user_id FROM users WHERE username = ?1 AND password = ?2
                     ORDER BY user_id LIMIT 1",
                    params![credentials.username, credentials.password],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(user_id)
        })
    }

    fn is_admin(&self, user_id: i64) -> AppResult<bool> {
        with_connection(&self.pool, "repositories.user.is_admin", |conn| {
            let admin: bool = conn.query_row(
                "SELECT EXISTS(
                     SELECT 1 FROM user_role ur
                     JOIN roles r ON r.role_id = ur.role_id
                     WHERE ur.user_id = ?1 AND r.role_name = ?2)",
                params![user_id, ROLE_ADMIN],
                |row| row.get(0),
            )?;
            Ok(admin)
        })
    }

    fn grant_role(&self, user_id: i64, role_name: &str) -> AppResult<()> {
        with_connection(&self.pool, "repositories.user.grant_role", |conn| {
            let role = role_id(conn, role_name)?;
            conn.execute(
                "INSERT INTO user_role (user_id, role_id) VALUES (?1, ?2)",
                params![user_id, role],
            )?;
            Ok(())
        })
    }
}
