// src/repositories/actor_movie_repository.rs
//
// Actor <-> Movie association rows
//
// The free functions operate on a borrowed connection so the movie and
// actor repositories can run them inside their own transactions.

use rusqlite::{params, params_from_iter, Connection};
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::{with_connection, ConnectionPool};
use crate::error::AppResult;

/// Parent ids per `IN (...)` query, well below SQLite's variable limit
const LOOKUP_CHUNK: usize = 500;

#[cfg_attr(test, mockall::automock)]
pub trait ActorMovieRepository: Send + Sync {
    /// Insert one row per actor id, all or nothing.
    fn link(&self, movie_id: i64, actor_ids: &[i64]) -> AppResult<()>;

    /// Remove rows for each (movie_id, actor_id) pair. Absent pairs are ignored.
    fn unlink(&self, movie_id: i64, actor_ids: &[i64]) -> AppResult<()>;
}

pub struct SqliteActorMovieRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteActorMovieRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl ActorMovieRepository for SqliteActorMovieRepository {
    fn link(&self, movie_id: i64, actor_ids: &[i64]) -> AppResult<()> {
        with_connection(&self.pool, "repositories.actor_movie.link", |conn| {
            let tx = conn.transaction()?;
            insert_links(&tx, movie_id, actor_ids)?;
            tx.commit()?;
            Ok(())
        })
    }

    fn unlink(&self, movie_id: i64, actor_ids: &[i64]) -> AppResult<()> {
        with_connection(&self.pool, "repositories.actor_movie.unlink", |conn| {
            let tx = conn.transaction()?;
            {
                let mut stmt =
                    tx.prepare("DELETE FROM actor_movie WHERE movie_id = ?1 AND actor_id = ?2")?;
                for actor_id in actor_ids {
                    stmt.execute(params![movie_id, actor_id])?;
                }
            }
            tx.commit()?;
            Ok(())
        })
    }
}

// ---------------------------------------------------------------------
// Shared SQL
// ---------------------------------------------------------------------

pub(crate) fn insert_links(conn: &Connection, movie_id: i64, actor_ids: &[i64]) -> rusqlite::Result<()> {
    let mut stmt = conn.prepare("INSERT INTO actor_movie (movie_id, actor_id) VALUES (?1, ?2)")?;
    for actor_id in actor_ids {
        stmt.execute(params![movie_id, actor_id])?;
    }
    Ok(())
}

pub(crate) fn delete_links_for_movie(conn: &Connection, movie_id: i64) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM actor_movie WHERE movie_id = ?1", params![movie_id])
}

pub(crate) fn delete_links_for_actor(conn: &Connection, actor_id: i64) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM actor_movie WHERE actor_id = ?1", params![actor_id])
}

/// Actor ids grouped by movie, in link insertion order.
pub(crate) fn actor_ids_by_movie(
    conn: &Connection,
    movie_ids: &[i64],
) -> rusqlite::Result<HashMap<i64, Vec<i64>>> {
    grouped_lookup(conn, "movie_id", "actor_id", movie_ids)
}

/// Movie ids grouped by actor, in link insertion order.
pub(crate) fn movie_ids_by_actor(
    conn: &Connection,
    actor_ids: &[i64],
) -> rusqlite::Result<HashMap<i64, Vec<i64>>> {
    grouped_lookup(conn, "actor_id", "movie_id", actor_ids)
}

fn grouped_lookup(
    conn: &Connection,
    key_column: &'static str,
    value_column: &'static str,
    keys: &[i64],
) -> rusqlite::Result<HashMap<i64, Vec<i64>>> {
    let mut grouped: HashMap<i64, Vec<i64>> = HashMap::new();

    for chunk in keys.chunks(LOOKUP_CHUNK) {
        let placeholders = vec!["?"; chunk.len()].join(", ");
        let sql = format!(
            "SELECT {key}, {value} FROM actor_movie WHERE {key} IN ({placeholders}) ORDER BY rowid",
            key = key_column,
            value = value_column,
            placeholders = placeholders,
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(chunk.iter()), |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?))
        })?;

        for row in rows {
            let (key, value) = row?;
            grouped.entry(key).or_default().push(value);
        }
    }

    Ok(grouped)
}
