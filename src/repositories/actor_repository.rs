// src/repositories/actor_repository.rs
//
// Actor persistence

use std::sync::Arc;
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};

use crate::db::{with_connection, ConnectionPool};
use crate::domain::actor::{Actor, Gender, NewActor};
use crate::error::AppResult;
use crate::repositories::actor_movie_repository::{delete_links_for_actor, movie_ids_by_actor};

#[cfg_attr(test, mockall::automock)]
pub trait ActorRepository: Send + Sync {
    /// Insert a new actor and return its generated id.
    fn save(&self, actor: &NewActor) -> AppResult<i64>;

    /// Actor with its movie ids, `None` when absent.
    fn get_by_id(&self, id: i64) -> AppResult<Option<Actor>>;

    /// Every actor ordered by id, each with its movie ids.
    fn list_all(&self) -> AppResult<Vec<Actor>>;

    // Single-column updates. A missing id updates nothing and still succeeds.
    fn update_name(&self, id: i64, name: &str) -> AppResult<()>;
    fn update_gender(&self, id: i64, gender: Gender) -> AppResult<()>;
    fn update_birthdate(&self, id: i64, birthdate: NaiveDate) -> AppResult<()>;

    /// Remove the actor's links, then the actor.
    fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct SqliteActorRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteActorRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Actor without its movies
    fn row_to_actor(row: &Row) -> Result<Actor, rusqlite::Error> {
        let gender_str: String = row.get("gender")?;
        let gender = gender_str
            .parse::<Gender>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e)))?;

        Ok(Actor {
            id: row.get("actor_id")?,
            name: row.get("name")?,
            gender,
            birthdate: row.get("birthdate")?,
            movies: Vec::new(),
        })
    }
}

impl ActorRepository for SqliteActorRepository {
    fn save(&self, actor: &NewActor) -> AppResult<i64> {
        with_connection(&self.pool, "repositories.actor.save", |conn| {
            conn.execute(
                "INSERT INTO actors (name, gender, birthdate) VALUES (?1, ?2, ?3)",
                params![actor.name, actor.gender.as_str(), actor.birthdate],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Actor>> {
        with_connection(&self.pool, "repositories.actor.get_by_id", |conn| {
            let actor = conn
                .query_row(
                    "SELECT actor_id, name, gender, birthdate FROM actors WHERE actor_id = ?1",
                    params![id],
                    Self::row_to_actor,
                )
                .optional()?;

            let Some(mut actor) = actor else {
                return Ok(None);
            };

            actor.movies = movie_ids_by_actor(conn, &[id])?
                .remove(&id)
                .unwrap_or_default();

            Ok(Some(actor))
        })
    }

    fn list_all(&self) -> AppResult<Vec<Actor>> {
        with_connection(&self.pool, "repositories.actor.list_all", |conn| {
            let mut actors: Vec<Actor> = {
                let mut stmt = conn.prepare(
                    "SELECT actor_id, name, gender, birthdate FROM actors ORDER BY actor_id",
                )?;
                let rows = stmt.query_map([], Self::row_to_actor)?;
                rows.collect::<Result<Vec<_>, _>>()?
            };

            let ids: Vec<i64> = actors.iter().map(|a| a.id).collect();
            let mut movies = movie_ids_by_actor(conn, &ids)?;
            for actor in &mut actors {
                actor.movies = movies.remove(&actor.id).unwrap_or_default();
            }

            Ok(actors)
        })
    }

    fn update_name(&self, id: i64, name: &str) -> AppResult<()> {
        with_connection(&self.pool, "repositories.actor.update_name", |conn| {
            conn.execute("UPDATE actors SET name = ?1 WHERE actor_id = ?2", params![name, id])?;
            Ok(())
        })
    }

    fn update_gender(&self, id: i64, gender: Gender) -> AppResult<()> {
        with_connection(&self.pool, "repositories.actor.update_gender", |conn| {
            conn.execute(
                "UPDATE actors SET gender = ?1 WHERE actor_id = ?2",
                params![gender.as_str(), id],
            )?;
            Ok(())
        })
    }

    fn update_birthdate(&self, id: i64, birthdate: NaiveDate) -> AppResult<()> {
        with_connection(&self.pool, "repositories.actor.update_birthdate", |conn| {
            conn.execute(
                "UPDATE actors SET birthdate = ?1 WHERE actor_id = ?2",
                params![birthdate, id],
            )?;
            Ok(())
        })
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        with_connection(&self.pool, "repositories.actor.delete", |conn| {
            let tx = conn.transaction()?;
            delete_links_for_actor(&tx, id)?;
            tx.execute("DELETE FROM actors WHERE actor_id = ?1", params![id])?;
            tx.commit()?;
            Ok(())
        })
    }
}
