// src/repositories/movie_repository.rs
//
// Movie persistence, listing and search

use std::sync::Arc;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::{with_connection, ConnectionPool};
use crate::domain::movie::{Movie, NewMovie, Rating};
use crate::domain::MovieSortKey;
use crate::error::AppResult;
use crate::repositories::actor_movie_repository::{
    actor_ids_by_movie, delete_links_for_movie, insert_links,
};

#[cfg_attr(test, mockall::automock)]
pub trait MovieRepository: Send + Sync {
    /// Insert the movie and its actor links in one transaction.
    fn save(&self, movie: &NewMovie, actor_ids: &[i64]) -> AppResult<i64>;

    /// Movie with its actor ids, `None` when absent.
    fn get_by_id(&self, id: i64) -> AppResult<Option<Movie>>;

    fn list(&self, sort: MovieSortKey) -> AppResult<Vec<Movie>>;

    /// Movies whose title, or any linked actor's name, contains `fragment`.
    fn search(&self, fragment: &str) -> AppResult<Vec<Movie>>;

    // Single-column updates. A missing id updates nothing and still succeeds.
    fn update_title(&self, id: i64, title: &str) -> AppResult<()>;
    fn update_description(&self, id: i64, description: &str) -> AppResult<()>;
    fn update_release_date(&self, id: i64, release_date: NaiveDate) -> AppResult<()>;
    fn update_rating(&self, id: i64, rating: Rating) -> AppResult<()>;

    /// Remove the movie's links, then the movie.
    fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct SqliteMovieRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteMovieRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Movie without its actors
    fn row_to_movie(row: &Row) -> Result<Movie, rusqlite::Error> {
        let rating_value: i64 = row.get("rating")?;
        let rating = Rating::try_from(rating_value).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Integer, Box::new(e))
        })?;

        Ok(Movie {
            id: row.get("movie_id")?,
            title: row.get("title")?,
            description: row.get("description")?,
            release_date: row.get("release_date")?,
            rating,
            actors: Vec::new(),
        })
    }

    /// Run a movie query and attach actor ids with one batched lookup
    fn query_movies(
        conn: &Connection,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> rusqlite::Result<Vec<Movie>> {
        let mut movies: Vec<Movie> = {
            let mut stmt = conn.prepare(sql)?;
            let rows = stmt.query_map(params, Self::row_to_movie)?;
            rows.collect::<Result<Vec<_>, _>>()?
        };

        let ids: Vec<i64> = movies.iter().map(|m| m.id).collect();
        let mut actors = actor_ids_by_movie(conn, &ids)?;
        for movie in &mut movies {
            movie.actors = actors.remove(&movie.id).unwrap_or_default();
        }

        Ok(movies)
    }
}

impl MovieRepository for SqliteMovieRepository {
    fn save(&self, movie: &NewMovie, actor_ids: &[i64]) -> AppResult<i64> {
        with_connection(&self.pool, "repositories.movie.save", |conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT INTO movies (title, description, release_date, rating)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    movie.title,
                    movie.description,
                    movie.release_date,
                    i64::from(movie.rating),
                ],
            )?;
            let movie_id = tx.last_insert_rowid();

            insert_links(&tx, movie_id, actor_ids)?;
            tx.commit()?;

            Ok(movie_id)
        })
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Movie>> {
        with_connection(&self.pool, "repositories.movie.get_by_id", |conn| {
            let movie = conn
                .query_row(
                    "SELECT movie_id, title, description, release_date, rating
                     FROM movies WHERE movie_id = ?1",
                    params![id],
                    Self::row_to_movie,
                )
                .optional()?;

            let Some(mut movie) = movie else {
                return Ok(None);
            };

            movie.actors = actor_ids_by_movie(conn, &[id])?
                .remove(&id)
                .unwrap_or_default();

            Ok(Some(movie))
        })
    }

    fn list(&self, sort: MovieSortKey) -> AppResult<Vec<Movie>> {
        with_connection(&self.pool, "repositories.movie.list", |conn| {
            // The ORDER BY body comes from a closed set of literals.
            let sql = format!(
                "SELECT movie_id, title, description, release_date, rating
                 FROM movies
                 ORDER BY {}",
                sort.order_by_clause()
            );
            Ok(Self::query_movies(conn, &sql, [])?)
        })
    }

    fn search(&self, fragment: &str) -> AppResult<Vec<Movie>> {
        with_connection(&self.pool, "repositories.movie.search", |conn| {
            // Fragment is not escaped: '%' and '_' keep their LIKE meaning.
            let pattern = format!("%{}%", fragment);
            Ok(Self::query_movies(
                conn,
                "SELECT DISTINCT m.movie_id, m.title, m.description, m.release_date, m.rating
                 FROM movies m
                 LEFT JOIN actor_movie am ON m.movie_id = am.movie_id
                 LEFT JOIN actors a ON am.actor_id = a.actor_id
                 WHERE m.title LIKE ?1 OR a.name LIKE ?1
                 ORDER BY m.movie_id",
                params![pattern],
            )?)
        })
    }

    fn update_title(&self, id: i64, title: &str) -> AppResult<()> {
        with_connection(&self.pool, "repositories.movie.update_title", |conn| {
            conn.execute("UPDATE movies SET title = ?1 WHERE movie_id = ?2", params![title, id])?;
            Ok(())
        })
    }

    fn update_description(&self, id: i64, description: &str) -> AppResult<()> {
        with_connection(&self.pool, "repositories.movie.update_description", |conn| {
            conn.execute(
                "UPDATE movies SET description = ?1 WHERE movie_id = ?2",
                params![description, id],
            )?;
            Ok(())
        })
    }

    fn update_release_date(&self, id: i64, release_date: NaiveDate) -> AppResult<()> {
        with_connection(&self.pool, "repositories.movie.update_release_date", |conn| {
            conn.execute(
                "UPDATE movies SET release_date = ?1 WHERE movie_id = ?2",
                params![release_date, id],
            )?;
            Ok(())
        })
    }

    fn update_rating(&self, id: i64, rating: Rating) -> AppResult<()> {
        with_connection(&self.pool, "repositories.movie.update_rating", |conn| {
            conn.execute(
                "UPDATE movies SET rating = ?1 WHERE movie_id = ?2",
                params![i64::from(rating), id],
            )?;
            Ok(())
        })
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        with_connection(&self.pool, "repositories.movie.delete", |conn| {
            let tx = conn.transaction()?;
            delete_links_for_movie(&tx, id)?;
            tx.execute("DELETE FROM movies WHERE movie_id = ?1", params![id])?;
            tx.commit()?;
            Ok(())
        })
    }
}
