// src/services/movie_service.rs
use crate::domain::{
    parse_iso_date, validate_description, validate_id, validate_ids, validate_new_movie,
    validate_title, DomainError, Movie, MovieSortKey, Rating,
};
use crate::error::{AppError, AppResult};
use crate::repositories::{ActorMovieRepository, MovieRepository};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SaveMovieRequest {
    pub title: String,
    pub description: String,
    pub release_date: String,
    pub rating: i64,
    pub actor_ids: Vec<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMovieRequest {
    pub movie_id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<String>,
    pub rating: Option<i64>,
}

/// Adds or removes actor links on one movie
#[derive(Debug, Clone)]
pub struct ActorLinksRequest {
    pub movie_id: i64,
    pub actor_ids: Vec<i64>,
}

pub struct MovieService {
    movie_repo: Arc<dyn MovieRepository>,
    link_repo: Arc<dyn ActorMovieRepository>,
}

impl MovieService {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        link_repo: Arc<dyn ActorMovieRepository>,
    ) -> Self {
        Self {
            movie_repo,
            link_repo,
        }
    }

    pub fn save_movie(&self, request: SaveMovieRequest) -> AppResult<i64> {
        let movie = validate_new_movie(
            &request.title,
            &request.description,
            &request.release_date,
            request.rating,
        )?;
        validate_ids("actors_ids", &request.actor_ids)?;

        self.movie_repo.save(&movie, &request.actor_ids)
    }

    pub fn update_movie(&self, request: UpdateMovieRequest) -> AppResult<()> {
        validate_id("movie_id", request.movie_id)?;

        if request.title.is_none()
            && request.description.is_none()
            && request.release_date.is_none()
            && request.rating.is_none()
        {
            return Err(DomainError::NothingToUpdate.into());
        }

        if let Some(title) = &request.title {
            validate_title(title)?;
        }
        if let Some(description) = &request.description {
            validate_description(description)?;
        }
        let release_date = request
            .release_date
            .as_deref()
            .map(|raw| parse_iso_date("release_date", raw))
            .transpose()?;
        let rating = request.rating.map(Rating::try_from).transpose()?;

        let id = request.movie_id;
        if let Some(title) = &request.title {
            self.movie_repo.update_title(id, title)?;
        }
        if let Some(description) = &request.description {
            self.movie_repo.update_description(id, description)?;
        }
        if let Some(release_date) = release_date {
            self.movie_repo.update_release_date(id, release_date)?;
        }
        if let Some(rating) = rating {
            self.movie_repo.update_rating(id, rating)?;
        }

        Ok(())
    }

    pub fn delete_movie(&self, movie_id: i64) -> AppResult<()> {
        validate_id("movie_id", movie_id)?;
        self.movie_repo.delete(movie_id)
    }

    pub fn get_movie(&self, movie_id: i64) -> AppResult<Movie> {
        validate_id("movie_id", movie_id)?;
        self.movie_repo
            .get_by_id(movie_id)?
            .ok_or(AppError::MovieNotFound(movie_id))
    }

    /// Unknown or empty sort keys fall back to the default ordering.
    pub fn list_movies(&self, sort_by: &str) -> AppResult<Vec<Movie>> {
        self.movie_repo.list(MovieSortKey::parse_or_default(sort_by))
    }

    pub fn search_movies(&self, fragment: &str) -> AppResult<Vec<Movie>> {
        self.movie_repo.search(fragment)
    }

    pub fn link_actors(&self, request: ActorLinksRequest) -> AppResult<()> {
        validate_id("movie_id", request.movie_id)?;
        validate_ids("actors_ids", &request.actor_ids)?;
        self.link_repo.link(request.movie_id, &request.actor_ids)
    }

    pub fn unlink_actors(&self, request: ActorLinksRequest) -> AppResult<()> {
        validate_id("movie_id", request.movie_id)?;
        validate_ids("actors_ids", &request.actor_ids)?;
        self.link_repo.unlink(request.movie_id, &request.actor_ids)
    }
}
