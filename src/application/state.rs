// src/application/state.rs

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::repositories::{
    ActorMovieRepository, ActorRepository, MovieRepository, SqliteActorMovieRepository,
    SqliteActorRepository, SqliteMovieRepository, SqliteUserRepository, UserRepository,
};
use crate::services::{ActorService, MovieService, UserService};

/// Services shared by every command.
/// All fields are Arc-wrapped for thread-safe sharing across commands.
pub struct AppState {
    pub actor_service: Arc<ActorService>,
    pub movie_service: Arc<MovieService>,
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// Wire the SQLite repositories over `pool` into services.
    pub fn from_pool(pool: Arc<ConnectionPool>) -> Self {
        // REPOSITORIES
        let actor_repo: Arc<dyn ActorRepository> =
            Arc::new(SqliteActorRepository::new(pool.clone()));
        let movie_repo: Arc<dyn MovieRepository> =
            Arc::new(SqliteMovieRepository::new(pool.clone()));
        let link_repo: Arc<dyn ActorMovieRepository> =
            Arc::new(SqliteActorMovieRepository::new(pool.clone()));
        let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool));

        // SERVICES
        Self {
            actor_service: Arc::new(ActorService::new(actor_repo)),
            movie_service: Arc::new(MovieService::new(movie_repo, link_repo)),
            user_service: Arc::new(UserService::new(user_repo)),
        }
    }
}
