// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO validation, NO logging
// - Every error is tagged with the operation that produced it
// - Multi-statement writes run in one transaction
// - Explicit SQL only

pub mod actor_movie_repository;
pub mod actor_repository;
pub mod movie_repository;
pub mod user_repository;

pub use actor_movie_repository::{ActorMovieRepository, SqliteActorMovieRepository};
pub use actor_repository::{ActorRepository, SqliteActorRepository};
pub use movie_repository::{MovieRepository, SqliteMovieRepository};
pub use user_repository::{SqliteUserRepository, UserRepository};

#[cfg(test)]
pub use actor_movie_repository::MockActorMovieRepository;
#[cfg(test)]
pub use actor_repository::MockActorRepository;
#[cfg(test)]
pub use movie_repository::MockMovieRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
