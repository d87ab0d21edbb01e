// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// PRINCIPLES:
// - Input is validated here, before any repository call
// - Repositories arrive as trait objects
// - No logging and no wire formats

pub mod actor_service;
pub mod movie_service;
pub mod user_service;

// Re-export all services and their types
pub use actor_service::{
    ActorService,
    SaveActorRequest,
    UpdateActorRequest,
};

pub use movie_service::{
    ActorLinksRequest,
    MovieService,
    SaveMovieRequest,
    UpdateMovieRequest,
};

pub use user_service::UserService;
