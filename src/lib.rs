// src/lib.rs
// Film Library - movies, actors and the users allowed to curate them
//
// Architecture:
// - Domain-centric: field rules and entities live in domains
// - Repositories: explicit SQL over a pooled SQLite connection
// - Services: validation before storage, one service per aggregate
// - Application Layer: JSON envelopes, routes and access control
// - Explicit: No implicit behavior, no magic

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    // Actor
    Actor,
    Gender,
    NewActor,
    // Movie
    Movie,
    MovieSortKey,
    NewMovie,
    Rating,
    // Users
    Credentials,
    DomainError,
};

// ============================================================================
// PUBLIC API - Errors and configuration
// ============================================================================

pub use config::Config;
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, create_memory_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    ActorMovieRepository,
    ActorRepository,
    MovieRepository,
    SqliteActorMovieRepository,
    SqliteActorRepository,
    SqliteMovieRepository,
    SqliteUserRepository,
    UserRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    ActorLinksRequest,
    // Actor Service
    ActorService,
    // Movie Service
    MovieService,
    SaveActorRequest,
    SaveMovieRequest,
    UpdateActorRequest,
    UpdateMovieRequest,
    // User Service
    UserService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{dispatch, ApiResponse, AppState};
