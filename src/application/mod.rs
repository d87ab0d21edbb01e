// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE services and repositories
// - It provides the boundary between the caller (CLI) and services
// - It translates between JSON bodies, DTOs and domain entities
// - It is the only layer that logs

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod router;
pub mod state;

pub use dto::{ApiResponse, Status};
pub use router::{dispatch, find_route, Access, Route, ROUTES};
pub use state::AppState;
