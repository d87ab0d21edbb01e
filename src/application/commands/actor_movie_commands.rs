// src/application/commands/actor_movie_commands.rs
//
// Actor ↔ Movie link handlers

use super::decode;
use crate::application::dto::*;
use crate::application::error_handling::{fail, CommandResult};
use crate::application::AppState;

/// `/actor-movie/save`
pub fn save_actor_movie(state: &AppState, body: &str) -> CommandResult {
    let dto: ActorLinksDto = decode(body)?;
    let movie_id = dto.movie_id;

    state
        .movie_service
        .link_actors(dto.into())
        .map_err(fail("failed to save actor-movie"))?;

    log::info!("actors added to movie: movie_id={}", movie_id);
    Ok(ApiResponse::ok())
}

/// `/actor-movie/delete`
pub fn delete_actor_movie(state: &AppState, body: &str) -> CommandResult {
    let dto: ActorLinksDto = decode(body)?;
    let movie_id = dto.movie_id;

    state
        .movie_service
        .unlink_actors(dto.into())
        .map_err(fail("failed to delete actor-movie"))?;

    log::info!("actors removed from movie: movie_id={}", movie_id);
    Ok(ApiResponse::ok())
}
