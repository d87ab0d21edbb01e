// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the wire and services
// - Every command: decode → one service call → envelope
// - Commands handle error conversion for the envelope
// - Commands NEVER contain business logic

pub mod actor_commands;
pub mod actor_movie_commands;
pub mod movie_commands;
pub mod user_commands;

pub use actor_commands::*;
pub use actor_movie_commands::*;
pub use movie_commands::*;
pub use user_commands::*;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::application::dto::ApiResponse;
use crate::application::error_handling::{decode_failure, error_response, CommandResult};
use crate::application::AppState;
use crate::error::AppError;

/// Signature shared by all command handlers.
pub type Handler = fn(&AppState, &str) -> CommandResult;

fn decode<T: DeserializeOwned + std::fmt::Debug>(body: &str) -> Result<T, ApiResponse> {
    let request: T = serde_json::from_str(body).map_err(decode_failure)?;
    log::info!("request body decoded: {:?}", request);
    Ok(request)
}

fn respond<T: Serialize>(payload: T) -> CommandResult {
    ApiResponse::with_payload(&payload).map_err(|error| {
        log::error!("failed to encode response: {}", error);
        ApiResponse::error("failed to encode response")
    })
}

/// Pick the per-field phrase for a failed partial update from the
/// repository operation that failed.
fn update_failure(
    error: AppError,
    phrases: &[(&str, &'static str)],
    fallback: &'static str,
) -> ApiResponse {
    let phrase = match &error {
        AppError::Operation { op, .. } => phrases
            .iter()
            .find(|(tag, _)| tag == op)
            .map(|(_, phrase)| *phrase)
            .unwrap_or(fallback),
        _ => fallback,
    };
    error_response(error, phrase)
}
