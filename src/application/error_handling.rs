// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → envelope messages
// - Rejected input is echoed back with its field name
// - Backing-store failures never reach the caller, only a generic phrase
// - Full detail goes to the log

use crate::application::dto::ApiResponse;
use crate::error::AppError;

pub const DECODE_FAILED: &str = "failed to decode request";
pub const UNAUTHORIZED: &str = "unauthorized";
pub const FORBIDDEN: &str = "forbidden";
pub const UNKNOWN_ROUTE: &str = "unknown route";

/// Outcome of one command. Both arms are complete envelopes.
pub type CommandResult = Result<ApiResponse, ApiResponse>;

/// Message shown to the caller for `error`, falling back to `phrase`.
pub fn error_message(error: &AppError, phrase: &str) -> String {
    match error.root() {
        AppError::Domain(domain_error) => {
            log::warn!("invalid request: {}", domain_error);
            domain_error.to_string()
        }

        AppError::UserExists => {
            log::warn!("{}: user already exists", phrase);
            AppError::UserExists.to_string()
        }

        _ => {
            log::error!("{}: {}", phrase, error);
            phrase.to_string()
        }
    }
}

/// Error envelope for `error`, see [`error_message`].
pub fn error_response(error: AppError, phrase: &str) -> ApiResponse {
    ApiResponse::error(error_message(&error, phrase))
}

/// Adapter for `map_err` in command handlers.
pub fn fail(phrase: &'static str) -> impl FnOnce(AppError) -> ApiResponse {
    move |error| error_response(error, phrase)
}

/// Envelope for a request body that is not valid JSON for the route.
pub fn decode_failure(error: serde_json::Error) -> ApiResponse {
    log::error!("{}: {}", DECODE_FAILED, error);
    ApiResponse::error(DECODE_FAILED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_validation_message_is_passed_through() {
        let error = AppError::Domain(DomainError::InvalidField("rating"));
        assert_eq!(error_message(&error, "failed to save movie"), "field rating is not valid");
    }

    #[test]
    fn test_wrapped_user_exists_is_recognised() {
        let error = AppError::in_operation("repositories.user.save", AppError::UserExists);
        assert_eq!(error_message(&error, "failed to save user"), "user already exists");
    }

    #[test]
    fn test_store_failures_are_generic() {
        let error = AppError::in_operation(
            "repositories.movie.search",
            AppError::Pool("timed out".to_string()),
        );

        let response = error_response(error, "movies search failed");

        assert!(!response.is_ok());
        assert_eq!(response.error.as_deref(), Some("movies search failed"));
    }

    #[test]
    fn test_not_found_is_generic() {
        let response = error_response(AppError::MovieNotFound(9), "movie search failed");
        assert_eq!(response.error.as_deref(), Some("movie search failed"));
    }
}
