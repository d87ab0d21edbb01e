// src/application/commands/user_commands.rs
//
// Signup / signin handlers

use super::{decode, respond};
use crate::application::dto::*;
use crate::application::error_handling::{fail, CommandResult};
use crate::application::AppState;

/// `/signup`
pub fn sign_up(state: &AppState, body: &str) -> CommandResult {
    let dto: CredentialsDto = decode(body)?;
    let username = dto.username.clone();

    let user_id = state
        .user_service
        .sign_up(dto.into())
        .map_err(fail("failed to save user"))?;

    log::info!("user saved: username={} user_id={}", username, user_id);
    Ok(ApiResponse::ok())
}

/// `/signin`. Answers with the caller's id.
pub fn sign_in(state: &AppState, body: &str) -> CommandResult {
    let dto: CredentialsDto = decode(body)?;

    let user_id = state
        .user_service
        .sign_in(dto.into())
        .map_err(fail("failed to authenticate user"))?;

    log::info!("user signed in: user_id={}", user_id);
    respond(UserIdPayload { user_id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::test_support::{state, unwrap_either};
    use crate::application::commands::Handler;
    use serde_json::{json, Value};

    fn call(state: &AppState, handler: Handler, body: Value) -> Value {
        serde_json::to_value(unwrap_either(handler(state, &body.to_string()))).unwrap()
    }

    #[test]
    fn test_bob_signs_up_once() {
        let state = state();

        let response = call(&state, sign_up, json!({"username": "bob", "password": "pw"}));
        assert_eq!(response, json!({"status": "OK"}));

        let response = call(&state, sign_in, json!({"username": "bob", "password": "pw"}));
        assert_eq!(response, json!({"status": "OK", "user_id": 1}));

        let response = call(&state, sign_up, json!({"username": "bob", "password": "pw2"}));
        assert_eq!(response, json!({"status": "Error", "error": "user already exists"}));

        let response = call(&state, sign_in, json!({"username": "bob", "password": "pw2"}));
        assert_eq!(response, json!({"status": "Error", "error": "failed to authenticate user"}));
    }

    #[test]
    fn test_required_fields() {
        let state = state();

        let response = call(&state, sign_up, json!({"password": "pw"}));
        assert_eq!(response["error"], "field username is required");

        let response = call(&state, sign_in, json!({"username": "bob"}));
        assert_eq!(response["error"], "field password is required");
    }
}
