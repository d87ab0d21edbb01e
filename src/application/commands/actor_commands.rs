// src/application/commands/actor_commands.rs
//
// Actor Command Handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return envelopes
// - Never contain business logic

use super::{decode, respond, update_failure};
use crate::application::dto::*;
use crate::application::error_handling::{fail, CommandResult};
use crate::application::AppState;

const UPDATE_PHRASES: &[(&str, &str)] = &[
    ("repositories.actor.update_name", "failed to update actor name"),
    ("repositories.actor.update_gender", "failed to update actor gender"),
    ("repositories.actor.update_birthdate", "failed to update actor birthdate"),
];

/// `/actor/save`
pub fn save_actor(state: &AppState, body: &str) -> CommandResult {
    let dto: SaveActorDto = decode(body)?;

    let actor_id = state
        .actor_service
        .save_actor(dto.into())
        .map_err(fail("failed to save actor"))?;

    log::info!("actor saved: actor_id={}", actor_id);
    respond(ActorIdPayload { actor_id })
}

/// `/actor/update`
pub fn update_actor(state: &AppState, body: &str) -> CommandResult {
    let dto: UpdateActorDto = decode(body)?;
    let actor_id = dto.actor_id;

    state
        .actor_service
        .update_actor(dto.into())
        .map_err(|error| update_failure(error, UPDATE_PHRASES, "failed to update actor"))?;

    log::info!("actor updated: actor_id={}", actor_id);
    Ok(ApiResponse::ok())
}

/// `/actor/delete`
pub fn delete_actor(state: &AppState, body: &str) -> CommandResult {
    let dto: ActorIdDto = decode(body)?;

    state
        .actor_service
        .delete_actor(dto.actor_id)
        .map_err(fail("failed to delete actor"))?;

    log::info!("actor deleted: actor_id={}", dto.actor_id);
    Ok(ApiResponse::ok())
}

/// `/actor/search`
pub fn search_actor(state: &AppState, body: &str) -> CommandResult {
    let dto: ActorIdDto = decode(body)?;

    let actor = state
        .actor_service
        .get_actor(dto.actor_id)
        .map_err(fail("actor search failed"))?;

    log::info!("actor found: actor_id={}", dto.actor_id);
    respond(ActorPayload {
        actor: actor.into(),
    })
}

/// `/actor/all`. The body is ignored.
pub fn all_actors(state: &AppState, _body: &str) -> CommandResult {
    let actors = state
        .actor_service
        .list_actors()
        .map_err(fail("actors search failed"))?;

    log::info!("actors found: actors_count={}", actors.len());
    respond(ActorsPayload {
        actors: actors.into_iter().map(ActorDto::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::test_support::{state, unwrap_either};
    use crate::application::commands::Handler;
    use serde_json::{json, Value};

    fn call(state: &AppState, handler: Handler, body: Value) -> Value {
        let response = unwrap_either(handler(state, &body.to_string()));
        serde_json::to_value(response).unwrap()
    }

    #[test]
    fn test_ada_round_trip() {
        let state = state();

        let saved = call(
            &state,
            save_actor,
            json!({"name": "Ada", "gender": "female", "birthdate": "1980-01-01"}),
        );
        assert_eq!(saved, json!({"status": "OK", "actor_id": 1}));

        let updated = call(&state, update_actor, json!({"actor_id": 1, "gender": "female"}));
        assert_eq!(updated, json!({"status": "OK"}));

        let found = call(&state, search_actor, json!({"actor_id": 1}));
        assert_eq!(
            found,
            json!({
                "status": "OK",
                "actor": {
                    "actor_id": 1,
                    "name": "Ada",
                    "gender": "female",
                    "birthdate": "1980-01-01",
                    "movies": []
                }
            })
        );

        let deleted = call(&state, delete_actor, json!({"actor_id": 1}));
        assert_eq!(deleted, json!({"status": "OK"}));

        let missing = call(&state, search_actor, json!({"actor_id": 1}));
        assert_eq!(missing, json!({"status": "Error", "error": "actor search failed"}));
    }

    #[test]
    fn test_validation_messages() {
        let state = state();

        let response = call(
            &state,
            save_actor,
            json!({"name": "", "gender": "female", "birthdate": "1980-01-01"}),
        );
        assert_eq!(response["error"], "field name is not valid");

        let response = call(&state, update_actor, json!({"actor_id": 1}));
        assert_eq!(response["error"], "no fields to update");

        let response = call(&state, search_actor, json!({}));
        assert_eq!(response["error"], "field actor_id is not valid");
    }

    #[test]
    fn test_malformed_body() {
        let state = state();

        let response = unwrap_either(save_actor(&state, "{not json"));

        assert_eq!(response.error.as_deref(), Some("failed to decode request"));
    }

    #[test]
    fn test_all_actors_empty_library() {
        let state = state();

        let response = call(&state, all_actors, json!({}));

        assert_eq!(response, json!({"status": "OK", "actors": []}));
    }
}
