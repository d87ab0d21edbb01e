// src/application/router.rs
//
// Route table and access control
//
// RULES:
// - Public routes run for anyone
// - User routes need credentials that resolve to a user
// - Admin routes additionally need the admin role
// - Every outcome, including refusals, is an envelope

use crate::application::commands::{self, Handler};
use crate::application::dto::ApiResponse;
use crate::application::error_handling::{FORBIDDEN, UNAUTHORIZED, UNKNOWN_ROUTE};
use crate::application::AppState;
use crate::domain::Credentials;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    User,
    Admin,
}

pub struct Route {
    pub path: &'static str,
    pub access: Access,
    handler: Handler,
}

pub const ROUTES: &[Route] = &[
    Route { path: "/signup", access: Access::Public, handler: commands::sign_up },
    Route { path: "/signin", access: Access::Public, handler: commands::sign_in },
    Route { path: "/actor/save", access: Access::Admin, handler: commands::save_actor },
    Route { path: "/actor/update", access: Access::Admin, handler: commands::update_actor },
    Route { path: "/actor/delete", access: Access::Admin, handler: commands::delete_actor },
    Route { path: "/actor/search", access: Access::User, handler: commands::search_actor },
    Route { path: "/actor/all", access: Access::User, handler: commands::all_actors },
    Route { path: "/movie/save", access: Access::Admin, handler: commands::save_movie },
    Route { path: "/movie/update", access: Access::Admin, handler: commands::update_movie },
    Route { path: "/movie/delete", access: Access::Admin, handler: commands::delete_movie },
    Route { path: "/movie/search_by_id", access: Access::User, handler: commands::search_movie_by_id },
    Route { path: "/movie/all", access: Access::User, handler: commands::all_movies },
    Route { path: "/movie/search_by_part", access: Access::User, handler: commands::search_movies_by_part },
    Route { path: "/actor-movie/save", access: Access::Admin, handler: commands::save_actor_movie },
    Route { path: "/actor-movie/delete", access: Access::Admin, handler: commands::delete_actor_movie },
];

pub fn find_route(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.path == path)
}

/// Run one command on behalf of `caller` and return its envelope.
pub fn dispatch(
    state: &AppState,
    path: &str,
    body: &str,
    caller: Option<&Credentials>,
) -> ApiResponse {
    let Some(route) = find_route(path) else {
        log::warn!("{}: {}", UNKNOWN_ROUTE, path);
        return ApiResponse::error(UNKNOWN_ROUTE);
    };

    let outcome = authorize(state, route.access, caller).and_then(|_| (route.handler)(state, body));

    match outcome {
        Ok(response) | Err(response) => response,
    }
}

fn authorize(state: &AppState, access: Access, caller: Option<&Credentials>) -> Result<(), ApiResponse> {
    if access == Access::Public {
        return Ok(());
    }

    let Some(credentials) = caller else {
        log::warn!("request without credentials");
        return Err(ApiResponse::error(UNAUTHORIZED));
    };

    let user_id = state
        .user_service
        .sign_in(credentials.clone())
        .map_err(|error| refusal(error, UNAUTHORIZED))?;

    if access == Access::Admin {
        let admin = state
            .user_service
            .is_admin(user_id)
            .map_err(|error| refusal(error, FORBIDDEN))?;

        if !admin {
            log::warn!("user {} is not an admin", user_id);
            return Err(ApiResponse::error(FORBIDDEN));
        }
    }

    Ok(())
}

fn refusal(error: AppError, phrase: &str) -> ApiResponse {
    match error.root() {
        AppError::InvalidCredentials | AppError::Domain(_) => log::warn!("{}: {}", phrase, error),
        _ => log::error!("{}: {}", phrase, error),
    }
    ApiResponse::error(phrase)
}
