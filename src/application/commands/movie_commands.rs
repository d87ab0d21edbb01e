// src/application/commands/movie_commands.rs
//
// Movie Command Handlers

use super::{decode, respond, update_failure};
use crate::application::dto::*;
use crate::application::error_handling::{fail, CommandResult};
use crate::application::AppState;
use crate::domain::{DomainError, MovieSortKey};

const UPDATE_PHRASES: &[(&str, &str)] = &[
    ("repositories.movie.update_title", "failed to update movie title"),
    ("repositories.movie.update_description", "failed to update movie description"),
    ("repositories.movie.update_release_date", "failed to update movie release date"),
    ("repositories.movie.update_rating", "failed to update movie rating"),
];

/// `/movie/save`
pub fn save_movie(state: &AppState, body: &str) -> CommandResult {
    let dto: SaveMovieDto = decode(body)?;

    let movie_id = state
        .movie_service
        .save_movie(dto.into())
        .map_err(fail("failed to save movie"))?;

    log::info!("movie saved: movie_id={}", movie_id);
    respond(MovieIdPayload { movie_id })
}

/// `/movie/update`
pub fn update_movie(state: &AppState, body: &str) -> CommandResult {
    let dto: UpdateMovieDto = decode(body)?;
    let movie_id = dto.movie_id;

    state
        .movie_service
        .update_movie(dto.into())
        .map_err(|error| update_failure(error, UPDATE_PHRASES, "failed to update movie"))?;

    log::info!("movie updated: movie_id={}", movie_id);
    Ok(ApiResponse::ok())
}

/// `/movie/delete`
pub fn delete_movie(state: &AppState, body: &str) -> CommandResult {
    let dto: MovieIdDto = decode(body)?;

    state
        .movie_service
        .delete_movie(dto.movie_id)
        .map_err(fail("failed to delete movie"))?;

    log::info!("movie deleted: movie_id={}", dto.movie_id);
    Ok(ApiResponse::ok())
}

/// `/movie/search_by_id`
pub fn search_movie_by_id(state: &AppState, body: &str) -> CommandResult {
    let dto: MovieIdDto = decode(body)?;

    let movie = state
        .movie_service
        .get_movie(dto.movie_id)
        .map_err(fail("movie search failed"))?;

    log::info!("movie found: movie_id={}", dto.movie_id);
    respond(MoviePayload {
        movie: movie.into(),
    })
}

/// `/movie/all`. `sort_by` must name a known ordering; an empty or missing
/// value is rejected like any other unknown one.
pub fn all_movies(state: &AppState, body: &str) -> CommandResult {
    let dto: SortMoviesDto = decode(body)?;

    if MovieSortKey::from_literal(&dto.sort_by).is_none() {
        return Err(fail("movies search failed")(
            DomainError::InvalidField("sort_by").into(),
        ));
    }

    let movies = state
        .movie_service
        .list_movies(&dto.sort_by)
        .map_err(fail("movies search failed"))?;

    log::info!("movies found: movies_count={}", movies.len());
    respond(MoviesPayload {
        movies: movies.into_iter().map(MovieDto::from).collect(),
    })
}

/// `/movie/search_by_part`
pub fn search_movies_by_part(state: &AppState, body: &str) -> CommandResult {
    let dto: SearchMoviesDto = decode(body)?;

    let movies = state
        .movie_service
        .search_movies(&dto.part)
        .map_err(fail("movies search failed"))?;

    log::info!("movies found: movie_count={}", movies.len());
    respond(MoviesPayload {
        movies: movies.into_iter().map(MovieDto::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::test_support::{state, unwrap_either};
    use crate::application::commands::{save_actor, Handler};
    use serde_json::{json, Value};

    fn call(state: &AppState, handler: Handler, body: Value) -> Value {
        let response = unwrap_either(handler(state, &body.to_string()));
        serde_json::to_value(response).unwrap()
    }

    fn titles(response: &Value) -> Vec<String> {
        response["movies"]
            .as_array()
            .unwrap()
            .iter()
            .map(|movie| movie["title"].as_str().unwrap().to_string())
            .collect()
    }

    fn seed(state: &AppState) {
        for (title, rating) in [("Heat", 8), ("Alien", 9), ("Ronin", 7)] {
            let response = call(
                state,
                save_movie,
                json!({
                    "title": title,
                    "description": "",
                    "release_date": "1995-01-01",
                    "rating": rating,
                    "actors_ids": []
                }),
            );
            assert_eq!(response["status"], "OK");
        }
    }

    #[test]
    fn test_save_then_search_by_id() {
        let state = state();
        call(
            &state,
            save_actor,
            json!({"name": "Ada", "gender": "female", "birthdate": "1980-01-01"}),
        );

        let saved = call(
            &state,
            save_movie,
            json!({
                "title": "Heat",
                "description": "Crime drama",
                "release_date": "1995-12-15",
                "rating": 8,
                "actors_ids": [1]
            }),
        );
        assert_eq!(saved, json!({"status": "OK", "movie_id": 1}));

        let found = call(&state, search_movie_by_id, json!({"movie_id": 1}));
        assert_eq!(
            found["movie"],
            json!({
                "movie_id": 1,
                "title": "Heat",
                "description": "Crime drama",
                "release_date": "1995-12-15",
                "rating": 8,
                "actors": [1]
            })
        );
    }

    #[test]
    fn test_save_with_missing_actor_fails_whole() {
        let state = state();

        let response = call(
            &state,
            save_movie,
            json!({
                "title": "Heat",
                "description": "",
                "release_date": "1995-12-15",
                "rating": 8,
                "actors_ids": [77]
            }),
        );
        assert_eq!(response, json!({"status": "Error", "error": "failed to save movie"}));

        let all = call(&state, all_movies, json!({"sort_by": "title_asc"}));
        assert_eq!(all["movies"], json!([]));
    }

    #[test]
    fn test_sort_by_checks() {
        let state = state();
        seed(&state);

        let response = call(&state, all_movies, json!({"sort_by": "title_asc"}));
        assert_eq!(titles(&response), vec!["Alien", "Heat", "Ronin"]);

        let response = call(&state, all_movies, json!({"sort_by": "rating_desc"}));
        assert_eq!(titles(&response), vec!["Alien", "Heat", "Ronin"]);

        let invalid = json!({"status": "Error", "error": "field sort_by is not valid"});
        assert_eq!(call(&state, all_movies, json!({"sort_by": "bogus"})), invalid);
        assert_eq!(call(&state, all_movies, json!({"sort_by": ""})), invalid);
        assert_eq!(call(&state, all_movies, json!({})), invalid);
    }

    #[test]
    fn test_search_by_part() {
        let state = state();
        seed(&state);

        let response = call(&state, search_movies_by_part, json!({"part": "on"}));
        assert_eq!(titles(&response), vec!["Ronin"]);

        let response = call(&state, search_movies_by_part, json!({"part": "ON"}));
        assert_eq!(response["movies"], json!([]));
    }

    #[test]
    fn test_update_and_delete() {
        let state = state();
        seed(&state);

        let response = call(&state, update_movie, json!({"movie_id": 1, "rating": 11}));
        assert_eq!(response["error"], "field rating is not valid");

        let response = call(&state, update_movie, json!({"movie_id": 1, "title": "Heat (1995)"}));
        assert_eq!(response, json!({"status": "OK"}));

        let response = call(&state, delete_movie, json!({"movie_id": 1}));
        assert_eq!(response, json!({"status": "OK"}));

        let response = call(&state, search_movie_by_id, json!({"movie_id": 1}));
        assert_eq!(response["error"], "movie search failed");
    }
}
