// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs mirror the JSON wire names exactly
// - Missing request fields decode to their zero value, validation happens in services
// - Dates travel as YYYY-MM-DD strings
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{Actor, Credentials, Movie};
use crate::services::{
    ActorLinksRequest, SaveActorRequest, SaveMovieRequest, UpdateActorRequest, UpdateMovieRequest,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// USER DTOs
// ============================================================================

#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsDto {
    pub username: String,
    pub password: String,
}

// Request bodies are logged; keep the password out of them.
impl std::fmt::Debug for CredentialsDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsDto")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl From<CredentialsDto> for Credentials {
    fn from(dto: CredentialsDto) -> Self {
        Credentials::new(dto.username, dto.password)
    }
}

// ============================================================================
// ACTOR DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorDto {
    pub actor_id: i64,
    pub name: String,
    pub gender: String,
    pub birthdate: String,
    pub movies: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveActorDto {
    pub name: String,
    pub gender: String,
    pub birthdate: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateActorDto {
    pub actor_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorIdDto {
    pub actor_id: i64,
}

// ============================================================================
// MOVIE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDto {
    pub movie_id: i64,
    pub title: String,
    pub description: String,
    pub release_date: String,
    pub rating: i64,
    pub actors: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveMovieDto {
    pub title: String,
    pub description: String,
    pub release_date: String,
    pub rating: i64,
    pub actors_ids: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateMovieDto {
    pub movie_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieIdDto {
    pub movie_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortMoviesDto {
    pub sort_by: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchMoviesDto {
    pub part: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorLinksDto {
    pub movie_id: i64,
    pub actors_ids: Vec<i64>,
}

// ============================================================================
// RESPONSE PAYLOADS
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UserIdPayload {
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActorIdPayload {
    pub actor_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActorPayload {
    pub actor: ActorDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActorsPayload {
    pub actors: Vec<ActorDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MovieIdPayload {
    pub movie_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoviePayload {
    pub movie: MovieDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoviesPayload {
    pub movies: Vec<MovieDto>,
}

// ============================================================================
// RESPONSE ENVELOPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    Error,
}

/// Uniform reply: `status`, an optional `error` and the payload fields
/// flattened alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            error: None,
            payload: Map::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: Some(message.into()),
            payload: Map::new(),
        }
    }

    /// Successful reply carrying the fields of `payload`.
    pub fn with_payload<T: Serialize>(payload: &T) -> serde_json::Result<Self> {
        let fields = match serde_json::to_value(payload)? {
            Value::Object(fields) => fields,
            other => {
                let mut fields = Map::new();
                fields.insert("data".to_string(), other);
                fields
            }
        };

        Ok(Self {
            status: Status::Ok,
            error: None,
            payload: fields,
        })
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

// ============================================================================
// CONVERSION HELPERS (Domain → DTO)
// ============================================================================

impl From<Actor> for ActorDto {
    fn from(actor: Actor) -> Self {
        Self {
            actor_id: actor.id,
            name: actor.name,
            gender: actor.gender.to_string(),
            birthdate: actor.birthdate.format(DATE_FORMAT).to_string(),
            movies: actor.movies,
        }
    }
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        Self {
            movie_id: movie.id,
            title: movie.title,
            description: movie.description,
            release_date: movie.release_date.format(DATE_FORMAT).to_string(),
            rating: movie.rating.into(),
            actors: movie.actors,
        }
    }
}

// ============================================================================
// CONVERSION HELPERS (DTO → service requests)
// ============================================================================

impl From<SaveActorDto> for SaveActorRequest {
    fn from(dto: SaveActorDto) -> Self {
        Self {
            name: dto.name,
            gender: dto.gender,
            birthdate: dto.birthdate,
        }
    }
}

impl From<UpdateActorDto> for UpdateActorRequest {
    fn from(dto: UpdateActorDto) -> Self {
        Self {
            actor_id: dto.actor_id,
            name: dto.name,
            gender: dto.gender,
            birthdate: dto.birthdate,
        }
    }
}

impl From<SaveMovieDto> for SaveMovieRequest {
    fn from(dto: SaveMovieDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            release_date: dto.release_date,
            rating: dto.rating,
            actor_ids: dto.actors_ids,
        }
    }
}

impl From<UpdateMovieDto> for UpdateMovieRequest {
    fn from(dto: UpdateMovieDto) -> Self {
        Self {
            movie_id: dto.movie_id,
            title: dto.title,
            description: dto.description,
            release_date: dto.release_date,
            rating: dto.rating,
        }
    }
}

impl From<ActorLinksDto> for ActorLinksRequest {
    fn from(dto: ActorLinksDto) -> Self {
        Self {
            movie_id: dto.movie_id,
            actor_ids: dto.actors_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gender, Rating};
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_error_envelope_shape() {
        let value = serde_json::to_value(ApiResponse::error("unknown route")).unwrap();
        assert_eq!(value, json!({"status": "Error", "error": "unknown route"}));
    }

    #[test]
    fn test_payload_is_flattened() {
        let response = ApiResponse::with_payload(&MovieIdPayload { movie_id: 3 }).unwrap();
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"status": "OK", "movie_id": 3}));
    }

    #[test]
    fn test_movie_wire_names() {
        let movie = Movie {
            id: 1,
            title: "Heat".to_string(),
            description: String::new(),
            release_date: NaiveDate::from_ymd_opt(1995, 12, 15).unwrap(),
            rating: Rating::try_from(8).unwrap(),
            actors: Vec::new(),
        };

        let value = serde_json::to_value(MovieDto::from(movie)).unwrap();
        assert_eq!(
            value,
            json!({
                "movie_id": 1,
                "title": "Heat",
                "description": "",
                "release_date": "1995-12-15",
                "rating": 8,
                "actors": []
            })
        );
    }

    #[test]
    fn test_actor_birthdate_is_plain_date() {
        let actor = Actor {
            id: 2,
            name: "Ada".to_string(),
            gender: Gender::Female,
            birthdate: NaiveDate::from_ymd_opt(1975, 3, 2).unwrap(),
            movies: vec![4],
        };

        let dto = ActorDto::from(actor);
        assert_eq!(dto.birthdate, "1975-03-02");
        assert_eq!(dto.gender, "female");
    }

    #[test]
    fn test_missing_fields_decode_to_defaults() {
        let dto: UpdateMovieDto = serde_json::from_str(r#"{"movie_id": 5}"#).unwrap();
        assert_eq!(dto.movie_id, 5);
        assert!(dto.title.is_none());
        assert!(dto.rating.is_none());

        let dto: SaveMovieDto = serde_json::from_str("{}").unwrap();
        assert!(dto.actors_ids.is_empty());
    }
}
