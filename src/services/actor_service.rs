// src/services/actor_service.rs
use crate::domain::{
    parse_iso_date, validate_actor_name, validate_id, validate_new_actor, Actor, DomainError,
    Gender,
};
use crate::error::{AppError, AppResult};
use crate::repositories::ActorRepository;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SaveActorRequest {
    pub name: String,
    pub gender: String,
    pub birthdate: String,
}

/// Partial update. `None` leaves a field untouched; `Some` always sets it.
#[derive(Debug, Clone, Default)]
pub struct UpdateActorRequest {
    pub actor_id: i64,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub birthdate: Option<String>,
}

pub struct ActorService {
    actor_repo: Arc<dyn ActorRepository>,
}

impl ActorService {
    pub fn new(actor_repo: Arc<dyn ActorRepository>) -> Self {
        Self { actor_repo }
    }

    pub fn save_actor(&self, request: SaveActorRequest) -> AppResult<i64> {
        let actor = validate_new_actor(&request.name, &request.gender, &request.birthdate)?;
        self.actor_repo.save(&actor)
    }

    /// Validates every supplied field before touching storage.
    pub fn update_actor(&self, request: UpdateActorRequest) -> AppResult<()> {
        validate_id("actor_id", request.actor_id)?;

        if request.name.is_none() && request.gender.is_none() && request.birthdate.is_none() {
            return Err(DomainError::NothingToUpdate.into());
        }

        if let Some(name) = &request.name {
            validate_actor_name(name)?;
        }
        let gender = request
            .gender
            .as_deref()
            .map(str::parse::<Gender>)
            .transpose()?;
        let birthdate = request
            .birthdate
            .as_deref()
            .map(|raw| parse_iso_date("birthdate", raw))
            .transpose()?;

        if let Some(name) = &request.name {
            self.actor_repo.update_name(request.actor_id, name)?;
        }
        if let Some(gender) = gender {
            self.actor_repo.update_gender(request.actor_id, gender)?;
        }
        if let Some(birthdate) = birthdate {
            self.actor_repo.update_birthdate(request.actor_id, birthdate)?;
        }

        Ok(())
    }

    pub fn delete_actor(&self, actor_id: i64) -> AppResult<()> {
        validate_id("actor_id", actor_id)?;
        self.actor_repo.delete(actor_id)
    }

    pub fn get_actor(&self, actor_id: i64) -> AppResult<Actor> {
        validate_id("actor_id", actor_id)?;
        self.actor_repo
            .get_by_id(actor_id)?
            .ok_or(AppError::NotFound {
                entity: "actor",
                id: actor_id,
            })
    }

    pub fn list_actors(&self) -> AppResult<Vec<Actor>> {
        self.actor_repo.list_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, get_connection, initialize_database};
    use crate::repositories::{MockActorRepository, SqliteActorRepository};
    use chrono::NaiveDate;

    fn sqlite_service() -> ActorService {
        let pool = Arc::new(create_memory_pool().unwrap());
        {
            let conn = get_connection(&pool).unwrap();
            initialize_database(&conn).unwrap();
        }
        ActorService::new(Arc::new(SqliteActorRepository::new(pool)))
    }

    fn domain_message(err: AppError) -> String {
        match err.root() {
            AppError::Domain(domain) => domain.to_string(),
            other => panic!("expected a domain error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_save_never_reaches_storage() {
        let mut repo = MockActorRepository::new();
        repo.expect_save().never();
        let service = ActorService::new(Arc::new(repo));

        let err = service
            .save_actor(SaveActorRequest {
                name: "Ada".to_string(),
                gender: "robot".to_string(),
                birthdate: "1980-01-01".to_string(),
            })
            .unwrap_err();

        assert_eq!(domain_message(err), "field gender is not valid");
    }

    #[test]
    fn test_update_applies_only_supplied_fields() {
        let mut repo = MockActorRepository::new();
        repo.expect_update_name().never();
        repo.expect_update_gender()
            .withf(|id, gender| *id == 4 && *gender == Gender::Male)
            .times(1)
            .returning(|_, _| Ok(()));
        repo.expect_update_birthdate()
            .withf(|id, date| *id == 4 && *date == NaiveDate::from_ymd_opt(1990, 5, 6).unwrap())
            .times(1)
            .returning(|_, _| Ok(()));
        let service = ActorService::new(Arc::new(repo));

        service
            .update_actor(UpdateActorRequest {
                actor_id: 4,
                gender: Some("male".to_string()),
                birthdate: Some("1990-05-06".to_string()),
                ..Default::default()
            })
            .unwrap();
    }

    #[test]
    fn test_update_validates_before_writing() {
        let mut repo = MockActorRepository::new();
        repo.expect_update_name().never();
        repo.expect_update_birthdate().never();
        let service = ActorService::new(Arc::new(repo));

        let err = service
            .update_actor(UpdateActorRequest {
                actor_id: 4,
                name: Some("Valid".to_string()),
                birthdate: Some("not a date".to_string()),
                ..Default::default()
            })
            .unwrap_err();

        assert_eq!(domain_message(err), "field birthdate is not valid");
    }

    #[test]
    fn test_update_requires_a_field() {
        let service = ActorService::new(Arc::new(MockActorRepository::new()));

        let err = service
            .update_actor(UpdateActorRequest {
                actor_id: 1,
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(domain_message(err), "no fields to update");

        let err = service
            .update_actor(UpdateActorRequest {
                actor_id: 0,
                name: Some("Ada".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(domain_message(err), "field actor_id is not valid");
    }

    #[test]
    fn test_empty_name_is_validated_not_skipped() {
        let service = ActorService::new(Arc::new(MockActorRepository::new()));

        let err = service
            .update_actor(UpdateActorRequest {
                actor_id: 1,
                name: Some(String::new()),
                ..Default::default()
            })
            .unwrap_err();

        assert_eq!(domain_message(err), "field name is not valid");
    }

    #[test]
    fn test_ada_lifecycle() {
        let service = sqlite_service();

        let id = service
            .save_actor(SaveActorRequest {
                name: "Ada".to_string(),
                gender: "female".to_string(),
                birthdate: "1980-01-01".to_string(),
            })
            .unwrap();
        assert_eq!(id, 1);

        service
            .update_actor(UpdateActorRequest {
                actor_id: 1,
                gender: Some("female".to_string()),
                ..Default::default()
            })
            .unwrap();

        service.delete_actor(1).unwrap();

        let err = service.get_actor(1).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_birthdate_round_trip() {
        let service = sqlite_service();

        let id = service
            .save_actor(SaveActorRequest {
                name: "Carla".to_string(),
                gender: "female".to_string(),
                birthdate: "1975-03-02".to_string(),
            })
            .unwrap();

        let actor = service.get_actor(id).unwrap();
        assert_eq!(actor.birthdate.format("%Y-%m-%d").to_string(), "1975-03-02");
    }
}
