use super::entity::{Gender, NewActor};
use crate::domain::{parse_iso_date, DomainError, DomainResult};

pub const MAX_NAME_CHARS: usize = 255;

/// Validates raw actor fields and builds a storable actor
pub fn validate_new_actor(name: &str, gender: &str, birthdate: &str) -> DomainResult<NewActor> {
    validate_actor_name(name)?;
    let gender = gender.parse::<Gender>()?;
    let birthdate = parse_iso_date("birthdate", birthdate)?;

    Ok(NewActor {
        name: name.to_string(),
        gender,
        birthdate,
    })
}

/// Name must hold between 1 and 255 characters
pub fn validate_actor_name(name: &str) -> DomainResult<()> {
    let length = name.chars().count();
    if length < 1 || length > MAX_NAME_CHARS {
        return Err(DomainError::InvalidField("name"));
    }
    Ok(())
}

/// Invariants that must hold true for Actor domain:
///
/// 1. Identity is generated by the store and immutable
/// 2. Name is 1..=255 characters
/// 3. Gender is exactly "male" or "female"
/// 4. Birthdate is a real calendar date written as YYYY-MM-DD
/// 5. An actor can exist without movies
