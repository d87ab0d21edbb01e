// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod actor;
pub mod movie;
pub mod sort;
pub mod user;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Actor Domain
pub use actor::{validate_actor_name, validate_new_actor, Actor, Gender, NewActor};

// Movie Domain
pub use movie::{validate_description, validate_new_movie, validate_title, Movie, NewMovie, Rating};

// Listing order
pub use sort::MovieSortKey;

// Users and roles
pub use user::{validate_credentials, Credentials, ROLE_ADMIN, ROLE_USER};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use chrono::NaiveDate;
use thiserror::Error;

/// Domain-level errors
/// These represent rejected input, named by the offending field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("field {0} is not valid")]
    InvalidField(&'static str),

    #[error("field {0} is required")]
    RequiredField(&'static str),

    #[error("no fields to update")]
    NothingToUpdate,
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

// ============================================================================
// SHARED FIELD RULES
// ============================================================================

/// Parse a calendar date written exactly as YYYY-MM-DD
pub fn parse_iso_date(field: &'static str, raw: &str) -> DomainResult<NaiveDate> {
    let bytes = raw.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !shaped {
        return Err(DomainError::InvalidField(field));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| DomainError::InvalidField(field))
}

/// Identifiers supplied by callers start at 1
pub fn validate_id(field: &'static str, id: i64) -> DomainResult<()> {
    if id < 1 {
        return Err(DomainError::InvalidField(field));
    }
    Ok(())
}

/// Every identifier in the list starts at 1
pub fn validate_ids(field: &'static str, ids: &[i64]) -> DomainResult<()> {
    if ids.iter().any(|id| *id < 1) {
        return Err(DomainError::InvalidField(field));
    }
    Ok(())
}
