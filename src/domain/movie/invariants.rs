use super::entity::{NewMovie, Rating};
use crate::domain::{parse_iso_date, DomainError, DomainResult};

pub const MAX_TITLE_CHARS: usize = 150;
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

/// Validates raw movie fields and builds a storable movie
pub fn validate_new_movie(
    title: &str,
    description: &str,
    release_date: &str,
    rating: i64,
) -> DomainResult<NewMovie> {
    validate_title(title)?;
    validate_description(description)?;
    let release_date = parse_iso_date("release_date", release_date)?;
    let rating = Rating::try_from(rating)?;

    Ok(NewMovie {
        title: title.to_string(),
        description: description.to_string(),
        release_date,
        rating,
    })
}

/// Title must hold between 1 and 150 characters
pub fn validate_title(title: &str) -> DomainResult<()> {
    let length = title.chars().count();
    if length < 1 || length > MAX_TITLE_CHARS {
        return Err(DomainError::InvalidField("title"));
    }
    Ok(())
}

/// Description may be empty but not longer than 1000 characters
pub fn validate_description(description: &str) -> DomainResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(DomainError::InvalidField("description"));
    }
    Ok(())
}

/// Invariants that must hold true for Movie domain:
///
/// 1. Identity is generated by the store and immutable
/// 2. Title is 1..=150 characters, description at most 1000
/// 3. Release date is a real calendar date written as YYYY-MM-DD
/// 4. Rating stays within 0..=10
/// 5. A movie can exist without actors

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_movie() {
        let movie = validate_new_movie("Heat", "", "1995-12-15", 8).unwrap();
        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.rating.value(), 8);
        assert_eq!(movie.release_date.to_string(), "1995-12-15");
    }

    #[test]
    fn test_title_bounds() {
        assert!(validate_title("").is_err());
        assert!(validate_title(&"t".repeat(MAX_TITLE_CHARS)).is_ok());
        assert!(validate_title(&"t".repeat(MAX_TITLE_CHARS + 1)).is_err());
    }

    #[test]
    fn test_description_bounds() {
        assert!(validate_description("").is_ok());
        assert!(validate_description(&"d".repeat(MAX_DESCRIPTION_CHARS + 1)).is_err());
    }

    #[test]
    fn test_field_named_in_errors() {
        let err = validate_new_movie("Heat", "", "15.12.1995", 8).unwrap_err();
        assert_eq!(err.to_string(), "field release_date is not valid");

        let err = validate_new_movie("Heat", "", "1995-12-15", 42).unwrap_err();
        assert_eq!(err.to_string(), "field rating is not valid");
    }
}
