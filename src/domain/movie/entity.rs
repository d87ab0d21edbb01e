use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A film with its cast expressed as actor identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Store-generated identifier, never reused
    pub id: i64,

    pub title: String,

    /// May be empty
    pub description: String,

    pub release_date: NaiveDate,

    pub rating: Rating,

    /// Linked actors (duplicates possible)
    pub actors: Vec<i64>,
}

/// Field values for a movie that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub rating: Rating,
}

/// Rating on the inclusive 0..=10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 10;

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(DomainError::InvalidField("rating"));
        }
        Ok(Rating(value as u8))
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        i64::from(rating.0)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert_eq!(Rating::try_from(0).unwrap().value(), 0);
        assert_eq!(Rating::try_from(10).unwrap().value(), 10);
        assert!(Rating::try_from(-1).is_err());
        assert!(Rating::try_from(11).is_err());
    }

    #[test]
    fn test_rating_serializes_as_integer() {
        let rating = Rating::try_from(7).unwrap();
        assert_eq!(serde_json::to_string(&rating).unwrap(), "7");
        assert!(serde_json::from_str::<Rating>("12").is_err());
    }
}
