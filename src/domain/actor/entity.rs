use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// A performer that can appear in any number of movies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Store-generated identifier, never reused
    pub id: i64,

    pub name: String,

    pub gender: Gender,

    pub birthdate: NaiveDate,

    /// Movies this actor is linked to (duplicates possible)
    pub movies: Vec<i64>,
}

/// Field values for an actor that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActor {
    pub name: String,
    pub gender: Gender,
    pub birthdate: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    /// Only the exact lowercase literals are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(DomainError::InvalidField("gender")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_literals() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert!("Female".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
        assert_eq!(Gender::Female.to_string(), "female");
    }

    #[test]
    fn test_gender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
    }
}
