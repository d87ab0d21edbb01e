// src/domain/sort.rs
//
// Movie listing order
//
// The vocabulary is fixed. Anything outside it, the empty string included,
// falls back to the highest rated movies first.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieSortKey {
    TitleAsc,
    TitleDesc,
    ReleaseDateAsc,
    ReleaseDateDesc,
    RatingAsc,
    #[default]
    RatingDesc,
}

impl MovieSortKey {
    pub const ALL: [MovieSortKey; 6] = [
        MovieSortKey::TitleAsc,
        MovieSortKey::TitleDesc,
        MovieSortKey::ReleaseDateAsc,
        MovieSortKey::ReleaseDateDesc,
        MovieSortKey::RatingAsc,
        MovieSortKey::RatingDesc,
    ];

    /// Exact literal match, `None` for anything else.
    pub fn from_literal(literal: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == literal)
    }

    /// Exact literal match, falling back to `RatingDesc`.
    pub fn parse_or_default(literal: &str) -> Self {
        Self::from_literal(literal).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MovieSortKey::TitleAsc => "title_asc",
            MovieSortKey::TitleDesc => "title_desc",
            MovieSortKey::ReleaseDateAsc => "release_date_asc",
            MovieSortKey::ReleaseDateDesc => "release_date_desc",
            MovieSortKey::RatingAsc => "rating_asc",
            MovieSortKey::RatingDesc => "rating_desc",
        }
    }

    /// ORDER BY body over the `movies` table. Ties break on identity.
    pub fn order_by_clause(&self) -> &'static str {
        match self {
            MovieSortKey::TitleAsc => "title ASC, movie_id ASC",
            MovieSortKey::TitleDesc => "title DESC, movie_id ASC",
            MovieSortKey::ReleaseDateAsc => "release_date ASC, movie_id ASC",
            MovieSortKey::ReleaseDateDesc => "release_date DESC, movie_id ASC",
            MovieSortKey::RatingAsc => "rating ASC, movie_id ASC",
            MovieSortKey::RatingDesc => "rating DESC, movie_id ASC",
        }
    }
}

impl std::fmt::Display for MovieSortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_literal_round_trips() {
        for key in MovieSortKey::ALL {
            assert_eq!(MovieSortKey::from_literal(key.as_str()), Some(key));
        }
    }

    #[test]
    fn test_unknown_literals_fall_back_to_rating_desc() {
        assert_eq!(MovieSortKey::parse_or_default("bogus"), MovieSortKey::RatingDesc);
        assert_eq!(MovieSortKey::parse_or_default(""), MovieSortKey::RatingDesc);
        assert_eq!(MovieSortKey::parse_or_default("TITLE_ASC"), MovieSortKey::RatingDesc);
        assert_eq!(MovieSortKey::from_literal("bogus"), None);
    }
}
