pub mod entity;
pub mod invariants;

pub use entity::{Movie, NewMovie, Rating};
pub use invariants::{validate_description, validate_new_movie, validate_title};
