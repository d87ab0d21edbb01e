pub mod entity;
pub mod invariants;

pub use entity::{Actor, Gender, NewActor};
pub use invariants::{validate_actor_name, validate_new_actor};
