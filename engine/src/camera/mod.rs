//! Camera module
//!
//! First-person view and aim direction for the player.

pub mod first_person;

pub use first_person::{FirstPersonCamera, LOOK_SENSITIVITY};
