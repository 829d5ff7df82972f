//! Player module
//!
//! Intent-driven character control for the first-person avatar.
//!
//! The controller translates held direction flags into a camera-relative
//! walk vector; the physics world owns the resulting motion.

pub mod character;

pub use character::{
    CharacterController, JUMP_IMPULSE, MoveDirection, WALK_FORWARD_SCALE, WALK_STRAFE_SCALE,
};
