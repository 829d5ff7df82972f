//! Physics module for the siege engine
//!
//! Custom rigid-body implementation built from scratch without external
//! physics library dependencies (no Rapier).
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//! - Mass in kg
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types (Vec3, Quat) re-exported from glam
//! - [`body`] - Rigid body records, shapes, and registry handles
//! - [`collision`] - Pure contact functions (sphere/cuboid/capsule)
//! - [`world`] - The body registry and per-frame stepper

pub mod body;
pub mod collision;
pub mod types;
pub mod world;

// Re-export commonly used types at the physics module level
pub use body::{BodyId, BodyKind, BodyShape, CharacterState, RigidBody};
pub use collision::{CapsuleHit, Contact};
pub use types::{Quat, Vec3};
pub use world::{CHARACTER_GRAVITY, GRAVITY, MAX_FALL_SPEED, PhysicsWorld};
