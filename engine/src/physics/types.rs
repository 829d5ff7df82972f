//! Math type re-exports from glam
//!
//! Single import point for the vector and quaternion types used across
//! the physics system.

pub use glam::{Quat, Vec3};
