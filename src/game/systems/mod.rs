//! Game Systems
//!
//! The projectile subsystem and target placement, composed by the scene.

pub mod projectile_system;
pub mod target_spawner;

pub use projectile_system::{AmmoPool, ProjectileKind, ProjectileSystem};
pub use target_spawner::{TargetSpawner, choose_spawn_point};
