//! Brickfall Engine Library
//!
//! Gameplay core for the siege range: a first-person avatar fires
//! cannonballs at a staggered brick wall to knock a target off its
//! platform. The engine side owns the reusable pieces (rigid-body
//! physics, the character controller, the first-person camera) and the
//! `game` module composes them into a playable round.
//!
//! Rendering, asset loading, and raw device input are external
//! collaborators: the engine consumes discrete input events and exposes
//! per-frame snapshots (body transforms, ammo count, round state), and
//! nothing here touches a GPU or a window.
//!
//! # Modules
//!
//! - [`physics`] - Rigid-body registry, integration, and collision response
//! - [`player`] - Intent-driven character controller
//! - [`camera`] - First-person aim camera slaved to the player body
//! - [`game`] - Scene composition, wall builder, projectiles, round state
//!
//! # Example
//!
//! ```ignore
//! use brickfall_engine::game::config::SiegeConfig;
//! use brickfall_engine::game::input::InputEvent;
//! use brickfall_engine::game::scenes::SiegeScene;
//! use brickfall_engine::player::MoveDirection;
//! use rand::SeedableRng;
//!
//! let mut rng = rand_pcg::Pcg32::seed_from_u64(7);
//! let mut scene = SiegeScene::new(SiegeConfig::default(), &mut rng);
//!
//! // Per frame: feed events, advance, read the snapshot.
//! scene.handle_event(InputEvent::DirectionPressed(MoveDirection::Forward));
//! scene.update(1.0 / 60.0);
//! let snapshot = scene.snapshot();
//! ```

pub mod camera;
pub mod physics;
pub mod player;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used engine types at crate level for convenience
pub use camera::FirstPersonCamera;
pub use physics::{BodyId, BodyShape, PhysicsWorld, RigidBody};
pub use player::{CharacterController, MoveDirection};
