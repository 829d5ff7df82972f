//! Game Module
//!
//! Game-specific systems composed on top of the engine: the destructible
//! wall, the ammo-gated projectile subsystem, target placement, the round
//! state machine, and the scene that wires them together each frame.

pub mod config;
pub mod hud;
pub mod input;
pub mod round;
pub mod scenes;
pub mod systems;
pub mod wall;

// Re-exports for callers that don't care about the module split
pub use config::{SiegeConfig, WallConfig};
pub use hud::HudState;
pub use input::InputEvent;
pub use round::{RoundEvent, RoundMachine, RoundState};
pub use scenes::{BodySnapshot, FrameSnapshot, SiegeScene};
pub use systems::{AmmoPool, ProjectileKind, ProjectileSystem, TargetSpawner, choose_spawn_point};
pub use wall::{BrickDescriptor, WALL_BRICK_COUNT, WALL_COLUMNS, WALL_ROWS, build_wall};
