//! Target placement.
//!
//! Draws one discrete spawn point along the wall's span from a
//! caller-supplied random source and registers the target as a dynamic
//! body, heavy enough to stand but free to be displaced and toppled by
//! bricks and projectiles.

use glam::Vec3;
use rand::Rng;

use crate::game::config::SiegeConfig;
use crate::physics::{BodyId, BodyShape, PhysicsWorld, RigidBody};

/// Draw one spawn offset uniformly from the closed range `[min, max]`.
///
/// The generator must never produce a value outside the configured
/// bound; that would be a defect in the draw, not a recoverable
/// condition, so it is debug-asserted rather than clamped.
pub fn choose_spawn_point<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    debug_assert!(min <= max, "spawn range is inverted: [{min}, {max}]");
    let point = rng.random_range(min..=max);
    debug_assert!(
        (min..=max).contains(&point),
        "spawn draw {point} escaped [{min}, {max}]"
    );
    point
}

/// Places the target at round start. Called exactly once per round.
pub struct TargetSpawner;

impl TargetSpawner {
    /// Draw the spawn point and register the target body.
    ///
    /// Returns the body handle and the drawn offset.
    pub fn spawn<R: Rng + ?Sized>(
        world: &mut PhysicsWorld,
        rng: &mut R,
        config: &SiegeConfig,
    ) -> (BodyId, i32) {
        let spawn_point =
            choose_spawn_point(rng, config.target_spawn_min, config.target_spawn_max);
        let position = Vec3::new(spawn_point as f32, 0.0, config.target_depth);
        let id = world.add_body(RigidBody::dynamic(
            BodyShape::Cuboid {
                half_extents: config.target_half_extents,
            },
            config.target_mass,
            position,
        ));
        log::info!("target spawned at x = {spawn_point}");
        (id, spawn_point)
    }
}
