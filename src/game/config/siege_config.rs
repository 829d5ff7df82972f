//! Siege Configuration
//!
//! Centralized configuration for the whole scenario layout. Every
//! gameplay constant lives here so the scene, tests, and the demo binary
//! agree on one source; `Default` reproduces the standard round.

use glam::Vec3;

use crate::game::config::WallConfig;

/// Launch parameters for one projectile kind.
#[derive(Clone, Copy, Debug)]
pub struct ProjectileSpec {
    /// Mass in kilograms.
    pub mass: f32,
    /// Sphere radius in meters.
    pub radius: f32,
    /// Launch speed in m/s along the aim direction.
    pub speed: f32,
}

/// Central configuration for the siege range.
#[derive(Clone, Debug)]
pub struct SiegeConfig {
    /// Brick-wall layout.
    pub wall: WallConfig,

    /// Half extents shared by the two static slabs.
    pub floor_half_extents: Vec3,
    /// Center of the far floor the target stands on.
    pub floor_position: Vec3,
    /// Center of the player's platform.
    pub platform_position: Vec3,

    /// Player spawn position (capsule feet).
    pub player_start: Vec3,
    /// Player capsule radius (meters).
    pub player_radius: f32,
    /// Player capsule cylinder height (meters).
    pub player_height: f32,
    /// Player mass in kilograms (not impulse-driven, kept for the record).
    pub player_mass: f32,
    /// Camera eye height above the feet (meters).
    pub player_eye_height: f32,

    /// Inclusive bounds of the target's random horizontal placement.
    pub target_spawn_min: i32,
    pub target_spawn_max: i32,
    /// Z plane the target stands on, behind the wall.
    pub target_depth: f32,
    /// Target collider half extents.
    pub target_half_extents: Vec3,
    /// Target mass in kilograms.
    pub target_mass: f32,

    /// Heavy, ammo-consuming shot.
    pub cannonball: ProjectileSpec,
    /// Unlimited area-effect shot.
    pub fireball: ProjectileSpec,
    /// Cannonballs available per round.
    pub starting_ammo: u32,

    /// Bodies below this height have left the arena (win/lose check).
    pub fall_threshold: f32,
}

impl Default for SiegeConfig {
    fn default() -> Self {
        Self {
            wall: WallConfig::default(),

            floor_half_extents: Vec3::new(10.0, 0.1, 5.0),
            floor_position: Vec3::new(0.0, -0.1, 0.0),
            platform_position: Vec3::new(0.0, -0.1, 20.0),

            player_start: Vec3::new(0.0, 1.0, 20.0),
            player_radius: 0.5,
            player_height: 6.0,
            player_mass: 80.0,
            player_eye_height: 1.7,

            target_spawn_min: -9,
            target_spawn_max: 9,
            target_depth: 3.0,
            target_half_extents: Vec3::new(0.5, 1.0, 0.5),
            target_mass: 50.0,

            cannonball: ProjectileSpec {
                mass: 10.0,
                radius: 0.4,
                speed: 30.0,
            },
            fireball: ProjectileSpec {
                mass: 5.0,
                radius: 0.5,
                speed: 25.0,
            },
            starting_ammo: 6,

            fall_threshold: -5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_parameters() {
        let config = SiegeConfig::default();
        assert_eq!(config.starting_ammo, 6);
        assert_eq!(config.cannonball.mass, 10.0);
        assert_eq!(config.cannonball.speed, 30.0);
        assert_eq!(config.fireball.mass, 5.0);
        assert_eq!(config.fireball.speed, 25.0);
        assert_eq!(config.target_mass, 50.0);
        assert_eq!(config.fall_threshold, -5.0);
        assert_eq!((config.target_spawn_min, config.target_spawn_max), (-9, 9));
    }

    #[test]
    fn test_platforms_share_footprint() {
        let config = SiegeConfig::default();
        // Same slab reused at two depths, with the player spawning over
        // the near one.
        assert_eq!(config.floor_position.y, config.platform_position.y);
        assert!(config.player_start.z == config.platform_position.z);
    }
}
