//! Structure Builder
//!
//! Generates the destructible brick wall as a list of rigid-body
//! descriptors. A pure, deterministic generator: no randomness, no
//! registry access. The scene feeds each descriptor to the physics
//! world as a dynamic cuboid.
//!
//! The layout is coursed masonry: each row is offset by a half-brick
//! stagger relative to its neighbours so vertical joints never line up
//! between adjacent courses. A real wall staggers its joints for
//! stability; here it mainly varies how the structure collapses under
//! impact.

use glam::Vec3;
use static_assertions::const_assert_eq;

/// Courses in the wall.
pub const WALL_ROWS: usize = 10;
/// Bricks per course.
pub const WALL_COLUMNS: usize = 19;
/// Total bricks produced by [`build_wall`].
pub const WALL_BRICK_COUNT: usize = WALL_ROWS * WALL_COLUMNS;

const_assert_eq!(WALL_BRICK_COUNT, 190);

/// Brick-wall layout parameters. All brick dimensions are half extents.
#[derive(Clone, Copy, Debug)]
pub struct WallConfig {
    /// Number of courses.
    pub rows: usize,
    /// First column index (inclusive).
    pub column_start: i32,
    /// Last column index (exclusive).
    pub column_end: i32,
    /// Brick half length along X (meters).
    pub brick_length: f32,
    /// Brick half height along Y (meters).
    pub brick_height: f32,
    /// Brick half width along Z (meters).
    pub brick_width: f32,
    /// Mass of one brick (kg).
    pub brick_mass: f32,
    /// Z plane the wall is centered on.
    pub depth: f32,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            rows: WALL_ROWS,
            column_start: -9,
            column_end: 10,
            brick_length: 0.48,
            brick_height: 0.12,
            brick_width: 0.24,
            brick_mass: 2.0,
            depth: 4.0,
        }
    }
}

/// Position, half extents, and mass of one brick to register with the
/// physics world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrickDescriptor {
    pub position: Vec3,
    pub half_extents: Vec3,
    pub mass: f32,
}

/// Build the full wall layout.
///
/// For each course the horizontal start offset alternates between
/// `+brick_length/4` and `-brick_length/4`; brick centers are spaced a
/// full brick length (2 × half length) apart and courses stack at
/// 2 × half height. Identical output on every invocation.
pub fn build_wall(config: &WallConfig) -> Vec<BrickDescriptor> {
    let columns = (config.column_end - config.column_start).max(0) as usize;
    let mut bricks = Vec::with_capacity(config.rows * columns);
    let half_extents = Vec3::new(config.brick_length, config.brick_height, config.brick_width);

    let mut start = config.brick_length / 4.0;
    let mut height = 0.0;
    for _ in 0..config.rows {
        for i in config.column_start..config.column_end {
            let position = Vec3::new(
                i as f32 * config.brick_length * 2.0 + start,
                config.brick_height + height,
                config.depth,
            );
            bricks.push(BrickDescriptor {
                position,
                half_extents,
                mass: config.brick_mass,
            });
        }
        start = -start;
        height += 2.0 * config.brick_height;
    }

    bricks
}
