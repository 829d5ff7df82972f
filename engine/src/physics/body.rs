//! Rigid body records and identifiers.
//!
//! Every simulated object is a [`RigidBody`] owned by the
//! [`PhysicsWorld`](crate::physics::PhysicsWorld) registry. Other systems
//! hold [`BodyId`] handles only; positions and velocities are read back
//! through the world, never through shared references.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Stable handle into the physics world's body registry.
///
/// Ids are allocated monotonically and never reused within a world's
/// lifetime, so a stale handle can be detected instead of silently
/// resolving to a different body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u64);

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Collision shape of a rigid body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyShape {
    /// Axis-aligned box with the given half extents (meters).
    Cuboid { half_extents: Vec3 },
    /// Sphere with the given radius (meters).
    Sphere { radius: f32 },
    /// Upright capsule: `radius` around a vertical segment of `height`
    /// (total height = `height + 2 * radius`). Used by the player.
    Capsule { radius: f32, height: f32 },
}

impl BodyShape {
    /// Half extents of the shape's axis-aligned bounding box.
    pub fn aabb_half_extents(&self) -> Vec3 {
        match *self {
            BodyShape::Cuboid { half_extents } => half_extents,
            BodyShape::Sphere { radius } => Vec3::splat(radius),
            BodyShape::Capsule { radius, height } => {
                Vec3::new(radius, height * 0.5 + radius, radius)
            }
        }
    }
}

/// Per-body simulation state for the player character.
///
/// The character is driven by an intent (walk vector + jump) rather than
/// by impulses; see [`PhysicsWorld::set_walk_vector`](crate::physics::PhysicsWorld::set_walk_vector).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CharacterState {
    /// Horizontal walk velocity intent (m/s), recomputed every frame by
    /// the character controller. The Y component is ignored; vertical
    /// motion comes solely from gravity and jumping.
    pub walk: Vec3,
    /// Current vertical velocity (m/s, positive = upward).
    pub vertical_velocity: f32,
    /// Whether the character found support during the last step.
    pub grounded: bool,
}

/// How a body participates in the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyKind {
    /// Immovable collider (floor, platform). Mass is zero.
    Static,
    /// Fully simulated body (bricks, target, projectiles).
    Dynamic,
    /// Intent-driven character capsule (the player).
    Character(CharacterState),
}

/// A physics-simulated object: shape, mass, transform, and velocities.
#[derive(Debug, Clone)]
pub struct RigidBody {
    pub shape: BodyShape,
    /// Mass in kilograms. Zero for static bodies.
    pub mass: f32,
    /// World-space center position (meters).
    pub position: Vec3,
    /// World-space orientation.
    pub orientation: Quat,
    /// Linear velocity (m/s).
    pub velocity: Vec3,
    /// Angular velocity (rad/s), used for debris tumble on impact.
    pub angular_velocity: Vec3,
    pub kind: BodyKind,
}

impl RigidBody {
    /// Create a static (immovable) collider. Mass is fixed at zero.
    pub fn fixed(shape: BodyShape, position: Vec3) -> Self {
        Self {
            shape,
            mass: 0.0,
            position,
            orientation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            kind: BodyKind::Static,
        }
    }

    /// Create a dynamic body at rest.
    pub fn dynamic(shape: BodyShape, mass: f32, position: Vec3) -> Self {
        debug_assert!(mass > 0.0, "dynamic body requires positive mass");
        Self {
            shape,
            mass,
            position,
            orientation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            kind: BodyKind::Dynamic,
        }
    }

    /// Create a dynamic body with an initial launch velocity (projectiles).
    pub fn launched(shape: BodyShape, mass: f32, position: Vec3, velocity: Vec3) -> Self {
        let mut body = Self::dynamic(shape, mass, position);
        body.velocity = velocity;
        body
    }

    /// Create the player character capsule.
    pub fn character(radius: f32, height: f32, mass: f32, position: Vec3) -> Self {
        Self {
            shape: BodyShape::Capsule { radius, height },
            mass,
            position,
            orientation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            kind: BodyKind::Character(CharacterState::default()),
        }
    }

    /// Inverse mass for impulse exchange. Statics and the character return
    /// zero: neither is pushed around by collision impulses.
    pub fn inv_mass(&self) -> f32 {
        match self.kind {
            BodyKind::Dynamic => 1.0 / self.mass,
            BodyKind::Static | BodyKind::Character(_) => 0.0,
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self.kind, BodyKind::Static)
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self.kind, BodyKind::Dynamic)
    }

    /// AABB min corner at the current position.
    pub fn aabb_min(&self) -> Vec3 {
        self.position - self.shape.aabb_half_extents()
    }

    /// AABB max corner at the current position.
    pub fn aabb_max(&self) -> Vec3 {
        self.position + self.shape.aabb_half_extents()
    }
}
