//! Physics World
//!
//! Owns the registry of every rigid body and advances the whole
//! simulation one step at a time. All positions and velocities live
//! here; other systems submit intents (walk vectors, jump impulses,
//! launch velocities at spawn) and read results back by [`BodyId`].
//!
//! Querying an id that was never registered (or already removed) is a
//! programming-contract violation and panics; there is no silent
//! default position to hand back.

use std::collections::BTreeMap;

use glam::{Quat, Vec3};

use crate::physics::body::{BodyId, BodyKind, BodyShape, RigidBody};
use crate::physics::collision::{
    Contact, capsule_cuboid_hit, cuboid_cuboid_contact, sphere_cuboid_contact,
    sphere_sphere_contact,
};

/// Gravity acceleration applied to dynamic bodies (m/s²).
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);

/// Gravity acceleration applied to character bodies (m/s²). The
/// character falls harder than free bodies so movement stays snappy.
pub const CHARACTER_GRAVITY: f32 = 30.0;

/// Terminal fall speed for characters (m/s).
pub const MAX_FALL_SPEED: f32 = 30.0;

/// Bounce retained on impact (0 = dead stop, 1 = perfect bounce).
const RESTITUTION: f32 = 0.1;

/// Fraction of remaining penetration corrected per step between two
/// dynamic bodies.
const CORRECTION_FACTOR: f32 = 0.8;

/// Penetration below this depth is left alone to avoid contact jitter
/// in resting stacks (the wall is a 10-course stack of touching bricks).
const PENETRATION_SLOP: f32 = 0.005;

/// Horizontal velocity retained after a resting contact on a top face.
const CONTACT_FRICTION: f32 = 0.9;

/// Angular velocity retained per integration step.
const ANGULAR_DAMPING: f32 = 0.98;

/// Scale of the tumble imparted by an off-axis impact.
const SPIN_FACTOR: f32 = 0.25;

/// Step clamp bounds, matching the movement controller's protection
/// against runaway frame times.
const MIN_STEP: f32 = 0.0001;
const MAX_STEP: f32 = 0.1;

/// Coarse body class used to dispatch contact resolution.
#[derive(Clone, Copy, PartialEq, Eq)]
enum BodyClass {
    Static,
    Dynamic,
    Character,
}

fn class_of(body: &RigidBody) -> BodyClass {
    match body.kind {
        BodyKind::Static => BodyClass::Static,
        BodyKind::Dynamic => BodyClass::Dynamic,
        BodyKind::Character(_) => BodyClass::Character,
    }
}

/// The rigid-body registry and stepper.
///
/// Bodies are keyed by monotonically allocated [`BodyId`]s in a
/// `BTreeMap`, so iteration (and therefore contact resolution) runs in
/// a deterministic order: identical inputs with a fixed time step
/// reproduce identical trajectories.
pub struct PhysicsWorld {
    bodies: BTreeMap<BodyId, RigidBody>,
    next_id: u64,
    gravity: Vec3,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    /// Create an empty world with the standard gravity.
    pub fn new() -> Self {
        Self {
            bodies: BTreeMap::new(),
            next_id: 0,
            gravity: GRAVITY,
        }
    }

    /// Create an empty world with custom gravity.
    pub fn with_gravity(gravity: Vec3) -> Self {
        Self {
            bodies: BTreeMap::new(),
            next_id: 0,
            gravity,
        }
    }

    /// Register a body and return its stable handle.
    pub fn add_body(&mut self, body: RigidBody) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.insert(id, body);
        id
    }

    /// Deregister a body, returning its final state.
    ///
    /// # Panics
    /// Panics if `id` is not registered.
    pub fn remove_body(&mut self, id: BodyId) -> RigidBody {
        self.bodies
            .remove(&id)
            .unwrap_or_else(|| panic!("body {id} is not registered in the physics world"))
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.bodies.contains_key(&id)
    }

    /// Number of registered bodies.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Iterate all bodies in id order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &RigidBody)> {
        self.bodies.iter().map(|(id, body)| (*id, body))
    }

    /// Borrow a body.
    ///
    /// # Panics
    /// Panics if `id` is not registered.
    pub fn body(&self, id: BodyId) -> &RigidBody {
        self.bodies
            .get(&id)
            .unwrap_or_else(|| panic!("body {id} is not registered in the physics world"))
    }

    /// Mutably borrow a body.
    ///
    /// # Panics
    /// Panics if `id` is not registered.
    pub fn body_mut(&mut self, id: BodyId) -> &mut RigidBody {
        self.bodies
            .get_mut(&id)
            .unwrap_or_else(|| panic!("body {id} is not registered in the physics world"))
    }

    /// Current world-space position of a body.
    ///
    /// # Panics
    /// Panics if `id` is not registered.
    pub fn position(&self, id: BodyId) -> Vec3 {
        self.body(id).position
    }

    /// Submit the character's walk intent for the next step. Only the
    /// horizontal components are used; vertical motion comes from
    /// gravity and jumping.
    ///
    /// # Panics
    /// Panics if `id` is not registered or not a character body.
    pub fn set_walk_vector(&mut self, id: BodyId, walk: Vec3) {
        match self.body_mut(id).kind {
            BodyKind::Character(ref mut state) => state.walk = walk,
            _ => panic!("body {id} is not a character body"),
        }
    }

    /// Apply a one-shot jump impulse to a character. The impulse only
    /// takes effect while the character has ground support; an airborne
    /// jump request is ignored. Returns whether the jump happened.
    ///
    /// # Panics
    /// Panics if `id` is not registered or not a character body.
    pub fn jump(&mut self, id: BodyId, impulse: Vec3) -> bool {
        match self.body_mut(id).kind {
            BodyKind::Character(ref mut state) => {
                if state.grounded {
                    state.vertical_velocity = impulse.y;
                    state.grounded = false;
                    true
                } else {
                    false
                }
            }
            _ => panic!("body {id} is not a character body"),
        }
    }

    /// Whether a character body found ground support during the last step.
    ///
    /// # Panics
    /// Panics if `id` is not registered or not a character body.
    pub fn is_grounded(&self, id: BodyId) -> bool {
        match self.body(id).kind {
            BodyKind::Character(state) => state.grounded,
            _ => panic!("body {id} is not a character body"),
        }
    }

    /// Advance the whole simulation by `dt` seconds: integrate gravity
    /// and velocities, then resolve every contact pair.
    pub fn step(&mut self, dt: f32) {
        let dt = dt.clamp(MIN_STEP, MAX_STEP);

        // Work on a flat, id-ordered list so contact pairs can borrow
        // two bodies at once.
        let mut entries: Vec<(BodyId, RigidBody)> =
            std::mem::take(&mut self.bodies).into_iter().collect();

        for (_, body) in entries.iter_mut() {
            self.integrate(body, dt);
        }

        for i in 0..entries.len() {
            for j in (i + 1)..entries.len() {
                let (head, tail) = entries.split_at_mut(j);
                Self::resolve_pair(&mut head[i].1, &mut tail[0].1, dt);
            }
        }

        self.bodies = entries.into_iter().collect();
    }

    fn integrate(&self, body: &mut RigidBody, dt: f32) {
        match body.kind {
            BodyKind::Static => {}
            BodyKind::Dynamic => {
                body.velocity += self.gravity * dt;
                body.position += body.velocity * dt;
                if body.angular_velocity.length_squared() > 1e-8 {
                    body.orientation =
                        Quat::from_scaled_axis(body.angular_velocity * dt) * body.orientation;
                    body.angular_velocity *= ANGULAR_DAMPING;
                }
            }
            BodyKind::Character(ref mut state) => {
                state.vertical_velocity -= CHARACTER_GRAVITY * dt;
                state.vertical_velocity = state.vertical_velocity.max(-MAX_FALL_SPEED);
                let walk = Vec3::new(state.walk.x, 0.0, state.walk.z);
                body.position += walk * dt;
                body.position.y += state.vertical_velocity * dt;
                body.velocity = Vec3::new(walk.x, state.vertical_velocity, walk.z);
                // Re-established by contact resolution each step.
                state.grounded = false;
            }
        }
    }

    fn resolve_pair(a: &mut RigidBody, b: &mut RigidBody, dt: f32) {
        match (class_of(a), class_of(b)) {
            (BodyClass::Static, BodyClass::Static) => {}
            (BodyClass::Character, BodyClass::Character) => {}
            (BodyClass::Character, _) => Self::resolve_character(a, b, dt),
            (_, BodyClass::Character) => Self::resolve_character(b, a, dt),
            (BodyClass::Dynamic, BodyClass::Static) => Self::resolve_dynamic_static(a, b),
            (BodyClass::Static, BodyClass::Dynamic) => Self::resolve_dynamic_static(b, a),
            (BodyClass::Dynamic, BodyClass::Dynamic) => Self::resolve_dynamic_pair(a, b),
        }
    }

    /// Contact between a dynamic body and an immovable collider: the
    /// dynamic body is pushed fully out and loses its inward velocity
    /// component (with a small bounce and top-face friction).
    fn resolve_dynamic_static(dynamic: &mut RigidBody, fixed: &RigidBody) {
        let BodyShape::Cuboid {
            half_extents: fixed_half,
        } = fixed.shape
        else {
            return;
        };

        // Contact normal pointing from the static collider toward the
        // dynamic body.
        let contact = match dynamic.shape {
            BodyShape::Sphere { radius } => {
                sphere_cuboid_contact(dynamic.position, radius, fixed.position, fixed_half)
            }
            BodyShape::Cuboid { half_extents } => {
                cuboid_cuboid_contact(fixed.position, fixed_half, dynamic.position, half_extents)
            }
            BodyShape::Capsule { .. } => None,
        };
        let Some(Contact {
            normal,
            penetration,
        }) = contact
        else {
            return;
        };

        dynamic.position += normal * penetration;

        let inward = dynamic.velocity.dot(normal);
        if inward < 0.0 {
            dynamic.velocity -= normal * inward * (1.0 + RESTITUTION);
            if normal.y > 0.7 {
                // Resting on a top face: surface friction.
                dynamic.velocity.x *= CONTACT_FRICTION;
                dynamic.velocity.z *= CONTACT_FRICTION;
                dynamic.angular_velocity *= CONTACT_FRICTION;
            }
        }
    }

    /// Contact between two dynamic bodies: impulse exchange along the
    /// contact normal plus mass-weighted positional correction, with an
    /// off-axis tumble so struck bricks topple rather than slide.
    fn resolve_dynamic_pair(a: &mut RigidBody, b: &mut RigidBody) {
        // Normal pointing from `a` toward `b`.
        let contact = match (a.shape, b.shape) {
            (BodyShape::Sphere { radius: ra }, BodyShape::Sphere { radius: rb }) => {
                sphere_sphere_contact(a.position, ra, b.position, rb)
            }
            (BodyShape::Sphere { radius }, BodyShape::Cuboid { half_extents }) => {
                sphere_cuboid_contact(a.position, radius, b.position, half_extents)
                    .map(|c| Contact {
                        normal: -c.normal,
                        penetration: c.penetration,
                    })
            }
            (BodyShape::Cuboid { half_extents }, BodyShape::Sphere { radius }) => {
                sphere_cuboid_contact(b.position, radius, a.position, half_extents)
            }
            (
                BodyShape::Cuboid {
                    half_extents: a_half,
                },
                BodyShape::Cuboid {
                    half_extents: b_half,
                },
            ) => cuboid_cuboid_contact(a.position, a_half, b.position, b_half),
            _ => None,
        };
        let Some(Contact {
            normal,
            penetration,
        }) = contact
        else {
            return;
        };

        let inv_a = a.inv_mass();
        let inv_b = b.inv_mass();
        let inv_sum = inv_a + inv_b;
        if inv_sum <= 0.0 {
            return;
        }

        // Positional correction, split by inverse mass.
        let depth = (penetration - PENETRATION_SLOP).max(0.0);
        let correction = normal * (CORRECTION_FACTOR * depth / inv_sum);
        a.position -= correction * inv_a;
        b.position += correction * inv_b;

        // Impulse along the normal for approaching bodies.
        let rel_vel = b.velocity - a.velocity;
        let approaching = rel_vel.dot(normal);
        if approaching < 0.0 {
            let j = -(1.0 + RESTITUTION) * approaching / inv_sum;
            let impulse = normal * j;
            a.velocity -= impulse * inv_a;
            b.velocity += impulse * inv_b;

            // Impact tumble from the tangential part of the hit.
            let spin = normal.cross(rel_vel) * SPIN_FACTOR;
            a.angular_velocity -= spin * (inv_a * a.mass.min(1.0));
            b.angular_velocity += spin * (inv_b * b.mass.min(1.0));
        }
    }

    /// Contact between the character capsule and any cuboid. The
    /// capsule is grounded on top faces and pushed out of side overlap;
    /// the other body is never affected (the character has no impulse
    /// mass).
    fn resolve_character(character: &mut RigidBody, other: &RigidBody, dt: f32) {
        let BodyShape::Capsule { radius, height } = character.shape else {
            return;
        };
        let BodyShape::Cuboid {
            half_extents: other_half,
        } = other.shape
        else {
            return;
        };
        let BodyKind::Character(state) = character.kind else {
            return;
        };

        let feet = character.position;
        let top_y = feet.y + height + 2.0 * radius;
        // Allow the snap to cover the distance fallen this step so a
        // fast fall cannot pass through a thin platform.
        let ground_snap = (-state.vertical_velocity * dt).max(0.0) + 0.05;

        let hit = capsule_cuboid_hit(feet, top_y, radius, other.position, other_half, ground_snap);

        if hit.grounded && state.vertical_velocity <= 0.0 {
            if let Some(ground_y) = hit.ground_y {
                character.position.y = ground_y;
            }
            if let BodyKind::Character(ref mut st) = character.kind {
                st.vertical_velocity = 0.0;
                st.grounded = true;
            }
        } else if hit.push != Vec3::ZERO {
            character.position += hit.push;
        }
    }
}
