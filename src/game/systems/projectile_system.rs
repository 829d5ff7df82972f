//! Projectile lifecycle management system.
//!
//! Spawns ammo-gated cannonballs and unlimited fireballs into the
//! physics world and tracks what it spawned for the renderer's attach
//! list. Both kinds follow the same launch protocol: spawn at the aim
//! origin, take a one-time launch velocity along the aim direction, and
//! are thereafter fully governed by the simulation, with no special-cased
//! motion.

use glam::Vec3;

use crate::game::config::{ProjectileSpec, SiegeConfig};
use crate::physics::{BodyId, BodyShape, PhysicsWorld, RigidBody};

/// Projectile archetype used for gameplay behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileKind {
    /// Heavy shot; consumes one unit of the ammo pool per spawn.
    Cannonball,
    /// Light area-effect shot; free to fire.
    Fireball,
}

/// The finite counter gating cannonball spawns.
///
/// Decremented exactly once per successful take, never incremented,
/// never negative: a take at zero is refused, not saturated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmmoPool {
    remaining: u32,
}

impl AmmoPool {
    pub fn new(count: u32) -> Self {
        Self { remaining: count }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Consume one unit. Returns `false`, leaving the count untouched,
    /// once the pool is already empty. Reaching zero *by* a take is a
    /// valid outcome.
    pub fn try_take(&mut self) -> bool {
        if self.remaining == 0 {
            false
        } else {
            self.remaining -= 1;
            true
        }
    }
}

/// Manages projectile spawning and the remaining-ammo counter.
pub struct ProjectileSystem {
    ammo: AmmoPool,
    cannonball: ProjectileSpec,
    fireball: ProjectileSpec,
    /// Bodies spawned by this system, in spawn order (renderer attach list).
    spawned: Vec<BodyId>,
}

impl ProjectileSystem {
    pub fn new(config: &SiegeConfig) -> Self {
        Self {
            ammo: AmmoPool::new(config.starting_ammo),
            cannonball: config.cannonball,
            fireball: config.fireball,
            spawned: Vec::new(),
        }
    }

    /// Cannonballs left in the pool.
    pub fn ammo_remaining(&self) -> u32 {
        self.ammo.remaining()
    }

    /// Every projectile spawned so far, in spawn order.
    pub fn spawned(&self) -> &[BodyId] {
        &self.spawned
    }

    /// Spawn a projectile from the aim origin along the aim direction.
    ///
    /// A cannonball request is refused (`None`) when the pool is already
    /// empty; a successful spawn decrements the pool by exactly one,
    /// even when that empties it. Fireballs never touch the pool.
    pub fn fire(
        &mut self,
        world: &mut PhysicsWorld,
        origin: Vec3,
        direction: Vec3,
        kind: ProjectileKind,
    ) -> Option<BodyId> {
        let spec = match kind {
            ProjectileKind::Cannonball => {
                if !self.ammo.try_take() {
                    log::debug!("cannonball refused: ammo pool is empty");
                    return None;
                }
                self.cannonball
            }
            ProjectileKind::Fireball => self.fireball,
        };

        let velocity = direction.normalize_or_zero() * spec.speed;
        let id = world.add_body(RigidBody::launched(
            BodyShape::Sphere {
                radius: spec.radius,
            },
            spec.mass,
            origin,
            velocity,
        ));
        self.spawned.push(id);
        log::debug!(
            "{:?} {} launched, {} cannonball(s) left",
            kind,
            id,
            self.ammo.remaining()
        );
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (PhysicsWorld, ProjectileSystem) {
        let config = SiegeConfig::default();
        (PhysicsWorld::new(), ProjectileSystem::new(&config))
    }

    #[test]
    fn test_ammo_pool_counts_down() {
        let mut pool = AmmoPool::new(6);
        for n in 1..=6 {
            assert!(pool.try_take());
            assert_eq!(pool.remaining(), 6 - n);
        }
    }

    #[test]
    fn test_ammo_pool_refuses_at_zero() {
        let mut pool = AmmoPool::new(1);
        assert!(pool.try_take());
        assert_eq!(pool.remaining(), 0);

        // Any number of further attempts is refused with the count pinned.
        for _ in 0..10 {
            assert!(!pool.try_take());
            assert_eq!(pool.remaining(), 0);
        }
    }

    #[test]
    fn test_cannonball_spawn_consumes_ammo() {
        let (mut world, mut system) = setup();
        let id = system
            .fire(
                &mut world,
                Vec3::new(0.0, 1.7, 20.0),
                Vec3::new(0.0, 0.0, -1.0),
                ProjectileKind::Cannonball,
            )
            .expect("pool is full");

        assert_eq!(system.ammo_remaining(), 5);
        let body = world.body(id);
        assert_eq!(body.mass, 10.0);
        assert_eq!(body.velocity, Vec3::new(0.0, 0.0, -30.0));
        assert_eq!(body.position, Vec3::new(0.0, 1.7, 20.0));
    }

    #[test]
    fn test_fireball_is_free() {
        let (mut world, mut system) = setup();
        for _ in 0..20 {
            let id = system
                .fire(
                    &mut world,
                    Vec3::ZERO,
                    Vec3::new(0.0, 0.0, -1.0),
                    ProjectileKind::Fireball,
                )
                .expect("fireballs are unlimited");
            assert_eq!(world.body(id).mass, 5.0);
        }
        assert_eq!(system.ammo_remaining(), 6);
    }

    #[test]
    fn test_fireball_launch_speed() {
        let (mut world, mut system) = setup();
        let id = system
            .fire(
                &mut world,
                Vec3::ZERO,
                Vec3::new(0.0, 0.0, -2.0),
                ProjectileKind::Fireball,
            )
            .unwrap();
        // Direction is normalized before scaling.
        assert_eq!(world.body(id).velocity, Vec3::new(0.0, 0.0, -25.0));
    }

    #[test]
    fn test_spawn_refused_once_empty() {
        let (mut world, mut system) = setup();
        for _ in 0..6 {
            assert!(
                system
                    .fire(
                        &mut world,
                        Vec3::ZERO,
                        Vec3::NEG_Z,
                        ProjectileKind::Cannonball
                    )
                    .is_some()
            );
        }
        assert_eq!(system.ammo_remaining(), 0);

        let before = world.body_count();
        assert!(
            system
                .fire(
                    &mut world,
                    Vec3::ZERO,
                    Vec3::NEG_Z,
                    ProjectileKind::Cannonball
                )
                .is_none()
        );
        assert_eq!(system.ammo_remaining(), 0);
        assert_eq!(world.body_count(), before, "a refused spawn adds no body");
    }

    #[test]
    fn test_attach_list_records_spawn_order() {
        let (mut world, mut system) = setup();
        let a = system
            .fire(&mut world, Vec3::ZERO, Vec3::NEG_Z, ProjectileKind::Cannonball)
            .unwrap();
        let b = system
            .fire(&mut world, Vec3::ZERO, Vec3::NEG_Z, ProjectileKind::Fireball)
            .unwrap();
        assert_eq!(system.spawned(), &[a, b]);
    }
}
