//! SiegeScene — high-level composition of all game systems.
//!
//! Owns the physics world, the player controller and camera, the wall,
//! the target, the projectile subsystem, and the round state machine.
//! [`update`](SiegeScene::update) is the single entry point for the
//! per-frame game logic, running the fixed order: input intent →
//! physics step → round evaluation → HUD diff. **No GPU imports** —
//! rendering consumes [`snapshot`](SiegeScene::snapshot).

use glam::{Quat, Vec3};
use rand::Rng;
use serde::Serialize;

use crate::camera::FirstPersonCamera;
use crate::game::config::SiegeConfig;
use crate::game::hud::HudState;
use crate::game::input::InputEvent;
use crate::game::round::{RoundEvent, RoundMachine, RoundState};
use crate::game::systems::{ProjectileKind, ProjectileSystem, TargetSpawner};
use crate::game::wall::build_wall;
use crate::physics::{BodyId, BodyShape, PhysicsWorld, RigidBody};
use crate::player::{CharacterController, JUMP_IMPULSE};

/// Simulation advances in fixed slices for reproducible trajectories.
const FIXED_PHYSICS_STEP_S: f32 = 1.0 / 60.0;
/// Frame-time spikes are capped at this many slices; the rest of the
/// backlog is dropped rather than spiralling.
const MAX_FIXED_STEPS_PER_FRAME: usize = 5;

/// Transform of one live body for the rendering collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub position: Vec3,
    pub orientation: Quat,
}

/// Per-frame display data: every live transform plus the HUD values.
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub bodies: Vec<BodySnapshot>,
    pub ammo_remaining: u32,
    pub round_state: RoundState,
    pub banner: Option<String>,
}

/// One complete round: world, systems, and round bookkeeping.
pub struct SiegeScene {
    pub config: SiegeConfig,
    pub world: PhysicsWorld,
    pub camera: FirstPersonCamera,

    controller: CharacterController,
    projectiles: ProjectileSystem,
    round: RoundMachine,
    hud: HudState,
    banner: Option<&'static str>,

    player_id: BodyId,
    target_id: BodyId,
    floor_id: BodyId,
    platform_id: BodyId,
    brick_ids: Vec<BodyId>,
    spawn_point: i32,

    accumulator: f32,
}

impl SiegeScene {
    /// Assemble a fresh round: both platforms, the wall, the player, and
    /// the randomly placed target. The supplied RNG is drawn from
    /// exactly once (target placement).
    pub fn new<R: Rng + ?Sized>(config: SiegeConfig, rng: &mut R) -> Self {
        let mut world = PhysicsWorld::new();

        let floor_id = world.add_body(RigidBody::fixed(
            BodyShape::Cuboid {
                half_extents: config.floor_half_extents,
            },
            config.floor_position,
        ));
        let platform_id = world.add_body(RigidBody::fixed(
            BodyShape::Cuboid {
                half_extents: config.floor_half_extents,
            },
            config.platform_position,
        ));

        let brick_ids = build_wall(&config.wall)
            .into_iter()
            .map(|brick| {
                world.add_body(RigidBody::dynamic(
                    BodyShape::Cuboid {
                        half_extents: brick.half_extents,
                    },
                    brick.mass,
                    brick.position,
                ))
            })
            .collect();

        let player_id = world.add_body(RigidBody::character(
            config.player_radius,
            config.player_height,
            config.player_mass,
            config.player_start,
        ));

        let (target_id, spawn_point) = TargetSpawner::spawn(&mut world, rng, &config);

        let mut camera = FirstPersonCamera::new();
        camera.follow(config.player_start + Vec3::new(0.0, config.player_eye_height, 0.0));

        let hud = HudState::new(config.starting_ammo);
        let round = RoundMachine::new(config.fall_threshold);
        let projectiles = ProjectileSystem::new(&config);

        log::info!(
            "round start: {} bodies, target at x = {}",
            world.body_count(),
            spawn_point
        );

        Self {
            config,
            world,
            camera,
            controller: CharacterController::new(),
            projectiles,
            round,
            hud,
            banner: None,
            player_id,
            target_id,
            floor_id,
            platform_id,
            brick_ids,
            spawn_point,
            accumulator: 0.0,
        }
    }

    /// Route one discrete input event. Fire actions trigger on release.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::DirectionPressed(direction) => {
                self.controller.set_direction(direction, true);
            }
            InputEvent::DirectionReleased(direction) => {
                self.controller.set_direction(direction, false);
            }
            InputEvent::JumpPressed => self.controller.request_jump(),
            InputEvent::FirePressed | InputEvent::AltFirePressed => {}
            InputEvent::FireReleased => {
                self.fire(ProjectileKind::Cannonball);
            }
            InputEvent::AltFireReleased => {
                self.fire(ProjectileKind::Fireball);
            }
            InputEvent::LookDelta { dx, dy } => self.camera.handle_mouse_look(dx, dy),
        }
    }

    /// Spawn a projectile from the current aim origin along the aim
    /// direction. Returns `None` when a cannonball is refused on an
    /// empty pool.
    pub fn fire(&mut self, kind: ProjectileKind) -> Option<BodyId> {
        self.projectiles.fire(
            &mut self.world,
            self.camera.position,
            self.camera.forward(),
            kind,
        )
    }

    /// Advance the round by `dt` seconds of wall-clock time.
    ///
    /// Returns the completion event if this frame crossed into a
    /// terminal state.
    pub fn update(&mut self, dt: f32) -> Option<RoundEvent> {
        self.accumulator += dt.max(0.0);

        let mut completion = None;
        let mut steps = 0;
        while self.accumulator >= FIXED_PHYSICS_STEP_S && steps < MAX_FIXED_STEPS_PER_FRAME {
            self.accumulator -= FIXED_PHYSICS_STEP_S;
            steps += 1;
            let event = self.fixed_step(FIXED_PHYSICS_STEP_S);
            completion = completion.or(event);
        }
        if steps == MAX_FIXED_STEPS_PER_FRAME {
            // Long hitch: drop the remaining backlog.
            self.accumulator = 0.0;
        }

        completion
    }

    /// One fixed slice: controller intent → physics step → camera
    /// follow → round evaluation → HUD refresh.
    fn fixed_step(&mut self, dt: f32) -> Option<RoundEvent> {
        let walk = self
            .controller
            .walk_vector(self.camera.forward(), self.camera.left());
        self.world.set_walk_vector(self.player_id, walk);

        if self.controller.take_jump_request() {
            self.world.jump(self.player_id, JUMP_IMPULSE);
        }

        self.world.step(dt);

        let player_pos = self.world.position(self.player_id);
        self.camera
            .follow(player_pos + Vec3::new(0.0, self.config.player_eye_height, 0.0));

        let target_y = self.world.position(self.target_id).y;
        let ammo = self.projectiles.ammo_remaining();
        let event = self.round.evaluate(target_y, player_pos.y, ammo);
        if let Some(fired) = event {
            self.banner = Some(fired.message);
        }
        self.hud.refresh(ammo, self.round.state(), self.banner);

        event
    }

    /// Per-frame display data for the rendering collaborator.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            bodies: self
                .world
                .iter()
                .map(|(id, body)| BodySnapshot {
                    id,
                    position: body.position,
                    orientation: body.orientation,
                })
                .collect(),
            ammo_remaining: self.projectiles.ammo_remaining(),
            round_state: self.round.state(),
            banner: self.banner.map(str::to_owned),
        }
    }

    pub fn round_state(&self) -> RoundState {
        self.round.state()
    }

    pub fn ammo_remaining(&self) -> u32 {
        self.projectiles.ammo_remaining()
    }

    pub fn hud(&self) -> &HudState {
        &self.hud
    }

    /// Completion banner, if the round has ended.
    pub fn banner(&self) -> Option<&'static str> {
        self.banner
    }

    pub fn player_id(&self) -> BodyId {
        self.player_id
    }

    pub fn target_id(&self) -> BodyId {
        self.target_id
    }

    pub fn floor_id(&self) -> BodyId {
        self.floor_id
    }

    pub fn platform_id(&self) -> BodyId {
        self.platform_id
    }

    pub fn brick_ids(&self) -> &[BodyId] {
        &self.brick_ids
    }

    /// The offset drawn for the target this round.
    pub fn spawn_point(&self) -> i32 {
        self.spawn_point
    }

    pub fn projectiles(&self) -> &ProjectileSystem {
        &self.projectiles
    }

    /// Direction flags, exposed for the input layer's benefit.
    pub fn controller_mut(&mut self) -> &mut CharacterController {
        &mut self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::MoveDirection;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn new_scene(seed: u64) -> SiegeScene {
        let mut rng = Pcg32::seed_from_u64(seed);
        SiegeScene::new(SiegeConfig::default(), &mut rng)
    }

    #[test]
    fn test_scene_composition() {
        let scene = new_scene(11);
        // Two slabs + 190 bricks + player + target.
        assert_eq!(scene.world.body_count(), 194);
        assert_eq!(scene.brick_ids().len(), 190);
        assert_eq!(scene.round_state(), RoundState::Playing);
        assert_eq!(scene.ammo_remaining(), 6);
    }

    #[test]
    fn test_fire_happens_on_release_not_press() {
        let mut scene = new_scene(12);
        let before = scene.world.body_count();

        scene.handle_event(InputEvent::FirePressed);
        assert_eq!(scene.world.body_count(), before);
        assert_eq!(scene.ammo_remaining(), 6);

        scene.handle_event(InputEvent::FireReleased);
        assert_eq!(scene.world.body_count(), before + 1);
        assert_eq!(scene.ammo_remaining(), 5);
    }

    #[test]
    fn test_alt_fire_never_consumes_ammo() {
        let mut scene = new_scene(13);
        for _ in 0..4 {
            scene.handle_event(InputEvent::AltFireReleased);
        }
        assert_eq!(scene.ammo_remaining(), 6);
        assert_eq!(scene.projectiles().spawned().len(), 4);
    }

    #[test]
    fn test_direction_events_reach_controller() {
        let mut scene = new_scene(14);
        scene.handle_event(InputEvent::DirectionPressed(MoveDirection::Forward));

        let walk = scene
            .controller
            .walk_vector(scene.camera.forward(), scene.camera.left());
        assert!(walk.z < 0.0, "default aim looks toward -Z");

        scene.handle_event(InputEvent::DirectionReleased(MoveDirection::Forward));
        let walk = scene
            .controller
            .walk_vector(scene.camera.forward(), scene.camera.left());
        assert_eq!(walk, Vec3::ZERO);
    }

    #[test]
    fn test_look_delta_turns_aim() {
        let mut scene = new_scene(15);
        let before = scene.camera.forward();
        scene.handle_event(InputEvent::LookDelta { dx: 200.0, dy: 0.0 });
        assert!((scene.camera.forward() - before).length() > 1e-4);
    }

    #[test]
    fn test_camera_slaved_to_player_body() {
        let mut scene = new_scene(16);
        for _ in 0..30 {
            scene.update(1.0 / 60.0);
        }
        let player = scene.world.position(scene.player_id());
        let expected = player + Vec3::new(0.0, scene.config.player_eye_height, 0.0);
        assert!((scene.camera.position - expected).length() < 1e-5);
    }

    #[test]
    fn test_snapshot_carries_all_bodies_and_hud() {
        let mut scene = new_scene(17);
        scene.update(1.0 / 60.0);

        let snapshot = scene.snapshot();
        assert_eq!(snapshot.bodies.len(), scene.world.body_count());
        assert_eq!(snapshot.ammo_remaining, 6);
        assert_eq!(snapshot.round_state, RoundState::Playing);
        assert!(snapshot.banner.is_none());
    }

    #[test]
    fn test_update_accumulates_fixed_slices() {
        let mut scene = new_scene(18);
        let start = scene.world.position(scene.target_id());

        // Half a step: nothing simulated yet.
        scene.update(1.0 / 120.0);
        assert_eq!(scene.world.position(scene.target_id()), start);

        // The other half arrives: exactly one slice runs.
        scene.update(1.0 / 120.0);
        assert_ne!(scene.world.position(scene.target_id()), start);
    }
}
