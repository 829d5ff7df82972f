//! Character Controller
//!
//! Maps accumulated directional input into a camera-relative walk vector
//! and a one-shot jump request. The controller owns *intent only*: it
//! never touches positions. Each frame the scene submits the walk vector
//! to the physics world, which integrates it together with gravity and
//! collision response, and the camera is then slaved to the body's
//! physics-resolved location, not the other way around.

use glam::Vec3;

/// Walk contribution along the camera's forward axis.
pub const WALK_FORWARD_SCALE: f32 = 0.6;

/// Walk contribution along the camera's left axis (strafing).
pub const WALK_STRAFE_SCALE: f32 = 0.4;

/// Fixed upward jump impulse, applied only on a discrete jump event.
pub const JUMP_IMPULSE: Vec3 = Vec3::new(0.0, 20.0, 0.0);

/// One of the four walk directions a discrete input event can toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

/// Binary walk-direction flags plus a pending jump request.
///
/// Flags carry no magnitude: a direction is either held or it is not,
/// toggled by press/release events from the input collaborator.
#[derive(Debug, Clone, Default)]
pub struct CharacterController {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    jump_requested: bool,
}

impl CharacterController {
    /// Create a controller with every flag released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle one direction flag from a discrete press/release event.
    pub fn set_direction(&mut self, direction: MoveDirection, pressed: bool) {
        match direction {
            MoveDirection::Forward => self.forward = pressed,
            MoveDirection::Backward => self.backward = pressed,
            MoveDirection::Left => self.left = pressed,
            MoveDirection::Right => self.right = pressed,
        }
    }

    /// Record a discrete jump event. Consumed by [`take_jump_request`].
    ///
    /// [`take_jump_request`]: CharacterController::take_jump_request
    pub fn request_jump(&mut self) {
        self.jump_requested = true;
    }

    /// Consume the pending jump request, if any. The physics world
    /// decides whether the jump actually happens (ground support).
    pub fn take_jump_request(&mut self) -> bool {
        std::mem::take(&mut self.jump_requested)
    }

    /// Whether any direction flag is currently held.
    pub fn is_moving(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Recompute the combined walk vector from the held flags and the
    /// camera's current facing:
    ///
    /// `0.6·forward − 0.6·backward` along `cam_forward`, plus
    /// `0.4·left − 0.4·right` along `cam_left`.
    ///
    /// Zero flags yield the zero vector; the player decelerates to rest
    /// subject to physics. Called every frame; the result is the walk
    /// intent submitted to the physics world.
    pub fn walk_vector(&self, cam_forward: Vec3, cam_left: Vec3) -> Vec3 {
        let mut walk = Vec3::ZERO;
        if self.forward {
            walk += cam_forward * WALK_FORWARD_SCALE;
        }
        if self.backward {
            walk -= cam_forward * WALK_FORWARD_SCALE;
        }
        if self.left {
            walk += cam_left * WALK_STRAFE_SCALE;
        }
        if self.right {
            walk -= cam_left * WALK_STRAFE_SCALE;
        }
        walk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);
    const LEFT: Vec3 = Vec3::new(-1.0, 0.0, 0.0);

    #[test]
    fn test_zero_flags_zero_vector() {
        let controller = CharacterController::new();
        assert_eq!(controller.walk_vector(FORWARD, LEFT), Vec3::ZERO);
        assert!(!controller.is_moving());
    }

    #[test]
    fn test_forward_scale() {
        let mut controller = CharacterController::new();
        controller.set_direction(MoveDirection::Forward, true);
        assert_eq!(
            controller.walk_vector(FORWARD, LEFT),
            Vec3::new(0.0, 0.0, -WALK_FORWARD_SCALE)
        );
    }

    #[test]
    fn test_backward_negates_forward() {
        let mut controller = CharacterController::new();
        controller.set_direction(MoveDirection::Backward, true);
        assert_eq!(
            controller.walk_vector(FORWARD, LEFT),
            Vec3::new(0.0, 0.0, WALK_FORWARD_SCALE)
        );
    }

    #[test]
    fn test_strafe_scales() {
        let mut controller = CharacterController::new();
        controller.set_direction(MoveDirection::Left, true);
        assert_eq!(
            controller.walk_vector(FORWARD, LEFT),
            Vec3::new(-WALK_STRAFE_SCALE, 0.0, 0.0)
        );

        controller.set_direction(MoveDirection::Left, false);
        controller.set_direction(MoveDirection::Right, true);
        assert_eq!(
            controller.walk_vector(FORWARD, LEFT),
            Vec3::new(WALK_STRAFE_SCALE, 0.0, 0.0)
        );
    }

    #[test]
    fn test_opposite_flags_cancel() {
        let mut controller = CharacterController::new();
        controller.set_direction(MoveDirection::Forward, true);
        controller.set_direction(MoveDirection::Backward, true);
        assert_eq!(controller.walk_vector(FORWARD, LEFT), Vec3::ZERO);
    }

    #[test]
    fn test_diagonal_combines_both_axes() {
        let mut controller = CharacterController::new();
        controller.set_direction(MoveDirection::Forward, true);
        controller.set_direction(MoveDirection::Right, true);
        let walk = controller.walk_vector(FORWARD, LEFT);
        assert_eq!(
            walk,
            Vec3::new(WALK_STRAFE_SCALE, 0.0, -WALK_FORWARD_SCALE)
        );
    }

    #[test]
    fn test_release_clears_flag() {
        let mut controller = CharacterController::new();
        controller.set_direction(MoveDirection::Forward, true);
        controller.set_direction(MoveDirection::Forward, false);
        assert_eq!(controller.walk_vector(FORWARD, LEFT), Vec3::ZERO);
    }

    #[test]
    fn test_jump_request_is_consumed_once() {
        let mut controller = CharacterController::new();
        assert!(!controller.take_jump_request());

        controller.request_jump();
        assert!(controller.take_jump_request());
        assert!(
            !controller.take_jump_request(),
            "a jump event must not fire twice"
        );
    }

    #[test]
    fn test_walk_follows_camera_rotation() {
        let mut controller = CharacterController::new();
        controller.set_direction(MoveDirection::Forward, true);

        // Camera turned to face +X: forward input must follow it.
        let walk = controller.walk_vector(Vec3::X, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(walk, Vec3::new(WALK_FORWARD_SCALE, 0.0, 0.0));
    }
}
