//! First-person aim camera.
//!
//! Yaw/pitch view slaved to the player body: every frame the scene sets
//! the camera position from the physics-resolved player location (the
//! camera follows the body, never the reverse). The forward vector is
//! the aim direction for projectile launches; the flattened forward and
//! left vectors feed the character controller's walk vector.

use glam::Vec3;

/// Mouse-look sensitivity in radians per normalized delta unit.
pub const LOOK_SENSITIVITY: f32 = 0.003;

/// Pitch is clamped just short of straight up/down to keep the forward
/// vector well-defined.
const PITCH_LIMIT_DEG: f32 = 89.0;

/// First-person camera: position plus yaw/pitch orientation.
#[derive(Debug, Clone)]
pub struct FirstPersonCamera {
    /// Eye position in world space, updated from the player body.
    pub position: Vec3,
    /// Yaw in radians; 0 looks toward -Z.
    pub yaw: f32,
    /// Pitch in radians, clamped to ±89°.
    pub pitch: f32,
    pub look_sensitivity: f32,
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            look_sensitivity: LOOK_SENSITIVITY,
        }
    }
}

impl FirstPersonCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full 3D aim direction (includes pitch).
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Forward projected onto the horizontal plane (walk axis).
    pub fn forward_flat(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos()).normalize()
    }

    /// Horizontal left axis (strafe axis), perpendicular to
    /// [`forward_flat`](FirstPersonCamera::forward_flat).
    pub fn left(&self) -> Vec3 {
        Vec3::Y.cross(self.forward_flat()).normalize()
    }

    /// Apply a mouse-look delta, clamping pitch.
    pub fn handle_mouse_look(&mut self, delta_x: f32, delta_y: f32) {
        self.yaw += delta_x * self.look_sensitivity;
        self.pitch -= delta_y * self.look_sensitivity;
        let limit = PITCH_LIMIT_DEG.to_radians();
        self.pitch = self.pitch.clamp(-limit, limit);
    }

    /// Slave the camera to the body's physics-resolved location.
    pub fn follow(&mut self, eye_position: Vec3) {
        self.position = eye_position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_looks_down_negative_z() {
        let camera = FirstPersonCamera::new();
        let forward = camera.forward();
        assert!((forward - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_left_is_negative_x_at_zero_yaw() {
        let camera = FirstPersonCamera::new();
        assert!((camera.left() - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_yaw_quarter_turn_faces_positive_x() {
        let mut camera = FirstPersonCamera::new();
        camera.yaw = std::f32::consts::FRAC_PI_2;
        assert!((camera.forward() - Vec3::X).length() < 1e-5);
        assert!((camera.left() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = FirstPersonCamera::new();
        camera.handle_mouse_look(0.0, -10_000.0);
        assert!(camera.pitch <= 89.0_f32.to_radians() + 1e-6);
        camera.handle_mouse_look(0.0, 10_000.0);
        assert!(camera.pitch >= -(89.0_f32.to_radians() + 1e-6));
    }

    #[test]
    fn test_forward_flat_ignores_pitch() {
        let mut camera = FirstPersonCamera::new();
        camera.pitch = 0.8;
        let flat = camera.forward_flat();
        assert_eq!(flat.y, 0.0);
        assert!((flat.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_follow_sets_position() {
        let mut camera = FirstPersonCamera::new();
        camera.follow(Vec3::new(0.0, 1.7, 20.0));
        assert_eq!(camera.position, Vec3::new(0.0, 1.7, 20.0));
    }
}
