//! Collision Detection
//!
//! Pure contact functions used by the physics world's resolution pass.
//! No body registry access, no side effects: every function takes raw
//! geometry and returns a contact description (or `None`).

use glam::Vec3;

/// How far above a top face the character's feet may be and still count
/// as standing on it.
const GROUND_EPS: f32 = 0.05;

/// A detected contact between two volumes.
///
/// `normal` points from the first volume toward the second;
/// `penetration` is the overlap depth along that normal.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub normal: Vec3,
    pub penetration: f32,
}

/// Result of a capsule-vs-cuboid check for the character.
#[derive(Debug, Clone, Default)]
pub struct CapsuleHit {
    /// Position adjustment to push the capsule out of the overlap.
    pub push: Vec3,
    /// Whether the capsule is standing on the cuboid's top face.
    pub grounded: bool,
    /// Top-face Y if grounded.
    pub ground_y: Option<f32>,
}

impl CapsuleHit {
    pub fn has_collision(&self) -> bool {
        self.push != Vec3::ZERO || self.grounded
    }
}

/// Overlap test between two axis-aligned boxes, given as center + half
/// extents. Returns the contact along the axis of least penetration,
/// with the normal pointing from box `a` toward box `b`.
pub fn cuboid_cuboid_contact(
    a_center: Vec3,
    a_half: Vec3,
    b_center: Vec3,
    b_half: Vec3,
) -> Option<Contact> {
    let delta = b_center - a_center;
    let overlap = a_half + b_half - delta.abs();

    if overlap.x <= 0.0 || overlap.y <= 0.0 || overlap.z <= 0.0 {
        return None;
    }

    // Separate along the shallowest axis.
    let (penetration, normal) = if overlap.x <= overlap.y && overlap.x <= overlap.z {
        (overlap.x, Vec3::new(delta.x.signum(), 0.0, 0.0))
    } else if overlap.y <= overlap.z {
        (overlap.y, Vec3::new(0.0, delta.y.signum(), 0.0))
    } else {
        (overlap.z, Vec3::new(0.0, 0.0, delta.z.signum()))
    };

    Some(Contact {
        normal,
        penetration,
    })
}

/// Contact between two spheres. The normal points from `a` toward `b`.
pub fn sphere_sphere_contact(
    a_center: Vec3,
    a_radius: f32,
    b_center: Vec3,
    b_radius: f32,
) -> Option<Contact> {
    let offset = b_center - a_center;
    let dist_sq = offset.length_squared();
    let reach = a_radius + b_radius;
    if dist_sq >= reach * reach {
        return None;
    }
    if dist_sq > 1e-8 {
        let dist = dist_sq.sqrt();
        Some(Contact {
            normal: offset / dist,
            penetration: reach - dist,
        })
    } else {
        // Coincident centers: pick an arbitrary but fixed axis.
        Some(Contact {
            normal: Vec3::Y,
            penetration: reach,
        })
    }
}

/// Contact between a sphere and an axis-aligned box (center + half
/// extents). The normal points from the box toward the sphere, which is
/// the direction a struck brick pushes a cannonball back out.
pub fn sphere_cuboid_contact(
    sphere_center: Vec3,
    radius: f32,
    box_center: Vec3,
    box_half: Vec3,
) -> Option<Contact> {
    let box_min = box_center - box_half;
    let box_max = box_center + box_half;
    let closest = sphere_center.clamp(box_min, box_max);
    let offset = sphere_center - closest;
    let dist_sq = offset.length_squared();

    if dist_sq >= radius * radius {
        return None;
    }

    if dist_sq > 1e-8 {
        let dist = dist_sq.sqrt();
        Some(Contact {
            normal: offset / dist,
            penetration: radius - dist,
        })
    } else {
        // Sphere center inside the box: fall back to the shallowest face.
        let to_center = sphere_center - box_center;
        let face_depth = box_half - to_center.abs();
        let (penetration, normal) = if face_depth.x <= face_depth.y && face_depth.x <= face_depth.z
        {
            (face_depth.x, Vec3::new(to_center.x.signum(), 0.0, 0.0))
        } else if face_depth.y <= face_depth.z {
            (face_depth.y, Vec3::new(0.0, to_center.y.signum(), 0.0))
        } else {
            (face_depth.z, Vec3::new(0.0, 0.0, to_center.z.signum()))
        };
        Some(Contact {
            normal,
            penetration: penetration + radius,
        })
    }
}

/// Check the player capsule against a cuboid (platform, brick, target).
///
/// `feet_pos` is the capsule's lowest point; `top_y` its highest.
/// Feet within `ground_snap` below a top face (or [`GROUND_EPS`] above
/// it) ground the character on that face; any other overlap pushes the
/// capsule out horizontally. `ground_snap` should scale with the fall
/// distance covered this step so fast falls cannot tunnel through thin
/// platforms.
pub fn capsule_cuboid_hit(
    feet_pos: Vec3,
    top_y: f32,
    capsule_radius: f32,
    box_center: Vec3,
    box_half: Vec3,
    ground_snap: f32,
) -> CapsuleHit {
    let mut hit = CapsuleHit::default();
    let box_min = box_center - box_half;
    let box_max = box_center + box_half;

    let closest_x = feet_pos.x.clamp(box_min.x, box_max.x);
    let closest_z = feet_pos.z.clamp(box_min.z, box_max.z);
    let dx = feet_pos.x - closest_x;
    let dz = feet_pos.z - closest_z;
    let horizontal_dist = (dx * dx + dz * dz).sqrt();

    if horizontal_dist >= capsule_radius {
        return hit;
    }

    // Standing on (or having just sunk into) the top face?
    let over_top =
        feet_pos.y >= box_max.y - ground_snap && feet_pos.y <= box_max.y + GROUND_EPS;
    if over_top {
        hit.grounded = true;
        hit.ground_y = Some(box_max.y);
        return hit;
    }

    // Side overlap while vertically intersecting: push out horizontally.
    let in_vertical_range = feet_pos.y < box_max.y && top_y > box_min.y;
    if in_vertical_range {
        if horizontal_dist > 1e-3 {
            let push_dir = Vec3::new(dx, 0.0, dz).normalize();
            hit.push = push_dir * (capsule_radius - horizontal_dist + 0.01);
        } else {
            // Deep inside: push toward the nearest vertical face.
            let to_feet = feet_pos - box_center;
            let push_dir =
                Vec3::new(to_feet.x.signum(), 0.0, to_feet.z.signum()).normalize_or_zero();
            hit.push = push_dir * (capsule_radius + 0.1);
        }
    }

    hit
}
