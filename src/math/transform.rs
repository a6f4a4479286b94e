use glam::DVec3;

/// Rotates `v` about the X axis by `angle` radians
pub fn rotate_x(v: DVec3, angle: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    DVec3::new(v.x, v.y * cos - v.z * sin, v.y * sin + v.z * cos)
}

/// Rotates `v` about the Y axis by `angle` radians
pub fn rotate_y(v: DVec3, angle: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    DVec3::new(v.x * cos + v.z * sin, v.y, -v.x * sin + v.z * cos)
}

/// Rotates `v` about the Z axis by `angle` radians
pub fn rotate_z(v: DVec3, angle: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    DVec3::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos, v.z)
}

/// Rigid placement of a fragment: translation first, then rotations
/// about the X, Y and Z axes in that fixed order. Angles are degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RigidTransform {
    pub translation: DVec3,
    pub rotation_degrees: DVec3,
}

impl RigidTransform {
    pub fn new(translation: DVec3, rotation_degrees: DVec3) -> Self {
        Self {
            translation,
            rotation_degrees,
        }
    }

    pub fn from_translation(translation: DVec3) -> Self {
        Self {
            translation,
            rotation_degrees: DVec3::ZERO,
        }
    }

    pub fn from_rotation(rotation_degrees: DVec3) -> Self {
        Self {
            translation: DVec3::ZERO,
            rotation_degrees,
        }
    }

    /// Applies the placement to a single vertex
    pub fn apply(&self, v: DVec3) -> DVec3 {
        let v = v + self.translation;
        let v = rotate_x(v, self.rotation_degrees.x.to_radians());
        let v = rotate_y(v, self.rotation_degrees.y.to_radians());
        rotate_z(v, self.rotation_degrees.z.to_radians())
    }

    /// Applies the placement to every vertex, preserving order
    pub fn apply_all(&self, vertices: &[DVec3]) -> Vec<DVec3> {
        vertices.iter().map(|&v| self.apply(v)).collect()
    }
}
