//! Camera and projection math for the 3D backend, on `glam`'s f64 types.

pub use glam::{DMat4, DVec3, DVec4};

/// Clip planes of a perspective frustum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frustum {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub near: f64,
    pub far: f64,
}

impl Frustum {
    /// Symmetric frustum whose horizontal extent is scaled by `aspect` (width / height).
    pub fn for_aspect(aspect: f64, near: f64, far: f64) -> Self {
        Self {
            left: -aspect,
            right: aspect,
            bottom: -1.0,
            top: 1.0,
            near,
            far,
        }
    }

    /// Right-handed perspective projection mapping depth to `[-1, 1]`.
    pub fn projection(&self) -> DMat4 {
        let r_width = 1.0 / (self.right - self.left);
        let r_height = 1.0 / (self.top - self.bottom);
        let r_depth = 1.0 / (self.near - self.far);

        DMat4::from_cols(
            DVec4::new(2.0 * self.near * r_width, 0.0, 0.0, 0.0),
            DVec4::new(0.0, 2.0 * self.near * r_height, 0.0, 0.0),
            DVec4::new(
                (self.right + self.left) * r_width,
                (self.top + self.bottom) * r_height,
                (self.far + self.near) * r_depth,
                -1.0,
            ),
            DVec4::new(0.0, 0.0, 2.0 * self.far * self.near * r_depth, 0.0),
        )
    }
}

/// Rotation by `degrees` about the face normal (+Z).
pub fn rotation_z_degrees(degrees: f64) -> DMat4 {
    DMat4::from_rotation_z(degrees.to_radians())
}

/// Homogeneous clip-space position of `p` under `m`.
pub fn to_clip(m: &DMat4, p: DVec3) -> DVec4 {
    m.mul_vec4(p.extend(1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
