//! Precomputed matrices for the orbiting 3D camera.
//!
//! Model rotations are cached per whole degree and view matrices per camera
//! step. Projection-dependent products are rebuilt in full whenever the aspect
//! ratio changes; until the first valid resize every view-projection is the
//! identity.

use crate::config::CameraConfig;
use crate::foundation::core::SurfaceSize;
use crate::foundation::error::{FaceError, FaceResult, FaceWarning};
use crate::foundation::math::{DMat4, DVec3, Frustum, rotation_z_degrees};
use crate::time::dial::degree_index;

pub const MODEL_ANGLE_COUNT: usize = 360;

#[derive(Clone, Debug)]
pub struct TransformCache {
    frame_period_ms: u64,
    near: f64,
    far: f64,
    aspect: Option<f64>,
    projection: DMat4,
    model: Vec<DMat4>,
    view: Vec<DMat4>,
    view_projection: Vec<DMat4>,
    ambient_view: DMat4,
    ambient_view_projection: DMat4,
}

impl TransformCache {
    pub fn new(camera: &CameraConfig) -> FaceResult<Self> {
        let count = camera.camera_angle_count();
        if count == 0 {
            return Err(FaceError::configuration(
                "camera cycle must contain at least one frame",
            ));
        }
        let frame_period_ms = camera.frame_period_ms();
        if frame_period_ms == 0 {
            return Err(FaceError::configuration(format!(
                "frame rate {} is too high for millisecond frame periods",
                camera.frame_rate
            )));
        }

        let model = (0..MODEL_ANGLE_COUNT)
            .map(|d| rotation_z_degrees(d as f64))
            .collect();

        let view = (0..count)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / count as f64;
                let eye = DVec3::new(
                    camera.orbit_radius * angle.cos(),
                    camera.orbit_radius * angle.sin(),
                    camera.eye_z,
                );
                DMat4::look_at_rh(eye, DVec3::ZERO, DVec3::Y)
            })
            .collect();

        let ambient_view =
            DMat4::look_at_rh(DVec3::new(0.0, 0.0, camera.eye_z), DVec3::ZERO, DVec3::Y);

        tracing::debug!(camera_angles = count, frame_period_ms, "built transform cache");
        Ok(Self {
            frame_period_ms,
            near: camera.near,
            far: camera.far,
            aspect: None,
            projection: DMat4::IDENTITY,
            model,
            view,
            view_projection: vec![DMat4::IDENTITY; count],
            ambient_view,
            ambient_view_projection: DMat4::IDENTITY,
        })
    }

    pub fn camera_angle_count(&self) -> usize {
        self.view.len()
    }

    pub fn frame_period_ms(&self) -> u64 {
        self.frame_period_ms
    }

    /// Aspect ratio the projection was last built for.
    pub fn aspect(&self) -> Option<f64> {
        self.aspect
    }

    pub fn projection(&self) -> &DMat4 {
        &self.projection
    }

    /// Rebuild the projection-dependent matrices for a new surface size.
    ///
    /// Returns `Ok(false)` when the aspect ratio is unchanged. A degenerate
    /// surface leaves the cache as it was.
    pub fn resize(&mut self, size: SurfaceSize) -> Result<bool, FaceWarning> {
        let Some(aspect) = size.aspect_ratio() else {
            return Err(FaceWarning::DegenerateSurface {
                width: size.width,
                height: size.height,
            });
        };
        if self.aspect == Some(aspect) {
            return Ok(false);
        }

        let projection = Frustum::for_aspect(aspect, self.near, self.far).projection();
        self.view_projection = self.view.iter().map(|v| projection * *v).collect();
        self.ambient_view_projection = projection * self.ambient_view;
        self.projection = projection;
        self.aspect = Some(aspect);
        tracing::debug!(aspect, "rebuilt view-projection matrices");
        Ok(true)
    }

    /// Camera step for an interactive frame at `now_ms`.
    pub fn camera_index(&self, now_ms: u64) -> usize {
        let step = now_ms / self.frame_period_ms;
        (step % self.view.len() as u64) as usize
    }

    /// View-projection for a camera step; indices wrap.
    pub fn view_projection(&self, index: usize) -> &DMat4 {
        &self.view_projection[index % self.view_projection.len()]
    }

    pub fn ambient_view_projection(&self) -> &DMat4 {
        &self.ambient_view_projection
    }

    /// Rotation for `degrees`, truncated to a whole degree.
    pub fn model(&self, degrees: f64) -> &DMat4 {
        &self.model[degree_index(degrees)]
    }

    pub fn model_view_projection(&self, view_projection: &DMat4, degrees: f64) -> DMat4 {
        *view_projection * *self.model(degrees)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/transform_cache.rs"]
mod tests;
