//! 3D face drawn as triangle lists through the cached camera transforms.

use crate::config::CameraConfig;
use crate::foundation::core::{Rgba8, SurfaceSize};
use crate::foundation::error::{FaceResult, FaceWarning};
use crate::foundation::math::DMat4;
use crate::render::backend::{
    BackendKind, FaceCompositor, FrameContext, draw_background_slots, draw_overlay_slots,
};
use crate::render::geometry::{GlGeometry, Mesh};
use crate::render::surface::{DrawCommand, Surface};
use crate::render::transform_cache::TransformCache;
use crate::time::dial::HandAngles;

pub const INTERACTIVE_CLEAR: Rgba8 = Rgba8::opaque(128, 51, 51);

#[derive(Clone, Debug)]
pub struct GlCompositor {
    cache: TransformCache,
    geometry: GlGeometry,
}

impl GlCompositor {
    pub fn new(camera: &CameraConfig) -> FaceResult<Self> {
        Ok(Self {
            cache: TransformCache::new(camera)?,
            geometry: GlGeometry::new(),
        })
    }

    pub fn transforms(&self) -> &TransformCache {
        &self.cache
    }

    pub fn geometry(&self) -> &GlGeometry {
        &self.geometry
    }
}

fn triangles(mesh: &Mesh, mvp: DMat4) -> DrawCommand {
    DrawCommand::Triangles {
        vertices: mesh.vertices.clone(),
        mvp,
        color: mesh.color,
    }
}

impl FaceCompositor for GlCompositor {
    fn kind(&self) -> BackendKind {
        BackendKind::Gl
    }

    fn resize(&mut self, size: SurfaceSize) -> Result<bool, FaceWarning> {
        self.cache.resize(size)
    }

    #[tracing::instrument(level = "trace", skip_all, fields(now_ms = frame.now_ms))]
    fn compose(&self, frame: &FrameContext<'_>, surface: &mut dyn Surface) -> FaceResult<()> {
        let interactive = frame.mode.interactive();
        let (clear, vp) = if interactive {
            let index = self.cache.camera_index(frame.now_ms);
            (INTERACTIVE_CLEAR, *self.cache.view_projection(index))
        } else {
            (Rgba8::BLACK, *self.cache.ambient_view_projection())
        };

        surface.submit(DrawCommand::Clear(clear))?;
        draw_background_slots(frame, surface)?;
        surface.submit(triangles(&self.geometry.major_ticks, vp))?;
        surface.submit(triangles(&self.geometry.minor_ticks, vp))?;

        let angles = HandAngles::at(frame.time);
        let g = &self.geometry;
        surface.submit(triangles(&g.hour, self.cache.model_view_projection(&vp, angles.hour)))?;
        surface.submit(triangles(
            &g.minute,
            self.cache.model_view_projection(&vp, angles.minute),
        ))?;
        if interactive {
            surface.submit(triangles(
                &g.second,
                self.cache.model_view_projection(&vp, angles.second),
            ))?;
        }

        draw_overlay_slots(frame, surface)
    }

    /// The camera advances one step per frame period.
    fn frame_period_ms(&self) -> Option<u64> {
        Some(self.cache.frame_period_ms())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/gl.rs"]
mod tests;
