use crate::complication::drawable::ComplicationDrawable;
use crate::complication::registry::ComplicationRegistry;
use crate::config::CameraConfig;
use crate::foundation::core::SurfaceSize;
use crate::foundation::error::{FaceResult, FaceWarning};
use crate::mode::state::ModeState;
use crate::render::surface::Surface;
use crate::style::paint::PaintStyles;
use crate::time::dial::TimeOfDay;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha RGBA bytes, suitable for PNG output.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    /// Straight RGBA of one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.data.get(i..i + 4)?;
        let a = u16::from(px[3]);
        if !self.premultiplied || a == 0 || a == 255 {
            return Some([px[0], px[1], px[2], px[3]]);
        }
        let un = |c: u8| ((u16::from(c) * 255 + a / 2) / a).min(255) as u8;
        Some([un(px[0]), un(px[1]), un(px[2]), px[3]])
    }
}

/// Available face backends.
///
/// - `Canvas` draws flat 2D hands and ticks.
/// - `Gl` draws triangle meshes through an orbiting camera.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Canvas,
    Gl,
}

/// Everything a compositor reads to draw one frame.
pub struct FrameContext<'a> {
    pub now_ms: u64,
    pub time: TimeOfDay,
    pub mode: &'a ModeState,
    pub styles: &'a PaintStyles,
    pub registry: &'a ComplicationRegistry,
    pub drawable: &'a dyn ComplicationDrawable,
    /// Unread notifications to indicate; 0 when the indicator is disabled.
    pub unread_count: u32,
}

/// Backend-specific "what to draw".
pub trait FaceCompositor {
    fn kind(&self) -> BackendKind;

    /// React to a surface size change. `Ok(false)` means nothing was rebuilt.
    fn resize(&mut self, size: SurfaceSize) -> Result<bool, FaceWarning>;

    fn compose(&self, frame: &FrameContext<'_>, surface: &mut dyn Surface) -> FaceResult<()>;

    /// Frame period of a continuously animated face, `None` when the face
    /// only changes on ticks.
    fn frame_period_ms(&self) -> Option<u64> {
        None
    }
}

/// Create a compositor implementation.
pub fn create_compositor(
    kind: BackendKind,
    camera: &CameraConfig,
) -> FaceResult<Box<dyn FaceCompositor>> {
    match kind {
        BackendKind::Canvas => Ok(Box::new(crate::render::canvas::CanvasCompositor::new())),
        BackendKind::Gl => Ok(Box::new(crate::render::gl::GlCompositor::new(camera)?)),
    }
}

/// Draw the background slot. It covers the whole surface, so it must go
/// right after the clear.
pub(crate) fn draw_background_slots(
    frame: &FrameContext<'_>,
    surface: &mut dyn Surface,
) -> FaceResult<()> {
    for slot in frame.registry.iter().filter(|s| s.is_background()) {
        frame.drawable.draw(slot, frame.now_ms, surface)?;
    }
    Ok(())
}

/// Draw every non-background slot in registry order.
pub(crate) fn draw_overlay_slots(
    frame: &FrameContext<'_>,
    surface: &mut dyn Surface,
) -> FaceResult<()> {
    for slot in frame.registry.iter().filter(|s| !s.is_background()) {
        frame.drawable.draw(slot, frame.now_ms, surface)?;
    }
    Ok(())
}
