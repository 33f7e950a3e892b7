//! Flat 2D face: background, complications, unread indicator, ticks, hands.

use crate::foundation::core::{Point, SurfaceSize};
use crate::foundation::error::{FaceResult, FaceWarning};
use crate::render::backend::{
    BackendKind, FaceCompositor, FrameContext, draw_background_slots, draw_overlay_slots,
};
use crate::render::geometry::{CENTER_GAP_RADIUS, CanvasHandLengths, canvas_ticks, dial_point};
use crate::render::surface::{DrawCommand, Surface};
use crate::style::paint::StrokePaint;
use crate::time::dial::HandAngles;

pub const UNREAD_RING_RADIUS: f64 = 10.0;
pub const UNREAD_DOT_RADIUS: f64 = 4.0;
const UNREAD_BOTTOM_OFFSET: f64 = 40.0;

/// Stateless: every frame is laid out from the target surface's size.
#[derive(Clone, Copy, Debug, Default)]
pub struct CanvasCompositor;

impl CanvasCompositor {
    pub fn new() -> Self {
        Self
    }

    fn draw_unread_indicator(
        &self,
        frame: &FrameContext<'_>,
        size: SurfaceSize,
        surface: &mut dyn Surface,
    ) -> FaceResult<()> {
        if frame.unread_count == 0 {
            return Ok(());
        }
        let center = Point::new(
            f64::from(size.width) / 2.0,
            f64::from(size.height) - UNREAD_BOTTOM_OFFSET,
        );
        surface.submit(DrawCommand::Circle {
            center,
            radius: UNREAD_RING_RADIUS,
            fill: false,
            paint: frame.styles.tick,
        })?;
        if frame.mode.interactive() {
            surface.submit(DrawCommand::Circle {
                center,
                radius: UNREAD_DOT_RADIUS,
                fill: true,
                paint: frame.styles.second,
            })?;
        }
        Ok(())
    }
}

fn hand(center: Point, length: f64, degrees: f64, paint: StrokePaint) -> DrawCommand {
    DrawCommand::Line {
        from: dial_point(center, CENTER_GAP_RADIUS, degrees),
        to: dial_point(center, length, degrees),
        paint,
    }
}

impl FaceCompositor for CanvasCompositor {
    fn kind(&self) -> BackendKind {
        BackendKind::Canvas
    }

    fn resize(&mut self, size: SurfaceSize) -> Result<bool, FaceWarning> {
        if size.is_degenerate() {
            return Err(FaceWarning::DegenerateSurface {
                width: size.width,
                height: size.height,
            });
        }
        Ok(false)
    }

    #[tracing::instrument(level = "trace", skip_all, fields(now_ms = frame.now_ms))]
    fn compose(&self, frame: &FrameContext<'_>, surface: &mut dyn Surface) -> FaceResult<()> {
        let size = surface.size();
        let styles = frame.styles;

        surface.submit(DrawCommand::Clear(styles.background))?;
        draw_background_slots(frame, surface)?;
        draw_overlay_slots(frame, surface)?;
        self.draw_unread_indicator(frame, size, surface)?;

        let center = size.center();
        let radius = center.x;
        for (inner, outer) in canvas_ticks(center, radius) {
            surface.submit(DrawCommand::Line {
                from: inner,
                to: outer,
                paint: styles.tick,
            })?;
        }

        let lengths = CanvasHandLengths::for_radius(radius);
        let angles = HandAngles::at(frame.time);
        surface.submit(hand(center, lengths.hour, angles.hour, styles.hour))?;
        surface.submit(hand(center, lengths.minute, angles.minute, styles.minute))?;
        if frame.mode.interactive() {
            surface.submit(hand(center, lengths.second, angles.second, styles.second))?;
        }
        surface.submit(DrawCommand::Circle {
            center,
            radius: CENTER_GAP_RADIUS,
            fill: false,
            paint: styles.tick,
        })?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
