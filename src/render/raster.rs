//! Software rasterisation of draw commands on `vello_cpu`.
//!
//! Commands are buffered per frame and replayed into a fresh render context by
//! [`RasterSurface::render_frame`]. Triangle lists are projected to pixels
//! here, so both compositors share one raster path.

use kurbo::{Cap, Shape, Stroke, StrokeOpts};

use crate::foundation::core::{BezPath, Point, Rgba8, SurfaceSize};
use crate::foundation::error::{FaceError, FaceResult};
use crate::foundation::math::{DMat4, DVec3, to_clip};
use crate::render::backend::FrameRGBA;
use crate::render::surface::{DrawCommand, Surface};
use crate::style::paint::StrokePaint;

const TOLERANCE: f64 = 0.1;

pub struct RasterSurface {
    size: SurfaceSize,
    width: u16,
    height: u16,
    pending: Vec<DrawCommand>,
}

impl RasterSurface {
    pub fn new(size: SurfaceSize) -> FaceResult<Self> {
        if size.is_degenerate() {
            return Err(FaceError::render(format!(
                "raster surface must be non-empty, got {}x{}",
                size.width, size.height
            )));
        }
        let width: u16 = size
            .width
            .try_into()
            .map_err(|_| FaceError::render("surface width exceeds u16"))?;
        let height: u16 = size
            .height
            .try_into()
            .map_err(|_| FaceError::render("surface height exceeds u16"))?;
        Ok(Self {
            size,
            width,
            height,
            pending: Vec::new(),
        })
    }

    /// Commands submitted since the last rendered frame.
    pub fn pending(&self) -> &[DrawCommand] {
        &self.pending
    }

    /// Rasterise and clear the buffered commands.
    pub fn render_frame(&mut self) -> FaceResult<FrameRGBA> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        for cmd in self.pending.drain(..) {
            draw_command(&mut ctx, self.size, &cmd);
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: self.size.width,
            height: self.size.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn submit(&mut self, cmd: DrawCommand) -> FaceResult<()> {
        self.pending.push(cmd);
        Ok(())
    }
}

fn draw_command(ctx: &mut vello_cpu::RenderContext, size: SurfaceSize, cmd: &DrawCommand) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

    match cmd {
        DrawCommand::Clear(color) => {
            set_color(ctx, *color);
            let b = size.bounds();
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(b.x0, b.y0, b.x1, b.y1));
        }
        DrawCommand::FillRect { rect, color } => {
            set_color(ctx, *color);
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(rect.x0, rect.y0, rect.x1, rect.y1));
        }
        DrawCommand::Line { from, to, paint } => {
            let line = kurbo::Line::new(*from, *to);
            stroke_shape(ctx, &line.to_path(TOLERANCE), paint);
        }
        DrawCommand::Circle {
            center,
            radius,
            fill,
            paint,
        } => {
            let circle = kurbo::Circle::new(*center, *radius).to_path(TOLERANCE);
            if *fill {
                set_color(ctx, paint.color);
                ctx.fill_path(&bezpath_to_cpu(&circle));
            } else {
                stroke_shape(ctx, &circle, paint);
            }
        }
        DrawCommand::Triangles {
            vertices,
            mvp,
            color,
        } => {
            set_color(ctx, *color);
            for tri in vertices.chunks_exact(3) {
                if let Some(path) = project_triangle(mvp, tri, size) {
                    ctx.fill_path(&bezpath_to_cpu(&path));
                }
            }
        }
        DrawCommand::Text { text, .. } => {
            tracing::trace!(text = text.as_str(), "raster surface has no text shaping, skipped");
        }
    }
}

fn set_color(ctx: &mut vello_cpu::RenderContext, c: Rgba8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
}

fn stroke_shape(ctx: &mut vello_cpu::RenderContext, path: &BezPath, paint: &StrokePaint) {
    let cap = if paint.round_cap { Cap::Round } else { Cap::Butt };
    if let Some(shadow) = paint.shadow {
        let style = Stroke::new(paint.width + shadow.radius).with_caps(cap);
        let outline = kurbo::stroke(path.iter(), &style, &StrokeOpts::default(), TOLERANCE);
        set_color(ctx, shadow.color.with_alpha(shadow.color.a / 3));
        ctx.fill_path(&bezpath_to_cpu(&outline));
    }
    let style = Stroke::new(paint.width).with_caps(cap);
    let outline = kurbo::stroke(path.iter(), &style, &StrokeOpts::default(), TOLERANCE);
    set_color(ctx, paint.color);
    ctx.fill_path(&bezpath_to_cpu(&outline));
}

/// Clip-space triangle to a pixel-space path. Triangles with a vertex behind
/// the camera are dropped.
pub(crate) fn project_triangle(mvp: &DMat4, tri: &[DVec3], size: SurfaceSize) -> Option<BezPath> {
    let w = f64::from(size.width);
    let h = f64::from(size.height);
    let mut pts = [Point::ZERO; 3];
    for (p, v) in pts.iter_mut().zip(tri) {
        let clip = to_clip(mvp, *v);
        if clip.w <= 0.0 || !clip.w.is_finite() {
            return None;
        }
        *p = Point::new(
            (clip.x / clip.w + 1.0) * 0.5 * w,
            (1.0 - clip.y / clip.w) * 0.5 * h,
        );
    }
    let mut path = BezPath::new();
    path.move_to(pts[0]);
    path.line_to(pts[1]);
    path.line_to(pts[2]);
    path.close_path();
    Some(path)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
