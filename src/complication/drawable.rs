//! Rendering seam for complication content.
//!
//! The engine never interprets payloads itself; it hands each slot to a
//! [`ComplicationDrawable`]. [`BasicComplicationDrawable`] covers the common
//! cases so a face works without a custom renderer.

use crate::complication::model::{ComplicationSlot, ComplicationType};
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::FaceResult;
use crate::render::surface::{DrawCommand, Surface};
use crate::style::paint::StrokePaint;

pub trait ComplicationDrawable {
    /// Draw `slot` within its bounds.
    fn draw(&self, slot: &ComplicationSlot, now_ms: u64, surface: &mut dyn Surface) -> FaceResult<()>;

    /// Whether a tap at `point` belongs to `slot`.
    fn hit_test(&self, slot: &ComplicationSlot, point: Point) -> bool {
        slot.has_content() && slot.bounds().contains(point)
    }
}

const BORDER_WIDTH: f64 = 2.0;
const RANGE_SEGMENTS: usize = 12;

/// Border ring, ranged-value gauge and short text for side slots; a solid
/// fallback fill for the background slot.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicComplicationDrawable;

impl BasicComplicationDrawable {
    fn draw_background(&self, slot: &ComplicationSlot, surface: &mut dyn Surface) -> FaceResult<()> {
        let style = slot.style();
        // Never light the whole screen while ambient.
        if style.ambient {
            return Ok(());
        }
        if let Some(color) = style.fallback_fill {
            surface.submit(DrawCommand::FillRect {
                rect: slot.bounds(),
                color,
            })?;
        }
        Ok(())
    }

    fn draw_side(&self, slot: &ComplicationSlot, surface: &mut dyn Surface) -> FaceResult<()> {
        let Some(data) = slot.data() else {
            return Ok(());
        };
        let style = slot.style();
        let bounds = slot.bounds();
        let center = bounds.center();
        let radius = bounds.width().min(bounds.height()) / 2.0 - BORDER_WIDTH;
        if radius <= 0.0 {
            return Ok(());
        }

        let mut border = StrokePaint::solid(style.border(), BORDER_WIDTH);
        border.anti_alias = style.anti_alias();
        let mut primary = StrokePaint::solid(style.primary(), BORDER_WIDTH);
        primary.anti_alias = style.anti_alias();

        // Burn-in protection keeps only the outline in ambient.
        let outline_only = style.ambient && style.burn_in_protection;

        surface.submit(DrawCommand::Circle {
            center,
            radius,
            fill: false,
            paint: border,
        })?;
        if outline_only {
            return Ok(());
        }

        if let Some(range) = data.ranged_value() {
            let lit = (range.fraction() * RANGE_SEGMENTS as f64).round() as usize;
            for i in 0..lit.min(RANGE_SEGMENTS) {
                let angle = (i as f64 / RANGE_SEGMENTS as f64) * std::f64::consts::TAU;
                let (s, c) = angle.sin_cos();
                let inner = radius * 0.8;
                surface.submit(DrawCommand::Line {
                    from: Point::new(center.x + s * inner, center.y - c * inner),
                    to: Point::new(center.x + s * radius, center.y - c * radius),
                    paint: primary,
                })?;
            }
        }

        let text = match data.kind {
            ComplicationType::RangedValue => data
                .ranged_value()
                .map(|r| format!("{}", r.value.round() as i64)),
            ComplicationType::ShortText | ComplicationType::LongText => {
                data.text().map(str::to_owned)
            }
            _ => None,
        };
        if let Some(text) = text {
            let size = radius * 0.6;
            surface.submit(DrawCommand::Text {
                origin: text_origin(bounds, size),
                text,
                size,
                color: style.primary(),
            })?;
        }
        Ok(())
    }
}

fn text_origin(bounds: Rect, size: f64) -> Point {
    Point::new(bounds.x0 + bounds.width() * 0.25, bounds.center().y + size / 3.0)
}

impl ComplicationDrawable for BasicComplicationDrawable {
    fn draw(&self, slot: &ComplicationSlot, _now_ms: u64, surface: &mut dyn Surface) -> FaceResult<()> {
        if !slot.has_content() {
            return Ok(());
        }
        if slot.is_background() {
            self.draw_background(slot, surface)
        } else {
            self.draw_side(slot, surface)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/complication/drawable.rs"]
mod tests;
