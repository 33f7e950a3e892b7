use std::sync::Arc;

use crate::foundation::core::{Point, Rect, Rgba8, SurfaceSize};
use crate::foundation::error::FaceResult;
use crate::foundation::math::{DMat4, DVec3};
use crate::style::paint::StrokePaint;

/// One drawing call issued by a compositor.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear(Rgba8),
    FillRect {
        rect: Rect,
        color: Rgba8,
    },
    Line {
        from: Point,
        to: Point,
        paint: StrokePaint,
    },
    Circle {
        center: Point,
        radius: f64,
        /// Fill the disc with `paint.color` instead of stroking its outline.
        fill: bool,
        paint: StrokePaint,
    },
    /// Model-space triangle list (three vertices per triangle) with its
    /// model-view-projection matrix.
    Triangles {
        vertices: Arc<[DVec3]>,
        mvp: DMat4,
        color: Rgba8,
    },
    Text {
        origin: Point,
        text: String,
        size: f64,
        color: Rgba8,
    },
}

impl DrawCommand {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Clear(_) => "clear",
            Self::FillRect { .. } => "fill_rect",
            Self::Line { .. } => "line",
            Self::Circle { .. } => "circle",
            Self::Triangles { .. } => "triangles",
            Self::Text { .. } => "text",
        }
    }
}

/// Abstract drawing target.
pub trait Surface {
    fn size(&self) -> SurfaceSize;

    fn submit(&mut self, cmd: DrawCommand) -> FaceResult<()>;
}

/// Surface that only records what was drawn.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    size: SurfaceSize,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn count(&self, kind: &str) -> usize {
        self.commands.iter().filter(|c| c.kind() == kind).count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn submit(&mut self, cmd: DrawCommand) -> FaceResult<()> {
        self.commands.push(cmd);
        Ok(())
    }
}
