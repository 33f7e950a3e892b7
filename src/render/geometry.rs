//! Static hand and tick shapes for both backends.

use std::sync::Arc;

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::math::{DVec3, rotation_z_degrees};

pub const CANVAS_TICK_COUNT: usize = 12;
pub const CANVAS_TICK_LENGTH: f64 = 10.0;
pub const CENTER_GAP_RADIUS: f64 = 4.0;

const HOUR_HAND_FRACTION: f64 = 0.5;
const MINUTE_HAND_FRACTION: f64 = 0.75;
const SECOND_HAND_FRACTION: f64 = 0.875;

/// Point at `radius` from `center`, `degrees` clockwise from 12 o'clock.
pub fn dial_point(center: Point, radius: f64, degrees: f64) -> Point {
    let (s, c) = degrees.to_radians().sin_cos();
    Point::new(center.x + s * radius, center.y - c * radius)
}

/// Raster hand lengths, proportional to the horizontal radius of the face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasHandLengths {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl CanvasHandLengths {
    pub fn for_radius(radius: f64) -> Self {
        Self {
            hour: radius * HOUR_HAND_FRACTION,
            minute: radius * MINUTE_HAND_FRACTION,
            second: radius * SECOND_HAND_FRACTION,
        }
    }
}

/// Inner and outer end of each of the twelve raster tick marks.
pub fn canvas_ticks(center: Point, radius: f64) -> Vec<(Point, Point)> {
    let inner = radius - CANVAS_TICK_LENGTH;
    (0..CANVAS_TICK_COUNT)
        .map(|i| {
            let deg = i as f64 * 360.0 / CANVAS_TICK_COUNT as f64;
            (dial_point(center, inner, deg), dial_point(center, radius, deg))
        })
        .collect()
}

/// One 3D triangle list and its flat colour.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub vertices: Arc<[DVec3]>,
    pub color: Rgba8,
}

/// Immutable model-space meshes for the 3D face.
///
/// Hands point along +Y from the origin; ticks sit just outside the unit circle.
#[derive(Clone, Debug, PartialEq)]
pub struct GlGeometry {
    pub hour: Mesh,
    pub minute: Mesh,
    pub second: Mesh,
    pub major_ticks: Mesh,
    pub minor_ticks: Mesh,
}

impl GlGeometry {
    pub fn new() -> Self {
        let major_angles: Vec<f64> = (0..4).map(|i| f64::from(i) * 90.0).collect();
        let minor_angles: Vec<f64> = (0..12)
            .filter(|i| i % 3 != 0)
            .map(|i| f64::from(i) * 30.0)
            .collect();

        Self {
            hour: Mesh {
                vertices: hand_triangle(0.1, 0.6),
                color: Rgba8::from_unit(0.9, 0.9, 0.9, 1.0),
            },
            minute: Mesh {
                vertices: hand_triangle(0.06, 1.0),
                color: Rgba8::from_unit(0.7, 0.7, 0.7, 1.0),
            },
            second: Mesh {
                vertices: hand_triangle(0.02, 1.0),
                color: Rgba8::from_unit(1.0, 0.0, 0.0, 1.0),
            },
            major_ticks: Mesh {
                vertices: tick_triangles(&major_angles, 0.03, 0.09),
                color: Rgba8::WHITE,
            },
            minor_ticks: Mesh {
                vertices: tick_triangles(&minor_angles, 0.02, 0.06),
                color: Rgba8::from_unit(0.5, 0.5, 0.5, 1.0),
            },
        }
    }
}

impl Default for GlGeometry {
    fn default() -> Self {
        Self::new()
    }
}

fn hand_triangle(width: f64, length: f64) -> Arc<[DVec3]> {
    Arc::from([
        DVec3::new(0.0, length, 0.0),
        DVec3::new(-width / 2.0, 0.0, 0.0),
        DVec3::new(width / 2.0, 0.0, 0.0),
    ])
}

// Counter-clockwise about +Z, matching the model matrices.
fn tick_triangles(angles_deg: &[f64], width: f64, length: f64) -> Arc<[DVec3]> {
    let base = [
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(width / 2.0, length + 1.0, 0.0),
        DVec3::new(-width / 2.0, length + 1.0, 0.0),
    ];
    angles_deg
        .iter()
        .flat_map(|deg| {
            let rotation = rotation_z_degrees(*deg);
            base.map(|v| rotation.transform_point3(v))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/geometry.rs"]
mod tests;
