use super::*;
use std::sync::Arc;

#[test]
fn rejects_empty_and_oversized_surfaces() {
    assert!(RasterSurface::new(SurfaceSize::new(0, 10)).is_err());
    assert!(RasterSurface::new(SurfaceSize::new(70_000, 10)).is_err());
}

#[test]
fn clear_and_rect_fill_pixels() {
    let mut s = RasterSurface::new(SurfaceSize::new(16, 16)).unwrap();
    s.submit(DrawCommand::Clear(Rgba8::RED)).unwrap();
    s.submit(DrawCommand::FillRect {
        rect: crate::foundation::core::Rect::new(8.0, 0.0, 16.0, 16.0),
        color: Rgba8::WHITE,
    })
    .unwrap();
    let frame = s.render_frame().unwrap();
    assert!(frame.premultiplied);
    assert_eq!(frame.data.len(), 16 * 16 * 4);
    assert_eq!(frame.pixel(2, 8), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(12, 8), Some([255, 255, 255, 255]));
    assert!(s.pending().is_empty());
}

#[test]
fn filled_circle_covers_its_center_only() {
    let mut s = RasterSurface::new(SurfaceSize::new(32, 32)).unwrap();
    s.submit(DrawCommand::Clear(Rgba8::BLACK)).unwrap();
    s.submit(DrawCommand::Circle {
        center: Point::new(16.0, 16.0),
        radius: 6.0,
        fill: true,
        paint: StrokePaint::solid(Rgba8::WHITE, 1.0),
    })
    .unwrap();
    let frame = s.render_frame().unwrap();
    assert_eq!(frame.pixel(16, 16), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(1, 1), Some([0, 0, 0, 255]));
}

#[test]
fn full_screen_triangle_is_projected() {
    let mut s = RasterSurface::new(SurfaceSize::new(8, 8)).unwrap();
    s.submit(DrawCommand::Triangles {
        vertices: Arc::from([
            DVec3::new(-1.0, -1.0, 0.0),
            DVec3::new(3.0, -1.0, 0.0),
            DVec3::new(-1.0, 3.0, 0.0),
        ]),
        mvp: DMat4::IDENTITY,
        color: Rgba8::WHITE,
    })
    .unwrap();
    let frame = s.render_frame().unwrap();
    assert_eq!(frame.pixel(4, 4), Some([255, 255, 255, 255]));
}

#[test]
fn projection_maps_ndc_to_pixels_with_y_down() {
    let tri = [
        DVec3::new(-1.0, 1.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(0.0, -1.0, 0.0),
    ];
    let path = project_triangle(&DMat4::IDENTITY, &tri, SurfaceSize::new(100, 50)).unwrap();
    let pts: Vec<kurbo::PathEl> = path.elements().to_vec();
    assert_eq!(pts[0], kurbo::PathEl::MoveTo(Point::new(0.0, 0.0)));
    assert_eq!(pts[1], kurbo::PathEl::LineTo(Point::new(100.0, 0.0)));
    assert_eq!(pts[2], kurbo::PathEl::LineTo(Point::new(50.0, 50.0)));
}

#[test]
fn triangles_behind_the_camera_are_dropped() {
    let mut flip = DMat4::IDENTITY;
    flip.w_axis.w = -1.0;
    let tri = [DVec3::ZERO, DVec3::Y, DVec3::X];
    assert!(project_triangle(&flip, &tri, SurfaceSize::new(10, 10)).is_none());
}

#[test]
fn text_is_skipped_without_error() {
    let mut s = RasterSurface::new(SurfaceSize::new(4, 4)).unwrap();
    s.submit(DrawCommand::Text {
        origin: Point::ZERO,
        text: "42".into(),
        size: 10.0,
        color: Rgba8::WHITE,
    })
    .unwrap();
    let frame = s.render_frame().unwrap();
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 0]));
}
