use super::*;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn dial_points_run_clockwise_from_twelve() {
    let c = Point::new(100.0, 100.0);
    assert!(close(dial_point(c, 10.0, 0.0), Point::new(100.0, 90.0)));
    assert!(close(dial_point(c, 10.0, 90.0), Point::new(110.0, 100.0)));
    assert!(close(dial_point(c, 10.0, 180.0), Point::new(100.0, 110.0)));
}

#[test]
fn canvas_ticks_span_the_outer_ten_pixels() {
    let c = Point::new(200.0, 200.0);
    let ticks = canvas_ticks(c, 200.0);
    assert_eq!(ticks.len(), 12);
    let (inner, outer) = ticks[3];
    assert!(close(inner, Point::new(390.0, 200.0)));
    assert!(close(outer, Point::new(400.0, 200.0)));
}

#[test]
fn hand_lengths_scale_with_radius() {
    let l = CanvasHandLengths::for_radius(200.0);
    assert_eq!(l.hour, 100.0);
    assert_eq!(l.minute, 150.0);
    assert_eq!(l.second, 175.0);
}

#[test]
fn gl_meshes_have_both_tick_sets() {
    let g = GlGeometry::new();
    assert_eq!(g.hour.vertices.len(), 3);
    assert_eq!(g.major_ticks.vertices.len(), 4 * 3);
    assert_eq!(g.minor_ticks.vertices.len(), 8 * 3);
    assert_ne!(g.major_ticks.color, g.minor_ticks.color);
    assert_eq!(g.second.color, Rgba8::RED);
}

#[test]
fn ticks_start_on_the_unit_circle() {
    let g = GlGeometry::new();
    for tri in g.minor_ticks.vertices.chunks(3) {
        assert!((tri[0].length() - 1.0).abs() < 1e-12);
        assert!(tri[1].length() > 1.0);
    }
}
