use super::*;
use crate::complication::drawable::BasicComplicationDrawable;
use crate::complication::model::{ComplicationRecord, ComplicationType, SlotDescriptor};
use crate::complication::registry::ComplicationRegistry;
use crate::foundation::core::Rgba8;
use crate::mode::state::{DisplayCapabilities, ModeState};
use crate::render::surface::RecordingSurface;
use crate::style::paint::{FaceColors, PaintStyles};
use crate::time::dial::TimeOfDay;
use serde_json::json;

struct Fixture {
    registry: ComplicationRegistry,
    mode: ModeState,
    styles: PaintStyles,
}

impl Fixture {
    fn new(ambient: bool) -> Self {
        let mut registry = ComplicationRegistry::register_slots(SlotDescriptor::defaults()).unwrap();
        registry.resize_bounds(400, 400).unwrap();
        registry
            .update_slot_data(
                1,
                ComplicationRecord::new(ComplicationType::ShortText, json!("MON")),
            )
            .unwrap();
        let mut mode = ModeState::default();
        mode.report_capabilities(DisplayCapabilities {
            low_bit_ambient: true,
            burn_in_protection: false,
        })
        .unwrap();
        mode.set_ambient(ambient);
        registry.apply_mode(&mode);
        let styles = PaintStyles::resolve(&FaceColors::default(), &mode);
        Self {
            registry,
            mode,
            styles,
        }
    }

    fn draw(&self, unread_count: u32) -> RecordingSurface {
        let frame = FrameContext {
            now_ms: 0,
            time: TimeOfDay {
                hour: 3,
                minute: 0,
                second: 0,
                millisecond: 0,
            },
            mode: &self.mode,
            styles: &self.styles,
            registry: &self.registry,
            drawable: &BasicComplicationDrawable,
            unread_count,
        };
        let mut surface = RecordingSurface::new(SurfaceSize::new(400, 400));
        CanvasCompositor::new().compose(&frame, &mut surface).unwrap();
        surface
    }
}

#[test]
fn interactive_frame_order() {
    let f = Fixture::new(false);
    let s = f.draw(0);
    let kinds: Vec<&str> = s.commands().iter().map(|c| c.kind()).collect();
    assert_eq!(kinds[0], "clear");
    // Complication ring and label come before the dial.
    assert_eq!(&kinds[1..3], &["circle", "text"]);
    assert_eq!(s.count("line"), 12 + 3);
    assert_eq!(kinds.last(), Some(&"circle"));
    assert_eq!(s.commands()[0], DrawCommand::Clear(Rgba8::BLACK));
}

#[test]
fn ambient_drops_second_hand_and_forces_black() {
    let f = Fixture::new(true);
    let s = f.draw(0);
    assert_eq!(s.count("line"), 12 + 2);
    assert_eq!(s.commands()[0], DrawCommand::Clear(Rgba8::BLACK));
    for c in s.commands() {
        if let DrawCommand::Line { paint, .. } = c {
            assert!(!paint.anti_alias);
        }
    }
}

#[test]
fn hour_hand_points_at_three() {
    let f = Fixture::new(false);
    let s = f.draw(0);
    let hour = s
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Line { from, to, paint } if paint.width == 5.0 => Some((*from, *to)),
            _ => None,
        })
        .next()
        .unwrap();
    assert!((hour.0.x - 204.0).abs() < 1e-9);
    assert!((hour.1.x - 300.0).abs() < 1e-9);
    assert!((hour.1.y - 200.0).abs() < 1e-9);
}

#[test]
fn unread_indicator_ring_and_dot() {
    let f = Fixture::new(false);
    let s = f.draw(3);
    let circles: Vec<(Point, f64, bool)> = s
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Circle {
                center,
                radius,
                fill,
                ..
            } if center.y == 360.0 => Some((*center, *radius, *fill)),
            _ => None,
        })
        .collect();
    assert_eq!(
        circles,
        vec![
            (Point::new(200.0, 360.0), UNREAD_RING_RADIUS, false),
            (Point::new(200.0, 360.0), UNREAD_DOT_RADIUS, true),
        ]
    );

    let ambient = Fixture::new(true).draw(3);
    let dots = ambient
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Circle { fill: true, .. }))
        .count();
    assert_eq!(dots, 0);
}

#[test]
fn resize_keeps_no_cache_and_rejects_zero() {
    let mut c = CanvasCompositor::new();
    assert_eq!(c.resize(SurfaceSize::new(10, 10)), Ok(false));
    assert_eq!(c.resize(SurfaceSize::new(20, 10)), Ok(false));
    assert!(c.resize(SurfaceSize::new(10, 0)).is_err());
}
