use super::*;
use crate::complication::drawable::BasicComplicationDrawable;
use crate::complication::model::ComplicationType;
use crate::mode::state::DisplayCapabilities;
use serde_json::json;

fn two_slots() -> ComplicationRegistry {
    ComplicationRegistry::register_slots([
        SlotDescriptor::new(0, SlotPlacement::Background, [ComplicationType::LargeImage]),
        SlotDescriptor::new(100, SlotPlacement::Left, [ComplicationType::RangedValue]),
    ])
    .unwrap()
}

fn ranged(v: i64) -> ComplicationRecord {
    ComplicationRecord::new(ComplicationType::RangedValue, json!(v))
}

#[test]
fn rejects_empty_type_sets() {
    let err = ComplicationRegistry::register_slots([SlotDescriptor::new(
        3,
        SlotPlacement::Left,
        [],
    )])
    .unwrap_err();
    assert!(matches!(err, FaceError::Configuration(_)));
}

#[test]
fn rejects_duplicate_ids() {
    let err = ComplicationRegistry::register_slots([
        SlotDescriptor::new(1, SlotPlacement::Left, [ComplicationType::Icon]),
        SlotDescriptor::new(1, SlotPlacement::Right, [ComplicationType::Icon]),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn rejects_two_background_slots() {
    let err = ComplicationRegistry::register_slots([
        SlotDescriptor::new(0, SlotPlacement::Background, [ComplicationType::LargeImage]),
        SlotDescriptor::new(5, SlotPlacement::Background, [ComplicationType::LargeImage]),
    ])
    .unwrap_err();
    assert!(matches!(err, FaceError::Configuration(_)));
}

#[test]
fn collapses_repeated_types() {
    let r = ComplicationRegistry::register_slots([SlotDescriptor::new(
        1,
        SlotPlacement::Left,
        [
            ComplicationType::Icon,
            ComplicationType::ShortText,
            ComplicationType::Icon,
        ],
    )])
    .unwrap();
    assert_eq!(
        r.get(1).unwrap().supported_types(),
        &[ComplicationType::Icon, ComplicationType::ShortText]
    );
}

#[test]
fn iteration_is_ascending_and_restartable() {
    let r = ComplicationRegistry::register_slots([
        SlotDescriptor::new(7, SlotPlacement::Right, [ComplicationType::Icon]),
        SlotDescriptor::new(2, SlotPlacement::Left, [ComplicationType::Icon]),
        SlotDescriptor::new(0, SlotPlacement::Background, [ComplicationType::LargeImage]),
    ])
    .unwrap();
    let first: Vec<u32> = r.iter().map(|s| s.id()).collect();
    let second: Vec<u32> = r.slot_ids().collect();
    assert_eq!(first, vec![0, 2, 7]);
    assert_eq!(first, second);

    let mut visited = Vec::new();
    r.for_each_slot(|s| visited.push(s.id()));
    assert_eq!(visited, first);
}

#[test]
fn unknown_slot_update_is_a_warning_and_changes_nothing() {
    let mut r = two_slots();
    let before: Vec<_> = r.iter().cloned().collect();
    assert_eq!(
        r.update_slot_data(42, ranged(1)),
        Err(FaceWarning::UnknownSlot { slot_id: 42 })
    );
    let after: Vec<_> = r.iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn unsupported_type_is_dropped_but_placeholders_pass() {
    let mut r = two_slots();
    let icon = ComplicationRecord::new(ComplicationType::Icon, json!(null));
    assert_eq!(
        r.update_slot_data(100, icon),
        Err(FaceWarning::UnsupportedType {
            slot_id: 100,
            kind: ComplicationType::Icon
        })
    );
    assert!(r.get(100).unwrap().data().is_none());

    r.update_slot_data(100, ComplicationRecord::empty()).unwrap();
    assert_eq!(
        r.get(100).unwrap().data().map(|d| d.kind),
        Some(ComplicationType::Empty)
    );
}

#[test]
fn updates_replace_data_wholesale() {
    let mut r = two_slots();
    r.update_slot_data(
        100,
        ComplicationRecord::new(
            ComplicationType::RangedValue,
            json!({"value": 1, "max": 5}),
        ),
    )
    .unwrap();
    r.update_slot_data(100, ranged(42)).unwrap();
    assert_eq!(r.get(100).unwrap().data(), Some(&ranged(42)));
}

#[test]
fn resize_is_idempotent() {
    let mut r = two_slots();
    assert_eq!(r.resize_bounds(400, 400), Ok(true));
    let first: Vec<Rect> = r.iter().map(|s| s.bounds()).collect();
    assert_eq!(r.resize_bounds(400, 400), Ok(false));
    let second: Vec<Rect> = r.iter().map(|s| s.bounds()).collect();
    assert_eq!(first, second);
    assert_eq!(first[0], Rect::new(0.0, 0.0, 400.0, 400.0));
    assert_eq!(first[1], Rect::new(50.0, 150.0, 150.0, 250.0));
}

#[test]
fn degenerate_resize_keeps_previous_bounds() {
    let mut r = two_slots();
    r.resize_bounds(400, 400).unwrap();
    assert_eq!(
        r.resize_bounds(0, 400),
        Err(FaceWarning::DegenerateSurface {
            width: 0,
            height: 400
        })
    );
    assert_eq!(r.surface(), Some(SurfaceSize::new(400, 400)));
    assert_eq!(r.get(100).unwrap().bounds(), Rect::new(50.0, 150.0, 150.0, 250.0));
}

#[test]
fn tap_goes_to_lowest_claiming_id() {
    let mut r = ComplicationRegistry::register_slots([
        SlotDescriptor::new(4, SlotPlacement::Left, [ComplicationType::ShortText]),
        SlotDescriptor::new(9, SlotPlacement::Left, [ComplicationType::ShortText]),
        SlotDescriptor::new(12, SlotPlacement::Right, [ComplicationType::ShortText]),
    ])
    .unwrap();
    r.resize_bounds(400, 400).unwrap();
    let text = ComplicationRecord::new(ComplicationType::ShortText, json!("hi"));
    for id in [4, 9, 12] {
        r.update_slot_data(id, text.clone()).unwrap();
    }

    let d = BasicComplicationDrawable;
    assert_eq!(
        r.dispatch_tap(Point::new(100.0, 200.0), 0, &d),
        TapOutcome::Claimed { slot_id: 4 }
    );
    assert_eq!(
        r.dispatch_tap(Point::new(300.0, 200.0), 0, &d),
        TapOutcome::Claimed { slot_id: 12 }
    );
    assert_eq!(
        r.dispatch_tap(Point::new(5.0, 5.0), 0, &d),
        TapOutcome::Unclaimed
    );
}

#[test]
fn slots_without_content_do_not_claim_taps() {
    let mut r = two_slots();
    r.resize_bounds(400, 400).unwrap();
    let d = BasicComplicationDrawable;
    let inside = Point::new(100.0, 200.0);
    assert_eq!(r.dispatch_tap(inside, 0, &d), TapOutcome::Unclaimed);

    r.update_slot_data(100, ComplicationRecord::empty()).unwrap();
    assert_eq!(r.dispatch_tap(inside, 0, &d), TapOutcome::Unclaimed);

    r.update_slot_data(100, ranged(42)).unwrap();
    assert_eq!(
        r.dispatch_tap(inside, 0, &d),
        TapOutcome::Claimed { slot_id: 100 }
    );
}

#[test]
fn highlight_color_skips_background_slot() {
    let mut r = two_slots();
    r.apply_highlight_color(Rgba8::opaque(0, 128, 255));
    let bg = r.get(0).unwrap().style();
    assert_eq!(bg.fallback_fill, Some(Rgba8::BLACK));
    assert_eq!(bg.active_border, Rgba8::WHITE);

    let side = r.get(100).unwrap().style();
    assert_eq!(side.active_border, Rgba8::opaque(0, 128, 255));
    assert_eq!(side.ambient_border, Rgba8::WHITE);
    assert_eq!(side.fallback_fill, None);
}

#[test]
fn mode_is_mirrored_into_every_style() {
    let mut r = two_slots();
    let mut m = ModeState::default();
    m.report_capabilities(DisplayCapabilities {
        low_bit_ambient: true,
        burn_in_protection: true,
    })
    .unwrap();
    m.set_ambient(true);
    r.apply_mode(&m);
    for s in r.iter() {
        assert!(s.style().ambient);
        assert!(s.style().low_bit_ambient);
        assert!(s.style().burn_in_protection);
    }
}
