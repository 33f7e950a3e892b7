use super::*;
use serde_json::json;

#[test]
fn record_type_uses_wire_names() {
    let r: ComplicationRecord =
        serde_json::from_value(json!({"type": "RANGED_VALUE", "payload": 42})).unwrap();
    assert_eq!(r.kind, ComplicationType::RangedValue);
    assert_eq!(
        r.ranged_value(),
        Some(RangedValue {
            value: 42.0,
            min: 0.0,
            max: 100.0
        })
    );

    let bare: ComplicationRecord = serde_json::from_value(json!({"type": "EMPTY"})).unwrap();
    assert_eq!(bare, ComplicationRecord::empty());
}

#[test]
fn ranged_value_accepts_explicit_bounds() {
    let r = ComplicationRecord::new(
        ComplicationType::RangedValue,
        json!({"value": 15, "min": 10, "max": 20}),
    );
    let range = r.ranged_value().unwrap();
    assert_eq!(range.fraction(), 0.5);

    let text = ComplicationRecord::new(ComplicationType::ShortText, json!(42));
    assert_eq!(text.ranged_value(), None);
}

#[test]
fn fraction_is_clamped_and_safe_on_empty_range() {
    let over = RangedValue {
        value: 500.0,
        min: 0.0,
        max: 100.0,
    };
    assert_eq!(over.fraction(), 1.0);
    let flat = RangedValue {
        value: 3.0,
        min: 3.0,
        max: 3.0,
    };
    assert_eq!(flat.fraction(), 0.0);
}

#[test]
fn text_reads_string_or_object_payloads() {
    let a = ComplicationRecord::new(ComplicationType::ShortText, json!("MON"));
    let b = ComplicationRecord::new(ComplicationType::ShortText, json!({"text": "12"}));
    assert_eq!(a.text(), Some("MON"));
    assert_eq!(b.text(), Some("12"));
}

#[test]
fn placeholders_have_no_content() {
    for kind in [
        ComplicationType::Empty,
        ComplicationType::NotConfigured,
        ComplicationType::NoData,
        ComplicationType::NoPermission,
    ] {
        assert!(kind.is_placeholder());
        assert!(!kind.has_content());
    }
    assert!(ComplicationType::Icon.has_content());
}

#[test]
fn default_descriptors_match_the_stock_face() {
    let d = SlotDescriptor::defaults();
    assert_eq!(d.len(), 3);
    assert_eq!(d[0].placement, SlotPlacement::Background);
    assert_eq!(d[0].supported_types, vec![ComplicationType::LargeImage]);
    assert_eq!(d[1].placement, SlotPlacement::Left);
    assert_eq!(d[2].placement, SlotPlacement::Right);
    assert_eq!(d[1].supported_types, d[2].supported_types);
    assert_eq!(d[1].supported_types[0], ComplicationType::RangedValue);
}

#[test]
fn style_switches_palette_with_ambient() {
    let mut s = ComplicationStyle {
        active_border: Rgba8::RED,
        ..ComplicationStyle::default()
    };
    assert_eq!(s.border(), Rgba8::RED);
    s.ambient = true;
    assert_eq!(s.border(), Rgba8::WHITE);
    assert!(s.anti_alias());
    s.low_bit_ambient = true;
    assert!(!s.anti_alias());
}
