use crate::foundation::core::{Rect, Rgba8};

/// Type tag carried by every complication record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplicationType {
    Empty,
    NotConfigured,
    NoData,
    NoPermission,
    ShortText,
    LongText,
    RangedValue,
    Icon,
    SmallImage,
    LargeImage,
}

impl ComplicationType {
    /// Placeholder states a provider may send to any slot.
    pub fn is_placeholder(self) -> bool {
        matches!(
            self,
            Self::Empty | Self::NotConfigured | Self::NoData | Self::NoPermission
        )
    }

    /// Whether a record of this type has anything to draw or tap.
    pub fn has_content(self) -> bool {
        !self.is_placeholder()
    }
}

/// One data update from a provider. Replaces the slot's previous record wholesale.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComplicationRecord {
    #[serde(rename = "type")]
    pub kind: ComplicationType,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl ComplicationRecord {
    pub fn new(kind: ComplicationType, payload: serde_json::Value) -> Self {
        Self { kind, payload }
    }

    pub fn empty() -> Self {
        Self::new(ComplicationType::Empty, serde_json::Value::Null)
    }

    /// Numeric payload of a ranged value: either a bare number or `{"value": n, "min": a, "max": b}`.
    pub fn ranged_value(&self) -> Option<RangedValue> {
        if self.kind != ComplicationType::RangedValue {
            return None;
        }
        match &self.payload {
            serde_json::Value::Number(n) => n.as_f64().map(|value| RangedValue {
                value,
                min: 0.0,
                max: 100.0,
            }),
            serde_json::Value::Object(map) => {
                let value = map.get("value")?.as_f64()?;
                let min = map.get("min").and_then(|v| v.as_f64()).unwrap_or(0.0);
                let max = map.get("max").and_then(|v| v.as_f64()).unwrap_or(100.0);
                Some(RangedValue { value, min, max })
            }
            _ => None,
        }
    }

    /// Short display text: a bare string or `{"text": ".."}`.
    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            serde_json::Value::String(s) => Some(s.as_str()),
            serde_json::Value::Object(map) => map.get("text").and_then(|v| v.as_str()),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangedValue {
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl RangedValue {
    /// Position of `value` within `[min, max]`, clamped to `[0, 1]`.
    pub fn fraction(self) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 || !span.is_finite() {
            return 0.0;
        }
        ((self.value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// Where a slot sits on the face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotPlacement {
    Background,
    Left,
    Right,
    Top,
    Bottom,
}

/// Static declaration of one slot, supplied once at setup.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlotDescriptor {
    pub id: u32,
    pub placement: SlotPlacement,
    pub supported_types: Vec<ComplicationType>,
}

impl SlotDescriptor {
    pub fn new(
        id: u32,
        placement: SlotPlacement,
        supported_types: impl IntoIterator<Item = ComplicationType>,
    ) -> Self {
        Self {
            id,
            placement,
            supported_types: supported_types.into_iter().collect(),
        }
    }

    /// Background 0, left 1, right 2.
    pub fn defaults() -> Vec<Self> {
        let small = [
            ComplicationType::RangedValue,
            ComplicationType::Icon,
            ComplicationType::ShortText,
            ComplicationType::SmallImage,
        ];
        vec![
            Self::new(0, SlotPlacement::Background, [ComplicationType::LargeImage]),
            Self::new(1, SlotPlacement::Left, small),
            Self::new(2, SlotPlacement::Right, small),
        ]
    }
}

/// Colours and mode flags a drawable needs for one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComplicationStyle {
    pub active_border: Rgba8,
    pub active_primary: Rgba8,
    pub ambient_border: Rgba8,
    pub ambient_primary: Rgba8,
    /// Solid fill used by background slots in place of any border styling.
    pub fallback_fill: Option<Rgba8>,
    pub ambient: bool,
    pub low_bit_ambient: bool,
    pub burn_in_protection: bool,
}

impl Default for ComplicationStyle {
    fn default() -> Self {
        Self {
            active_border: Rgba8::WHITE,
            active_primary: Rgba8::WHITE,
            ambient_border: Rgba8::WHITE,
            ambient_primary: Rgba8::WHITE,
            fallback_fill: None,
            ambient: false,
            low_bit_ambient: false,
            burn_in_protection: false,
        }
    }
}

impl ComplicationStyle {
    pub fn border(&self) -> Rgba8 {
        if self.ambient {
            self.ambient_border
        } else {
            self.active_border
        }
    }

    pub fn primary(&self) -> Rgba8 {
        if self.ambient {
            self.ambient_primary
        } else {
            self.active_primary
        }
    }

    /// Anti-aliasing is only safe outside low-bit ambient.
    pub fn anti_alias(&self) -> bool {
        !(self.ambient && self.low_bit_ambient)
    }
}

/// One registered slot and its runtime state.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplicationSlot {
    pub(crate) id: u32,
    pub(crate) placement: SlotPlacement,
    pub(crate) supported_types: Vec<ComplicationType>,
    pub(crate) bounds: Rect,
    pub(crate) data: Option<ComplicationRecord>,
    pub(crate) style: ComplicationStyle,
}

impl ComplicationSlot {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn placement(&self) -> SlotPlacement {
        self.placement
    }

    pub fn is_background(&self) -> bool {
        self.placement == SlotPlacement::Background
    }

    pub fn supported_types(&self) -> &[ComplicationType] {
        &self.supported_types
    }

    pub fn supports(&self, kind: ComplicationType) -> bool {
        kind.is_placeholder() || self.supported_types.contains(&kind)
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn data(&self) -> Option<&ComplicationRecord> {
        self.data.as_ref()
    }

    pub fn style(&self) -> &ComplicationStyle {
        &self.style
    }

    /// Whether the slot currently shows something a user could tap.
    pub fn has_content(&self) -> bool {
        self.data.as_ref().is_some_and(|d| d.kind.has_content())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/complication/model.rs"]
mod tests;
