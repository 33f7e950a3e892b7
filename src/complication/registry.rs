use std::collections::BTreeMap;

use crate::complication::drawable::ComplicationDrawable;
use crate::complication::layout::slot_bounds;
use crate::complication::model::{
    ComplicationRecord, ComplicationSlot, ComplicationStyle, SlotDescriptor, SlotPlacement,
};
use crate::foundation::core::{Point, Rect, Rgba8, SurfaceSize};
use crate::foundation::error::{FaceError, FaceResult, FaceWarning};
use crate::mode::state::ModeState;

/// Result of routing a tap through the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    Claimed { slot_id: u32 },
    Unclaimed,
}

/// Owns every complication slot, keyed and iterated by ascending id.
#[derive(Clone, Debug, Default)]
pub struct ComplicationRegistry {
    slots: BTreeMap<u32, ComplicationSlot>,
    surface: Option<SurfaceSize>,
}

impl ComplicationRegistry {
    /// Build the registry from static descriptors.
    ///
    /// Rejects empty supported-type sets, duplicate ids and more than one
    /// background slot. Duplicate types within one descriptor are collapsed,
    /// keeping first-seen order.
    pub fn register_slots(
        descriptors: impl IntoIterator<Item = SlotDescriptor>,
    ) -> FaceResult<Self> {
        let mut slots = BTreeMap::new();
        let mut background: Option<u32> = None;

        for d in descriptors {
            if d.supported_types.is_empty() {
                return Err(FaceError::configuration(format!(
                    "complication slot {} declares no supported types",
                    d.id
                )));
            }
            if slots.contains_key(&d.id) {
                return Err(FaceError::configuration(format!(
                    "duplicate complication slot id {}",
                    d.id
                )));
            }
            if d.placement == SlotPlacement::Background {
                if let Some(prev) = background {
                    return Err(FaceError::configuration(format!(
                        "complication slots {prev} and {} are both background slots",
                        d.id
                    )));
                }
                background = Some(d.id);
            }

            let mut supported_types = Vec::with_capacity(d.supported_types.len());
            for t in d.supported_types {
                if !supported_types.contains(&t) {
                    supported_types.push(t);
                }
            }

            let mut style = ComplicationStyle::default();
            if d.placement == SlotPlacement::Background {
                style.fallback_fill = Some(Rgba8::BLACK);
            }

            slots.insert(
                d.id,
                ComplicationSlot {
                    id: d.id,
                    placement: d.placement,
                    supported_types,
                    bounds: Rect::ZERO,
                    data: None,
                    style,
                },
            );
        }

        tracing::debug!(slots = slots.len(), "registered complication slots");
        Ok(Self {
            slots,
            surface: None,
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, slot_id: u32) -> Option<&ComplicationSlot> {
        self.slots.get(&slot_id)
    }

    /// Surface the current bounds were computed for, if any.
    pub fn surface(&self) -> Option<SurfaceSize> {
        self.surface
    }

    /// Ascending-id traversal. Each call starts a fresh pass.
    pub fn iter(&self) -> impl Iterator<Item = &ComplicationSlot> + '_ {
        self.slots.values()
    }

    pub fn slot_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.slots.keys().copied()
    }

    pub fn for_each_slot(&self, mut visitor: impl FnMut(&ComplicationSlot)) {
        for slot in self.iter() {
            visitor(slot);
        }
    }

    /// Replace the data of an existing slot.
    ///
    /// Unknown ids and unsupported content types leave the registry untouched.
    pub fn update_slot_data(
        &mut self,
        slot_id: u32,
        record: ComplicationRecord,
    ) -> Result<(), FaceWarning> {
        let slot = self
            .slots
            .get_mut(&slot_id)
            .ok_or(FaceWarning::UnknownSlot { slot_id })?;
        if !slot.supports(record.kind) {
            return Err(FaceWarning::UnsupportedType {
                slot_id,
                kind: record.kind,
            });
        }
        slot.data = Some(record);
        Ok(())
    }

    /// Recompute every slot's bounds for a `width`×`height` surface.
    ///
    /// Returns `Ok(false)` when the size is unchanged. A zero dimension keeps the
    /// previous bounds.
    pub fn resize_bounds(&mut self, width: u32, height: u32) -> Result<bool, FaceWarning> {
        let surface = SurfaceSize::new(width, height);
        if surface.is_degenerate() {
            return Err(FaceWarning::DegenerateSurface { width, height });
        }
        if self.surface == Some(surface) {
            return Ok(false);
        }
        for slot in self.slots.values_mut() {
            slot.bounds = slot_bounds(slot.placement, surface);
        }
        self.surface = Some(surface);
        Ok(true)
    }

    /// Offer a tap to each slot in ascending id order; the first claimant wins.
    pub fn dispatch_tap(
        &self,
        point: Point,
        event_time_ms: u64,
        drawable: &dyn ComplicationDrawable,
    ) -> TapOutcome {
        let claimed = self.iter().find(|slot| drawable.hit_test(slot, point));
        match claimed {
            Some(slot) => {
                tracing::debug!(slot_id = slot.id, x = point.x, y = point.y, event_time_ms, "tap claimed");
                TapOutcome::Claimed { slot_id: slot.id }
            }
            None => {
                tracing::trace!(x = point.x, y = point.y, event_time_ms, "tap unclaimed");
                TapOutcome::Unclaimed
            }
        }
    }

    /// Active colours follow the highlight colour, ambient colours are white.
    /// Background slots keep only their solid fallback.
    pub fn apply_highlight_color(&mut self, highlight: Rgba8) {
        for slot in self.slots.values_mut() {
            if slot.is_background() {
                slot.style.fallback_fill = Some(Rgba8::BLACK);
                continue;
            }
            slot.style.active_border = highlight;
            slot.style.active_primary = highlight;
            slot.style.ambient_border = Rgba8::WHITE;
            slot.style.ambient_primary = Rgba8::WHITE;
        }
    }

    /// Mirror the display mode into every slot style.
    pub fn apply_mode(&mut self, mode: &ModeState) {
        for slot in self.slots.values_mut() {
            slot.style.ambient = mode.ambient();
            slot.style.low_bit_ambient = mode.low_bit_ambient();
            slot.style.burn_in_protection = mode.burn_in_protection();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/complication/registry.rs"]
mod tests;
