//! Fixed slot placement rule.
//!
//! Side slots are squares one quarter of the shorter surface side, centred
//! within their half of the face. All arithmetic is done on whole pixels so the
//! result is exactly reproducible for a given surface.

use crate::complication::model::SlotPlacement;
use crate::foundation::core::{Rect, SurfaceSize};

pub fn slot_bounds(placement: SlotPlacement, surface: SurfaceSize) -> Rect {
    let size = surface.shorter_side() / 4;
    let mid_x = surface.width / 2;
    let mid_y = surface.height / 2;

    let (x, y) = match placement {
        SlotPlacement::Background => return surface.bounds(),
        SlotPlacement::Left => (half_offset(mid_x, size), centred(mid_y, size)),
        SlotPlacement::Right => (mid_x + half_offset(mid_x, size), centred(mid_y, size)),
        SlotPlacement::Top => (centred(mid_x, size), half_offset(mid_y, size)),
        SlotPlacement::Bottom => (centred(mid_x, size), mid_y + half_offset(mid_y, size)),
    };

    Rect::new(
        f64::from(x),
        f64::from(y),
        f64::from(x + size),
        f64::from(y + size),
    )
}

// Offset that centres `size` inside a span of length `mid`.
fn half_offset(mid: u32, size: u32) -> u32 {
    mid.saturating_sub(size) / 2
}

fn centred(mid: u32, size: u32) -> u32 {
    mid.saturating_sub(size / 2)
}
