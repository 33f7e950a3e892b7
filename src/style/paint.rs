//! Mode-derived paint styles for the raster compositor.
//!
//! [`PaintStyles::resolve`] is a pure function of the configured colours and
//! the current mode. Every mode change re-resolves the whole set instead of
//! toggling individual attributes.

use crate::foundation::core::Rgba8;
use crate::mode::state::ModeState;
use crate::style::prefs::Preferences;

pub const HOUR_STROKE_WIDTH: f64 = 5.0;
pub const MINUTE_STROKE_WIDTH: f64 = 3.0;
pub const SECOND_TICK_STROKE_WIDTH: f64 = 2.0;
pub const SHADOW_RADIUS: f64 = 6.0;

const MUTED_HAND_ALPHA: u8 = 100;
const MUTED_SECOND_ALPHA: u8 = 80;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Rgba8,
    pub radius: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokePaint {
    pub color: Rgba8,
    pub width: f64,
    pub anti_alias: bool,
    pub round_cap: bool,
    pub shadow: Option<Shadow>,
}

impl StrokePaint {
    pub fn solid(color: Rgba8, width: f64) -> Self {
        Self {
            color,
            width,
            anti_alias: true,
            round_cap: false,
            shadow: None,
        }
    }
}

/// Colours derived from the user's preferences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceColors {
    pub background: Rgba8,
    pub highlight: Rgba8,
    pub hand: Rgba8,
    pub shadow: Rgba8,
}

impl FaceColors {
    /// Hands contrast with the background: black with a white shadow on white,
    /// white with a black shadow otherwise.
    pub fn from_preferences(prefs: &Preferences) -> Self {
        let (hand, shadow) = if prefs.background_color == Rgba8::WHITE {
            (Rgba8::BLACK, Rgba8::WHITE)
        } else {
            (Rgba8::WHITE, Rgba8::BLACK)
        };
        Self {
            background: prefs.background_color,
            highlight: prefs.highlight_color,
            hand,
            shadow,
        }
    }
}

impl Default for FaceColors {
    fn default() -> Self {
        Self::from_preferences(&Preferences::default())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintStyles {
    pub background: Rgba8,
    pub hour: StrokePaint,
    pub minute: StrokePaint,
    /// Second hand and highlight marks.
    pub second: StrokePaint,
    /// Tick marks and indicator rings.
    pub tick: StrokePaint,
}

impl PaintStyles {
    pub fn resolve(colors: &FaceColors, mode: &ModeState) -> Self {
        let ambient = mode.ambient();
        let background = if mode.forces_black_background() {
            Rgba8::BLACK
        } else {
            colors.background
        };

        let (hand, highlight, shadow) = if ambient {
            (Rgba8::WHITE, Rgba8::WHITE, None)
        } else {
            let shadow = Shadow {
                color: colors.shadow,
                radius: SHADOW_RADIUS,
            };
            (colors.hand, colors.highlight, Some(shadow))
        };

        let (hand_alpha, second_alpha) = if mode.muted() {
            (MUTED_HAND_ALPHA, MUTED_SECOND_ALPHA)
        } else {
            (255, 255)
        };

        let stroke = |color: Rgba8, width: f64| StrokePaint {
            color,
            width,
            anti_alias: !ambient,
            round_cap: true,
            shadow,
        };

        Self {
            background,
            hour: stroke(hand.with_alpha(hand_alpha), HOUR_STROKE_WIDTH),
            minute: stroke(hand.with_alpha(hand_alpha), MINUTE_STROKE_WIDTH),
            second: stroke(highlight.with_alpha(second_alpha), SECOND_TICK_STROKE_WIDTH),
            tick: stroke(hand, SECOND_TICK_STROKE_WIDTH),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/paint.rs"]
mod tests;
