use crate::complication::model::ComplicationRecord;
use crate::complication::registry::TapOutcome;
use crate::foundation::core::Point;
use crate::foundation::error::FaceWarning;
use crate::mode::state::DisplayCapabilities;
use crate::schedule::ticker::TimerToken;

/// Touch classification delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TapKind {
    /// Finger down.
    Touch,
    /// The touch turned into a gesture and was cancelled.
    TouchCancel,
    /// A completed tap; the only kind routed to complications.
    Tap,
}

/// Everything the host can tell the engine. Delivered one at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    VisibilityChanged(bool),
    AmbientChanged(bool),
    PropertiesChanged(DisplayCapabilities),
    MuteChanged(bool),
    SurfaceResized {
        width: u32,
        height: u32,
    },
    Tap {
        kind: TapKind,
        x: f64,
        y: f64,
        event_time_ms: u64,
    },
    UnreadCountChanged(u32),
    ComplicationDataUpdated {
        slot_id: u32,
        record: ComplicationRecord,
    },
    /// Coarse host tick, typically once a minute in ambient.
    TimeTick,
    TimeZoneChanged,
    TimerFired(TimerToken),
    Destroy,
}

impl HostEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::VisibilityChanged(_) => "visibility_changed",
            Self::AmbientChanged(_) => "ambient_changed",
            Self::PropertiesChanged(_) => "properties_changed",
            Self::MuteChanged(_) => "mute_changed",
            Self::SurfaceResized { .. } => "surface_resized",
            Self::Tap { .. } => "tap",
            Self::UnreadCountChanged(_) => "unread_count_changed",
            Self::ComplicationDataUpdated { .. } => "complication_data_updated",
            Self::TimeTick => "time_tick",
            Self::TimeZoneChanged => "time_zone_changed",
            Self::TimerFired(_) => "timer_fired",
            Self::Destroy => "destroy",
        }
    }
}

/// What handling one event produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventResponse {
    /// Set for completed taps only.
    pub tap: Option<TapOutcome>,
    /// Whether a redraw is outstanding after this event.
    pub redraw_requested: bool,
    /// Diagnostic that was logged and swallowed.
    pub warning: Option<FaceWarning>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TapStats {
    pub touches: u64,
    pub cancels: u64,
    pub taps: u64,
    pub last_touch: Option<Point>,
}

impl TapStats {
    pub(crate) fn record(&mut self, kind: TapKind, point: Point) {
        match kind {
            TapKind::Touch => self.touches += 1,
            TapKind::TouchCancel => self.cancels += 1,
            TapKind::Tap => self.taps += 1,
        }
        self.last_touch = Some(point);
    }
}
