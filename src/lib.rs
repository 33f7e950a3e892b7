//! Tickface is the render-scheduling and mode-state engine of an analog watch
//! face for small, power-constrained displays.
//!
//! The host feeds lifecycle and data events into a [`WatchFaceEngine`]:
//!
//! - it tracks interactive/ambient mode and display capabilities,
//! - arms at most one wake-up, phase-locked to the tick boundary, while the face
//!   is visible and interactive,
//! - keeps the complication slots, their bounds and their latest data,
//! - draws through a flat 2D compositor or a 3D compositor with cached
//!   camera transforms, onto any [`Surface`].
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod complication;
/// Engine configuration.
pub mod config;
pub(crate) mod engine;
pub(crate) mod mode;
pub(crate) mod render;
pub(crate) mod schedule;
/// Deterministic simulation on a manual clock.
pub mod sim;
pub(crate) mod style;
pub(crate) mod time;

pub use crate::foundation::core::{BezPath, Point, Rect, Rgba8, SurfaceSize};
pub use crate::foundation::error::{FaceError, FaceResult, FaceWarning};
pub use crate::foundation::math::{DMat4, DVec3, DVec4, Frustum};

pub use crate::complication::drawable::{BasicComplicationDrawable, ComplicationDrawable};
pub use crate::complication::layout::slot_bounds;
pub use crate::complication::model::{
    ComplicationRecord, ComplicationSlot, ComplicationStyle, ComplicationType, RangedValue,
    SlotDescriptor, SlotPlacement,
};
pub use crate::complication::registry::{ComplicationRegistry, TapOutcome};
pub use crate::config::{CameraConfig, EngineConfig};
pub use crate::engine::events::{EventResponse, HostEvent, TapKind, TapStats};
pub use crate::engine::face::WatchFaceEngine;
pub use crate::engine::host::{Environment, FixedEnvironment, HostServices, LocalEnvironment};
pub use crate::mode::state::{DisplayCapabilities, ModeState};
pub use crate::render::backend::{
    BackendKind, FaceCompositor, FrameContext, FrameRGBA, create_compositor,
};
pub use crate::render::canvas::CanvasCompositor;
pub use crate::render::geometry::{GlGeometry, Mesh};
pub use crate::render::gl::GlCompositor;
pub use crate::render::raster::RasterSurface;
pub use crate::render::surface::{DrawCommand, RecordingSurface, Surface};
pub use crate::render::transform_cache::TransformCache;
pub use crate::schedule::ticker::{
    PendingWakeup, PolledTimer, TickScheduler, TimerDriver, TimerFire, TimerToken,
    delay_to_next_tick,
};
pub use crate::sim::Simulator;
pub use crate::style::paint::{FaceColors, PaintStyles, Shadow, StrokePaint};
pub use crate::style::prefs::{PreferenceSource, Preferences, StaticPreferences};
pub use crate::time::clock::{Clock, ManualClock, SystemClock};
pub use crate::time::dial::{HandAngles, TimeOfDay};
