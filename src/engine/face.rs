//! The watch-face engine: one event at a time in, draw commands out.
//!
//! Hosts feed [`HostEvent`]s through [`WatchFaceEngine::dispatch`] and call
//! [`WatchFaceEngine::draw_if_needed`] whenever they can draw. Any number of
//! redraw requests between two draws collapse into one frame.

use chrono::FixedOffset;

use crate::complication::drawable::ComplicationDrawable;
use crate::complication::registry::{ComplicationRegistry, TapOutcome};
use crate::config::EngineConfig;
use crate::engine::events::{EventResponse, HostEvent, TapKind, TapStats};
use crate::engine::host::{Environment, HostServices};
use crate::foundation::core::{Point, SurfaceSize};
use crate::foundation::error::{FaceResult, FaceWarning};
use crate::mode::state::{DisplayCapabilities, ModeState};
use crate::render::backend::{BackendKind, FaceCompositor, FrameContext, create_compositor};
use crate::render::surface::Surface;
use crate::schedule::ticker::{PendingWakeup, TickScheduler, TimerFire, TimerToken};
use crate::style::paint::{FaceColors, PaintStyles};
use crate::style::prefs::{PreferenceSource, Preferences};
use crate::time::clock::Clock;
use crate::time::dial::TimeOfDay;

pub struct WatchFaceEngine {
    mode: ModeState,
    visible: bool,
    destroyed: bool,
    scheduler: TickScheduler,
    registry: ComplicationRegistry,
    compositor: Box<dyn FaceCompositor>,
    preferences: Preferences,
    colors: FaceColors,
    styles: PaintStyles,
    unread_count: u32,
    utc_offset: FixedOffset,
    listener_attached: bool,
    surface: Option<SurfaceSize>,
    tap_stats: TapStats,
    draw_count: u64,
    clock: Box<dyn Clock>,
    environment: Box<dyn Environment>,
    preference_source: Box<dyn PreferenceSource>,
    drawable: Box<dyn ComplicationDrawable>,
}

impl std::fmt::Debug for WatchFaceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchFaceEngine")
            .field("mode", &self.mode)
            .field("visible", &self.visible)
            .field("destroyed", &self.destroyed)
            .field("scheduler", &self.scheduler)
            .field("backend", &self.compositor.kind())
            .field("surface", &self.surface)
            .field("draw_count", &self.draw_count)
            .finish_non_exhaustive()
    }
}

impl WatchFaceEngine {
    /// Validate `config`, register the complication slots and build the
    /// compositor. Any error here aborts construction.
    pub fn new(config: &EngineConfig, services: HostServices) -> FaceResult<Self> {
        config.validate()?;
        let registry = ComplicationRegistry::register_slots(config.slots.iter().cloned())?;
        let compositor = create_compositor(config.backend, &config.camera)?;
        let scheduler = TickScheduler::new(config.tick_length_ms, services.timer)?;

        let now = services.clock.now_millis();
        let preferences = services.preferences.load();
        let colors = FaceColors::from_preferences(&preferences);
        let mode = ModeState::default();
        let utc_offset = services.environment.utc_offset(now);

        let mut engine = Self {
            mode,
            visible: false,
            destroyed: false,
            scheduler,
            registry,
            compositor,
            preferences,
            colors,
            styles: PaintStyles::resolve(&colors, &mode),
            unread_count: 0,
            utc_offset,
            listener_attached: false,
            surface: None,
            tap_stats: TapStats::default(),
            draw_count: 0,
            clock: services.clock,
            environment: services.environment,
            preference_source: services.preferences,
            drawable: services.drawable,
        };
        engine.registry.apply_highlight_color(preferences.highlight_color);
        engine.refresh_styles();
        tracing::debug!(backend = ?config.backend, slots = engine.registry.len(), "engine created");
        Ok(engine)
    }

    /// Handle one host event. Never fails: diagnostics are logged, returned in
    /// the response, and the previous state is kept.
    #[tracing::instrument(level = "debug", skip_all, fields(event = event.name()))]
    pub fn dispatch(&mut self, event: HostEvent) -> EventResponse {
        let mut response = EventResponse::default();
        if self.destroyed {
            response.warning = Some(FaceWarning::EngineDestroyed);
        } else {
            match self.handle(event) {
                Ok(tap) => response.tap = tap,
                Err(w) => response.warning = Some(w),
            }
        }
        if let Some(w) = &response.warning {
            tracing::warn!(warning = %w, "event dropped");
        }
        response.redraw_requested = self.scheduler.redraw_requested();
        response
    }

    fn handle(&mut self, event: HostEvent) -> Result<Option<TapOutcome>, FaceWarning> {
        let now = self.clock.now_millis();
        match event {
            HostEvent::VisibilityChanged(visible) => self.on_visibility_changed(visible, now),
            HostEvent::AmbientChanged(ambient) => {
                self.mode.set_ambient(ambient);
                self.refresh_styles();
                self.scheduler.request_redraw();
                self.scheduler.set_ambient(ambient);
                self.scheduler.update_timer(now);
            }
            HostEvent::PropertiesChanged(caps) => self.on_properties_changed(caps)?,
            HostEvent::MuteChanged(muted) => {
                if self.mode.set_muted(muted) {
                    self.refresh_styles();
                    self.scheduler.request_redraw();
                }
            }
            HostEvent::SurfaceResized { width, height } => self.on_surface_resized(width, height)?,
            HostEvent::Tap {
                kind,
                x,
                y,
                event_time_ms,
            } => return Ok(self.on_tap(kind, Point::new(x, y), event_time_ms)),
            HostEvent::UnreadCountChanged(count) => {
                if self.preferences.unread_notifications_enabled && self.unread_count != count {
                    self.unread_count = count;
                    self.scheduler.request_redraw();
                }
            }
            HostEvent::ComplicationDataUpdated { slot_id, record } => {
                self.registry.update_slot_data(slot_id, record)?;
                self.scheduler.request_redraw();
            }
            HostEvent::TimeTick => self.scheduler.request_redraw(),
            HostEvent::TimeZoneChanged => {
                self.utc_offset = self.environment.utc_offset(now);
                self.scheduler.request_redraw();
            }
            HostEvent::TimerFired(token) => self.on_timer_fired(token, now),
            HostEvent::Destroy => self.teardown(),
        }
        Ok(None)
    }

    fn on_visibility_changed(&mut self, visible: bool, now: u64) {
        self.visible = visible;
        if visible {
            // Preferences only change between visible sessions.
            self.preferences = self.preference_source.load();
            self.colors = FaceColors::from_preferences(&self.preferences);
            self.registry
                .apply_highlight_color(self.preferences.highlight_color);
            self.refresh_styles();
            if !self.preferences.unread_notifications_enabled {
                self.unread_count = 0;
            }
            self.attach_listener();
            self.utc_offset = self.environment.utc_offset(now);
            self.scheduler.request_redraw();
        } else {
            self.detach_listener();
        }
        self.scheduler.set_visible(visible);
        self.scheduler.update_timer(now);
    }

    fn on_properties_changed(&mut self, caps: DisplayCapabilities) -> Result<(), FaceWarning> {
        if self.mode.report_capabilities(caps)? {
            tracing::debug!(
                low_bit_ambient = caps.low_bit_ambient,
                burn_in_protection = caps.burn_in_protection,
                "display capabilities"
            );
            self.refresh_styles();
        }
        Ok(())
    }

    fn on_surface_resized(&mut self, width: u32, height: u32) -> Result<(), FaceWarning> {
        let size = SurfaceSize::new(width, height);
        if size.is_degenerate() {
            return Err(FaceWarning::DegenerateSurface { width, height });
        }
        self.registry.resize_bounds(width, height)?;
        self.compositor.resize(size)?;
        self.surface = Some(size);
        self.scheduler.request_redraw();
        Ok(())
    }

    fn on_tap(&mut self, kind: TapKind, point: Point, event_time_ms: u64) -> Option<TapOutcome> {
        self.tap_stats.record(kind, point);
        self.scheduler.request_redraw();
        if kind != TapKind::Tap {
            return None;
        }
        Some(
            self.registry
                .dispatch_tap(point, event_time_ms, self.drawable.as_ref()),
        )
    }

    fn on_timer_fired(&mut self, token: TimerToken, now: u64) {
        match self.scheduler.on_timer_fired(token, now) {
            TimerFire::Rearmed(next) => {
                tracing::trace!(due_at_ms = next.due_at_ms, "interactive tick");
            }
            TimerFire::Stopped => tracing::trace!("interactive tick, timer stopped"),
            TimerFire::Stale => tracing::trace!(token = token.0, "stale timer ignored"),
        }
    }

    fn teardown(&mut self) {
        self.scheduler.cancel_pending();
        self.detach_listener();
        self.destroyed = true;
        tracing::debug!(draws = self.draw_count, "engine destroyed");
    }

    fn attach_listener(&mut self) {
        if !self.listener_attached {
            self.environment.attach_timezone_listener();
            self.listener_attached = true;
        }
    }

    fn detach_listener(&mut self) {
        if self.listener_attached {
            self.environment.detach_timezone_listener();
            self.listener_attached = false;
        }
    }

    // Full re-resolution from current colours and mode.
    fn refresh_styles(&mut self) {
        self.styles = PaintStyles::resolve(&self.colors, &self.mode);
        self.registry.apply_mode(&self.mode);
    }

    /// Draw one frame if visible and a redraw is outstanding. Returns whether
    /// it drew. Requests made while hidden stay pending.
    pub fn draw_if_needed(&mut self, surface: &mut dyn Surface) -> FaceResult<bool> {
        if self.destroyed || !self.visible || !self.scheduler.take_redraw() {
            return Ok(false);
        }
        self.draw(surface)?;
        Ok(true)
    }

    /// Draw one frame unconditionally at the current clock instant.
    pub fn draw(&mut self, surface: &mut dyn Surface) -> FaceResult<()> {
        let now_ms = self.clock.now_millis();
        let unread_count = if self.preferences.unread_notifications_enabled {
            self.unread_count
        } else {
            0
        };
        let frame = FrameContext {
            now_ms,
            time: TimeOfDay::from_epoch_millis(now_ms, self.utc_offset),
            mode: &self.mode,
            styles: &self.styles,
            registry: &self.registry,
            drawable: self.drawable.as_ref(),
            unread_count,
        };
        self.compositor.compose(&frame, surface)?;
        self.draw_count += 1;
        // An animated face keeps drawing while interactive.
        if self.animation_frame_period_ms().is_some() {
            self.scheduler.request_redraw();
        }
        Ok(())
    }

    /// Frame period while the face animates between ticks: only a 3D face,
    /// and only while visible and interactive.
    pub fn animation_frame_period_ms(&self) -> Option<u64> {
        if self.destroyed || !self.scheduler.should_run_timer() {
            return None;
        }
        self.compositor.frame_period_ms()
    }

    pub fn mode(&self) -> &ModeState {
        &self.mode
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn should_run_timer(&self) -> bool {
        self.scheduler.should_run_timer()
    }

    /// The single outstanding wake-up, for hosts that poll.
    pub fn pending_wakeup(&self) -> Option<PendingWakeup> {
        self.scheduler.pending()
    }

    pub fn redraw_requested(&self) -> bool {
        self.scheduler.redraw_requested()
    }

    pub fn registry(&self) -> &ComplicationRegistry {
        &self.registry
    }

    pub fn styles(&self) -> &PaintStyles {
        &self.styles
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn unread_count(&self) -> u32 {
        self.unread_count
    }

    pub fn tap_stats(&self) -> &TapStats {
        &self.tap_stats
    }

    pub fn draw_count(&self) -> u64 {
        self.draw_count
    }

    pub fn backend(&self) -> BackendKind {
        self.compositor.kind()
    }

    pub fn surface_size(&self) -> Option<SurfaceSize> {
        self.surface
    }

    pub fn listener_attached(&self) -> bool {
        self.listener_attached
    }

    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    pub fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/face.rs"]
mod tests;
