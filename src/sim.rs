//! Deterministic driver for an engine on a manual clock.
//!
//! The simulator plays the host: it delivers events, fires the engine's
//! pending wake-up when its due time is reached and draws whenever a redraw is
//! outstanding.

use crate::config::EngineConfig;
use crate::engine::events::{EventResponse, HostEvent};
use crate::engine::face::WatchFaceEngine;
use crate::engine::host::HostServices;
use crate::foundation::core::SurfaceSize;
use crate::foundation::error::{FaceError, FaceResult};
use crate::render::surface::{RecordingSurface, Surface};
use crate::schedule::ticker::TimerToken;
use crate::time::clock::{Clock, ManualClock};

pub struct Simulator<S: Surface = RecordingSurface> {
    engine: WatchFaceEngine,
    clock: ManualClock,
    surface: S,
    fired_at: Vec<u64>,
    frames: u64,
}

impl Simulator<RecordingSurface> {
    /// Engine on a manual clock starting at `start_ms`, drawing into a recording surface.
    pub fn new(config: &EngineConfig, start_ms: u64, size: SurfaceSize) -> FaceResult<Self> {
        let clock = ManualClock::new(start_ms);
        let services = HostServices::new(config.preferences).with_clock(clock.clone());
        Self::with_services(config, clock, services, RecordingSurface::new(size))
    }
}

impl<S: Surface> Simulator<S> {
    /// `services.clock` is replaced by `clock`.
    pub fn with_services(
        config: &EngineConfig,
        clock: ManualClock,
        services: HostServices,
        surface: S,
    ) -> FaceResult<Self> {
        let services = services.with_clock(clock.clone());
        let engine = WatchFaceEngine::new(config, services)?;
        Ok(Self {
            engine,
            clock,
            surface,
            fired_at: Vec::new(),
            frames: 0,
        })
    }

    pub fn engine(&self) -> &WatchFaceEngine {
        &self.engine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_millis()
    }

    /// Instants at which wake-ups were delivered, oldest first.
    pub fn fired_at(&self) -> &[u64] {
        &self.fired_at
    }

    /// Deliver one event, then draw if a redraw is outstanding.
    pub fn send(&mut self, event: HostEvent) -> FaceResult<EventResponse> {
        let response = self.engine.dispatch(event);
        self.engine.draw_if_needed(&mut self.surface)?;
        Ok(response)
    }

    /// Standard start-up: report the surface, then become visible.
    pub fn start(&mut self) -> FaceResult<()> {
        let size = self.surface.size();
        self.send(HostEvent::SurfaceResized {
            width: size.width,
            height: size.height,
        })?;
        self.send(HostEvent::VisibilityChanged(true))?;
        Ok(())
    }

    /// Fire every wake-up due at or before `t_ms` in order, then move the clock to `t_ms`.
    ///
    /// An animated face also gets one frame per frame period in between.
    /// Returns the number of wake-ups fired.
    pub fn advance_to(&mut self, t_ms: u64) -> FaceResult<usize> {
        if t_ms < self.now_ms() {
            return Err(FaceError::validation(format!(
                "cannot move the clock back from {} to {t_ms}",
                self.now_ms()
            )));
        }
        let mut fired = 0;
        loop {
            let wakeup = self.engine.pending_wakeup().filter(|w| w.due_at_ms <= t_ms);
            let frame_at = self
                .next_frame_at()
                .filter(|&at| at <= t_ms && wakeup.is_none_or(|w| at < w.due_at_ms));
            if let Some(at) = frame_at {
                self.clock.set(at);
                self.frames += 1;
                self.engine.draw_if_needed(&mut self.surface)?;
            } else if let Some(w) = wakeup {
                self.fire(w.due_at_ms, w.token)?;
                fired += 1;
            } else {
                break;
            }
        }
        self.clock.set(t_ms);
        Ok(fired)
    }

    /// Deliver up to `n` consecutive wake-ups exactly on their due times.
    /// Stops early when no wake-up is pending.
    pub fn run_ticks(&mut self, n: usize) -> FaceResult<usize> {
        for i in 0..n {
            let Some(w) = self.engine.pending_wakeup() else {
                return Ok(i);
            };
            self.advance_to(w.due_at_ms)?;
        }
        Ok(n)
    }

    /// Frames drawn between wake-ups by an animated face.
    pub fn animation_frames(&self) -> u64 {
        self.frames
    }

    fn next_frame_at(&self) -> Option<u64> {
        if !self.engine.redraw_requested() {
            return None;
        }
        let period = self.engine.animation_frame_period_ms()?;
        Some(self.now_ms().saturating_add(period))
    }

    fn fire(&mut self, at_ms: u64, token: TimerToken) -> FaceResult<()> {
        self.clock.set(at_ms.max(self.now_ms()));
        self.fired_at.push(at_ms);
        self.send(HostEvent::TimerFired(token))?;
        Ok(())
    }
}
