//! Interactive redraw cadence.
//!
//! The [`TickScheduler`] owns at most one outstanding wake-up, identified by a
//! [`TimerToken`]. Cancelling drops the pending token, so a late delivery of an
//! old token is recognised as stale and ignored.

use crate::foundation::error::{FaceError, FaceResult};

/// Identifies one armed wake-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(pub u64);

/// The single outstanding wake-up, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingWakeup {
    pub token: TimerToken,
    pub due_at_ms: u64,
}

/// Host-side timer facility.
///
/// `cancel` must take effect before it returns: a cancelled token may still
/// be delivered by a racing host, but the scheduler drops it as stale.
pub trait TimerDriver {
    fn arm(&mut self, wakeup: PendingWakeup);
    fn cancel(&mut self, token: TimerToken);
}

/// Timer driver for hosts that poll [`TickScheduler::pending`] themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct PolledTimer;

impl TimerDriver for PolledTimer {
    fn arm(&mut self, _wakeup: PendingWakeup) {}

    fn cancel(&mut self, _token: TimerToken) {}
}

/// Result of delivering a wake-up to the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerFire {
    /// A redraw was requested and the next tick boundary armed.
    Rearmed(PendingWakeup),
    /// A redraw was requested; the timer should no longer run.
    Stopped,
    /// The token was cancelled or superseded; nothing happened.
    Stale,
}

/// Delay from `now_ms` to the next multiple of `tick_ms`, in `(0, tick_ms]`.
///
/// Measured against wall-clock phase instead of adding a fixed interval, so a
/// late wake-up does not push every later tick back.
pub fn delay_to_next_tick(now_ms: u64, tick_ms: u64) -> u64 {
    tick_ms - (now_ms % tick_ms)
}

pub struct TickScheduler {
    tick_length_ms: u64,
    visible: bool,
    ambient: bool,
    next_token: u64,
    pending: Option<PendingWakeup>,
    redraw_requested: bool,
    driver: Box<dyn TimerDriver>,
}

impl std::fmt::Debug for TickScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickScheduler")
            .field("tick_length_ms", &self.tick_length_ms)
            .field("visible", &self.visible)
            .field("ambient", &self.ambient)
            .field("pending", &self.pending)
            .field("redraw_requested", &self.redraw_requested)
            .finish_non_exhaustive()
    }
}

impl TickScheduler {
    pub fn new(tick_length_ms: u64, driver: Box<dyn TimerDriver>) -> FaceResult<Self> {
        if tick_length_ms == 0 {
            return Err(FaceError::configuration("tick length must be > 0 ms"));
        }
        Ok(Self {
            tick_length_ms,
            visible: false,
            ambient: false,
            next_token: 0,
            pending: None,
            redraw_requested: false,
            driver,
        })
    }

    pub fn tick_length_ms(&self) -> u64 {
        self.tick_length_ms
    }

    pub fn should_run_timer(&self) -> bool {
        self.visible && !self.ambient
    }

    pub fn pending(&self) -> Option<PendingWakeup> {
        self.pending
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_ambient(&mut self, ambient: bool) {
        self.ambient = ambient;
    }

    /// Cancel any outstanding wake-up, then arm a fresh one if the timer
    /// should run. Arming also requests an immediate redraw.
    pub fn update_timer(&mut self, now_ms: u64) -> Option<PendingWakeup> {
        self.cancel_pending();
        if !self.should_run_timer() {
            return None;
        }
        self.request_redraw();
        Some(self.arm_next(now_ms))
    }

    /// Synchronously drop the outstanding wake-up, if any.
    pub fn cancel_pending(&mut self) {
        if let Some(p) = self.pending.take() {
            tracing::trace!(token = p.token.0, "cancel wake-up");
            self.driver.cancel(p.token);
        }
    }

    pub fn on_timer_fired(&mut self, token: TimerToken, now_ms: u64) -> TimerFire {
        match self.pending {
            Some(p) if p.token == token => {}
            _ => return TimerFire::Stale,
        }
        self.pending = None;
        self.request_redraw();
        if self.should_run_timer() {
            TimerFire::Rearmed(self.arm_next(now_ms))
        } else {
            TimerFire::Stopped
        }
    }

    /// Idempotent: any number of requests before the next draw collapse into one.
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    /// Consume the pending redraw request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn arm_next(&mut self, now_ms: u64) -> PendingWakeup {
        let delay = delay_to_next_tick(now_ms, self.tick_length_ms);
        let wakeup = PendingWakeup {
            token: TimerToken(self.next_token),
            due_at_ms: now_ms.saturating_add(delay),
        };
        self.next_token += 1;
        self.pending = Some(wakeup);
        self.driver.arm(wakeup);
        tracing::trace!(token = wakeup.token.0, due_at_ms = wakeup.due_at_ms, "arm wake-up");
        wakeup
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/ticker.rs"]
mod tests;
