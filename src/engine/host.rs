//! Collaborators the host injects into the engine.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{FixedOffset, Local, Offset, TimeZone, Utc};

use crate::complication::drawable::{BasicComplicationDrawable, ComplicationDrawable};
use crate::schedule::ticker::{PolledTimer, TimerDriver};
use crate::style::prefs::{PreferenceSource, Preferences, StaticPreferences};
use crate::time::clock::{Clock, SystemClock};

/// Platform environment the face listens to.
pub trait Environment {
    fn attach_timezone_listener(&mut self);
    fn detach_timezone_listener(&mut self);
    /// Current offset from UTC for local time display.
    fn utc_offset(&self, now_ms: u64) -> FixedOffset;
}

#[derive(Debug)]
struct EnvState {
    offset: FixedOffset,
    attach_calls: u32,
    detach_calls: u32,
}

/// Environment with a settable fixed offset. Clones share state, so a test can
/// keep one handle and observe listener calls made through another.
#[derive(Clone, Debug)]
pub struct FixedEnvironment {
    state: Rc<RefCell<EnvState>>,
}

impl FixedEnvironment {
    pub fn new(offset: FixedOffset) -> Self {
        Self {
            state: Rc::new(RefCell::new(EnvState {
                offset,
                attach_calls: 0,
                detach_calls: 0,
            })),
        }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    pub fn set_offset(&self, offset: FixedOffset) {
        self.state.borrow_mut().offset = offset;
    }

    pub fn attach_calls(&self) -> u32 {
        self.state.borrow().attach_calls
    }

    pub fn detach_calls(&self) -> u32 {
        self.state.borrow().detach_calls
    }
}

impl Default for FixedEnvironment {
    fn default() -> Self {
        Self::utc()
    }
}

impl Environment for FixedEnvironment {
    fn attach_timezone_listener(&mut self) {
        self.state.borrow_mut().attach_calls += 1;
    }

    fn detach_timezone_listener(&mut self) {
        self.state.borrow_mut().detach_calls += 1;
    }

    fn utc_offset(&self, _now_ms: u64) -> FixedOffset {
        self.state.borrow().offset
    }
}

/// Environment backed by the operating system's local time zone.
///
/// The offset is resolved per instant, so daylight-saving transitions show up
/// on the next tick. The listener calls are no-ops: the zone is read fresh on
/// every query.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalEnvironment;

impl LocalEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl Environment for LocalEnvironment {
    fn attach_timezone_listener(&mut self) {}

    fn detach_timezone_listener(&mut self) {}

    fn utc_offset(&self, now_ms: u64) -> FixedOffset {
        i64::try_from(now_ms)
            .ok()
            .and_then(|ms| Local.timestamp_millis_opt(ms).single())
            .map_or_else(|| Local::now().offset().fix(), |t| t.offset().fix())
    }
}

/// Injectable services for one engine instance.
pub struct HostServices {
    pub clock: Box<dyn Clock>,
    pub timer: Box<dyn TimerDriver>,
    pub environment: Box<dyn Environment>,
    pub preferences: Box<dyn PreferenceSource>,
    pub drawable: Box<dyn ComplicationDrawable>,
}

impl HostServices {
    /// System clock, polled timer, local time zone, the given preferences, and the basic drawable.
    pub fn new(preferences: Preferences) -> Self {
        Self {
            clock: Box::new(SystemClock),
            timer: Box::new(PolledTimer),
            environment: Box::new(LocalEnvironment),
            preferences: Box::new(StaticPreferences::new(preferences)),
            drawable: Box::new(BasicComplicationDrawable),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_timer(mut self, timer: impl TimerDriver + 'static) -> Self {
        self.timer = Box::new(timer);
        self
    }

    pub fn with_environment(mut self, environment: impl Environment + 'static) -> Self {
        self.environment = Box::new(environment);
        self
    }

    pub fn with_preferences(mut self, preferences: impl PreferenceSource + 'static) -> Self {
        self.preferences = Box::new(preferences);
        self
    }

    pub fn with_drawable(mut self, drawable: impl ComplicationDrawable + 'static) -> Self {
        self.drawable = Box::new(drawable);
        self
    }
}
