//! Wall-clock time to hand rotation.
//!
//! Both compositors share these formulas so the raster and 3D faces agree on
//! where each hand points.

use chrono::{DateTime, FixedOffset, Timelike, Utc};

/// Local time of day on a 12-hour dial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeOfDay {
    /// 0..12
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl TimeOfDay {
    /// Decompose an epoch instant in the given UTC offset.
    ///
    /// Instants chrono cannot represent fall back to midnight.
    pub fn from_epoch_millis(millis: u64, offset: FixedOffset) -> Self {
        let Some(utc) = i64::try_from(millis)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
        else {
            return Self::MIDNIGHT;
        };
        let local = utc.with_timezone(&offset);
        Self {
            hour: local.hour() % 12,
            minute: local.minute(),
            second: local.second(),
            millisecond: local.timestamp_subsec_millis().min(999),
        }
    }

    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
        millisecond: 0,
    };

    /// Seconds including the sub-second fraction, in `[0, 60)`.
    pub fn seconds(self) -> f64 {
        f64::from(self.second) + f64::from(self.millisecond) / 1000.0
    }

    /// Minutes biased by the seconds, in `[0, 60)`.
    pub fn minutes(self) -> f64 {
        f64::from(self.minute) + self.seconds() / 60.0
    }

    /// Hours biased by the minutes, in `[0, 12)`.
    pub fn hours(self) -> f64 {
        f64::from(self.hour) + self.minutes() / 60.0
    }
}

/// Clockwise rotation of each hand from 12 o'clock, in degrees `[0, 360)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    pub fn at(t: TimeOfDay) -> Self {
        Self {
            hour: t.hours() / 12.0 * 360.0,
            minute: t.minutes() / 60.0 * 360.0,
            second: t.seconds() / 60.0 * 360.0,
        }
    }
}

/// Truncate an angle to its whole-degree index in `[0, 360)`.
pub fn degree_index(degrees: f64) -> usize {
    let d = degrees.rem_euclid(360.0) as usize;
    d % 360
}

#[cfg(test)]
#[path = "../../tests/unit/time/dial.rs"]
mod tests;
