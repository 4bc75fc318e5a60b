//! Clock implementations for the HUD time engine

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

/// Source of the current absolute instant
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Wall clock of the host
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Hand-driven clock for tests and replays
#[derive(Debug)]
pub struct ManualTimeSource {
    now: Mutex<DateTime<Utc>>,
}

impl ManualTimeSource {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, dt: Duration) {
        let mut now = self.now.lock();
        *now = *now + dt;
    }

    pub fn set(&self, t: DateTime<Utc>) {
        *self.now.lock() = t;
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// Mission elapsed time counter
/// INVARIANT: scale matches the active simulation time base
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MissionClock {
    /// Instant the clock was last armed
    start: DateTime<Utc>,
    /// MET multiplier (1, 10 or 100)
    scale: f64,
}

impl MissionClock {
    /// Create a mission clock armed at `now`, running at real speed
    pub fn new(now: DateTime<Utc>) -> Self {
        MissionClock {
            start: now,
            scale: 1.0,
        }
    }

    /// Restart the mission at `now` with a new scale
    pub fn arm(&mut self, now: DateTime<Utc>, scale: f64) {
        self.start = now;
        self.scale = scale;
    }

    /// Change the scale without moving the origin
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Scaled seconds since the clock was armed, millisecond resolution
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> f64 {
        let millis = (now - self.start).num_milliseconds();
        millis as f64 / 1000.0 * self.scale
    }
}
