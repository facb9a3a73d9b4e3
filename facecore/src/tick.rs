//! Tick timer service
//!
//! The host samples the wall clock whenever it gets a chance (every frame
//! on the desktop). [`TickTimerService::poll`] compares each sample with the
//! previous one and fires a single [`TickEvent`] when a subscribed unit
//! boundary was crossed. Samples inside the same minute fire nothing, so
//! sampling more often never produces extra ticks.

use std::ops::{BitOr, BitOrAssign};
use std::time::Duration;

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Set of calendar units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeUnits(u8);

impl TimeUnits {
    pub const NONE: TimeUnits = TimeUnits(0);
    pub const SECOND: TimeUnits = TimeUnits(1 << 0);
    pub const MINUTE: TimeUnits = TimeUnits(1 << 1);
    pub const HOUR: TimeUnits = TimeUnits(1 << 2);
    pub const DAY: TimeUnits = TimeUnits(1 << 3);
    pub const MONTH: TimeUnits = TimeUnits(1 << 4);
    pub const YEAR: TimeUnits = TimeUnits(1 << 5);

    const ALL: u8 = 0b11_1111;

    pub fn contains(self, other: TimeUnits) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn intersects(self, other: TimeUnits) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The finest unit in the set together with every coarser unit.
    ///
    /// A minute subscriber must still hear about a change that only shows
    /// up in the hour field (e.g. a clock set back by exactly one hour).
    fn and_coarser(self) -> TimeUnits {
        if self.0 == 0 {
            return TimeUnits::NONE;
        }
        let finest = self.0 & self.0.wrapping_neg();
        TimeUnits(!(finest - 1) & Self::ALL)
    }

    /// Units whose field differs between two samples.
    pub fn changed_between(prev: &NaiveDateTime, next: &NaiveDateTime) -> TimeUnits {
        let mut units = TimeUnits::NONE;
        if prev.second() != next.second() {
            units |= TimeUnits::SECOND;
        }
        if prev.minute() != next.minute() {
            units |= TimeUnits::MINUTE;
        }
        if prev.hour() != next.hour() {
            units |= TimeUnits::HOUR;
        }
        if prev.day() != next.day() {
            units |= TimeUnits::DAY;
        }
        if prev.month() != next.month() {
            units |= TimeUnits::MONTH;
        }
        if prev.year() != next.year() {
            units |= TimeUnits::YEAR;
        }
        units
    }
}

impl BitOr for TimeUnits {
    type Output = TimeUnits;

    fn bitor(self, rhs: TimeUnits) -> TimeUnits {
        TimeUnits(self.0 | rhs.0)
    }
}

impl BitOrAssign for TimeUnits {
    fn bitor_assign(&mut self, rhs: TimeUnits) {
        self.0 |= rhs.0;
    }
}

/// Delivered once per crossed boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickEvent {
    /// The sample that crossed the boundary.
    pub time: NaiveDateTime,
    pub units_changed: TimeUnits,
}

#[derive(Debug)]
pub struct TickTimerService {
    units: TimeUnits,
    last: Option<NaiveDateTime>,
    fired: u64,
}

impl TickTimerService {
    pub fn subscribe(units: TimeUnits) -> Self {
        tracing::debug!(?units, "tick subscription");
        Self {
            units,
            last: None,
            fired: 0,
        }
    }

    pub fn units(&self) -> TimeUnits {
        self.units
    }

    /// Ticks delivered so far.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Feed a clock sample. The first sample only primes the service.
    pub fn poll(&mut self, now: NaiveDateTime) -> Option<TickEvent> {
        let prev = self.last.replace(now)?;
        let changed = TimeUnits::changed_between(&prev, &now);
        if !changed.intersects(self.units.and_coarser()) {
            return None;
        }
        self.fired += 1;
        tracing::debug!(?changed, %now, "tick");
        Some(TickEvent {
            time: now,
            units_changed: changed,
        })
    }

    /// How long until the next subscribed boundary after `now`.
    pub fn until_next_tick(&self, now: &NaiveDateTime) -> Duration {
        let nanos = Duration::from_nanos(now.nanosecond().min(999_999_999) as u64);
        let remaining = |period_secs: u64, into: u64| {
            Duration::from_secs(period_secs).saturating_sub(Duration::from_secs(into) + nanos)
        };
        let secs_into_minute = now.second() as u64;
        let secs_into_hour = now.minute() as u64 * 60 + secs_into_minute;
        let secs_into_day = now.hour() as u64 * 3600 + secs_into_hour;

        if self.units.contains(TimeUnits::SECOND) {
            remaining(1, 0)
        } else if self.units.contains(TimeUnits::MINUTE) {
            remaining(60, secs_into_minute)
        } else if self.units.contains(TimeUnits::HOUR) {
            remaining(3600, secs_into_hour)
        } else {
            // day and coarser all roll over at midnight
            remaining(86_400, secs_into_day)
        }
    }
}
