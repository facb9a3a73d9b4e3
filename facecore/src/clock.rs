//! Wall-clock source and the host's 12h/24h preference.

use std::cell::Cell;

use chrono::{Local, NaiveDateTime};

/// How the hour is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStyle {
    /// `00`..`23`
    TwentyFourHour,
    /// `01`..`12`, no AM/PM marker
    TwelveHour,
}

impl ClockStyle {
    pub fn from_24h(is_24h: bool) -> Self {
        if is_24h {
            ClockStyle::TwentyFourHour
        } else {
            ClockStyle::TwelveHour
        }
    }
}

/// Where the face gets the time from.
pub trait ClockSource {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// The host's current hour format preference.
    fn is_24h_style(&self) -> bool;

    fn style(&self) -> ClockStyle {
        ClockStyle::from_24h(self.is_24h_style())
    }
}

/// System clock in the local timezone, with the hour format held by the host.
#[derive(Debug)]
pub struct LocalClock {
    use_24h: Cell<bool>,
}

impl LocalClock {
    pub fn new(use_24h: bool) -> Self {
        Self {
            use_24h: Cell::new(use_24h),
        }
    }

    pub fn set_24h_style(&self, use_24h: bool) {
        self.use_24h.set(use_24h);
    }

    /// Flip between 12h and 24h, returning the new setting.
    pub fn toggle_style(&self) -> bool {
        let next = !self.use_24h.get();
        self.use_24h.set(next);
        next
    }
}

impl ClockSource for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn is_24h_style(&self) -> bool {
        self.use_24h.get()
    }
}
