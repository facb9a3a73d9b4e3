//! The `HH:MM` display buffer.

use std::fmt;

use chrono::Timelike;

use crate::clock::ClockStyle;

/// Length of the rendered time, without terminator.
pub const DISPLAY_TIME_LEN: usize = 5;

const PLACEHOLDER: [u8; DISPLAY_TIME_LEN] = *b"00:00";

/// Fixed-width time text. Always exactly five ASCII characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayTime {
    buf: [u8; DISPLAY_TIME_LEN],
}

impl Default for DisplayTime {
    fn default() -> Self {
        Self { buf: PLACEHOLDER }
    }
}

impl DisplayTime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the buffer with `time` rendered in `style`.
    ///
    /// Twelve-hour style uses `%I` semantics: midnight and noon are `12`.
    pub fn update<T: Timelike>(&mut self, time: &T, style: ClockStyle) {
        let hour = match style {
            ClockStyle::TwentyFourHour => time.hour(),
            ClockStyle::TwelveHour => time.hour12().1,
        };
        let minute = time.minute();
        self.buf = [
            digit(hour / 10),
            digit(hour % 10),
            b':',
            digit(minute / 10),
            digit(minute % 10),
        ];
    }

    pub fn as_str(&self) -> &str {
        // buf only ever holds ASCII digits and ':'
        std::str::from_utf8(&self.buf).unwrap_or("00:00")
    }
}

fn digit(n: u32) -> u8 {
    b'0' + (n % 10) as u8
}

impl fmt::Display for DisplayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for DisplayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DisplayTime({:?})", self.as_str())
    }
}

/// Render `time` as a fresh [`DisplayTime`].
pub fn format_display_time<T: Timelike>(time: &T, style: ClockStyle) -> DisplayTime {
    let mut display = DisplayTime::new();
    display.update(time, style);
    display
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_24h() {
        assert_eq!(format_display_time(&hm(9, 5), ClockStyle::TwentyFourHour).as_str(), "09:05");
        assert_eq!(format_display_time(&hm(23, 59), ClockStyle::TwentyFourHour).as_str(), "23:59");
        assert_eq!(format_display_time(&hm(0, 0), ClockStyle::TwentyFourHour).as_str(), "00:00");
        assert_eq!(format_display_time(&hm(13, 30), ClockStyle::TwentyFourHour).as_str(), "13:30");
    }

    #[test]
    fn test_12h() {
        assert_eq!(format_display_time(&hm(13, 30), ClockStyle::TwelveHour).as_str(), "01:30");
        assert_eq!(format_display_time(&hm(0, 15), ClockStyle::TwelveHour).as_str(), "12:15");
        assert_eq!(format_display_time(&hm(12, 0), ClockStyle::TwelveHour).as_str(), "12:00");
        assert_eq!(format_display_time(&hm(9, 5), ClockStyle::TwelveHour).as_str(), "09:05");
        assert_eq!(format_display_time(&hm(23, 59), ClockStyle::TwelveHour).as_str(), "11:59");
    }

    #[test]
    fn test_matches_strftime_every_minute() {
        for minute_of_day in 0..1440 {
            let t = hm(minute_of_day / 60, minute_of_day % 60);
            let h24 = format_display_time(&t, ClockStyle::TwentyFourHour);
            let h12 = format_display_time(&t, ClockStyle::TwelveHour);
            assert_eq!(h24.as_str().len(), DISPLAY_TIME_LEN);
            assert_eq!(h12.as_str().len(), DISPLAY_TIME_LEN);
            assert_eq!(h24.as_str(), t.format("%H:%M").to_string());
            assert_eq!(h12.as_str(), t.format("%I:%M").to_string());
        }
    }

    #[test]
    fn test_update_overwrites_in_place() {
        let mut display = DisplayTime::new();
        assert_eq!(display.as_str(), "00:00");
        display.update(&hm(22, 41), ClockStyle::TwentyFourHour);
        display.update(&hm(7, 3), ClockStyle::TwentyFourHour);
        assert_eq!(display.to_string(), "07:03");
    }
}
