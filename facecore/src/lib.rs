//! facecore — watchface model shared by the prideface host

pub mod clock;
pub mod config;
pub mod error;
pub mod face;
pub mod geometry;
pub mod layer;
pub mod repaint;
pub mod resources;
pub mod theme;
pub mod tick;
pub mod time_format;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

pub use clock::{ClockSource, ClockStyle, LocalClock};
pub use config::{FaceConfig, FaceVariant};
pub use error::{FaceError, Result};
pub use face::WatchFace;
pub use repaint::RepaintController;
pub use theme::FaceTheme;
pub use tick::{TickEvent, TickTimerService, TimeUnits};
pub use time_format::{format_display_time, DisplayTime};
