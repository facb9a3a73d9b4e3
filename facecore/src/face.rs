//! The watchface app context: one window, one display buffer.

use crate::clock::ClockSource;
use crate::config::FaceVariant;
use crate::error::Result;
use crate::layer::Canvas;
use crate::resources::ResourceProvider;
use crate::tick::TickEvent;
use crate::time_format::DisplayTime;
use crate::window::Window;

#[derive(Debug)]
pub struct WatchFace {
    window: Window,
    display_time: DisplayTime,
    updates: u64,
}

impl WatchFace {
    pub fn new(variant: FaceVariant) -> Self {
        Self {
            window: Window::new(variant),
            display_time: DisplayTime::new(),
            updates: 0,
        }
    }

    /// Push the window: build the layers and show the current time right
    /// away instead of waiting for the first tick.
    pub fn load(&mut self, provider: &mut dyn ResourceProvider, clock: &dyn ClockSource) -> Result<()> {
        if self.window.load(provider)? {
            self.update_time(clock);
        }
        Ok(())
    }

    pub fn unload(&mut self) {
        self.window.unload();
    }

    /// Minute tick handler. The tick payload is not inspected.
    pub fn handle_tick(&mut self, _tick: &TickEvent, clock: &dyn ClockSource) -> bool {
        self.update_time(clock)
    }

    /// Reformat the time into the display buffer and hand it to the time
    /// layer. Does nothing while unloaded.
    pub fn update_time(&mut self, clock: &dyn ClockSource) -> bool {
        let Some(layers) = self.window.layers_mut() else {
            tracing::debug!("time update while unloaded, ignored");
            return false;
        };
        self.display_time.update(&clock.now(), clock.style());
        layers.time_layer_mut().set_text(self.display_time.as_str());
        self.updates += 1;
        tracing::debug!(time = %self.display_time, "time updated");
        true
    }

    pub fn display_time(&self) -> &DisplayTime {
        &self.display_time
    }

    /// Text currently in the time layer, if loaded.
    pub fn shown_text(&self) -> Option<&str> {
        self.window.layers().map(|l| l.time_layer().text())
    }

    /// Number of times the display was refreshed.
    pub fn updates(&self) -> u64 {
        self.updates
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        self.window.render(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tick::{TickTimerService, TimeUnits};
    use crate::testing::{FixedClock, MockResources};

    #[test]
    fn test_load_shows_time_immediately() {
        let mut resources = MockResources::new();
        let clock = FixedClock::at(9, 5, true);
        let mut face = WatchFace::new(FaceVariant::CustomFont);
        face.load(&mut resources, &clock).unwrap();
        assert_eq!(face.shown_text(), Some("09:05"));
        assert_eq!(face.updates(), 1);
    }

    #[test]
    fn test_reload_shows_fresh_time() {
        let mut resources = MockResources::new();
        let clock = FixedClock::at(9, 5, true);
        let mut face = WatchFace::new(FaceVariant::CustomFont);
        face.load(&mut resources, &clock).unwrap();
        face.unload();
        assert_eq!(face.shown_text(), None);

        clock.set(17, 42);
        face.load(&mut resources, &clock).unwrap();
        assert_eq!(face.shown_text(), Some("17:42"));
    }

    #[test]
    fn test_tick_rereads_style() {
        let mut resources = MockResources::new();
        let clock = FixedClock::at(13, 30, true);
        let mut ticks = TickTimerService::subscribe(TimeUnits::MINUTE);
        let mut face = WatchFace::new(FaceVariant::SystemFont);
        face.load(&mut resources, &clock).unwrap();
        ticks.poll(clock.now());
        assert_eq!(face.shown_text(), Some("13:30"));

        clock.set_24h(false);
        clock.set(13, 31);
        let tick = ticks.poll(clock.now()).unwrap();
        assert!(face.handle_tick(&tick, &clock));
        assert_eq!(face.shown_text(), Some("01:31"));
    }

    #[test]
    fn test_ticks_while_unloaded_are_ignored() {
        let mut resources = MockResources::new();
        let clock = FixedClock::at(6, 0, true);
        let mut ticks = TickTimerService::subscribe(TimeUnits::MINUTE);
        let mut face = WatchFace::new(FaceVariant::CustomFont);
        face.load(&mut resources, &clock).unwrap();
        ticks.poll(clock.now());
        face.unload();

        clock.set(6, 1);
        let tick = ticks.poll(clock.now()).unwrap();
        assert!(!face.handle_tick(&tick, &clock));
        assert_eq!(face.updates(), 1);
        assert_eq!(face.display_time().as_str(), "06:00");
        assert_eq!(resources.ledger().live_total(), 0);
    }

    #[test]
    fn test_one_update_per_minute_while_loaded() {
        let mut resources = MockResources::new();
        let clock = FixedClock::at(23, 58, true);
        let mut ticks = TickTimerService::subscribe(TimeUnits::MINUTE);
        let mut face = WatchFace::new(FaceVariant::CustomFont);
        face.load(&mut resources, &clock).unwrap();
        ticks.poll(clock.now());

        // three minutes sampled every ten seconds, across midnight
        for _ in 0..18 {
            clock.advance_secs(10);
            if let Some(tick) = ticks.poll(clock.now()) {
                face.handle_tick(&tick, &clock);
            }
        }
        assert_eq!(ticks.fired(), 3);
        assert_eq!(face.updates(), 4);
        assert_eq!(face.shown_text(), Some("00:01"));
    }

    #[test]
    fn test_drop_releases_everything() {
        let mut resources = MockResources::new();
        let clock = FixedClock::at(12, 0, false);
        {
            let mut face = WatchFace::new(FaceVariant::CustomFont);
            face.load(&mut resources, &clock).unwrap();
            assert_eq!(face.shown_text(), Some("12:00"));
        }
        assert_eq!(resources.ledger().live_total(), 0);
    }
}
