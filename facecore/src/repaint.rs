//! Tick-aligned repaint controller
//!
//! egui is an immediate-mode GUI: left alone it repaints on every input
//! event and not otherwise. A watchface changes once a minute, so the
//! controller keeps egui asleep between minute boundaries and wakes it just
//! after the next one:
//!
//! 1. **Input-driven** — key press, pointer. Always repaint.
//! 2. **Tick** — the scheduled wake-up at a minute boundary.
//! 3. **State change** — the host changed something (12h/24h toggle,
//!    reload). One immediate repaint.
//!
//! Call [`RepaintController::begin_frame`] at the top of `update()` and
//! [`RepaintController::end_frame`] at the bottom.

use std::time::Duration;

/// Wake a little after the boundary so the clock sample lands in the new
/// minute.
pub const TICK_SLACK: Duration = Duration::from_millis(25);

/// Why this frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame — always paint.
    Init,
    /// User input (key press, pointer).
    Input,
    /// App-requested repaint (state changed internally).
    StateChange,
    /// Scheduled wake-up at a tick boundary.
    Tick,
}

#[derive(Debug, Default)]
pub struct RepaintController {
    /// Whether a one-shot repaint has been requested.
    needs_repaint: bool,
    /// Frame counter (0 = first frame).
    frame: u64,
    /// Why the current frame is being painted (set by begin_frame).
    reason: Option<RepaintReason>,
}

impl RepaintController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a single repaint on the next opportunity.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    pub fn reason(&self) -> RepaintReason {
        self.reason.unwrap_or(RepaintReason::Init)
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Call at the **start** of your `update()` method.
    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.pointer.is_moving()
        });
        self.reason = Some(self.classify(had_input));
        self.needs_repaint = false;
    }

    fn classify(&self, had_input: bool) -> RepaintReason {
        if self.frame == 0 {
            RepaintReason::Init
        } else if had_input {
            RepaintReason::Input
        } else if self.needs_repaint {
            RepaintReason::StateChange
        } else {
            RepaintReason::Tick
        }
    }

    /// Call at the **end** of your `update()` method with the time left
    /// until the next tick boundary.
    pub fn end_frame(&mut self, ctx: &egui::Context, until_next_tick: Duration) {
        self.frame += 1;
        if self.needs_repaint {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(self.next_wakeup(until_next_tick));
        }
    }

    /// Delay before the scheduled repaint.
    pub fn next_wakeup(&self, until_next_tick: Duration) -> Duration {
        until_next_tick + TICK_SLACK
    }
}
