//! Stand-ins for the host, shared by the unit tests.

use std::cell::Cell;
use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::clock::ClockSource;
use crate::error::{FaceError, Result};
use crate::geometry::{Color, Rect, Size, TextAlignment};
use crate::layer::Canvas;
use crate::resources::{Bitmap, Font, ResourceId, ResourceKind, ResourceLedger, ResourceProvider};

pub struct FixedClock {
    now: Cell<NaiveDateTime>,
    use_24h: Cell<bool>,
}

impl FixedClock {
    pub fn at(hour: u32, minute: u32, use_24h: bool) -> Self {
        let date = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
        Self {
            now: Cell::new(date.and_hms_opt(hour, minute, 0).unwrap()),
            use_24h: Cell::new(use_24h),
        }
    }

    /// Move to `hour:minute:00` on the current day.
    pub fn set(&self, hour: u32, minute: u32) {
        let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
        self.now.set(self.now.get().date().and_time(time));
    }

    pub fn advance_secs(&self, secs: i64) {
        self.now.set(self.now.get() + chrono::Duration::seconds(secs));
    }

    pub fn set_24h(&self, use_24h: bool) {
        self.use_24h.set(use_24h);
    }
}

impl ClockSource for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }

    fn is_24h_style(&self) -> bool {
        self.use_24h.get()
    }
}

/// Hands out tiny solid bitmaps and leased fonts.
#[derive(Default)]
pub struct MockResources {
    ledger: ResourceLedger,
    failing: HashSet<ResourceId>,
}

impl MockResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later request for `id` fail.
    pub fn fail_on(&mut self, id: ResourceId) {
        self.failing.insert(id);
    }

    fn check(&self, id: ResourceId) -> Result<()> {
        if self.failing.contains(&id) {
            return Err(FaceError::ResourceUnavailable(id));
        }
        Ok(())
    }
}

impl ResourceProvider for MockResources {
    fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    fn load_bitmap(&mut self, id: ResourceId) -> Result<Bitmap> {
        self.check(id)?;
        let lease = self.ledger.acquire(ResourceKind::Bitmap, id.name());
        Bitmap::from_rgba(id, Size::new(2, 2), vec![0xff; 16], lease)
    }

    fn load_custom_font(&mut self, id: ResourceId) -> Result<Font> {
        self.check(id)?;
        let size = id.point_size().ok_or(FaceError::ResourceUnavailable(id))?;
        Ok(Font::custom(id, size, self.ledger.acquire(ResourceKind::Font, id.name())))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasOp {
    Fill(Rect, Color),
    Bitmap(Rect, ResourceId),
    Text(Rect, String, TextAlignment, Color),
}

#[derive(Default)]
pub struct RecordingCanvas {
    pub ops: Vec<CanvasOp>,
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, frame: Rect, color: Color) {
        self.ops.push(CanvasOp::Fill(frame, color));
    }

    fn draw_bitmap(&mut self, frame: Rect, bitmap: &Bitmap) {
        self.ops.push(CanvasOp::Bitmap(frame, bitmap.id()));
    }

    fn draw_text(&mut self, frame: Rect, text: &str, _font: &Font, alignment: TextAlignment, color: Color) {
        self.ops.push(CanvasOp::Text(frame, text.to_string(), alignment, color));
    }
}
