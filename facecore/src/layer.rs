//! Visual layers and the canvas they draw onto.

use crate::geometry::{Color, Rect, TextAlignment};
use crate::resources::{Bitmap, Font, Lease, ResourceKind, ResourceLedger};

/// Drawing surface supplied by the host, in logical watch pixels.
pub trait Canvas {
    fn fill_rect(&mut self, frame: Rect, color: Color);

    /// Draw `bitmap` scaled into `frame`.
    fn draw_bitmap(&mut self, frame: Rect, bitmap: &Bitmap);

    /// Draw a single line of text starting at the top of `frame`.
    fn draw_text(&mut self, frame: Rect, text: &str, font: &Font, alignment: TextAlignment, color: Color);
}

pub trait Layer {
    fn frame(&self) -> Rect;

    fn draw(&self, canvas: &mut dyn Canvas);
}

/// Shows a bitmap across its frame.
#[derive(Debug)]
pub struct BitmapLayer {
    // released before the bitmap it shows
    _lease: Lease,
    frame: Rect,
    bitmap: Bitmap,
}

impl BitmapLayer {
    pub fn new(ledger: &ResourceLedger, frame: Rect, bitmap: Bitmap) -> Self {
        Self {
            _lease: ledger.acquire(ResourceKind::BitmapLayer, "background_layer"),
            frame,
            bitmap,
        }
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }
}

impl Layer for BitmapLayer {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_bitmap(self.frame, &self.bitmap);
    }
}

/// A single line of text with its own background.
#[derive(Debug)]
pub struct TextLayer {
    _lease: Lease,
    frame: Rect,
    text: String,
    font: Font,
    alignment: TextAlignment,
    text_color: Color,
    background_color: Color,
}

impl TextLayer {
    /// Empty text, black on white, left aligned.
    pub fn new(ledger: &ResourceLedger, frame: Rect, font: Font) -> Self {
        Self {
            _lease: ledger.acquire(ResourceKind::TextLayer, "time_layer"),
            frame,
            text: String::new(),
            font,
            alignment: TextAlignment::Left,
            text_color: Color::Black,
            background_color: Color::White,
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn set_text_alignment(&mut self, alignment: TextAlignment) {
        self.alignment = alignment;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }
}

impl Layer for TextLayer {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        if self.background_color != Color::Clear {
            canvas.fill_rect(self.frame, self.background_color);
        }
        if self.text_color != Color::Clear && !self.text.is_empty() {
            canvas.draw_text(self.frame, &self.text, &self.font, self.alignment, self.text_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::SystemFont;
    use crate::testing::{CanvasOp, RecordingCanvas};

    #[test]
    fn test_text_layer_defaults_draw_background() {
        let ledger = ResourceLedger::new();
        let mut layer = TextLayer::new(&ledger, Rect::new(0, 0, 10, 10), Font::system(SystemFont::BithamBold42));
        let mut canvas = RecordingCanvas::default();
        layer.draw(&mut canvas);
        // empty text: only the white background
        assert_eq!(canvas.ops, vec![CanvasOp::Fill(Rect::new(0, 0, 10, 10), Color::White)]);

        layer.set_background_color(Color::Clear);
        layer.set_text_alignment(TextAlignment::Center);
        layer.set_text("12:34");
        let mut canvas = RecordingCanvas::default();
        layer.draw(&mut canvas);
        assert_eq!(
            canvas.ops,
            vec![CanvasOp::Text(
                Rect::new(0, 0, 10, 10),
                "12:34".to_string(),
                TextAlignment::Center,
                Color::Black
            )]
        );
    }

    #[test]
    fn test_set_text_replaces() {
        let ledger = ResourceLedger::new();
        let mut layer = TextLayer::new(&ledger, Rect::screen(), Font::system(SystemFont::BithamBold42));
        layer.set_text("00:00");
        layer.set_text("9");
        assert_eq!(layer.text(), "9");
    }

    #[test]
    fn test_layer_leases() {
        let ledger = ResourceLedger::new();
        let layer = TextLayer::new(&ledger, Rect::screen(), Font::system(SystemFont::BithamBold42));
        assert_eq!(ledger.live(ResourceKind::TextLayer), 1);
        drop(layer);
        assert_eq!(ledger.live_total(), 0);
    }
}
