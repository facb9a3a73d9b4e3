//! Built-in pride stripe background, used when no image asset is found.

use tiny_skia::{Paint, Pixmap, Rect, Transform};

/// Top to bottom.
const STRIPES: [[u8; 3]; 6] = [
    [228, 3, 3],
    [255, 140, 0],
    [255, 237, 0],
    [0, 128, 38],
    [0, 77, 255],
    [117, 7, 135],
];

/// Render the stripes into an RGBA8 buffer of `width` x `height`.
pub fn pride_stripes(width: u32, height: u32) -> Option<Vec<u8>> {
    let mut pixmap = Pixmap::new(width, height)?;
    let band = height as f32 / STRIPES.len() as f32;
    let mut paint = Paint::default();
    for (i, [r, g, b]) in STRIPES.iter().enumerate() {
        paint.set_color_rgba8(*r, *g, *b, 255);
        let rect = Rect::from_xywh(0.0, i as f32 * band, width as f32, band)?;
        pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }
    // fully opaque, so premultiplied and straight alpha agree
    Some(pixmap.take())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stripes_cover_screen() {
        let pixels = pride_stripes(144, 168).unwrap();
        assert_eq!(pixels.len(), 144 * 168 * 4);
        // first row red, last row purple
        assert_eq!(&pixels[0..4], &[228, 3, 3, 255]);
        let last = (167 * 144) * 4;
        assert_eq!(&pixels[last..last + 4], &[117, 7, 135, 255]);
        assert!(pixels.chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_empty_size() {
        assert!(pride_stripes(0, 168).is_none());
    }
}
