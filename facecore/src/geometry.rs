//! Logical screen geometry and the watch colour palette.

/// Logical width of the watch display.
pub const SCREEN_WIDTH: i16 = 144;
/// Logical height of the watch display.
pub const SCREEN_HEIGHT: i16 = 168;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub w: i16,
    pub h: i16,
}

impl Size {
    pub const fn new(w: i16, h: i16) -> Self {
        Self { w, h }
    }

    /// Number of pixels covered, zero for degenerate sizes.
    pub fn area(&self) -> usize {
        (self.w.max(0) as usize) * (self.h.max(0) as usize)
    }
}

/// Rectangle in logical pixels, origin at the top-left of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: i16, y: i16, w: i16, h: i16) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(w, h),
        }
    }

    /// The whole watch screen.
    pub const fn screen() -> Self {
        Self::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    pub fn left(&self) -> i16 {
        self.origin.x
    }

    pub fn top(&self) -> i16 {
        self.origin.y
    }

    pub fn right(&self) -> i16 {
        self.origin.x + self.size.w
    }

    pub fn bottom(&self) -> i16 {
        self.origin.y + self.size.h
    }

    /// Whether `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// The colours a layer can paint with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Nothing is painted; whatever is below shows through.
    Clear,
    Black,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_rect() {
        let screen = Rect::screen();
        assert_eq!(screen.right(), 144);
        assert_eq!(screen.bottom(), 168);
        assert_eq!(screen.size.area(), 144 * 168);
    }

    #[test]
    fn test_contains_rect() {
        let screen = Rect::screen();
        assert!(screen.contains_rect(&Rect::new(0, 56, 144, 56)));
        assert!(screen.contains_rect(&screen));
        assert!(!screen.contains_rect(&Rect::new(1, 0, 144, 10)));
        assert!(!screen.contains_rect(&Rect::new(0, 160, 10, 10)));
    }

    #[test]
    fn test_degenerate_area() {
        assert_eq!(Size::new(-3, 10).area(), 0);
    }
}
