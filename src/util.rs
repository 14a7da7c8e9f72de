// RetroPixel
// copyright zipxing@hotmail.com 2022～2025

//! Utilities: the signed rectangle used for clipping and sprite bounds.

use serde::{Deserialize, Serialize};

/// Rectangle with a signed origin, so draw calls can start off-screen.
/// Covers [x, x+width) × [y, y+height).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(self) -> i64 {
        self.x as i64
    }

    pub fn right(self) -> i64 {
        self.x as i64 + self.width as i64
    }

    pub fn top(self) -> i64 {
        self.y as i64
    }

    pub fn bottom(self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn contains(self, x: i32, y: i32) -> bool {
        let (x, y) = (x as i64, y as i64);
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }

    pub fn intersects(self, other: Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Overlapping region, None when the rectangles do not touch.
    pub fn intersection(self, other: Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        let x1 = self.left().max(other.left());
        let y1 = self.top().max(other.top());
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        Some(Rect::new(
            x1 as i32,
            y1 as i32,
            (x2 - x1) as u32,
            (y2 - y1) as u32,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_clips_negative_origin() {
        let screen = Rect::new(0, 0, 4, 4);
        let r = Rect::new(-2, -2, 6, 6);
        assert_eq!(r.intersection(screen), Some(screen));
    }

    #[test]
    fn disjoint_rects_do_not_intersect() {
        let screen = Rect::new(0, 0, 4, 4);
        assert_eq!(Rect::new(4, 0, 2, 2).intersection(screen), None);
        assert_eq!(Rect::new(-2, 0, 2, 2).intersection(screen), None);
        assert_eq!(Rect::new(1, 1, 0, 3).intersection(screen), None);
    }

    #[test]
    fn contains_is_half_open() {
        let outer = Rect::new(0, 0, 16, 16);
        assert!(outer.contains(0, 0));
        assert!(!outer.contains(-1, 0));
        assert!(outer.contains(15, 15));
        assert!(!outer.contains(16, 0));
    }
}
