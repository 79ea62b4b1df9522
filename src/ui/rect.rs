//! Rectangle type for screen-space hit regions

/// A rectangle anchored at its top-left corner, in whole screen pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Top-left anchored rectangle. Sizes are not validated.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom edge
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Center point (rounded toward the top-left)
    #[cfg(test)]
    pub const fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Check if point is inside. Both edges count as inside.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let r = Rect::new(10, 20, 100, 50);
        assert!(r.contains(50, 40));
        assert!(!r.contains(5, 40));
        assert!(!r.contains(50, 100));
    }

    #[test]
    fn test_contains_is_inclusive_on_every_edge() {
        let r = Rect::new(10, 20, 100, 50);
        assert!(r.contains(r.x, r.y));
        assert!(r.contains(r.right(), r.bottom()));
        assert!(r.contains(r.right(), r.y));
        assert!(r.contains(r.x, r.bottom()));

        assert!(!r.contains(r.x - 1, r.y));
        assert!(!r.contains(r.x, r.y - 1));
        assert!(!r.contains(r.right() + 1, r.bottom()));
        assert!(!r.contains(r.right(), r.bottom() + 1));
    }

    #[test]
    fn test_center() {
        let r = Rect::new(68, 428, 48, 48);
        assert_eq!(r.center(), (92, 452));
    }
}
