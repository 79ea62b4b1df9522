//! Camera pan buttons
//!
//! Four buttons in a cross anchored to the lower-left corner of the screen:
//! up on top, left/right in the middle row, down at the bottom.
//! The layout is a pure function of the screen height and the style, so the
//! update and draw phases of a tick always agree on where the buttons are.

use serde::{Deserialize, Serialize};
use super::Rect;

/// Size and spacing of the pan buttons, in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyle {
    /// Width and height of each button
    pub size: i32,
    /// Gap between neighbouring buttons
    pub spacing: i32,
    /// Gap between the cross and the left/bottom screen edges
    pub margin: i32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            size: 48,
            spacing: 8,
            margin: 12,
        }
    }
}

/// Direction a pan button moves the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PanDirection {
    pub const ALL: [PanDirection; 4] = [
        PanDirection::Up,
        PanDirection::Down,
        PanDirection::Left,
        PanDirection::Right,
    ];

    /// Unit step in world space (screen Y grows downward)
    pub fn unit(self) -> (f64, f64) {
        match self {
            PanDirection::Up => (0.0, -1.0),
            PanDirection::Down => (0.0, 1.0),
            PanDirection::Left => (-1.0, 0.0),
            PanDirection::Right => (1.0, 0.0),
        }
    }

    /// Label drawn on the button (ASCII, the default font has no arrows)
    pub fn glyph(self) -> &'static str {
        match self {
            PanDirection::Up => "^",
            PanDirection::Down => "v",
            PanDirection::Left => "<",
            PanDirection::Right => ">",
        }
    }
}

/// Hit rectangles for the four pan buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLayout {
    pub up: Rect,
    pub down: Rect,
    pub left: Rect,
    pub right: Rect,
}

impl ButtonLayout {
    /// Compute the layout for a screen of the given height
    pub fn compute(screen_height: i32, style: &ButtonStyle) -> Self {
        let ButtonStyle { size, spacing, margin } = *style;

        let base_x = margin;
        let base_y = screen_height - margin;

        let center_x = base_x + size + spacing;
        let down_y = base_y - size;
        let mid_y = base_y - size * 2 - spacing;
        let up_y = base_y - size * 3 - spacing * 2;

        Self {
            up: Rect::new(center_x, up_y, size, size),
            down: Rect::new(center_x, down_y, size, size),
            left: Rect::new(base_x, mid_y, size, size),
            right: Rect::new(base_x + (size + spacing) * 2, mid_y, size, size),
        }
    }

    pub fn rect(&self, direction: PanDirection) -> Rect {
        match direction {
            PanDirection::Up => self.up,
            PanDirection::Down => self.down,
            PanDirection::Left => self.left,
            PanDirection::Right => self.right,
        }
    }

    /// All buttons in draw order
    pub fn buttons(&self) -> impl Iterator<Item = (PanDirection, Rect)> + '_ {
        PanDirection::ALL.into_iter().map(move |d| (d, self.rect(d)))
    }

    /// Every direction whose button contains the point
    pub fn hits(&self, px: i32, py: i32) -> impl Iterator<Item = PanDirection> + '_ {
        self.buttons()
            .filter(move |(_, r)| r.contains(px, py))
            .map(|(d, _)| d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_layout() -> ButtonLayout {
        ButtonLayout::compute(600, &ButtonStyle::default())
    }

    #[test]
    fn test_default_layout_matches_formula() {
        let layout = default_layout();
        assert_eq!(layout.up, Rect::new(68, 428, 48, 48));
        assert_eq!(layout.left, Rect::new(12, 484, 48, 48));
        assert_eq!(layout.right, Rect::new(124, 484, 48, 48));
        assert_eq!(layout.down, Rect::new(68, 540, 48, 48));
    }

    #[test]
    fn test_cross_sits_above_bottom_margin() {
        let layout = default_layout();
        assert_eq!(layout.down.bottom(), 600 - 12);
        assert_eq!(layout.left.x, 12);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let style = ButtonStyle::default();
        assert_eq!(ButtonLayout::compute(600, &style), ButtonLayout::compute(600, &style));
    }

    #[test]
    fn test_default_buttons_do_not_overlap() {
        let layout = default_layout();
        for (_, r) in layout.buttons() {
            let (cx, cy) = r.center();
            let hits: Vec<_> = layout.hits(cx, cy).collect();
            assert_eq!(hits.len(), 1);
        }
    }

    #[test]
    fn test_hits_reports_every_overlapping_button() {
        // Zero spacing makes the up and left/right rows share an edge
        let style = ButtonStyle { size: 10, spacing: 0, margin: 0 };
        let layout = ButtonLayout::compute(30, &style);
        assert_eq!(layout.up.bottom(), layout.left.y);

        let (x, y) = (layout.up.x, layout.up.bottom());
        let hits: Vec<_> = layout.hits(x, y).collect();
        assert!(hits.contains(&PanDirection::Up));
        assert!(hits.contains(&PanDirection::Left));
    }

    #[test]
    fn test_miss_outside_cross() {
        let layout = default_layout();
        assert_eq!(layout.hits(400, 300).count(), 0);
        // The top-left gap of the cross is empty
        assert_eq!(layout.hits(20, 440).count(), 0);
    }
}
