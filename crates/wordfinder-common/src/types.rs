use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle. Whether it is page- or viewport-relative
/// depends on where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Shift by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Grow by `margin` on all four sides.
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + margin * 2.0,
            height: self.height + margin * 2.0,
        }
    }

    /// True when `other` lies entirely inside `self` (edges inclusive).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Document-absolute, scroll-independent pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageCoordinates {
    pub left: i64,
    pub top: i64,
}

impl PageCoordinates {
    /// Translate a viewport-relative rect to page space using the given
    /// scroll offsets, rounding half-up to whole pixels.
    pub fn from_viewport_rect(rect: &Rect, scroll_x: f64, scroll_y: f64) -> Self {
        Self {
            left: round_px(rect.left() + scroll_x),
            top: round_px(rect.top() + scroll_y),
        }
    }
}

/// Round half-up (`2.5 -> 3`, `-2.5 -> -2`), the way layout engines
/// report integer pixel positions.
pub fn round_px(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// The viewport's scroll offset and size at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewportSnapshot {
    pub fn new(scroll_x: f64, scroll_y: f64, width: f64, height: f64) -> Self {
        Self {
            scroll_x,
            scroll_y,
            width,
            height,
        }
    }

    /// The viewport in its own coordinate space: origin at `(0, 0)`.
    pub fn client_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// The vertical page-space band `[scroll_y - margin, scroll_y + height + margin]`.
    pub fn vertical_band(&self, margin: f64) -> (f64, f64) {
        (
            self.scroll_y - margin,
            self.scroll_y + self.height + margin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn expand_grows_every_side() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0).expand(10.0);
        assert_eq!(r, Rect::new(-10.0, -10.0, 120.0, 70.0));
    }

    #[test]
    fn contains_rect_is_inclusive() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(&Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 5.0, 5.0)));
        assert!(!outer.contains_rect(&Rect::new(-1.0, 10.0, 5.0, 5.0)));
        // Partial overlap is not containment.
        assert!(!outer.contains_rect(&Rect::new(90.0, 90.0, 20.0, 5.0)));
    }

    #[test]
    fn round_px_rounds_half_up() {
        assert_eq!(round_px(2.5), 3);
        assert_eq!(round_px(2.49), 2);
        assert_eq!(round_px(-2.5), -2);
        assert_eq!(round_px(-2.51), -3);
    }

    #[test]
    fn page_coordinates_add_scroll() {
        let rect = Rect::new(12.4, -30.6, 24.0, 16.0);
        let coords = PageCoordinates::from_viewport_rect(&rect, 0.0, 200.0);
        assert_eq!(coords, PageCoordinates { left: 12, top: 169 });
    }

    #[test]
    fn vertical_band_bounds() {
        let vp = ViewportSnapshot::new(0.0, 300.0, 800.0, 600.0);
        assert_eq!(vp.vertical_band(50.0), (250.0, 950.0));
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }
}
