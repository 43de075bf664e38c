//! Axis-aligned shape primitives
//!
//! A shape is anchored by its bottom-left corner and carries a nonnegative
//! size. Containment tests are pure queries; all mutation happens through
//! the owning entity moving `pos`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Bottom-left corner
    pub pos: Vec2,
    /// Width (x) and height (y), both nonnegative
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        assert!(
            size.x >= 0.0 && size.y >= 0.0,
            "rectangle size must be nonnegative"
        );
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Inclusive bounding test: edges count as inside
    pub fn contains(&self, point: Vec2) -> bool {
        self.left() <= point.x
            && point.x <= self.right()
            && self.bottom() <= point.y
            && point.y <= self.top()
    }
}

/// An axis-aligned ellipse inscribed in its bounding rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    /// Bottom-left corner of the bounding rectangle
    pub pos: Vec2,
    /// Bounding-rectangle width (x) and height (y), both nonnegative
    pub size: Vec2,
}

impl Ellipse {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        assert!(
            size.x >= 0.0 && size.y >= 0.0,
            "ellipse size must be nonnegative"
        );
        Self { pos, size }
    }

    /// Bounding rectangle of the ellipse
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center point of the ellipse
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Containment against the inscribed ellipse, not just the bounding box
    ///
    /// Rejects via the bounding rectangle first, then tests
    /// (px-cx)²/rx² + (py-cy)²/ry² <= 1.
    pub fn contains(&self, point: Vec2) -> bool {
        if !self.bounds().contains(point) {
            return false;
        }

        let center = self.center();
        let rx = self.size.x / 2.0;
        let ry = self.size.y / 2.0;

        let dx = (point.x - center.x) * (point.x - center.x) / (rx * rx);
        let dy = (point.y - center.y) * (point.y - center.y) / (ry * ry);

        dx + dy <= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rect_contains_is_inclusive() {
        let rect = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(40.0, 8.0));
        assert!(rect.contains(Vec2::new(10.0, 20.0))); // bottom-left corner
        assert!(rect.contains(Vec2::new(50.0, 28.0))); // top-right corner
        assert!(rect.contains(Vec2::new(30.0, 24.0))); // interior
        assert!(!rect.contains(Vec2::new(9.9, 24.0)));
        assert!(!rect.contains(Vec2::new(30.0, 28.1)));
    }

    #[test]
    fn rect_edges_and_center() {
        let rect = Rect::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 20.0));
        assert_eq!(rect.left(), 5.0);
        assert_eq!(rect.right(), 15.0);
        assert_eq!(rect.bottom(), 5.0);
        assert_eq!(rect.top(), 25.0);
        assert_eq!(rect.center(), Vec2::new(10.0, 15.0));
    }

    #[test]
    fn ellipse_rejects_bounding_box_corners() {
        // A circle of radius 5: the bounding-box corner is inside the box
        // but outside the inscribed circle.
        let ellipse = Ellipse::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert!(ellipse.contains(Vec2::new(5.0, 5.0))); // center
        assert!(ellipse.contains(Vec2::new(0.0, 5.0))); // leftmost point
        assert!(ellipse.contains(Vec2::new(5.0, 10.0))); // topmost point
        assert!(!ellipse.contains(Vec2::new(0.5, 0.5))); // near corner
        assert!(!ellipse.contains(Vec2::new(9.5, 9.5)));
    }

    #[test]
    #[should_panic(expected = "nonnegative")]
    fn negative_rect_size_panics() {
        Rect::new(Vec2::ZERO, Vec2::new(-1.0, 5.0));
    }

    #[test]
    #[should_panic(expected = "nonnegative")]
    fn negative_ellipse_size_panics() {
        Ellipse::new(Vec2::ZERO, Vec2::new(5.0, -1.0));
    }

    proptest! {
        #[test]
        fn ellipse_containment_implies_rect_containment(
            px in -20.0f32..40.0,
            py in -20.0f32..40.0,
            w in 0.1f32..30.0,
            h in 0.1f32..30.0,
        ) {
            let point = Vec2::new(px, py);
            let ellipse = Ellipse::new(Vec2::new(2.0, 3.0), Vec2::new(w, h));
            if ellipse.contains(point) {
                prop_assert!(ellipse.bounds().contains(point));
            }
        }

        #[test]
        fn rect_always_contains_its_center(
            x in -100.0f32..100.0,
            y in -100.0f32..100.0,
            w in 0.0f32..100.0,
            h in 0.0f32..100.0,
        ) {
            let rect = Rect::new(Vec2::new(x, y), Vec2::new(w, h));
            prop_assert!(rect.contains(rect.center()));
        }
    }
}
