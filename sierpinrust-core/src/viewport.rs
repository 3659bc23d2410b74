use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::point::Point;
use crate::triangle::Triangle;

/// The logical rectangle currently mapped onto the drawing surface.
///
/// Origin is the top-left corner; y grows downward, matching the
/// logical space the fractal lives in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a viewport with explicit bounds.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> crate::Result<Self> {
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(CoreError::InvalidViewport {
                reason: format!("extent must be positive and finite, got {width}\u{d7}{height}"),
            });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// The region showing `focus` at the given manual zoom level:
    /// centered on the focus centroid, extent taken from vertex
    /// differences divided by the zoom.
    ///
    /// The vertex-index formula (`c.x - a.x`, `a.y - b.y`) is used
    /// instead of a bounding box; it is equivalent for every triangle
    /// the generator produces because subdivision preserves the
    /// vertex-ordering convention documented on [`Triangle`].
    pub fn from_focus(focus: &Triangle, zoom: f64) -> Self {
        let center = focus.centroid();
        let width = (focus.c.x - focus.a.x) / zoom;
        let height = (focus.a.y - focus.b.y) / zoom;
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Width / height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn root_focus_at_unit_zoom() {
        let vp = Viewport::from_focus(&Triangle::ROOT, 1.0);
        assert!((vp.width - 1000.0).abs() < EPSILON);
        assert!((vp.height - 1000.0).abs() < EPSILON);
        // Centered on the root centroid (500, 666.66…).
        assert!((vp.x - 0.0).abs() < EPSILON);
        assert!((vp.y - (2000.0 / 3.0 - 500.0)).abs() < EPSILON);
    }

    #[test]
    fn zoom_shrinks_extent_around_the_centroid() {
        let vp1 = Viewport::from_focus(&Triangle::ROOT, 1.0);
        let vp2 = Viewport::from_focus(&Triangle::ROOT, 2.0);
        assert!((vp2.width - vp1.width / 2.0).abs() < EPSILON);
        assert!((vp2.height - vp1.height / 2.0).abs() < EPSILON);
        assert_eq!(vp1.center(), vp2.center());
    }

    #[test]
    fn focus_on_a_child_matches_its_extent() {
        let top = Triangle::ROOT.children()[1];
        let vp = Viewport::from_focus(&top, 1.0);
        assert!((vp.width - 500.0).abs() < EPSILON);
        assert!((vp.height - 500.0).abs() < EPSILON);
        assert!(vp.contains(top.centroid()));
    }

    #[test]
    fn contains_bounds() {
        let vp = Viewport::new(0.0, 0.0, 100.0, 50.0).unwrap();
        assert!(vp.contains(Point::new(0.0, 0.0)));
        assert!(vp.contains(Point::new(100.0, 50.0)));
        assert!(!vp.contains(Point::new(100.1, 25.0)));
        assert!(!vp.contains(Point::new(50.0, -0.1)));
    }

    #[test]
    fn invalid_extent() {
        assert!(Viewport::new(0.0, 0.0, 0.0, 100.0).is_err());
        assert!(Viewport::new(0.0, 0.0, 100.0, -1.0).is_err());
        assert!(Viewport::new(0.0, 0.0, f64::NAN, 100.0).is_err());
        assert!(Viewport::new(0.0, 0.0, 100.0, f64::INFINITY).is_err());
    }

    #[test]
    fn aspect_ratio() {
        let vp = Viewport::new(0.0, 0.0, 200.0, 100.0).unwrap();
        assert!((vp.aspect_ratio() - 2.0).abs() < EPSILON);
    }
}
