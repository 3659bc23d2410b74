use serde::{Deserialize, Serialize};

use crate::point::Point;

/// A triangle in the logical coordinate space, tagged with the
/// subdivision level at which it was produced.
///
/// Vertex ordering is a pipeline-wide invariant: `a` is the
/// bottom-left-like corner, `b` the top corner, `c` the
/// bottom-right-like corner (y grows downward). Subdivision preserves
/// this ordering in every child, which lets the viewport size itself
/// from vertex differences instead of a bounding box.
///
/// Triangles are immutable once constructed; children are always
/// derived, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,

    /// Subdivision level at which this triangle was captured.
    pub depth: u32,
}

impl Triangle {
    /// The fixed base triangle the whole fractal is built from.
    pub const ROOT: Self = Self {
        a: Point::new(0.0, 1000.0),
        b: Point::new(500.0, 0.0),
        c: Point::new(1000.0, 1000.0),
        depth: 0,
    };

    #[inline]
    pub const fn new(a: Point, b: Point, c: Point, depth: u32) -> Self {
        Self { a, b, c, depth }
    }

    /// The three corner children of the Sierpiński construction.
    ///
    /// Each child keeps one parent vertex and takes the midpoints of
    /// the two adjacent edges; the central inverted triangle is
    /// deliberately omitted. Children inherit the parent's vertex
    /// ordering and carry `depth + 1`.
    pub fn children(&self) -> [Self; 3] {
        let m_ab = self.a.midpoint(self.b);
        let m_bc = self.b.midpoint(self.c);
        let m_ca = self.c.midpoint(self.a);
        let depth = self.depth + 1;
        [
            Self::new(self.a, m_ab, m_ca, depth),
            Self::new(m_ab, self.b, m_bc, depth),
            Self::new(m_ca, m_bc, self.c, depth),
        ]
    }

    /// Arithmetic mean of the three vertices.
    pub fn centroid(&self) -> Point {
        Point::new(
            (self.a.x + self.b.x + self.c.x) / 3.0,
            (self.a.y + self.b.y + self.c.y) / 3.0,
        )
    }

    /// Unsigned area via the shoelace formula.
    pub fn area(&self) -> f64 {
        let twice = (self.b.x - self.a.x) * (self.c.y - self.a.y)
            - (self.c.x - self.a.x) * (self.b.y - self.a.y);
        twice.abs() / 2.0
    }

    /// Whether `p` lies inside this triangle (boundary inclusive).
    ///
    /// Same-side test on the three edges: the point is inside when
    /// the cross products do not disagree in sign.
    pub fn contains(&self, p: Point) -> bool {
        fn cross(p: Point, e0: Point, e1: Point) -> f64 {
            (e1.x - e0.x) * (p.y - e0.y) - (e1.y - e0.y) * (p.x - e0.x)
        }

        let d1 = cross(p, self.a, self.b);
        let d2 = cross(p, self.b, self.c);
        let d3 = cross(p, self.c, self.a);

        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }
}
