use tracing::trace;

use sierpinrust_core::{Triangle, Viewport};

use crate::mapping::SurfaceMapping;

/// A leaf triangle projected to surface coordinates.
///
/// Keeps the logical `source` triangle so the surface can report a
/// clicked or hovered polygon's identity back to the view controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTriangle {
    pub points: [(f32, f32); 3],
    pub source: Triangle,
}

/// The drawable content of one frame: every visible leaf, projected.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub triangles: Vec<ScreenTriangle>,
    /// Leaves skipped because they lie entirely outside the viewport.
    pub culled: usize,
}

impl Scene {
    /// Project `leaves` through `mapping`, dropping triangles whose
    /// bounding box misses the viewport. Triangles straddling the
    /// viewport edge are kept; the painter clips them.
    pub fn build(leaves: &[Triangle], viewport: &Viewport, mapping: &SurfaceMapping) -> Self {
        let mut triangles = Vec::with_capacity(leaves.len());
        let mut culled = 0;
        for leaf in leaves {
            if !overlaps(leaf, viewport) {
                culled += 1;
                continue;
            }
            triangles.push(ScreenTriangle {
                points: [
                    mapping.logical_to_screen(leaf.a),
                    mapping.logical_to_screen(leaf.b),
                    mapping.logical_to_screen(leaf.c),
                ],
                source: *leaf,
            });
        }
        trace!(visible = triangles.len(), culled, "scene built");
        Self { triangles, culled }
    }
}

/// Bounding-box overlap between a triangle and the viewport.
fn overlaps(t: &Triangle, vp: &Viewport) -> bool {
    let min_x = t.a.x.min(t.b.x).min(t.c.x);
    let max_x = t.a.x.max(t.b.x).max(t.c.x);
    let min_y = t.a.y.min(t.b.y).min(t.c.y);
    let max_y = t.a.y.max(t.b.y).max(t.c.y);
    min_x <= vp.x + vp.width && max_x >= vp.x && min_y <= vp.y + vp.height && max_y >= vp.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use sierpinrust_core::{leaves, SubdivisionParams};

    #[test]
    fn root_view_culls_only_the_clipped_apex() {
        let params = SubdivisionParams::new(3).unwrap();
        let all = leaves(Triangle::ROOT, &params);
        let vp = Viewport::from_focus(&Triangle::ROOT, 1.0);
        let mapping = SurfaceMapping::new(&vp, 600.0, 600.0).unwrap();

        // The root viewport is centered on the centroid, so it starts
        // at y ≈ 166.7; the apex-most leaf (y ∈ [0, 125]) falls
        // entirely above it.
        let scene = Scene::build(&all, &vp, &mapping);
        assert_eq!(scene.culled, 1);
        assert_eq!(scene.triangles.len(), 26);
    }

    #[test]
    fn focused_view_culls_distant_leaves() {
        let params = SubdivisionParams::new(4).unwrap();
        let all = leaves(Triangle::ROOT, &params);

        // Focus tight on the bottom-left grandchild.
        let focus = Triangle::ROOT.children()[0].children()[0];
        let vp = Viewport::from_focus(&focus, 1.0);
        let mapping = SurfaceMapping::new(&vp, 600.0, 600.0).unwrap();

        let scene = Scene::build(&all, &vp, &mapping);
        assert_eq!(scene.triangles.len() + scene.culled, all.len());
        assert!(scene.culled > 0, "leaves far from the focus must be culled");
        assert!(!scene.triangles.is_empty());
    }

    #[test]
    fn projection_keeps_source_identity_and_depth() {
        let params = SubdivisionParams::new(2).unwrap();
        let all = leaves(Triangle::ROOT, &params);
        let vp = Viewport::from_focus(&Triangle::ROOT, 1.0);
        let mapping = SurfaceMapping::new(&vp, 400.0, 400.0).unwrap();

        let scene = Scene::build(&all, &vp, &mapping);
        for (leaf, screen) in all.iter().zip(&scene.triangles) {
            assert_eq!(screen.source, *leaf);
            assert_eq!(screen.source.depth, 2);
        }
    }

    #[test]
    fn screen_points_follow_the_mapping() {
        let vp = Viewport::from_focus(&Triangle::ROOT, 1.0);
        let mapping = SurfaceMapping::new(&vp, 500.0, 500.0).unwrap();
        let scene = Scene::build(&[Triangle::ROOT], &vp, &mapping);

        let expected = mapping.logical_to_screen(Triangle::ROOT.b);
        assert_eq!(scene.triangles[0].points[1], expected);
    }
}
