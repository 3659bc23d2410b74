use tracing::debug;

use crate::error::CoreError;
use crate::point::Point;
use crate::triangle::Triangle;

/// Parameters controlling the subdivision walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubdivisionParams {
    /// Number of subdivision levels before triangles become drawable
    /// leaves. Domain `[0, 8]`.
    pub max_depth: u32,
}

impl SubdivisionParams {
    /// Upper bound on the recursion depth (`3^8 = 6561` leaves).
    pub const MAX_DEPTH: u32 = 8;
    pub const DEFAULT_DEPTH: u32 = 5;

    pub fn new(max_depth: u32) -> crate::Result<Self> {
        if max_depth > Self::MAX_DEPTH {
            return Err(CoreError::InvalidDepth(max_depth));
        }
        Ok(Self { max_depth })
    }
}

impl Default for SubdivisionParams {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_DEPTH,
        }
    }
}

/// A triangle emitted by the subdivision walk.
///
/// Leaves are drawn as filled polygons; internal nodes exist as zoom
/// targets only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleNode {
    pub triangle: Triangle,
    pub is_leaf: bool,
}

/// Number of leaves produced by `levels` further subdivisions.
#[inline]
fn leaf_count(levels: u32) -> usize {
    3usize.pow(levels)
}

/// Walk the subdivision tree below `root` and return every triangle
/// visited, pre-order, tagged leaf/internal.
///
/// Deterministic and side-effect free; re-run on every depth change.
pub fn subdivide(root: Triangle, params: &SubdivisionParams) -> Vec<TriangleNode> {
    let levels = params.max_depth.saturating_sub(root.depth);
    // Node count for a ternary tree: (3^(levels+1) - 1) / 2.
    let mut nodes = Vec::with_capacity((leaf_count(levels + 1) - 1) / 2);
    walk(root, params.max_depth, &mut |node| nodes.push(node));
    nodes
}

/// The drawable subset of [`subdivide`]: leaf triangles only.
pub fn leaves(root: Triangle, params: &SubdivisionParams) -> Vec<Triangle> {
    let levels = params.max_depth.saturating_sub(root.depth);
    let mut out = Vec::with_capacity(leaf_count(levels));
    walk(root, params.max_depth, &mut |node| {
        if node.is_leaf {
            out.push(node.triangle);
        }
    });
    debug!(
        max_depth = params.max_depth,
        leaves = out.len(),
        "subdivision complete"
    );
    out
}

fn walk(t: Triangle, max_depth: u32, emit: &mut impl FnMut(TriangleNode)) {
    if t.depth >= max_depth {
        emit(TriangleNode {
            triangle: t,
            is_leaf: true,
        });
        return;
    }
    emit(TriangleNode {
        triangle: t,
        is_leaf: false,
    });
    for child in t.children() {
        walk(child, max_depth, emit);
    }
}

/// Resolve a point in logical coordinates to the leaf containing it.
///
/// Descends the tree choosing the child whose area holds the point,
/// so this never materializes the full triangle list. Returns `None`
/// when the point misses the root or lands in a central hole; the
/// returned leaf carries its recorded depth (`== max_depth`).
pub fn hit_test(root: &Triangle, params: &SubdivisionParams, point: Point) -> Option<Triangle> {
    if !root.contains(point) {
        return None;
    }
    let mut current = *root;
    while current.depth < params.max_depth {
        match current.children().into_iter().find(|ch| ch.contains(point)) {
            Some(child) => current = child,
            // The central inverted triangle is not part of the fractal.
            None => return None,
        }
    }
    Some(current)
}
