use tracing::debug;

use crate::triangle::Triangle;
use crate::viewport::Viewport;

/// Lower bound on the manual zoom level.
pub const MIN_ZOOM: f64 = 1.0;
/// Upper bound on the manual zoom level.
pub const MAX_ZOOM: f64 = 10.0;
/// Multiplier applied per manual zoom step.
pub const ZOOM_STEP: f64 = 1.5;

/// The view-controller state: current focus triangle, manual zoom
/// level, and the LIFO stack of previous focus triangles.
///
/// The manual zoom compounds with the click-driven focus change: the
/// focus picks which triangle fills the view, the zoom level shrinks
/// the viewport further around its centroid. Popping the history
/// restores exactly the focus that was active before the matching
/// `focus_on`, so the stack plus the current focus always reconstruct
/// the full navigation path from the root.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    focus: Triangle,
    zoom: f64,
    history: Vec<Triangle>,
}

impl View {
    pub fn new() -> Self {
        Self {
            focus: Triangle::ROOT,
            zoom: MIN_ZOOM,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn focus(&self) -> &Triangle {
        &self.focus
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Make `target` the new focus, remembering the current one.
    /// Always legal; any rendered triangle is a valid target.
    pub fn focus_on(&mut self, target: Triangle) {
        debug!(depth = target.depth, "focus changed");
        self.history.push(self.focus);
        self.focus = target;
    }

    /// Restore the focus that was active before the last `focus_on`.
    /// Silently ignored when the history is empty.
    pub fn back(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.focus = previous;
        }
    }

    #[inline]
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    #[inline]
    pub fn can_zoom_in(&self) -> bool {
        self.zoom < MAX_ZOOM
    }

    #[inline]
    pub fn can_zoom_out(&self) -> bool {
        self.zoom > MIN_ZOOM
    }

    /// One manual zoom step in, clamped at [`MAX_ZOOM`]; a no-op once
    /// the bound is reached.
    pub fn zoom_in(&mut self) {
        if self.can_zoom_in() {
            self.zoom = (self.zoom * ZOOM_STEP).min(MAX_ZOOM);
        }
    }

    /// One manual zoom step out, floored at [`MIN_ZOOM`].
    pub fn zoom_out(&mut self) {
        if self.can_zoom_out() {
            self.zoom = (self.zoom / ZOOM_STEP).max(MIN_ZOOM);
        }
    }

    /// Return to the root view: empty history, unit zoom. Idempotent.
    pub fn reset(&mut self) {
        debug!("view reset");
        self.history.clear();
        self.zoom = MIN_ZOOM;
        self.focus = Triangle::ROOT;
    }

    /// Whether any zoom state is active. Drives the reset button's
    /// visibility; not a correctness constraint.
    pub fn is_zoomed(&self) -> bool {
        self.zoom > MIN_ZOOM || !self.history.is_empty()
    }

    /// The logical region to hand to the drawing surface.
    pub fn viewport(&self) -> Viewport {
        Viewport::from_focus(&self.focus, self.zoom)
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}
