use sierpinrust_core::{Point, Viewport};

use crate::error::RenderError;

/// Maps the logical viewport onto a physical drawing surface.
///
/// The logical rectangle is fitted inside the surface preserving
/// aspect ratio and centered, letterboxed or pillarboxed as needed.
/// Coordinates are surface-local: `(0, 0)` is the surface's top-left
/// corner, so callers working in window space subtract their panel
/// origin first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMapping {
    /// Physical pixels per logical unit.
    scale: f64,
    /// Surface-space position of logical `(0, 0)`.
    offset_x: f64,
    offset_y: f64,
}

impl SurfaceMapping {
    pub fn new(
        viewport: &Viewport,
        surface_width: f32,
        surface_height: f32,
    ) -> crate::Result<Self> {
        if !(surface_width > 0.0 && surface_height > 0.0)
            || !surface_width.is_finite()
            || !surface_height.is_finite()
        {
            return Err(RenderError::InvalidDimensions {
                width: surface_width,
                height: surface_height,
            });
        }
        // Hand-built viewports may carry a degenerate extent.
        let viewport = Viewport::new(viewport.x, viewport.y, viewport.width, viewport.height)?;

        let sw = surface_width as f64;
        let sh = surface_height as f64;
        let scale = (sw / viewport.width).min(sh / viewport.height);
        Ok(Self {
            scale,
            offset_x: (sw - viewport.width * scale) / 2.0 - viewport.x * scale,
            offset_y: (sh - viewport.height * scale) / 2.0 - viewport.y * scale,
        })
    }

    #[inline]
    pub fn logical_to_screen(&self, p: Point) -> (f32, f32) {
        (
            (self.offset_x + p.x * self.scale) as f32,
            (self.offset_y + p.y * self.scale) as f32,
        )
    }

    /// Inverse of [`logical_to_screen`](Self::logical_to_screen).
    /// Positions in the letterbox border map to logical coordinates
    /// outside the viewport; callers filter those with
    /// [`Viewport::contains`].
    #[inline]
    pub fn screen_to_logical(&self, sx: f32, sy: f32) -> Point {
        Point::new(
            (sx as f64 - self.offset_x) / self.scale,
            (sy as f64 - self.offset_y) / self.scale,
        )
    }

    /// Physical pixels per logical unit.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }
}
