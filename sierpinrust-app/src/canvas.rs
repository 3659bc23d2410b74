use eframe::egui;

use sierpinrust_core::{sierpinski, Triangle};
use sierpinrust_render::{Scene, SurfaceMapping};

use crate::app::{SierpinRustApp, TRIANGLE_FILL, TRIANGLE_HOVER_FILL};

impl SierpinRustApp {
    /// Paint the fractal and feed pointer events back into the view.
    pub(crate) fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let rect = response.rect;

        let viewport = self.view.viewport();
        let mapping = match SurfaceMapping::new(&viewport, rect.width(), rect.height()) {
            Ok(mapping) => mapping,
            // Zero-sized panel while the window is still laying out.
            Err(_) => return,
        };

        // Pointer position in logical coordinates. Positions in the
        // letterbox border fall outside the viewport and resolve to
        // no triangle.
        let cursor = response
            .hover_pos()
            .map(|pos| mapping.screen_to_logical(pos.x - rect.min.x, pos.y - rect.min.y))
            .filter(|p| viewport.contains(*p));

        self.hovered = cursor.and_then(|p| sierpinski::hit_test(&Triangle::ROOT, &self.params, p));
        if self.hovered.is_some() {
            ui.ctx()
                .output_mut(|o| o.cursor_icon = egui::CursorIcon::PointingHand);
        }

        if response.clicked() {
            if let Some(target) = self.hovered {
                self.view.focus_on(target);
            }
        }

        let scene = Scene::build(&self.leaves, &viewport, &mapping);
        for tri in &scene.triangles {
            let points = tri
                .points
                .iter()
                .map(|&(x, y)| egui::pos2(rect.min.x + x, rect.min.y + y))
                .collect();
            let fill = if self.hovered == Some(tri.source) {
                TRIANGLE_HOVER_FILL
            } else {
                TRIANGLE_FILL
            };
            painter.add(egui::Shape::convex_polygon(
                points,
                fill,
                egui::Stroke::NONE,
            ));
        }
    }
}
