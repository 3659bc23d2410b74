use eframe::egui;

use crate::app::{SierpinRustApp, HUD_ALPHA, HUD_CORNER_RADIUS, HUD_MARGIN};

impl SierpinRustApp {
    pub(crate) fn show_hud(&mut self, ctx: &egui::Context) {
        if !self.show_hud {
            return;
        }

        // -- Top-left: view info --
        egui::Area::new(egui::Id::new("hud_info"))
            .anchor(egui::Align2::LEFT_TOP, [HUD_MARGIN, HUD_MARGIN])
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_black_alpha(HUD_ALPHA))
                    .inner_margin(egui::Margin::same(8))
                    .corner_radius(HUD_CORNER_RADIUS)
                    .show(ui, |ui| {
                        ui.style_mut().visuals.override_text_color =
                            Some(egui::Color32::from_rgb(220, 220, 220));

                        ui.label(format!("Depth: {}", self.params.max_depth));
                        ui.label(format!("Triangles: {}", self.leaves.len()));
                        ui.label(format!("Focus depth: {}", self.view.focus().depth));
                        if self.view.can_go_back() {
                            ui.label(format!("History: {}", self.view.history_len()));
                        }
                        if let Some(hovered) = self.hovered {
                            let centroid = hovered.centroid();
                            ui.label(format!(
                                "Hovered: ({:.0}, {:.0})",
                                centroid.x, centroid.y
                            ));
                        }
                    });
            });
    }

    /// Display-only zoom readout, one decimal place.
    pub(crate) fn show_zoom_readout(&self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("zoom_readout"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-HUD_MARGIN, -HUD_MARGIN])
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_black_alpha(HUD_ALPHA))
                    .inner_margin(egui::Margin::same(8))
                    .corner_radius(HUD_CORNER_RADIUS)
                    .show(ui, |ui| {
                        ui.style_mut().visuals.override_text_color =
                            Some(egui::Color32::from_rgb(200, 200, 200));
                        ui.label(format!("Zoom: {:.1}x", self.view.zoom()));
                    });
            });
    }
}
