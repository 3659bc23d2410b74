use eframe::egui;

use sierpinrust_core::SubdivisionParams;

use crate::app::{SierpinRustApp, HUD_ALPHA, HUD_CORNER_RADIUS, HUD_MARGIN};

const TOOLBAR_MARGIN: f32 = 8.0;

impl SierpinRustApp {
    pub(crate) fn show_toolbar(&mut self, ctx: &egui::Context) {
        use egui_material_icons::icons::*;

        let icon_on = egui::Color32::from_rgb(200, 200, 200);
        let icon_off = egui::Color32::from_rgb(90, 90, 90);
        let cell = egui::vec2(26.0, 22.0);

        let add_icon_btn = |ui: &mut egui::Ui, icon: &str, enabled: bool| -> egui::Response {
            let label = egui::RichText::new(icon)
                .size(18.0)
                .color(if enabled { icon_on } else { icon_off });
            ui.allocate_ui_with_layout(
                cell,
                egui::Layout::centered_and_justified(egui::Direction::TopDown),
                |ui| ui.add_enabled(enabled, egui::Button::new(label).frame(false)),
            )
            .inner
        };

        egui::Area::new(egui::Id::new("toolbar"))
            .anchor(egui::Align2::RIGHT_TOP, [-TOOLBAR_MARGIN, TOOLBAR_MARGIN])
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_black_alpha(HUD_ALPHA))
                    .inner_margin(egui::Margin::same(4))
                    .corner_radius(4.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.spacing_mut().item_spacing.x = 0.0;

                            if add_icon_btn(ui, ICON_ZOOM_IN, self.view.can_zoom_in())
                                .on_hover_text("Zoom in (+)")
                                .clicked()
                            {
                                self.view.zoom_in();
                            }
                            if add_icon_btn(ui, ICON_ZOOM_OUT, self.view.can_zoom_out())
                                .on_hover_text("Zoom out (-)")
                                .clicked()
                            {
                                self.view.zoom_out();
                            }
                            if add_icon_btn(ui, ICON_ARROW_BACK, self.view.can_go_back())
                                .on_hover_text("Previous focus (Backspace)")
                                .clicked()
                            {
                                self.view.back();
                            }
                            // Only surfaced while some zoom state is active.
                            if self.view.is_zoomed()
                                && add_icon_btn(ui, ICON_RESTART_ALT, true)
                                    .on_hover_text("Reset view (R)")
                                    .clicked()
                            {
                                self.view.reset();
                            }
                            if add_icon_btn(ui, ICON_HELP_OUTLINE, true)
                                .on_hover_text("Controls & shortcuts (F1)")
                                .clicked()
                            {
                                self.show_help = !self.show_help;
                            }
                        });
                    });
            });
    }

    pub(crate) fn show_depth_panel(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("depth_panel"))
            .anchor(egui::Align2::LEFT_BOTTOM, [HUD_MARGIN, -HUD_MARGIN])
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_black_alpha(HUD_ALPHA))
                    .inner_margin(egui::Margin::same(8))
                    .corner_radius(HUD_CORNER_RADIUS)
                    .show(ui, |ui| {
                        ui.style_mut().visuals.override_text_color =
                            Some(egui::Color32::from_rgb(220, 220, 220));

                        let mut depth = self.params.max_depth;
                        ui.add(
                            egui::Slider::new(&mut depth, 0..=SubdivisionParams::MAX_DEPTH)
                                .text("Recursion depth"),
                        );
                        if depth != self.params.max_depth {
                            self.set_depth(depth);
                        }
                    });
            });
    }
}
