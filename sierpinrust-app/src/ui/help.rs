use eframe::egui;

use crate::app::SierpinRustApp;

impl SierpinRustApp {
    pub(crate) fn show_help_window(&mut self, ctx: &egui::Context) {
        if !self.show_help {
            return;
        }

        let mut open = true;
        egui::Window::new("Controls & Shortcuts")
            .open(&mut open)
            .resizable(false)
            .default_width(340.0)
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(egui::Color32::from_rgba_unmultiplied(10, 10, 10, 210)),
            )
            .show(ctx, |ui| {
                ui.style_mut().visuals.override_text_color =
                    Some(egui::Color32::from_rgb(220, 220, 220));

                ui.heading("Mouse");
                ui.add_space(2.0);
                egui::Grid::new("help_mouse")
                    .num_columns(2)
                    .spacing([12.0, 2.0])
                    .show(ui, |ui| {
                        let actions: &[(&str, &str)] = &[
                            ("Click triangle", "Focus the view on it"),
                            ("Hover", "Highlight the triangle under the cursor"),
                        ];
                        for &(k, d) in actions {
                            ui.label(egui::RichText::new(k).strong().color(egui::Color32::WHITE));
                            ui.label(d);
                            ui.end_row();
                        }
                    });

                ui.add_space(8.0);
                ui.heading("Keyboard");
                ui.add_space(2.0);
                egui::Grid::new("help_kb")
                    .num_columns(2)
                    .spacing([12.0, 2.0])
                    .show(ui, |ui| {
                        let keys: &[(&str, &str)] = &[
                            ("+ / -", "Zoom in / out"),
                            ("Backspace", "Previous focus"),
                            ("R", "Reset view"),
                            ("Up / Down", "Recursion depth"),
                            ("H", "Toggle HUD"),
                            ("F1", "This help window"),
                            ("Esc", "Close help"),
                        ];
                        for &(k, d) in keys {
                            ui.label(egui::RichText::new(k).strong().color(egui::Color32::WHITE));
                            ui.label(d);
                            ui.end_row();
                        }
                    });

                ui.add_space(8.0);
                ui.heading("About");
                ui.add_space(2.0);
                ui.label(
                    "Click on any triangle to focus on it, or use the zoom buttons to \
                     explore the fractal. The reset button returns to the original view.",
                );
                ui.add_space(4.0);
                ui.label(
                    "The Sierpiński triangle is a fractal with the shape of an equilateral \
                     triangle, subdivided recursively into smaller triangles. It is named \
                     after the Polish mathematician Wacław Sierpiński.",
                );
            });

        if !open {
            self.show_help = false;
        }
    }
}
