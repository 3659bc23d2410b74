use eframe::egui;

use sierpinrust_core::SubdivisionParams;

use crate::app::SierpinRustApp;

impl SierpinRustApp {
    pub(crate) fn handle_keyboard(&mut self, ctx: &egui::Context) {
        ctx.input(|input| {
            // + / - : manual zoom
            if input.key_pressed(egui::Key::Plus) || input.key_pressed(egui::Key::Equals) {
                self.view.zoom_in();
            }
            if input.key_pressed(egui::Key::Minus) {
                self.view.zoom_out();
            }

            // Backspace: previous focus (silent no-op at the root)
            if input.key_pressed(egui::Key::Backspace) {
                self.view.back();
            }

            // R: reset view
            if input.key_pressed(egui::Key::R) {
                self.view.reset();
            }

            // Arrow up/down: recursion depth
            if input.key_pressed(egui::Key::ArrowUp)
                && self.params.max_depth < SubdivisionParams::MAX_DEPTH
            {
                self.set_depth(self.params.max_depth + 1);
            }
            if input.key_pressed(egui::Key::ArrowDown) && self.params.max_depth > 0 {
                self.set_depth(self.params.max_depth - 1);
            }

            // H: toggle HUD
            if input.key_pressed(egui::Key::H) {
                self.show_hud = !self.show_hud;
            }

            // F1: help, Escape: close it
            if input.key_pressed(egui::Key::F1) {
                self.show_help = !self.show_help;
            }
            if input.key_pressed(egui::Key::Escape) {
                self.show_help = false;
            }
        });
    }
}
