use eframe::egui;
use tracing::debug;

use sierpinrust_core::{sierpinski, SubdivisionParams, Triangle, View};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub(crate) const HUD_MARGIN: f32 = 8.0;
pub(crate) const HUD_CORNER_RADIUS: f32 = 6.0;
pub(crate) const HUD_ALPHA: u8 = 160;

/// Canvas background.
pub(crate) const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(18, 18, 24);
/// Leaf polygon fill.
pub(crate) const TRIANGLE_FILL: egui::Color32 = egui::Color32::from_rgb(222, 120, 52);
/// Fill for the leaf under the cursor.
pub(crate) const TRIANGLE_HOVER_FILL: egui::Color32 = egui::Color32::from_rgb(244, 166, 102);

// ---------------------------------------------------------------------------
// Application
// ---------------------------------------------------------------------------

pub(crate) struct SierpinRustApp {
    // Fractal state
    pub(crate) params: SubdivisionParams,
    pub(crate) view: View,

    // Cached leaves, regenerated when the depth changes.
    pub(crate) leaves: Vec<Triangle>,
    pub(crate) needs_generate: bool,

    // UI state
    pub(crate) hovered: Option<Triangle>,
    pub(crate) show_hud: bool,
    pub(crate) show_help: bool,
}

impl SierpinRustApp {
    pub(crate) fn new() -> Self {
        Self {
            params: SubdivisionParams::default(),
            view: View::new(),
            leaves: Vec::new(),
            needs_generate: true,
            hovered: None,
            show_hud: true,
            show_help: false,
        }
    }

    /// Change the recursion depth. The slider and the arrow keys both
    /// clamp to the valid domain before calling this.
    pub(crate) fn set_depth(&mut self, depth: u32) {
        let depth = depth.min(SubdivisionParams::MAX_DEPTH);
        if depth != self.params.max_depth {
            self.params.max_depth = depth;
            self.needs_generate = true;
        }
    }

    pub(crate) fn regenerate_if_needed(&mut self) {
        if !self.needs_generate {
            return;
        }
        self.leaves = sierpinski::leaves(Triangle::ROOT, &self.params);
        debug!(
            depth = self.params.max_depth,
            leaves = self.leaves.len(),
            "regenerated fractal"
        );
        self.needs_generate = false;
    }
}

impl eframe::App for SierpinRustApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.regenerate_if_needed();
        self.handle_keyboard(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BACKGROUND))
            .show(ctx, |ui| {
                self.draw_canvas(ui);
            });

        self.show_toolbar(ctx);
        self.show_depth_panel(ctx);
        self.show_zoom_readout(ctx);
        self.show_hud(ctx);
        self.show_help_window(ctx);
    }
}
