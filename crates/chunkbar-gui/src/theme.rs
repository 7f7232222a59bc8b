/// Colour scheme for chunkbar.
///
/// All colour constants are defined here so the rest of the UI code
/// references semantically-named values rather than raw hex codes.

use egui::{Color32, Stroke, Visuals};

/// Semantic colour palette.
pub struct ChunkbarTheme {
    pub background: Color32,
    pub surface: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub warning: Color32,
    pub success: Color32,
    /// Fill colour of the chunk rectangles. Opaque red, matching the
    /// classic segmented loading bar.
    pub bar_fill: Color32,
    /// Background of the bar behind the chunk rectangles.
    pub bar_track: Color32,
    pub separator: Color32,
}

impl ChunkbarTheme {
    /// Dark theme — the default.
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            surface: Color32::from_rgb(0x2a, 0x2a, 0x3c),
            text_primary: Color32::from_rgb(0xe4, 0xe4, 0xe8),
            text_muted: Color32::from_rgb(0x6c, 0x70, 0x86),
            accent: Color32::from_rgb(0x89, 0xb4, 0xfa),
            warning: Color32::from_rgb(0xfa, 0xb3, 0x87),
            success: Color32::from_rgb(0xa6, 0xe3, 0xa1),
            bar_fill: Color32::from_rgb(0xff, 0x00, 0x00),
            bar_track: Color32::from_rgb(0x2a, 0x2a, 0x3c),
            separator: Color32::from_rgb(0x3a, 0x3a, 0x50),
        }
    }

    /// Light theme — optional toggle.
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(0xf5, 0xf5, 0xf5),
            surface: Color32::from_rgb(0xff, 0xff, 0xff),
            text_primary: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            text_muted: Color32::from_rgb(0x8a, 0x8a, 0x9a),
            accent: Color32::from_rgb(0x3a, 0x6f, 0xd8),
            warning: Color32::from_rgb(0xd0, 0x80, 0x20),
            success: Color32::from_rgb(0x30, 0x98, 0x30),
            bar_fill: Color32::from_rgb(0xff, 0x00, 0x00),
            bar_track: Color32::from_rgb(0xe8, 0xe8, 0xef),
            separator: Color32::from_rgb(0xd0, 0xd0, 0xd8),
        }
    }

    pub fn for_dark_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let mut visuals = if self.background.r() < 128 {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.background;
        visuals.faint_bg_color = self.surface;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.inactive.bg_fill = self.surface;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.active.bg_fill = self.accent;
        visuals.window_stroke = Stroke::new(1.0, self.separator);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 4.0);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}
