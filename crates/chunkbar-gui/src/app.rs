/// Main `eframe::App` implementation for chunkbar.
///
/// Composes the control panel, the loading bar, and the status bar.
use crate::panels;
use crate::state::{AppPhase, AppState};
use crate::theme::ChunkbarTheme;
use crate::widgets;

use chunkbar_core::config::DemoConfig;

/// Height of the loading bar in the central panel.
const BAR_HEIGHT: f32 = 14.0;

/// Horizontal margin around the loading bar.
const BAR_MARGIN: f32 = 24.0;

/// The chunkbar demo application.
pub struct ChunkbarApp {
    state: AppState,
}

impl ChunkbarApp {
    /// Create a new application instance.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DemoConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for ChunkbarApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let theme = ChunkbarTheme::for_dark_mode(self.state.dark_mode);
        theme.apply(ctx);

        // ── Process background messages ───────────────────────────────────
        // Applying an update to the tracker asks for a redraw: egui
        // schedules the next paint pass, which calls the render rule again.
        let data_changed = self.state.process_download_messages();
        if data_changed || self.state.phase == AppPhase::Downloading {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state, &theme);
                ui.add_space(2.0);
            });

        // ── Left sidebar ──────────────────────────────────────────────────
        egui::SidePanel::left("control_panel")
            .default_width(200.0)
            .min_width(160.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::control_panel::control_panel(ui, &mut self.state);
            });

        // ── Central panel (loading bar) ───────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space((ui.available_height() / 2.0 - BAR_HEIGHT).max(0.0));
            ui.horizontal(|ui| {
                ui.add_space(BAR_MARGIN);
                let width = (ui.available_width() - BAR_MARGIN).max(0.0);
                widgets::loading_bar::loading_bar(
                    ui,
                    &self.state.tracker,
                    &theme,
                    width,
                    BAR_HEIGHT,
                );
            });
        });
    }
}
