/// Control panel — transfer settings and start/cancel controls.
use crate::state::{AppPhase, AppState};

use egui::Ui;

/// Draw the control panel (left sidebar content).
pub fn control_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Transfer");
    ui.add_space(4.0);

    let downloading = state.phase == AppPhase::Downloading;

    // Chunk layout is fixed for a running transfer.
    ui.add_enabled(
        !downloading,
        egui::Slider::new(&mut state.chunk_count_choice, 1..=16).text("chunks"),
    );

    ui.add_space(8.0);

    if downloading {
        if ui.button("\u{23f9} Cancel").clicked() {
            state.cancel_download();
        }
    } else if ui.button("\u{2b07} Start download").clicked() {
        state.start_download();
    }

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(4.0);

    if ui
        .checkbox(&mut state.dark_mode, "Dark mode")
        .on_hover_text("Toggle between dark and light theme")
        .changed()
    {
        tracing::debug!(dark = state.dark_mode, "theme toggled");
    }
}
