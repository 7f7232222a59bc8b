/// Bottom status bar — transfer phase, byte totals, and timing.
use crate::state::{AppPhase, AppState};
use crate::theme::ChunkbarTheme;
use chunkbar_core::format::{format_bytes, format_transfer};

use egui::Ui;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState, theme: &ChunkbarTheme) {
    ui.horizontal(|ui| {
        match state.phase {
            AppPhase::Idle => {
                ui.label(
                    egui::RichText::new("Ready")
                        .size(12.0)
                        .color(theme.text_muted),
                );
            }
            AppPhase::Downloading => {
                ui.spinner();
                ui.label(
                    egui::RichText::new("Downloading...")
                        .size(12.0)
                        .color(theme.text_primary),
                );

                ui.separator();
                ui.label(
                    egui::RichText::new(format_transfer(state.received_bytes, state.total_bytes))
                        .size(12.0)
                        .color(theme.accent),
                );

                if let Some(count) = state.tracker.chunk_count() {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("{count} chunks"))
                            .size(12.0)
                            .color(theme.text_muted),
                    );
                }
            }
            AppPhase::Done => {
                let (status_text, status_color) = if state.download_was_cancelled {
                    ("\u{23f9} Stopped (partial transfer)", theme.warning)
                } else {
                    ("\u{2713} Download complete", theme.success)
                };
                ui.label(
                    egui::RichText::new(status_text)
                        .size(12.0)
                        .color(status_color),
                );

                ui.separator();
                ui.label(
                    egui::RichText::new(format_bytes(state.received_bytes))
                        .size(12.0)
                        .color(theme.accent),
                );

                if let Some(duration) = state.download_duration {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("{:.1}s", duration.as_secs_f64()))
                            .size(12.0)
                            .color(theme.text_muted),
                    );
                }
            }
        }
    });
}
