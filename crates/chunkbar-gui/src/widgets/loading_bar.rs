/// Segmented loading bar widget — one filled rectangle per chunk, scaled
/// by that chunk's completion fraction.
///
/// The geometry is owned by the core tracker; this widget only allocates
/// the bar rect, paints the track background, and adapts the egui painter
/// to the tracker's [`DrawSurface`] capability.
use crate::theme::ChunkbarTheme;
use chunkbar_core::tracker::{ChunkProgressTracker, DrawSurface};

use egui::{Color32, Painter, Pos2, Rect, Sense, Ui, Vec2};

/// Adapter from the core drawing capability to an egui painter.
///
/// Rectangle coordinates arrive relative to the bar's top-left corner.
struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    fill: Color32,
}

impl DrawSurface for PainterSurface<'_> {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let rect = Rect::from_min_size(
            self.origin + Vec2::new(x, y),
            Vec2::new(width, height),
        );
        // Square corners: chunk rectangles must stay visually disjoint.
        self.painter.rect_filled(rect, 0.0, self.fill);
    }
}

/// Draw the loading bar at the given size.
pub fn loading_bar(
    ui: &mut Ui,
    tracker: &ChunkProgressTracker,
    theme: &ChunkbarTheme,
    width: f32,
    height: f32,
) {
    let (rect, _response) = ui.allocate_exact_size(Vec2::new(width, height), Sense::hover());
    let painter = ui.painter_at(rect);

    // Track background.
    painter.rect_filled(rect, 2.0, theme.bar_track);

    let mut surface = PainterSurface {
        painter: &painter,
        origin: rect.min,
        fill: theme.bar_fill,
    };
    tracker.render(&mut surface, rect.width(), rect.height());
}
