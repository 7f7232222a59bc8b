/// Per-chunk progress tracking and the rectangle render rule.
///
/// A multi-part transfer reports one completion fraction per chunk. The
/// tracker stores the latest fraction for each chunk (position in the
/// sequence *is* the chunk identity) and turns them into disjoint filled
/// rectangles on every draw: the bar is split into equal-width slots, one
/// per chunk, and each slot is filled proportionally to its fraction.
///
/// The tracker is framework-agnostic — it issues draw commands through the
/// [`DrawSurface`] capability trait and never touches a real canvas. It is
/// owned and driven by a single thread; progress arriving from background
/// threads must be marshalled by the caller before reaching `set_*`.
use tracing::warn;

/// Floor applied to every stored fraction so an in-flight chunk always
/// shows a visible sliver, even at 0% progress.
pub const MIN_VISIBLE_PROGRESS: f32 = 0.1;

/// Capability interface of the host drawing surface.
///
/// The only primitive the tracker needs: fill an axis-aligned rectangle,
/// given its min corner and size in pixels, with the bar's fill colour.
pub trait DrawSurface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
}

/// Latest known per-chunk progress, plus the render rule.
///
/// Starts uninitialized (no chunks). The first update — or any update whose
/// length differs from the current chunk count — reallocates the stored
/// sequence; equal-length updates overwrite values in place, index by index.
#[derive(Debug, Default)]
pub struct ChunkProgressTracker {
    /// `None` until the first update arrives.
    chunks: Option<Vec<f32>>,
}

impl ChunkProgressTracker {
    pub fn new() -> Self {
        Self { chunks: None }
    }

    /// Single-chunk convenience: equivalent to `set_chunk_progress(&[value])`.
    pub fn set_progress(&mut self, value: f32) {
        self.set_chunk_progress(&[value]);
    }

    /// Record the latest progress for every chunk.
    ///
    /// Values are clamped into `[MIN_VISIBLE_PROGRESS, 1.0]` on write.
    /// Non-finite input lands on the floor (NaN never survives the
    /// max/min pair) and is logged for diagnostics.
    ///
    /// The reallocation branch runs once per transfer — the chunk layout
    /// only changes when a new download starts.
    pub fn set_chunk_progress(&mut self, updated: &[f32]) {
        match self.chunks {
            Some(ref mut chunks) if chunks.len() == updated.len() => {
                for (slot, &value) in chunks.iter_mut().zip(updated) {
                    *slot = clamp_progress(value);
                }
            }
            _ => {
                self.chunks = Some(updated.iter().map(|&v| clamp_progress(v)).collect());
            }
        }
    }

    /// Number of tracked chunks, or `None` before the first update.
    pub fn chunk_count(&self) -> Option<usize> {
        self.chunks.as_ref().map(Vec::len)
    }

    /// Stored fractions, index-aligned with chunk identity. Empty before
    /// the first update.
    pub fn chunk_progress(&self) -> &[f32] {
        self.chunks.as_deref().unwrap_or(&[])
    }

    /// Emit one filled rectangle per in-progress chunk.
    ///
    /// The bar is divided into `chunk_count` equal slots; chunk *i* fills
    /// its slot from the left, proportional to its fraction. Every chunk
    /// consumes its full slot width for layout whether or not a rectangle
    /// was drawn, so rectangles never overlap and a fully-progressed set
    /// covers exactly `width` pixels.
    ///
    /// With no chunks (uninitialized, or an empty update) this draws
    /// nothing.
    pub fn render(&self, surface: &mut dyn DrawSurface, width: f32, height: f32) {
        let chunks = match self.chunks.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => return,
        };

        let slot_width = width / chunks.len() as f32;
        let mut offset = 0.0f32;

        for &progress in chunks {
            if progress > 0.0 {
                surface.fill_rect(offset, 0.0, slot_width * progress, height);
            }
            offset += slot_width;
        }
    }
}

/// Clamp a raw fraction into `[MIN_VISIBLE_PROGRESS, 1.0]`.
///
/// `max` then `min` both ignore a NaN operand, so non-finite input
/// resolves to the floor rather than poisoning the stored sequence.
fn clamp_progress(value: f32) -> f32 {
    if !value.is_finite() {
        warn!("non-finite chunk progress {value}, clamping");
    }
    value.max(MIN_VISIBLE_PROGRESS).min(1.0)
}
