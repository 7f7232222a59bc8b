/// chunkbar GUI — egui-based frontend.
///
/// This crate contains all UI code. Business logic lives in `chunkbar-core`.
pub mod app;
pub mod panels;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::ChunkbarApp;
