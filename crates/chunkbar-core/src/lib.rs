/// chunkbar Core — progress tracking, download driver, and configuration.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (GUI, CLI, TUI).
///
/// # Modules
///
/// - [`tracker`] — Per-chunk progress model and the rectangle render rule.
/// - [`download`] — Background chunked-download driver with progress reporting.
/// - [`config`] — Demo configuration loaded from an optional JSON file.
/// - [`format`] — Human-readable byte-count formatting.
pub mod config;
pub mod download;
pub mod format;
pub mod tracker;
