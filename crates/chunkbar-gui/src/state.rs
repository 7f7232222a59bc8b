/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes. The
/// download thread communicates via its status channel; state updates
/// happen in `process_download_messages()` which runs once per frame on
/// the UI thread.
///
/// The tracker is only ever touched here — the download thread writes
/// byte counters into the shared `LiveChunks`, and this module marshals
/// them into `set_chunk_progress` calls on the render thread.
use chunkbar_core::config::DemoConfig;
use chunkbar_core::download::progress::DownloadStatus;
use chunkbar_core::download::{start_download, DownloadHandle, DownloadPlan};
use chunkbar_core::tracker::ChunkProgressTracker;
use std::time::Duration;

/// The current phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// Idle — no transfer running, possibly showing a previous result.
    Idle,
    /// Downloading — the bar animates as chunks fill.
    Downloading,
    /// Transfer finished (completed or cancelled).
    Done,
}

/// Maximum status messages drained from the channel per frame.
///
/// Prevents a backlog (e.g. after the window was hidden) from blocking
/// the render thread when it is eventually shown again.
const MAX_MESSAGES_PER_FRAME: usize = 64;

/// All application state.
pub struct AppState {
    pub config: DemoConfig,

    // ── Transfer ───────────────────────────────────────
    pub phase: AppPhase,
    pub download: Option<DownloadHandle>,
    pub tracker: ChunkProgressTracker,
    pub total_bytes: u64,
    pub received_bytes: u64,
    pub download_duration: Option<Duration>,
    /// True if the most recent transfer was cancelled.
    pub download_was_cancelled: bool,

    // ── UI state ───────────────────────────────────────
    /// Chunk count selected in the control panel for the next transfer.
    pub chunk_count_choice: usize,
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
}

impl AppState {
    /// Create initial application state from configuration.
    pub fn new(config: DemoConfig) -> Self {
        let chunk_count_choice = config.chunk_count.max(1);
        Self {
            config,
            phase: AppPhase::Idle,
            download: None,
            tracker: ChunkProgressTracker::new(),
            total_bytes: 0,
            received_bytes: 0,
            download_duration: None,
            download_was_cancelled: false,
            chunk_count_choice,
            dark_mode: true,
        }
    }

    /// Start a transfer with the currently selected chunk count.
    pub fn start_download(&mut self) {
        // Reset transfer state.
        self.phase = AppPhase::Downloading;
        self.tracker = ChunkProgressTracker::new();
        self.total_bytes = 0;
        self.received_bytes = 0;
        self.download_duration = None;
        self.download_was_cancelled = false;

        let plan = DownloadPlan {
            chunk_count: self.chunk_count_choice,
            ..self.config.plan()
        };
        self.download = Some(start_download(plan));
    }

    /// Cancel any running transfer.
    pub fn cancel_download(&mut self) {
        if let Some(ref handle) = self.download {
            handle.cancel();
        }
    }

    /// Process pending download status messages. Called once per frame.
    ///
    /// Returns `true` if the UI should repaint (new data arrived).
    pub fn process_download_messages(&mut self) -> bool {
        let handle = match &self.download {
            Some(h) => h,
            None => return false,
        };

        let mut repaint = false;
        let mut final_fractions: Option<Vec<f32>> = None;

        let mut messages_this_frame = 0usize;
        while messages_this_frame < MAX_MESSAGES_PER_FRAME {
            let msg = match handle.status_rx.try_recv() {
                Ok(m) => m,
                Err(_) => break,
            };
            messages_this_frame += 1;
            repaint = true;
            match msg {
                DownloadStatus::Started {
                    chunk_count: _,
                    total_bytes,
                } => {
                    self.total_bytes = total_bytes;
                }
                DownloadStatus::Progress { received_bytes } => {
                    self.received_bytes = received_bytes;
                }
                DownloadStatus::Complete { duration } => {
                    self.download_duration = Some(duration);
                    self.received_bytes = self.total_bytes;
                    self.phase = AppPhase::Done;
                    final_fractions = Some(handle.chunk_fractions());
                    break;
                }
                DownloadStatus::Cancelled => {
                    self.download_was_cancelled = true;
                    self.phase = AppPhase::Done;
                    // Keep whatever the chunks reached before the stop.
                    final_fractions = Some(handle.chunk_fractions());
                    break;
                }
            }
        }

        // Feed the freshest per-chunk fractions into the tracker. Every
        // applied update asks the host for a redraw via the returned flag.
        if let Some(fractions) = final_fractions {
            self.tracker.set_chunk_progress(&fractions);
            self.download = None;
            return true;
        }

        if self.phase == AppPhase::Downloading {
            if let Some(ref handle) = self.download {
                let fractions = handle.chunk_fractions();
                if !fractions.is_empty() {
                    self.tracker.set_chunk_progress(&fractions);
                    repaint = true;
                }
            }
        }

        repaint
    }
}
