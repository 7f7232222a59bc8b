/// Download status reporting — lightweight messages sent from the download
/// thread to the UI thread via a crossbeam channel.

use std::time::Duration;

/// Status updates sent from the download thread to the UI.
///
/// The per-chunk byte counters live in the shared `LiveChunks`; these
/// messages carry only aggregate totals and lifecycle transitions.
#[derive(Debug)]
pub enum DownloadStatus {
    /// The transfer has been set up and the first tick is about to run.
    Started {
        chunk_count: usize,
        total_bytes: u64,
    },
    /// Periodic update with the running aggregate.
    Progress { received_bytes: u64 },
    /// Every chunk reached its full size.
    Complete { duration: Duration },
    /// The transfer was cancelled by the user.
    Cancelled,
}
