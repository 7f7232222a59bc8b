/// Download module — drives a simulated multi-chunk transfer.
///
/// The driver runs on a background thread and advances every chunk by a
/// per-chunk rate each tick, writing byte counters into a **shared
/// `LiveChunks`** (`Arc<RwLock<Vec<ChunkState>>>`) so the UI can read
/// fresh per-chunk fractions every frame. Lifecycle transitions and
/// aggregate totals travel separately over a bounded crossbeam channel.
///
/// Chunk rates are deterministic (derived from the chunk index) so runs
/// are reproducible and tests need no clock mocking beyond a deadline.
pub mod progress;

use progress::DownloadStatus;

use crossbeam_channel::{bounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Maximum number of status messages that may queue up in the channel.
const STATUS_CHANNEL_CAPACITY: usize = 256;

/// Transfer state of a single chunk.
#[derive(Clone, Debug)]
pub struct ChunkState {
    /// Total size of this chunk in bytes.
    pub size: u64,
    /// Bytes received so far; never exceeds `size`.
    pub received: u64,
}

impl ChunkState {
    /// Completion fraction in `[0.0, 1.0]`. A zero-size chunk counts as done.
    pub fn fraction(&self) -> f32 {
        if self.size == 0 {
            1.0
        } else {
            self.received as f32 / self.size as f32
        }
    }
}

/// Per-chunk counters shared between the download thread and the UI.
///
/// The driver holds a write lock briefly once per tick; the UI holds a
/// read lock each frame to snapshot the fractions.
pub type LiveChunks = Arc<RwLock<Vec<ChunkState>>>;

/// Everything the driver needs to run one transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadPlan {
    /// Number of concurrent chunks. At least 1.
    pub chunk_count: usize,
    /// Size of each chunk in bytes.
    pub chunk_size: u64,
    /// Wall-clock interval between ticks.
    pub tick: Duration,
    /// Baseline bytes transferred per chunk per tick.
    pub base_rate: u64,
}

impl DownloadPlan {
    /// Bytes per tick for chunk `index`.
    ///
    /// Spread over 60%–139% of the base rate so chunks visibly progress at
    /// different speeds, the way real segmented transfers do.
    fn rate_for_chunk(&self, index: usize) -> u64 {
        let percent = 60 + (index as u64 * 37) % 80;
        (self.base_rate * percent / 100).max(1)
    }

    fn total_bytes(&self) -> u64 {
        self.chunk_count as u64 * self.chunk_size
    }
}

/// Handle to a running or finished download. Allows cancellation and
/// receiving status updates.
pub struct DownloadHandle {
    /// Receiver for status updates from the download thread.
    pub status_rx: Receiver<DownloadStatus>,
    /// Shared counters, updated once per tick during the transfer.
    pub live_chunks: LiveChunks,
    /// Flag to request cancellation.
    cancel_flag: Arc<AtomicBool>,
    /// Join handle for the download thread.
    _thread: Option<thread::JoinHandle<()>>,
}

impl DownloadHandle {
    /// Request the transfer to stop at the next tick. Non-blocking.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }

    /// Snapshot the current per-chunk completion fractions.
    pub fn chunk_fractions(&self) -> Vec<f32> {
        self.live_chunks.read().iter().map(ChunkState::fraction).collect()
    }
}

/// Start a simulated download on a background thread.
///
/// Returns a `DownloadHandle` immediately; status arrives on
/// `handle.status_rx` and per-chunk counters in `handle.live_chunks`.
pub fn start_download(plan: DownloadPlan) -> DownloadHandle {
    let chunk_count = plan.chunk_count.max(1);
    let plan = DownloadPlan { chunk_count, ..plan };

    let live_chunks: LiveChunks = Arc::new(RwLock::new(
        (0..chunk_count)
            .map(|_| ChunkState {
                size: plan.chunk_size,
                received: 0,
            })
            .collect(),
    ));

    let cancel_flag = Arc::new(AtomicBool::new(false));
    let (tx, rx) = bounded::<DownloadStatus>(STATUS_CHANNEL_CAPACITY);

    info!(
        chunks = chunk_count,
        total_bytes = plan.total_bytes(),
        "starting download"
    );

    let thread_live = Arc::clone(&live_chunks);
    let thread_cancel = Arc::clone(&cancel_flag);
    let thread = thread::Builder::new()
        .name("chunkbar-download".to_owned())
        .spawn(move || run_download(plan, thread_live, thread_cancel, tx))
        .expect("failed to spawn download thread");

    DownloadHandle {
        status_rx: rx,
        live_chunks,
        cancel_flag,
        _thread: Some(thread),
    }
}

// ─── Background thread ──────────────────────────────────────────────────────

/// Tick every chunk forward until all are complete or cancellation is
/// requested.
fn run_download(
    plan: DownloadPlan,
    live_chunks: LiveChunks,
    cancel: Arc<AtomicBool>,
    tx: Sender<DownloadStatus>,
) {
    let started = Instant::now();

    let _ = tx.send(DownloadStatus::Started {
        chunk_count: plan.chunk_count,
        total_bytes: plan.total_bytes(),
    });

    loop {
        if cancel.load(Ordering::Relaxed) {
            debug!("download cancelled after {:?}", started.elapsed());
            let _ = tx.send(DownloadStatus::Cancelled);
            return;
        }

        thread::sleep(plan.tick);

        let mut all_complete = true;
        let mut received_bytes = 0u64;
        {
            let mut chunks = live_chunks.write();
            for (index, chunk) in chunks.iter_mut().enumerate() {
                chunk.received = (chunk.received + plan.rate_for_chunk(index)).min(chunk.size);
                received_bytes += chunk.received;
                if chunk.received < chunk.size {
                    all_complete = false;
                }
            }
        }

        // Drop the update rather than block if the UI is far behind; the
        // live counters already hold the fresh values.
        let _ = tx.try_send(DownloadStatus::Progress { received_bytes });

        if all_complete {
            let duration = started.elapsed();
            info!(?duration, "download complete");
            let _ = tx.send(DownloadStatus::Complete { duration });
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_handles_zero_size_chunk() {
        let chunk = ChunkState { size: 0, received: 0 };
        assert_eq!(chunk.fraction(), 1.0);

        let chunk = ChunkState { size: 200, received: 50 };
        assert_eq!(chunk.fraction(), 0.25);
    }

    #[test]
    fn chunk_rates_vary_but_stay_positive() {
        let plan = DownloadPlan {
            chunk_count: 8,
            chunk_size: 1024,
            tick: Duration::from_millis(1),
            base_rate: 100,
        };
        let rates: Vec<u64> = (0..8).map(|i| plan.rate_for_chunk(i)).collect();
        assert!(rates.iter().all(|&r| r >= 1));
        // Not all chunks move at the same speed.
        assert!(rates.iter().any(|&r| r != rates[0]));
    }

    #[test]
    fn zero_chunk_plan_is_promoted_to_one_chunk() {
        let handle = start_download(DownloadPlan {
            chunk_count: 0,
            chunk_size: 16,
            tick: Duration::from_millis(1),
            base_rate: 64,
        });
        assert_eq!(handle.live_chunks.read().len(), 1);
    }
}
