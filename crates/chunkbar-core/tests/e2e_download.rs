/// End-to-end tests for the download driver.
///
/// These exercise the real background thread, the status channel, and the
/// shared live counters — no mocking. Plans use tiny sizes and a 1 ms tick
/// so every test completes quickly.
use chunkbar_core::download::{start_download, DownloadPlan};
use chunkbar_core::download::progress::DownloadStatus;
use std::time::Duration;

fn fast_plan(chunk_count: usize) -> DownloadPlan {
    DownloadPlan {
        chunk_count,
        chunk_size: 4096,
        tick: Duration::from_millis(1),
        base_rate: 512,
    }
}

/// Collect status messages until a terminal one arrives or the deadline
/// expires.
fn drain_until_terminal(handle: &chunkbar_core::download::DownloadHandle) -> Vec<DownloadStatus> {
    let mut seen = Vec::new();
    let deadline = std::time::Instant::now() + Duration::from_secs(30);
    loop {
        assert!(
            std::time::Instant::now() < deadline,
            "download did not finish within 30 seconds"
        );
        match handle.status_rx.recv_timeout(Duration::from_millis(100)) {
            Ok(msg) => {
                let terminal = matches!(
                    msg,
                    DownloadStatus::Complete { .. } | DownloadStatus::Cancelled
                );
                seen.push(msg);
                if terminal {
                    return seen;
                }
            }
            Err(_) => continue,
        }
    }
}

#[test]
fn download_starts_progresses_and_completes() {
    let handle = start_download(fast_plan(3));
    let messages = drain_until_terminal(&handle);

    match &messages[0] {
        DownloadStatus::Started {
            chunk_count,
            total_bytes,
        } => {
            assert_eq!(*chunk_count, 3);
            assert_eq!(*total_bytes, 3 * 4096);
        }
        other => panic!("expected Started first, got {other:?}"),
    }

    assert!(
        matches!(messages.last(), Some(DownloadStatus::Complete { .. })),
        "expected Complete last, got {:?}",
        messages.last()
    );
}

#[test]
fn aggregate_progress_is_monotonic() {
    let handle = start_download(fast_plan(2));
    let messages = drain_until_terminal(&handle);

    let mut last = 0u64;
    for msg in &messages {
        if let DownloadStatus::Progress { received_bytes } = msg {
            assert!(
                *received_bytes >= last,
                "aggregate went backwards: {last} -> {received_bytes}"
            );
            last = *received_bytes;
        }
    }
    assert!(last > 0, "expected at least one Progress message");
}

#[test]
fn live_fractions_reach_one_on_completion() {
    let handle = start_download(fast_plan(4));
    let _ = drain_until_terminal(&handle);

    let fractions = handle.chunk_fractions();
    assert_eq!(fractions.len(), 4);
    for (i, f) in fractions.iter().enumerate() {
        assert!((f - 1.0).abs() < f32::EPSILON, "chunk {i} at {f}");
    }
}

#[test]
fn cancel_produces_cancelled_status() {
    // Enormous chunks so the transfer cannot finish before cancellation.
    let handle = start_download(DownloadPlan {
        chunk_count: 2,
        chunk_size: u64::MAX / 4,
        tick: Duration::from_millis(1),
        base_rate: 1,
    });

    handle.cancel();
    assert!(handle.is_cancelled());

    let messages = drain_until_terminal(&handle);
    assert!(
        matches!(messages.last(), Some(DownloadStatus::Cancelled)),
        "expected Cancelled, got {:?}",
        messages.last()
    );
}
