/// End-to-end tests for `AppState` — the GUI application state machine.
///
/// These tests exercise the real business-logic paths of `AppState` without
/// spinning up an egui window, keeping them fast and deterministic.
///
/// **Scope:**
///   - Transfer lifecycle (start, progress messages, completion, cancellation)
///   - Tracker wiring: per-chunk fractions reach the tracker on the UI side
///   - Restart semantics: a second transfer resets counters and tracker
///
/// The real background download driver is used so no mocking is needed.
use chunkbar_core::config::DemoConfig;
use chunkbar_gui::state::{AppPhase, AppState};
use std::time::Duration;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Tiny transfer that completes in well under a second.
fn fast_config(chunk_count: usize) -> DemoConfig {
    DemoConfig {
        chunk_count,
        chunk_size_kb: 8,
        tick_ms: 1,
        rate_kb_per_tick: 2,
    }
}

/// Pump `process_download_messages()` until the phase leaves `Downloading`
/// or the deadline expires.
fn pump_until_done(state: &mut AppState) {
    let deadline = std::time::Instant::now() + Duration::from_secs(30);
    while state.phase == AppPhase::Downloading {
        assert!(
            std::time::Instant::now() < deadline,
            "transfer did not complete within 30 seconds"
        );
        state.process_download_messages();
        std::thread::sleep(Duration::from_millis(5));
    }
}

// ── Transfer lifecycle ────────────────────────────────────────────────────────

/// After `start_download`, the phase must be `Downloading`.
#[test]
fn start_download_sets_downloading_phase() {
    let mut state = AppState::new(fast_config(2));
    state.start_download();
    assert_eq!(state.phase, AppPhase::Downloading);
}

/// A finished transfer must flip the phase to `Done` with full totals and
/// a fully-progressed tracker.
#[test]
fn download_completes_with_full_tracker() {
    let mut state = AppState::new(fast_config(3));
    state.start_download();
    pump_until_done(&mut state);

    assert_eq!(state.phase, AppPhase::Done);
    assert!(!state.download_was_cancelled);
    assert_eq!(state.received_bytes, state.total_bytes);
    assert!(state.total_bytes > 0);
    assert!(state.download_duration.is_some());

    assert_eq!(state.tracker.chunk_count(), Some(3));
    for (i, p) in state.tracker.chunk_progress().iter().enumerate() {
        assert!((p - 1.0).abs() < f32::EPSILON, "chunk {i} at {p}");
    }
}

/// The tracker stays untouched before the first transfer.
#[test]
fn fresh_state_has_uninitialized_tracker() {
    let state = AppState::new(fast_config(4));
    assert_eq!(state.tracker.chunk_count(), None);
    assert!(state.tracker.chunk_progress().is_empty());
}

/// Cancelling must leave `Downloading`, set the cancelled flag, and keep
/// partial per-chunk progress in the tracker.
#[test]
fn cancel_download_sets_cancelled_flag() {
    // Large enough that the transfer cannot finish before the cancel lands.
    let mut state = AppState::new(DemoConfig {
        chunk_count: 2,
        chunk_size_kb: 1_048_576,
        tick_ms: 1,
        rate_kb_per_tick: 1,
    });
    state.start_download();
    state.cancel_download();
    pump_until_done(&mut state);

    assert_eq!(state.phase, AppPhase::Done);
    assert!(state.download_was_cancelled);
    assert_eq!(state.tracker.chunk_count(), Some(2));
}

/// Starting a second transfer resets counters, flags, and the tracker.
#[test]
fn restart_resets_previous_results() {
    let mut state = AppState::new(fast_config(2));
    state.start_download();
    pump_until_done(&mut state);
    assert_eq!(state.tracker.chunk_count(), Some(2));

    state.chunk_count_choice = 5;
    state.start_download();
    assert_eq!(state.phase, AppPhase::Downloading);
    assert_eq!(state.tracker.chunk_count(), None);
    assert_eq!(state.received_bytes, 0);
    assert!(state.download_duration.is_none());

    pump_until_done(&mut state);
    assert_eq!(state.tracker.chunk_count(), Some(5));
}

/// The chunk-count choice from the control panel, not the config file,
/// decides the next transfer's layout.
#[test]
fn chunk_count_choice_overrides_config() {
    let mut state = AppState::new(fast_config(2));
    state.chunk_count_choice = 7;
    state.start_download();
    pump_until_done(&mut state);
    assert_eq!(state.tracker.chunk_count(), Some(7));
}

/// `process_download_messages` is a no-op without a running transfer.
#[test]
fn no_transfer_means_no_repaint() {
    let mut state = AppState::new(fast_config(2));
    assert!(!state.process_download_messages());
}
