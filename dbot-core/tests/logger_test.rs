//! Integration test for [`dbot_core::init_tracing`].
//!
//! Runs in its own test binary because it installs the global subscriber.

use std::fs;

/// **Test: init_tracing tees events into the log file and refuses a second init.**
///
/// **Setup:** Temp dir with a not-yet-existing log file path.
/// **Action:** `init_tracing(Some(path))`, emit an info event, call `init_tracing` again.
/// **Expected:** File is created and holds the event; the second call returns an error.
#[test]
fn test_init_tracing_writes_file_once() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("dbot.log");
    let path_str = path.to_str().expect("Temp path is not UTF-8");

    dbot_core::init_tracing(Some(path_str)).expect("First init should succeed");
    tracing::info!(brain = "memory", "logger smoke test");

    let written = fs::read_to_string(&path).expect("Log file should exist");
    assert!(written.contains("logger smoke test"));
    assert!(written.contains("brain=\"memory\"") || written.contains("brain=memory"));

    assert!(dbot_core::init_tracing(None).is_err());
}
