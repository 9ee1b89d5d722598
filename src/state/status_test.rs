use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_log_is_empty_and_checking() {
    let log = StatusLogState::default();
    assert!(log.messages().is_empty());
    assert_eq!(*log.liveness(), LivenessStatus::Checking);
}

#[test]
fn poll_interval_is_thirty_seconds() {
    assert_eq!(POLL_INTERVAL.as_secs(), 30);
}

// =============================================================
// report
// =============================================================

#[test]
fn report_prepends_newest_first() {
    let mut log = StatusLogState::default();
    log.report("first", Severity::Info);
    log.report("second", Severity::Success);

    assert_eq!(log.messages().len(), 2);
    assert_eq!(log.messages()[0].text, "second");
    assert_eq!(log.messages()[1].text, "first");
}

#[test]
fn report_assigns_monotonic_ids() {
    let mut log = StatusLogState::default();
    let a = log.report("a", Severity::Info);
    let b = log.report("b", Severity::Warning);
    let c = log.report("c", Severity::Error);
    assert!(a < b && b < c);
}

#[test]
fn log_never_exceeds_capacity() {
    let mut log = StatusLogState::default();
    for i in 0..8 {
        log.report(format!("msg {i}"), Severity::Info);
    }

    assert_eq!(log.messages().len(), STATUS_LOG_CAPACITY);
    // Exactly the last five, reverse-chronological.
    let texts: Vec<&str> = log.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["msg 7", "msg 6", "msg 5", "msg 4", "msg 3"]);
}

#[test]
fn capacity_is_five() {
    assert_eq!(STATUS_LOG_CAPACITY, 5);
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_empties_log_of_any_size() {
    let mut log = StatusLogState::default();
    for i in 0..7 {
        log.report(format!("msg {i}"), Severity::Info);
    }
    log.clear();
    assert!(log.messages().is_empty());

    log.clear();
    assert!(log.messages().is_empty());
}

#[test]
fn ids_stay_unique_across_clear() {
    let mut log = StatusLogState::default();
    let before = log.report("before", Severity::Info);
    log.clear();
    let after = log.report("after", Severity::Info);
    assert!(after > before);
}

// =============================================================
// apply_poll
// =============================================================

#[test]
fn poll_success_overwrites_liveness_without_logging() {
    let mut log = StatusLogState::default();
    log.apply_poll(Some("healthy".to_owned()));

    assert_eq!(*log.liveness(), LivenessStatus::Reported("healthy".to_owned()));
    assert!(log.liveness().is_ok());
    assert!(log.messages().is_empty());
}

#[test]
fn poll_failure_degrades_to_error_sentinel_without_logging() {
    let mut log = StatusLogState::default();
    log.report("existing", Severity::Info);

    log.apply_poll(None);

    assert_eq!(*log.liveness(), LivenessStatus::Unreachable);
    assert_eq!(log.liveness().label(), "Error");
    assert!(!log.liveness().is_ok());
    assert_eq!(log.messages().len(), 1);
}

#[test]
fn poll_keeps_updating_after_failures() {
    let mut log = StatusLogState::default();

    log.apply_poll(None);
    assert_eq!(*log.liveness(), LivenessStatus::Unreachable);

    log.apply_poll(Some("degraded".to_owned()));
    assert_eq!(*log.liveness(), LivenessStatus::Reported("degraded".to_owned()));
    assert!(!log.liveness().is_ok());

    log.apply_poll(None);
    assert_eq!(*log.liveness(), LivenessStatus::Unreachable);

    assert!(log.messages().is_empty());
}

// =============================================================
// LivenessStatus labels
// =============================================================

#[test]
fn liveness_labels() {
    assert_eq!(LivenessStatus::Checking.label(), "Checking...");
    assert_eq!(LivenessStatus::Reported("healthy".into()).label(), "healthy");
    assert_eq!(LivenessStatus::Unreachable.label(), "Error");
}
