use super::*;

const MINUTE: i64 = 60_000;

#[test]
fn recent_activity_does_nothing() {
    let mut m = IdleMonitor::new();
    assert_eq!(m.poll(54 * MINUTE, Some(0), true), IdleAction::Nothing);
}

#[test]
fn warning_fires_exactly_once_per_idle_stretch() {
    let mut m = IdleMonitor::new();
    assert_eq!(m.poll(55 * MINUTE, Some(0), true), IdleAction::Warn);
    assert_eq!(m.poll(56 * MINUTE, Some(0), true), IdleAction::Nothing);
    assert_eq!(m.poll(59 * MINUTE, Some(0), true), IdleAction::Nothing);
}

#[test]
fn renewed_activity_rearms_warning() {
    let mut m = IdleMonitor::new();
    assert_eq!(m.poll(55 * MINUTE, Some(0), true), IdleAction::Warn);
    let resumed = 56 * MINUTE;
    assert_eq!(m.poll(resumed + MINUTE, Some(resumed), true), IdleAction::Nothing);
    assert_eq!(m.poll(resumed + 55 * MINUTE, Some(resumed), true), IdleAction::Warn);
}

#[test]
fn logout_fires_exactly_once_and_stops() {
    let mut m = IdleMonitor::new();
    assert_eq!(m.poll(60 * MINUTE, Some(0), true), IdleAction::Logout);
    assert!(m.is_stopped());
    assert_eq!(m.poll(61 * MINUTE, Some(0), true), IdleAction::Nothing);
}

#[test]
fn logout_can_follow_warning() {
    let mut m = IdleMonitor::new();
    assert_eq!(m.poll(55 * MINUTE, Some(0), true), IdleAction::Warn);
    assert_eq!(m.poll(60 * MINUTE + 1, Some(0), true), IdleAction::Logout);
}

#[test]
fn signed_out_or_unknown_activity_is_ignored() {
    let mut m = IdleMonitor::new();
    assert_eq!(m.poll(120 * MINUTE, Some(0), false), IdleAction::Nothing);
    assert_eq!(m.poll(120 * MINUTE, None, true), IdleAction::Nothing);
    assert!(!m.is_stopped());
}

#[test]
fn future_activity_stamp_counts_as_active() {
    let mut m = IdleMonitor::new();
    assert_eq!(m.poll(0, Some(90 * MINUTE), true), IdleAction::Nothing);
}

#[test]
fn thresholds_match_documented_minutes() {
    assert_eq!(WARN_AFTER_SECS, 3300);
    assert_eq!(LOGOUT_AFTER_SECS, 3600);
    assert_eq!(POLL_INTERVAL_SECS, 10);
}
