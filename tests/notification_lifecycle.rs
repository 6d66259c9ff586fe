// SPDX-License-Identifier: MPL-2.0
use squad_desk::ui::notifications::{Manager, Phase, Severity};
use std::time::{Duration, Instant};

const SHOW: Duration = Duration::from_millis(5000);
const EXIT: Duration = Duration::from_millis(400);

fn manager() -> Manager {
    Manager::with_timing(SHOW, EXIT)
}

#[test]
fn toast_is_removed_within_duration_plus_exit_window() {
    let start = Instant::now();
    let mut manager = manager();
    let handle = manager.show_at("Saved", Severity::Success, None, start);

    manager.tick(start);
    assert_eq!(manager.get(handle).map(|n| n.phase()), Some(Phase::Visible));

    manager.tick(start + SHOW);
    assert_eq!(
        manager.get(handle).map(|n| n.phase()),
        Some(Phase::Dismissing)
    );

    manager.tick(start + SHOW + EXIT);
    assert!(manager.get(handle).is_none());
    assert!(!manager.has_notifications());
}

#[test]
fn independent_toasts_expire_independently() {
    let start = Instant::now();
    let mut manager = manager();
    let short = manager.show_at("short", Severity::Info, Some(Duration::from_secs(1)), start);
    let long = manager.show_at("long", Severity::Info, Some(Duration::from_secs(10)), start);
    let third = manager.show_at("third", Severity::Warning, None, start);
    manager.tick(start);
    assert_eq!(manager.visible_count(), 3);

    let later = start + Duration::from_secs(1);
    manager.tick(later);
    manager.tick(later + EXIT);

    assert!(manager.get(short).is_none());
    assert!(manager.get(long).is_some());
    assert!(manager.get(third).is_some());
}

#[test]
fn zero_duration_stays_until_dismissed() {
    let start = Instant::now();
    let mut manager = manager();
    let handle = manager.show_at("sticky", Severity::Error, Some(Duration::ZERO), start);

    manager.tick(start);
    manager.tick(start + Duration::from_secs(3600));
    assert_eq!(manager.get(handle).map(|n| n.phase()), Some(Phase::Visible));

    assert!(manager.dismiss_at(handle, start + Duration::from_secs(3600)));
    manager.tick(start + Duration::from_secs(3600) + EXIT);
    assert!(manager.get(handle).is_none());
}

#[test]
fn dismissing_twice_is_harmless() {
    let start = Instant::now();
    let mut manager = manager();
    let handle = manager.show_at("once", Severity::Info, None, start);
    manager.tick(start);

    assert!(manager.dismiss_at(handle, start));
    assert!(!manager.dismiss_at(handle, start));

    manager.tick(start + EXIT);
    assert!(!manager.dismiss_at(handle, start + EXIT));
    assert_eq!(manager.visible_count(), 0);
}

#[test]
fn severity_names_fall_back_to_info() {
    let mut manager = manager();
    let known = manager.notify("warned", Some("warning"), None);
    let unknown = manager.notify("odd", Some("shouting"), None);
    let missing = manager.notify("plain", None, None);

    let severity = |id| manager.get(id).map(|n| n.severity());
    assert_eq!(severity(known), Some(Severity::Warning));
    assert_eq!(severity(unknown), Some(Severity::Info));
    assert_eq!(severity(missing), Some(Severity::Info));
}
