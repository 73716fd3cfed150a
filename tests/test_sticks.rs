//! Fortune-stick pool and session integration tests.

mod common;

use chrono::{Duration, Local, NaiveDate, TimeZone};
use std::collections::HashSet;
use zodiac_almanac::{AlmanacError, StickKind, StickSession};

// ---------------------------------------------------------------------------
// pool
// ---------------------------------------------------------------------------

#[test]
fn every_entry_is_reachable() {
    let (almanac, _tmp) = common::almanac();
    let sticks = almanac.sticks();
    let mut rng = common::rng(42);

    let mut seen = HashSet::new();
    for _ in 0..2_000 {
        seen.insert(sticks.draw_with(&mut rng).unwrap().id.clone());
    }
    assert_eq!(seen.len(), sticks.pool().len());
}

#[test]
fn every_kind_is_represented() {
    let (almanac, _tmp) = common::almanac();
    for kind in [
        StickKind::Luck,
        StickKind::Warning,
        StickKind::Love,
        StickKind::Wealth,
        StickKind::Career,
    ] {
        let entries = almanac.sticks().by_kind(kind);
        assert!(!entries.is_empty(), "{}", kind);
        assert!(entries.iter().all(|s| s.kind == kind));
    }
}

#[test]
fn get_by_id() {
    let (almanac, _tmp) = common::almanac();
    let stick = almanac.sticks().get("love-01").unwrap();
    assert_eq!(stick.kind, StickKind::Love);
    assert!(matches!(
        almanac.sticks().get("love-99").unwrap_err(),
        AlmanacError::NotFound(_)
    ));
}

// ---------------------------------------------------------------------------
// session
// ---------------------------------------------------------------------------

#[test]
fn fourth_draw_of_the_day_is_refused() {
    let (almanac, _tmp) = common::almanac();
    let sticks = almanac.sticks();
    let mut rng = common::rng(8);
    let morning = Local.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
    let mut session = StickSession::opened_on(3, morning.date_naive());

    for i in 0..3 {
        let at = morning + Duration::minutes(i);
        session.draw_at(&mut rng, &sticks, at).unwrap();
    }
    assert_eq!(session.remaining(), 0);

    let err = session
        .draw_at(&mut rng, &sticks, morning + Duration::hours(1))
        .unwrap_err();
    assert!(matches!(err, AlmanacError::QuotaExhausted { quota: 3 }));
    assert_eq!(session.history().len(), 3);
}

#[test]
fn history_is_newest_first() {
    let (almanac, _tmp) = common::almanac();
    let sticks = almanac.sticks();
    let mut rng = common::rng(9);
    let morning = Local.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
    let mut session = StickSession::opened_on(3, morning.date_naive());

    session.draw_at(&mut rng, &sticks, morning).unwrap();
    session
        .draw_at(&mut rng, &sticks, morning + Duration::minutes(30))
        .unwrap();

    let history = session.history();
    assert_eq!(history[0].time_label(), "09:30");
    assert_eq!(history[1].time_label(), "09:00");
    assert_eq!(session.latest(), history.first());
}

#[test]
fn new_day_resets_the_quota_and_keeps_history() {
    let (almanac, _tmp) = common::almanac();
    let sticks = almanac.sticks();
    let mut rng = common::rng(10);
    let day_one = Local.with_ymd_and_hms(2026, 10, 19, 20, 0, 0).unwrap();
    let mut session = StickSession::opened_on(3, day_one.date_naive());

    for _ in 0..3 {
        session.draw_at(&mut rng, &sticks, day_one).unwrap();
    }
    assert!(session.draw_at(&mut rng, &sticks, day_one).is_err());

    let day_two = Local.with_ymd_and_hms(2026, 10, 20, 8, 0, 0).unwrap();
    session.draw_at(&mut rng, &sticks, day_two).unwrap();
    assert_eq!(session.remaining(), 2);
    assert_eq!(session.day(), NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
    assert_eq!(session.history().len(), 4);
}

#[test]
fn almanac_sessions_use_the_configured_quota() {
    let almanac = zodiac_almanac::Almanac::builder()
        .daily_quota(1)
        .build()
        .unwrap();
    let mut session = almanac.session();
    assert_eq!(session.quota(), 1);

    session.draw(&almanac.sticks()).unwrap();
    assert!(matches!(
        session.draw(&almanac.sticks()).unwrap_err(),
        AlmanacError::QuotaExhausted { quota: 1 }
    ));
}
