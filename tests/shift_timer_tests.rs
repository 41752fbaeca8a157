use chrono::{DateTime, Local, TimeZone};
use rposdesk::core::clock::{Clock, ManualClock};
use rposdesk::core::scheduler::{ManualScheduler, Scheduler};
use rposdesk::core::shift::keys;
use rposdesk::core::shift::{ElapsedTicker, ShiftTimer, compute_elapsed, format_hms};
use rposdesk::models::break_type::BreakType;
use rposdesk::store::{KvStore, MemoryStore};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn nine_am() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 3, 3, 9, 0, 0)
        .earliest()
        .expect("valid local time")
}

fn clocked_in_store(at: DateTime<Local>) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store.set(keys::IS_CLOCKED_IN, "true");
    store.set(keys::CLOCK_IN_TIME, &at.to_rfc3339());
    store
}

#[test]
fn test_format_hms() {
    assert_eq!(format_hms(3661), "01:01:01");
    assert_eq!(format_hms(0), "00:00:00");
    assert_eq!(format_hms(59), "00:00:59");
    // no day rollover
    assert_eq!(format_hms(90_000), "25:00:00");
    assert_eq!(format_hms(-5), "00:00:00");
}

#[test]
fn test_break_requires_clock_in() {
    let store = Arc::new(MemoryStore::new());
    let mut timer = ShiftTimer::new(Arc::clone(&store), ManualClock::new(nine_am()));

    timer.start_break(BreakType::Lunch);

    assert!(!timer.is_on_break());
    assert_eq!(timer.break_type(), None);
    assert!(store.is_empty());
}

#[test]
fn test_start_break_persists_three_keys() {
    let clock = ManualClock::new(nine_am());
    let store = clocked_in_store(nine_am());
    let mut timer = ShiftTimer::new(Arc::clone(&store), clock.clone());

    clock.advance(Duration::from_secs(3600));
    timer.start_break(BreakType::Short);

    let expected_start = clock.now().to_rfc3339();
    assert!(timer.is_on_break());
    assert_eq!(timer.break_type(), Some(BreakType::Short));
    assert_eq!(timer.break_start_time(), Some(expected_start.as_str()));

    assert_eq!(store.get(keys::IS_ON_BREAK).as_deref(), Some("true"));
    assert_eq!(store.get(keys::BREAK_TYPE).as_deref(), Some("short"));
    assert_eq!(store.get(keys::BREAK_START_TIME), Some(expected_start));
}

#[test]
fn test_end_break_removes_keys() {
    let store = clocked_in_store(nine_am());
    let mut timer = ShiftTimer::new(Arc::clone(&store), ManualClock::new(nine_am()));

    timer.start_break(BreakType::Short);
    timer.end_break();

    assert!(!timer.is_on_break());
    assert_eq!(timer.break_start_time(), None);
    for key in keys::BREAK_KEYS {
        assert!(!store.contains(key), "{} still persisted", key);
    }
    // clock-in keys are not touched
    assert!(store.contains(keys::IS_CLOCKED_IN));
}

#[test]
fn test_break_state_restored_at_construction() {
    let store = clocked_in_store(nine_am());
    store.set(keys::IS_ON_BREAK, "true");
    store.set(keys::BREAK_TYPE, "lunch");
    store.set(keys::BREAK_START_TIME, &nine_am().to_rfc3339());

    let timer = ShiftTimer::new(Arc::clone(&store), ManualClock::new(nine_am()));

    assert!(timer.is_on_break());
    assert_eq!(timer.break_type(), Some(BreakType::Lunch));
}

#[test]
fn test_partial_break_state_is_not_restored() {
    let store = clocked_in_store(nine_am());
    store.set(keys::IS_ON_BREAK, "true");

    let timer = ShiftTimer::new(store, ManualClock::new(nine_am()));

    assert!(!timer.is_on_break());
}

#[test]
fn test_clocked_in_is_read_on_demand() {
    let store = Arc::new(MemoryStore::new());
    let timer = ShiftTimer::new(Arc::clone(&store), ManualClock::new(nine_am()));
    assert!(!timer.is_user_clocked_in());

    store.set(keys::IS_CLOCKED_IN, "true");
    assert!(timer.is_user_clocked_in());

    store.remove(keys::IS_CLOCKED_IN);
    assert!(!timer.is_user_clocked_in());
}

#[test]
fn test_clock_modal_toggle_has_no_side_effects() {
    let store = Arc::new(MemoryStore::new());
    let mut timer = ShiftTimer::new(Arc::clone(&store), ManualClock::new(nine_am()));

    timer.open_clock_modal();
    assert!(timer.is_clock_modal_open());
    timer.close_clock_modal();
    assert!(!timer.is_clock_modal_open());
    assert!(store.is_empty());
}

#[test]
fn test_compute_elapsed() {
    let clock = ManualClock::new(nine_am());
    let store = clocked_in_store(nine_am());

    assert_eq!(compute_elapsed(store.as_ref(), &clock).shift.as_deref(), Some("00:00:00"));

    clock.advance(Duration::from_secs(3661));
    let view = compute_elapsed(store.as_ref(), &clock);
    assert_eq!(view.shift.as_deref(), Some("01:01:01"));
    assert_eq!(view.on_break, None);
}

#[test]
fn test_compute_elapsed_when_idle() {
    let clock = ManualClock::new(nine_am());
    let store = MemoryStore::new();
    assert!(compute_elapsed(&store, &clock).is_idle());
}

#[test]
fn test_ticker_updates_every_second() {
    let clock = ManualClock::new(nine_am());
    let scheduler = ManualScheduler::with_clock(clock.clone());
    let store = clocked_in_store(nine_am());
    let mut timer = ShiftTimer::new(Arc::clone(&store), clock.clone());

    let ticks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&ticks);
    let ticker = ElapsedTicker::start(
        Arc::clone(&store),
        clock.clone(),
        &scheduler,
        Duration::from_secs(1),
        move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    );

    assert_eq!(ticker.view().shift.as_deref(), Some("00:00:00"));

    scheduler.advance(Duration::from_millis(500));
    assert_eq!(ticks.load(Ordering::SeqCst), 0);

    scheduler.advance(Duration::from_millis(500));
    assert_eq!(ticks.load(Ordering::SeqCst), 1);
    assert_eq!(ticker.view().shift.as_deref(), Some("00:00:01"));

    timer.start_break(BreakType::Lunch);
    scheduler.advance(Duration::from_secs(3));
    assert_eq!(ticks.load(Ordering::SeqCst), 4);

    let view = ticker.view();
    assert_eq!(view.shift.as_deref(), Some("00:00:04"));
    assert_eq!(view.on_break.as_deref(), Some("00:00:03"));
}

#[test]
fn test_dropping_ticker_cancels_task() {
    let clock = ManualClock::new(nine_am());
    let scheduler = ManualScheduler::with_clock(clock.clone());
    let store = clocked_in_store(nine_am());

    let ticks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&ticks);
    let ticker = ElapsedTicker::start(store, clock, &scheduler, Duration::from_secs(1), move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    scheduler.advance(Duration::from_secs(2));
    assert_eq!(ticks.load(Ordering::SeqCst), 2);
    assert_eq!(scheduler.active_tasks(), 1);

    drop(ticker);
    assert_eq!(scheduler.active_tasks(), 0);

    scheduler.advance(Duration::from_secs(5));
    assert_eq!(ticks.load(Ordering::SeqCst), 2);
}

#[test]
fn test_manual_scheduler_cancel_token() {
    let scheduler = ManualScheduler::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let h = Arc::clone(&hits);

    let token = scheduler.every(
        Duration::from_millis(100),
        Box::new(move || {
            h.fetch_add(1, Ordering::SeqCst);
        }),
    );

    scheduler.advance(Duration::from_millis(350));
    assert_eq!(hits.load(Ordering::SeqCst), 3);

    token.cancel();
    assert!(token.is_cancelled());
    scheduler.advance(Duration::from_secs(1));
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[test]
fn test_manual_scheduler_callback_can_reenter() {
    let scheduler = ManualScheduler::new();
    let inner = scheduler.clone();
    let seen = Arc::new(AtomicUsize::new(0));
    let s = Arc::clone(&seen);

    scheduler.every(
        Duration::from_secs(1),
        Box::new(move || {
            s.store(inner.active_tasks(), Ordering::SeqCst);
            // scheduling from inside a tick must not block either
            inner.every(Duration::from_secs(10), Box::new(|| {}));
        }),
    );

    scheduler.advance(Duration::from_secs(1));
    assert_eq!(seen.load(Ordering::SeqCst), 1);
    assert_eq!(scheduler.active_tasks(), 2);

    scheduler.advance(Duration::from_secs(1));
    assert_eq!(seen.load(Ordering::SeqCst), 2);
    assert_eq!(scheduler.active_tasks(), 3);
}
