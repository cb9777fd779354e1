//! Periodic callback scheduling and cancellation

use std::time::Duration;

use smart_signal::simulation::Scheduler;

const SECOND: Duration = Duration::from_secs(1);

#[test]
fn test_interval_fires_once_per_period() {
    let mut scheduler = Scheduler::new();
    let _handle = scheduler
        .every("count", SECOND, |n: &mut u32| *n += 1)
        .unwrap();

    let mut count = 0;
    scheduler.advance(&mut count, Duration::from_millis(3500));
    assert_eq!(count, 3);

    // The leftover half second carries over
    scheduler.advance(&mut count, Duration::from_millis(500));
    assert_eq!(count, 4);
}

#[test]
fn test_independent_periods() {
    let mut scheduler = Scheduler::new();
    let _fast = scheduler
        .every("fast", SECOND, |c: &mut (u32, u32)| c.0 += 1)
        .unwrap();
    let _slow = scheduler
        .every("slow", Duration::from_secs(3), |c: &mut (u32, u32)| c.1 += 1)
        .unwrap();

    let mut counts = (0, 0);
    for _ in 0..6 {
        scheduler.advance(&mut counts, SECOND);
    }
    assert_eq!(counts, (6, 2));
    assert_eq!(scheduler.active(), 2);
}

#[test]
fn test_dropped_handle_stops_interval() {
    let mut scheduler = Scheduler::new();
    let handle = scheduler
        .every("count", SECOND, |n: &mut u32| *n += 1)
        .unwrap();

    let mut count = 0;
    scheduler.advance(&mut count, SECOND);
    assert_eq!(count, 1);

    drop(handle);
    assert_eq!(scheduler.active(), 0);
    scheduler.advance(&mut count, Duration::from_secs(10));
    assert_eq!(count, 1);
}

#[test]
fn test_cancel_only_affects_its_interval() {
    let mut scheduler = Scheduler::new();
    let first = scheduler
        .every("first", SECOND, |c: &mut (u32, u32)| c.0 += 1)
        .unwrap();
    let _second = scheduler
        .every("second", SECOND, |c: &mut (u32, u32)| c.1 += 1)
        .unwrap();

    assert_eq!(first.label(), "first");
    first.cancel();

    let mut counts = (0, 0);
    let fired = scheduler.advance(&mut counts, Duration::from_secs(2));
    assert_eq!(fired, 2);
    assert_eq!(counts, (0, 2));
    assert_eq!(scheduler.active(), 1);
}

#[test]
fn test_zero_period_rejected() {
    let mut scheduler: Scheduler<u32> = Scheduler::new();
    assert!(scheduler
        .every("never", Duration::ZERO, |n: &mut u32| *n += 1)
        .is_err());
    assert_eq!(scheduler.active(), 0);
}
