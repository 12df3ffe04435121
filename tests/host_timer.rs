//! `sleep_on` and `resolve_after` driven by a tokio-backed host timer on a
//! paused clock.
mod helpers;

use core::future::{poll_fn, Future};
use core::task::Poll;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use helpers::MockTimer;
use korri_sleep::{resolve_after, sleep_on, DeferredSlot, DeferredState, Millis};
use static_cell::StaticCell;
use tokio::time::{timeout, Duration, Instant};

static SLOT: StaticCell<DeferredSlot<CriticalSectionRawMutex>> = StaticCell::new();

#[tokio::test(start_paused = true)]
async fn five_second_delay_respects_its_bounds() {
    let mut timer = MockTimer;
    let start = Instant::now();
    let delay = sleep_on(&mut timer, 5000u32);
    tokio::pin!(delay);

    // Still pending one millisecond before the deadline.
    assert!(timeout(Duration::from_millis(4999), &mut delay)
        .await
        .is_err());

    let result = timeout(Duration::from_millis(101), &mut delay).await;
    assert!(result.is_ok(), "still pending at 5100 ms");

    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(5000), "fired early: {elapsed:?}");
    assert!(elapsed <= Duration::from_millis(5100), "fired late: {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn zero_delay_resolves_on_next_opportunity() {
    let mut timer = MockTimer;
    let start = Instant::now();
    let delay = sleep_on(&mut timer, 0u32);
    tokio::pin!(delay);

    let first = poll_fn(|cx| Poll::Ready(delay.as_mut().poll(cx))).await;
    assert!(first.is_pending(), "zero delay must not resolve synchronously");

    let () = delay.await;
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn negative_delay_does_not_hang() {
    let mut timer = MockTimer;
    let result = timeout(Duration::from_millis(1), sleep_on(&mut timer, -5000i64)).await;
    assert!(result.is_ok());

    let result = timeout(
        Duration::from_millis(1),
        sleep_on(&mut timer, Millis::from_f64_lossy(-1.5)),
    )
    .await;
    assert!(result.is_ok());
}

#[tokio::test(start_paused = true)]
async fn concurrent_delays_are_independent() {
    let start = Instant::now();
    let (mut first_timer, mut second_timer, mut third_timer) = (MockTimer, MockTimer, MockTimer);

    let (short, long, twin) = tokio::join!(
        async {
            sleep_on(&mut first_timer, 100u32).await;
            start.elapsed()
        },
        async {
            sleep_on(&mut second_timer, 300u32).await;
            start.elapsed()
        },
        async {
            sleep_on(&mut third_timer, 100u32).await;
            start.elapsed()
        },
    );

    assert_eq!(short, Duration::from_millis(100));
    assert_eq!(twin, Duration::from_millis(100));
    assert_eq!(long, Duration::from_millis(300));
}

#[tokio::test(start_paused = true)]
async fn dropping_one_delay_leaves_the_other_running() {
    let mut kept_timer = MockTimer;
    let mut dropped_timer = MockTimer;
    let start = Instant::now();

    {
        let dropped = sleep_on(&mut dropped_timer, 200u32);
        assert!(timeout(Duration::from_millis(50), dropped).await.is_err());
    }

    sleep_on(&mut kept_timer, 200u32).await;
    assert_eq!(start.elapsed(), Duration::from_millis(250));
}

#[tokio::test(start_paused = true)]
async fn deferred_resolved_by_timer_callback() {
    let slot = SLOT.init(DeferredSlot::new());
    let (resolver, deferred) = slot.split().expect("fresh slot must split");
    assert_eq!(deferred.state(), DeferredState::Pending);

    let start = Instant::now();
    let mut timer = MockTimer;

    let ((), value) = tokio::join!(
        resolve_after(&mut timer, 250u32, resolver),
        deferred.on_fulfilled(|| start.elapsed()),
    );

    assert_eq!(value, Duration::from_millis(250));
    assert!(slot.split().is_err());
}
