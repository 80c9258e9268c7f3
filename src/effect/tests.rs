//! Tests for the deferred effect families.

use std::sync::{Arc, Mutex};

use super::*;
use crate::testing::{never, CallCounter};

fn counting_sync(counter: &CallCounter) -> SyncEffect<usize> {
    let counter = counter.clone();
    SyncEffect::pure(move || counter.tick())
}

fn counting_async(counter: &CallCounter) -> AsyncEffect<usize> {
    let counter = counter.clone();
    AsyncEffect::pure(move || {
        let n = counter.tick();
        async move { n }
    })
}

// Deferral tests
#[test]
fn test_sync_pure_is_deferred() {
    let counter = CallCounter::new();
    let effect = counting_sync(&counter);
    assert_eq!(counter.count(), 0);

    effect.run();
    assert_eq!(counter.count(), 1);

    effect.run();
    assert_eq!(counter.count(), 2);
}

#[tokio::test]
async fn test_async_pure_is_deferred() {
    let counter = CallCounter::new();
    let effect = counting_async(&counter);
    assert_eq!(counter.count(), 0);

    effect.run().await;
    assert_eq!(counter.count(), 1);

    effect.run().await;
    assert_eq!(counter.count(), 2);
}

#[tokio::test]
async fn test_impure_pure_is_deferred() {
    let counter = CallCounter::new();
    let tick = counter.clone();
    let effect = ImpureAsyncEffect::pure(move || {
        let n = tick.tick();
        async move { n }
    });
    assert_eq!(counter.count(), 0);

    assert_eq!(effect.run().await, 1);
    assert_eq!(effect.run().await, 2);
}

#[tokio::test]
async fn test_map_and_bind_do_not_run_anything() {
    let counter = CallCounter::new();
    let effect = counting_async(&counter)
        .map(|n| n + 1)
        .bind(|n| AsyncEffect::of(n * 2));
    assert_eq!(counter.count(), 0);

    assert_eq!(effect.run().await, 4);
    assert_eq!(counter.count(), 1);
}

#[tokio::test]
async fn test_mapped_effect_reinvokes_original() {
    let counter = CallCounter::new();
    let base = counting_async(&counter);
    let mapped = base.clone().map(|n| n * 100);

    assert_eq!(mapped.run().await, 100);
    assert_eq!(base.run().await, 2);
    assert_eq!(mapped.run().await, 300);
}

#[test]
fn test_sync_bind_defers_continuation() {
    let outer = CallCounter::new();
    let inner = CallCounter::new();
    let inner_tick = inner.clone();

    let effect = counting_sync(&outer).bind(move |n| {
        let inner_tick = inner_tick.clone();
        SyncEffect::pure(move || n + inner_tick.tick())
    });

    assert_eq!(outer.count(), 0);
    assert_eq!(inner.count(), 0);
    assert_eq!(effect.run(), 2);
    assert_eq!(outer.count(), 1);
    assert_eq!(inner.count(), 1);
}

// Law tests
#[test]
fn test_sync_map_identity() {
    let effect = SyncEffect::of(7);
    assert_eq!(effect.clone().map(|x| x).run(), effect.run());
}

#[tokio::test]
async fn test_async_map_composition() {
    let f = |x: i32| x + 1;
    let g = |x: i32| x * 3;

    let chained = AsyncEffect::of(4).map(f).map(g);
    let fused = AsyncEffect::of(4).map(move |x| g(f(x)));

    assert_eq!(chained.run().await, fused.run().await);
}

#[tokio::test]
async fn test_impure_bind_left_identity() {
    let f = |x: i32| ImpureAsyncEffect::of(x.to_string());

    let bound = ImpureAsyncEffect::of(12).bind(f);
    assert_eq!(bound.run().await, f(12).run().await);
}

// Lifting tests
#[tokio::test]
async fn test_lift_sync_effect() {
    let counter = CallCounter::new();
    let lifted = ImpureAsyncEffect::lift(counting_sync(&counter));
    assert_eq!(counter.count(), 0);
    assert_eq!(lifted.run().await, 1);
}

#[tokio::test]
async fn test_from_async_effect() {
    let lifted: ImpureAsyncEffect<&str> = AsyncEffect::of("task").into();
    assert_eq!(lifted.run().await, "task");
}

#[tokio::test]
async fn test_impure_bind_accepts_every_family() {
    let effect = ImpureAsyncEffect::of(1)
        .bind(|x| SyncEffect::pure(move || x + 1))
        .bind(|x| AsyncEffect::pure(move || async move { x * 10 }))
        .bind(|x| ImpureAsyncEffect::of(x - 5));

    assert_eq!(effect.run().await, 15);
}

// Ordering tests
#[tokio::test]
async fn test_steps_run_in_construction_order() {
    let log = Arc::new(Mutex::new(Vec::new()));

    let step = |name: &'static str, log: &Arc<Mutex<Vec<&'static str>>>| {
        let log = Arc::clone(log);
        move |()| {
            let log = Arc::clone(&log);
            AsyncEffect::pure(move || {
                let log = Arc::clone(&log);
                async move {
                    tokio::task::yield_now().await;
                    log.lock().unwrap().push(name);
                }
            })
        }
    };

    let effect = AsyncEffect::of(())
        .bind(step("first", &log))
        .bind(step("second", &log))
        .bind(step("third", &log));

    assert!(log.lock().unwrap().is_empty());
    effect.run().await;
    assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
}

// Failure propagation tests
#[test]
#[should_panic(expected = "disk on fire")]
fn test_sync_panic_reaches_caller() {
    let effect = SyncEffect::pure(|| -> i32 { panic!("disk on fire") }).map(|x| x + 1);
    effect.run();
}

#[tokio::test]
#[should_panic(expected = "connection reset")]
async fn test_async_panic_reaches_caller() {
    let effect = AsyncEffect::pure(|| async { panic!("connection reset") })
        .map(never::<(), ()>);
    effect.run().await;
}

#[tokio::test]
async fn test_err_value_is_not_intercepted() {
    let effect = ImpureAsyncEffect::pure(|| async { Err::<i32, _>("io error") }).map(|r| r.map(|x| x + 1));
    assert_eq!(effect.run().await, Err("io error"));
}

#[test]
fn test_debug_hides_function() {
    assert_eq!(
        format!("{:?}", SyncEffect::of(1)),
        "SyncEffect { action: \"<function>\" }"
    );
}
