#![cfg(feature = "async")]
//! Integration tests for the future helpers and the backoff controller.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use rstest::rstest;
use tokio::time::{Instant, sleep};
use utilkit::backoff::{Backoff, BackoffConfig, BackoffState};
use utilkit::future::{Settled, TimeoutError, settle, timeout};

// =============================================================================
// Timeout
// =============================================================================

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_timeout_resolves_at_the_deadline() {
    let start = Instant::now();
    let result = timeout(sleep(Duration::from_secs(30)), Duration::from_secs(2)).await;

    assert_eq!(
        result,
        Err(TimeoutError {
            duration: Duration::from_secs(2)
        })
    );
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(2) && elapsed < Duration::from_millis(2010));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_timeout_error_is_a_std_error() {
    let error: Box<dyn std::error::Error> = Box::new(
        timeout(sleep(Duration::from_secs(1)), Duration::from_millis(5))
            .await
            .unwrap_err(),
    );
    assert_eq!(error.to_string(), "operation timed out after 5ms");
}

// =============================================================================
// Settle
// =============================================================================

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_settle_wraps_a_timed_out_future() {
    let outcome = settle(timeout(sleep(Duration::from_secs(9)), Duration::from_secs(1))).await;
    assert!(outcome.is_fulfilled());
    assert!(outcome.into_result().unwrap().is_err());
}

#[rstest]
#[tokio::test]
async fn test_settle_future_can_be_spawned() {
    let handle = tokio::spawn(settle(async { vec![1, 2, 3] }));
    assert_eq!(handle.await.unwrap(), Settled::Fulfilled(vec![1, 2, 3]));
}

// =============================================================================
// Backoff with timeouts
// =============================================================================

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_backoff_retries_timed_out_attempts() {
    let config = BackoffConfig::default()
        .with_initial_delay(Duration::from_millis(50))
        .with_max_delay(Duration::from_millis(200))
        .with_max_attempts(5);
    let mut backoff = Backoff::new(config).unwrap();
    let calls = Arc::new(AtomicUsize::new(0));

    let result = backoff
        .run(|| {
            let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
            // the third attempt is fast enough
            let work = Duration::from_millis(if attempt < 3 { 500 } else { 10 });
            timeout(
                async move {
                    sleep(work).await;
                    attempt
                },
                Duration::from_millis(100),
            )
        })
        .await;

    assert_eq!(result, Ok(3));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(
        backoff.state(),
        &BackoffState::Finished {
            attempts: 3,
            succeeded: true
        }
    );
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_backoff_delays_saturate_at_max() {
    let config = BackoffConfig::default()
        .with_initial_delay(Duration::from_millis(100))
        .with_max_delay(Duration::from_millis(250))
        .with_factor(10.0)
        .with_max_attempts(4);
    let mut backoff = Backoff::new(config).unwrap();
    let delays = Arc::new(std::sync::Mutex::new(Vec::new()));
    let recorded = Arc::clone(&delays);
    backoff.on_retry(move |_, delay| recorded.lock().unwrap().push(delay));

    let start = Instant::now();
    let result: Result<(), &str> = backoff.run(|| async { Err("down") }).await;

    assert_eq!(result, Err("down"));
    assert_eq!(
        *delays.lock().unwrap(),
        vec![
            Duration::from_millis(100),
            Duration::from_millis(250),
            Duration::from_millis(250),
        ]
    );
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(600) && elapsed < Duration::from_millis(610));
}
