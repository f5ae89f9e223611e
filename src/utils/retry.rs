// src/utils/retry.rs

//! Bounded retry with linear backoff.

use std::future::Future;
use std::time::Duration;

/// How often and how patiently to retry a failing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Wait before retry `n` is `n * backoff_unit`
    pub backoff_unit: Duration,
}

impl RetryPolicy {
    pub fn linear(max_retries: u32, backoff_unit: Duration) -> Self {
        Self {
            max_retries,
            backoff_unit,
        }
    }

    /// Single attempt, never retry.
    pub fn none() -> Self {
        Self::linear(0, Duration::ZERO)
    }

    /// Delay before the `retry`-th retry (1-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.backoff_unit * retry
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }
}

/// Final result of a retried operation and how many attempts it took.
#[derive(Debug)]
pub struct Attempted<T, E> {
    pub result: Result<T, E>,
    pub attempts: u32,
}

/// Run `op` until it succeeds, fails with a non-retryable error, or the
/// policy is exhausted. `op` receives the 1-based attempt number.
pub async fn with_retry<T, E, F, Fut, R>(
    policy: &RetryPolicy,
    is_retryable: R,
    mut op: F,
) -> Attempted<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    R: Fn(&E) -> bool,
{
    let mut attempt = 1;
    loop {
        let result = op(attempt).await;
        let retry = matches!(
            &result,
            Err(err) if attempt <= policy.max_retries && is_retryable(err)
        );
        if !retry {
            return Attempted {
                result,
                attempts: attempt,
            };
        }

        let delay = policy.delay_for(attempt);
        log::debug!(
            "Attempt {}/{} failed, retrying in {}ms",
            attempt,
            policy.max_attempts(),
            delay.as_millis()
        );
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use tokio::time::Instant;

    #[test]
    fn test_linear_delays() {
        let policy = RetryPolicy::linear(3, Duration::from_millis(2000));
        assert_eq!(policy.delay_for(1), Duration::from_millis(2000));
        assert_eq!(policy.delay_for(3), Duration::from_millis(6000));
        assert_eq!(policy.max_attempts(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_after_max_retries() {
        let policy = RetryPolicy::linear(3, Duration::from_millis(2000));
        let calls = Cell::new(0);

        let outcome: Attempted<(), &str> = with_retry(
            &policy,
            |_| true,
            |_| {
                calls.set(calls.get() + 1);
                async { Err("reset") }
            },
        )
        .await;

        assert_eq!(outcome.attempts, 4);
        assert_eq!(calls.get(), 4);
        assert!(outcome.result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_retryable_stops_immediately() {
        let policy = RetryPolicy::linear(3, Duration::from_millis(2000));
        let start = Instant::now();

        let outcome: Attempted<(), &str> =
            with_retry(&policy, |e| *e != "fatal", |_| async { Err("fatal") }).await;

        assert_eq!(outcome.attempts, 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_grows_linearly() {
        let policy = RetryPolicy::linear(3, Duration::from_millis(2000));
        let start = Instant::now();
        let stamps = std::cell::RefCell::new(Vec::new());

        let outcome = with_retry(
            &policy,
            |_: &&str| true,
            |attempt| {
                stamps.borrow_mut().push(start.elapsed());
                async move { if attempt < 3 { Err("timeout") } else { Ok(attempt) } }
            },
        )
        .await;

        assert_eq!(outcome.result, Ok(3));
        let stamps = stamps.into_inner();
        assert_eq!(stamps.len(), 3);
        assert!(stamps[1] - stamps[0] >= Duration::from_millis(2000));
        assert!(stamps[2] - stamps[1] >= Duration::from_millis(4000));
    }
}
