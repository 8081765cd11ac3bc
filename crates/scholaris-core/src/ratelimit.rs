//! Throttling for outbound search calls.

use log::debug;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Serializes outbound calls so no two start closer than a minimum
/// interval apart.
///
/// The last-dispatch instant is the only state shared across concurrent
/// pipeline invocations; it lives behind an async mutex that is held
/// across the wait, so callers queue up and each observes the full
/// spacing. The guarantee covers calls that go through [`acquire`], not
/// calls that bypass the limiter.
///
/// [`acquire`]: RateLimiter::acquire
pub struct RateLimiter {
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Create a limiter that spaces calls by `min_interval`.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: Mutex::new(None),
        }
    }

    /// Wait for the next call slot and claim it.
    ///
    /// The slot is recorded immediately before the caller dispatches its
    /// request, not after the response arrives, so slow responses do not
    /// stretch the spacing.
    pub async fn acquire(&self) {
        let mut last_call = self.last_call.lock().await;
        if let Some(last) = *last_call {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                debug!("throttling search call (wait_ms={})", wait.as_millis());
                tokio::time::sleep(wait).await;
            }
        }
        *last_call = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::RateLimiter;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn first_call_passes_immediately() {
        let limiter = RateLimiter::new(Duration::from_millis(2_000));
        let started = Instant::now();
        limiter.acquire().await;
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn back_to_back_calls_are_spaced_by_min_interval() {
        let limiter = RateLimiter::new(Duration::from_millis(2_000));
        let started = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        assert!(started.elapsed() >= Duration::from_millis(2_000));
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_callers_each_observe_the_spacing() {
        let limiter = Arc::new(RateLimiter::new(Duration::from_millis(2_000)));
        let started = Instant::now();

        let mut handles = Vec::new();
        for _ in 0..3 {
            let limiter = limiter.clone();
            handles.push(tokio::spawn(async move {
                limiter.acquire().await;
                Instant::now()
            }));
        }
        let mut claimed: Vec<Instant> = Vec::new();
        for handle in handles {
            claimed.push(handle.await.expect("task"));
        }
        claimed.sort();

        for pair in claimed.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_millis(2_000));
        }
        assert!(started.elapsed() >= Duration::from_millis(4_000));
    }
}
