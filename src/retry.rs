//! Opt-in retry with exponential backoff.
//!
//! Nothing in the client retries on its own (apart from the configurable
//! `429` handling in [`HttpClient`](crate::HttpClient)). Wrap any async
//! operation in a [`RetryPolicy`] to retry it on failure.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use bookstack_api::RetryPolicy;
//! use bookstack_api::rest::Readable;
//!
//! let policy = RetryPolicy::default()
//!     .with_max_attempts(5)
//!     .with_delay(Duration::from_millis(500));
//!
//! let pages = client.pages();
//! let page = policy.run(|| pages.read(42)).await?;
//! ```

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Default number of attempts, including the first.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default delay before the first retry.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Default delay multiplier applied after each failed attempt.
pub const DEFAULT_BACKOFF: f64 = 2.0;

/// Retry settings for an async operation.
///
/// Sleeps `delay` before the first retry and multiplies the delay by
/// `backoff` after every further failure. The last error is returned
/// unchanged once attempts are exhausted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
    backoff: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay: DEFAULT_DELAY,
            backoff: DEFAULT_BACKOFF,
        }
    }
}

impl RetryPolicy {
    /// Sets the total number of attempts. `0` is treated as `1`.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the delay before the first retry.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the delay multiplier.
    #[must_use]
    pub fn with_backoff(mut self, backoff: f64) -> Self {
        self.backoff = backoff;
        self
    }

    /// Returns the effective number of attempts.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        if self.max_attempts == 0 {
            1
        } else {
            self.max_attempts
        }
    }

    /// Returns the delay before the first retry.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns the delay multiplier.
    #[must_use]
    pub fn backoff(&self) -> f64 {
        self.backoff
    }

    /// Runs `op` until it succeeds or attempts run out, sleeping with Tokio.
    ///
    /// # Errors
    ///
    /// Returns the error of the final attempt.
    pub async fn run<T, E, F, Fut>(&self, op: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.run_with_sleep(op, tokio::time::sleep).await
    }

    /// Runs `op` like [`run`](Self::run), waiting between attempts with `sleep`.
    ///
    /// # Errors
    ///
    /// Returns the error of the final attempt.
    pub async fn run_with_sleep<T, E, F, Fut, S, SFut>(
        &self,
        mut op: F,
        mut sleep: S,
    ) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
        S: FnMut(Duration) -> SFut,
        SFut: Future<Output = ()>,
    {
        let max_attempts = self.max_attempts();
        let mut delay = self.delay;
        let mut attempt = 1;

        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt >= max_attempts => {
                    tracing::error!("All {} attempts failed. Last error: {}", max_attempts, e);
                    return Err(e);
                }
                Err(e) => {
                    tracing::warn!(
                        "Attempt {}/{} failed: {}. Retrying in {:.1}s",
                        attempt,
                        max_attempts,
                        e,
                        delay.as_secs_f64()
                    );
                    sleep(delay).await;
                    delay = self.next_delay(delay);
                    attempt += 1;
                }
            }
        }
    }

    fn next_delay(&self, delay: Duration) -> Duration {
        Duration::try_from_secs_f64(delay.as_secs_f64() * self.backoff).unwrap_or(delay)
    }
}
