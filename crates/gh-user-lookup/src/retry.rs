//! Retry with exponential backoff
//!
//! Each repository page is retried independently. Delays double from
//! `INITIAL_BACKOFF_MS` and are capped at `MAX_BACKOFF_MS`; there is no
//! delay after the final attempt. Sleeps run on tokio timers, so dropping
//! the future cancels a pending wait.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};

use crate::{INITIAL_BACKOFF_MS, MAX_BACKOFF_MS, MAX_RETRIES};

/// Configuration for retry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Delay before the first retry.
    pub initial_backoff: Duration,
    /// Maximum delay between retries.
    pub max_backoff: Duration,
    /// Total number of attempts, the first one included.
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_backoff: Duration::from_millis(INITIAL_BACKOFF_MS),
            max_backoff: Duration::from_millis(MAX_BACKOFF_MS),
            max_attempts: MAX_RETRIES,
        }
    }
}

impl RetryPolicy {
    /// Create a new retry policy with custom values.
    #[must_use]
    pub fn new(initial_backoff: Duration, max_backoff: Duration, max_attempts: u32) -> Self {
        Self {
            initial_backoff,
            max_backoff,
            max_attempts,
        }
    }

    /// Build the exponential backoff strategy for this policy.
    ///
    /// No jitter: the delay before retry `n` (0-based) is
    /// `min(initial_backoff * 2^n, max_backoff)`.
    #[must_use]
    pub fn into_backoff(self) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(self.initial_backoff)
            .with_max_delay(self.max_backoff)
            .with_factor(2.0)
            .with_max_times(self.max_attempts.saturating_sub(1) as usize)
    }
}

/// Run `operation` until it succeeds or the policy's attempts are used up.
///
/// Every error is retried. The last error is returned on exhaustion.
/// `label` only appears in log output.
pub async fn with_retry<T, E, F, Fut>(policy: &RetryPolicy, operation: F, label: &str) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempt = 0u32;

    operation
        .retry(policy.clone().into_backoff())
        .notify(|err: &E, delay: Duration| {
            attempt += 1;
            log::warn!(
                "{} failed (attempt {}), retrying in {:?}: {}",
                label,
                attempt,
                delay,
                err
            );
        })
        .await
}
