use std::fmt;
use std::thread;
use std::time::Duration;

use thiserror::Error;
use tracing::warn;

/// Terminal failure after the retry budget is spent. Keeps the last
/// underlying error for diagnostics.
#[derive(Debug, Error)]
#[error("all {attempts} attempts failed, last error: {last}")]
pub struct RetryError<E>
where
    E: fmt::Display + fmt::Debug,
{
    pub attempts: u32,
    pub last: E,
}

/// Bounded retry with linear backoff over any fallible operation.
///
/// The policy is deliberately uniform: every failure is retried the same way
/// up to the bound, with no jitter, no exponential growth, and no
/// retryable/non-retryable distinction. A permanently broken endpoint (say, a
/// hard 404) therefore burns the whole budget before failing. That is a known
/// limitation accepted for a test harness, not a production resilience
/// policy.
///
/// The backoff sleep blocks the calling thread; the executor assumes it owns
/// the thread of control for the duration of the loop.
#[derive(Debug, Clone, Copy)]
pub struct Retryer {
    max_attempts: u32,
    backoff_unit: Duration,
}

impl Default for Retryer {
    /// The acceptance-suite policy: 3 attempts, whole-second linear backoff
    /// (1s after the first failure, 2s after the second).
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_unit: Duration::from_secs(1),
        }
    }
}

impl Retryer {
    /// A custom bound and backoff unit. The unit is shortenable for fast CI
    /// runs; the attempt-count and ordering behavior stays the same.
    pub fn new(max_attempts: u32, backoff_unit: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff_unit,
        }
    }

    /// Run `op` until it succeeds or the attempt bound is reached.
    ///
    /// Returns on the first success with no further attempts and no further
    /// delay. Each failed attempt is logged before the backoff sleep; there
    /// is no sleep after the final attempt.
    pub fn run<T, E, F>(&self, mut op: F) -> Result<T, RetryError<E>>
    where
        E: fmt::Display + fmt::Debug,
        F: FnMut() -> Result<T, E>,
    {
        let mut attempt = 1u32;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(err) => {
                    warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %err,
                        "attempt failed"
                    );
                    if attempt >= self.max_attempts {
                        return Err(RetryError {
                            attempts: attempt,
                            last: err,
                        });
                    }
                    thread::sleep(self.backoff_unit.saturating_mul(attempt));
                    attempt += 1;
                }
            }
        }
    }
}
