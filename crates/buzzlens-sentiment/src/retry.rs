//! Retry with exponential back-off and jitter for source fetches.
//!
//! Only transient failures are retried. Anything that a second attempt
//! cannot fix (bad credentials, malformed payloads, 4xx) returns at once.

use std::future::Future;
use std::time::Duration;

use crate::error::SentimentError;

const MAX_DELAY_MS: u64 = 30_000;

/// Back-off policy shared by both source clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Additional attempts after the first failure. `0` disables retries.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each subsequent retry.
    pub backoff_base_ms: u64,
}

impl RetryPolicy {
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            backoff_base_ms: 0,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 1,
            backoff_base_ms: 500,
        }
    }
}

/// Returns `true` for errors worth another attempt: timeouts, connection
/// failures, HTTP 429 and 5xx.
pub(crate) fn is_retriable(err: &SentimentError) -> bool {
    match err {
        SentimentError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        SentimentError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
        SentimentError::Xml(_)
        | SentimentError::Deserialize { .. }
        | SentimentError::Credentials(_)
        | SentimentError::Reddit(_)
        | SentimentError::EmptyKeyword => false,
    }
}

/// Runs `operation`, retrying transient errors per `policy`.
///
/// The n-th retry sleeps `backoff_base_ms * 2^(n-1)` ±25 % jitter, capped at 30 s.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    policy: RetryPolicy,
    mut operation: F,
) -> Result<T, SentimentError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SentimentError>>,
{
    let mut attempt: u32 = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= policy.max_retries {
                    return Err(err);
                }
                attempt += 1;
                let computed = policy
                    .backoff_base_ms
                    .saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::debug!(
                    attempt,
                    max_retries = policy.max_retries,
                    delay_ms,
                    error = %err,
                    "transient fetch error, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}
