use std::future::Future;
use std::time::Duration;
use tracing::{error, warn};

use crate::constants::{MAX_RETRIES, RETRY_BASE_DELAY_MS};
use crate::errors::Result;

/// Fixed retry policy for a single upstream call.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_RETRIES,
            base_delay: Duration::from_millis(RETRY_BASE_DELAY_MS),
        }
    }
}

/// Execute `operation` with bounded exponential backoff.
///
/// Returns the first success without further delay. After `max_attempts`
/// failures the last error is propagated. The backoff sleep suspends only
/// this call; concurrent fetches for other keys proceed independently.
pub async fn retry_with_backoff<F, Fut, T>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                attempt += 1;
                warn!(
                    "Attempt {}/{} for '{}' failed: {}",
                    attempt, max_attempts, operation_name, e
                );
                if attempt >= max_attempts {
                    error!("All {} attempts for '{}' failed", max_attempts, operation_name);
                    return Err(e);
                }
                let delay = config.base_delay * 2u32.pow(attempt - 1);
                tokio::time::sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WalletError;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn test_config() -> RetryConfig {
        RetryConfig {
            max_attempts: 3,
            base_delay: Duration::from_millis(2000),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn exhausts_attempts_with_exponential_delays() {
        let calls = AtomicU32::new(0);
        let started = tokio::time::Instant::now();

        let result: Result<()> = retry_with_backoff(&test_config(), "always_fails", || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Err(WalletError::price_api(format!("boom {}", n))) }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        // 2000ms after the first failure, 4000ms after the second.
        assert_eq!(started.elapsed(), Duration::from_millis(6000));
        assert!(result.unwrap_err().to_string().contains("boom 3"));
    }

    #[tokio::test(start_paused = true)]
    async fn short_circuits_once_an_attempt_succeeds() {
        let calls = AtomicU32::new(0);
        let started = tokio::time::Instant::now();

        let result = retry_with_backoff(&test_config(), "fails_once", || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n < 2 {
                    Err(WalletError::price_api("transient"))
                } else {
                    Ok(n)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        // One backoff sleep, none after the success.
        assert_eq!(started.elapsed(), Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_success_never_sleeps() {
        let started = tokio::time::Instant::now();
        let result = retry_with_backoff(&test_config(), "immediate", || async { Ok(42u32) }).await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
