use core_config::{ConfigError, FromEnv, env_parse};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Retry policy for establishing database connections
///
/// Loaded from `DB_CONNECT_RETRIES`, `DB_CONNECT_RETRY_DELAY_MS` and
/// `DB_CONNECT_RETRY_MAX_DELAY_MS`.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Attempts after the first one
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub backoff_multiplier: u32,
    pub use_jitter: bool,
}

impl RetryConfig {
    fn next_delay(&self, delay_ms: u64) -> u64 {
        delay_ms
            .saturating_mul(u64::from(self.backoff_multiplier))
            .min(self.max_delay_ms)
    }
}

/// 3 retries, 100ms initial delay doubling up to 5s, with jitter
impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_multiplier: 2,
            use_jitter: true,
        }
    }
}

impl FromEnv for RetryConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let max_retries = env_parse("DB_CONNECT_RETRIES", "3")?;
        let initial_delay_ms = env_parse("DB_CONNECT_RETRY_DELAY_MS", "100")?;
        let max_delay_ms: u64 = env_parse("DB_CONNECT_RETRY_MAX_DELAY_MS", "5000")?;

        Ok(Self {
            max_retries,
            initial_delay_ms,
            max_delay_ms: max_delay_ms.max(initial_delay_ms),
            ..Self::default()
        })
    }
}

/// Run `operation` until it succeeds or the retry budget is spent.
///
/// The last error is returned once `max_retries` additional attempts have failed.
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0;
    let mut delay = config.initial_delay_ms;

    loop {
        match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    debug!(attempt, "Operation succeeded after retrying");
                }
                return Ok(result);
            }
            Err(e) => {
                attempt += 1;

                if attempt > config.max_retries {
                    warn!(attempts = attempt, error = %e, "Giving up after repeated failures");
                    return Err(e);
                }

                let wait = if config.use_jitter {
                    apply_jitter(delay)
                } else {
                    delay
                };

                debug!(
                    attempt,
                    max_retries = config.max_retries,
                    wait_ms = wait,
                    error = %e,
                    "Operation failed, retrying"
                );

                tokio::time::sleep(Duration::from_millis(wait)).await;
                delay = config.next_delay(delay);
            }
        }
    }
}

/// Scale `delay` to somewhere between 50% and 100% of its value.
fn apply_jitter(delay: u64) -> u64 {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let percent = 50 + RandomState::new().hash_one(std::time::SystemTime::now()) % 51;
    delay.saturating_mul(percent) / 100
}

/// [`retry_with_backoff`] with the default policy
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}
