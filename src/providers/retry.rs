use crate::config::AzureOpenAiConfig;
use crate::providers::{CompletionProvider, ProviderError};
use async_trait::async_trait;
use log::{debug, warn};
use std::time::Duration;
use tokio::time::sleep;

/// Retries transient failures of the wrapped provider with exponential backoff
pub struct RetryingProvider {
    inner: Box<dyn CompletionProvider>,
    retry_attempts: u32,
    retry_delay_ms: u64,
}

impl RetryingProvider {
    pub fn new(inner: Box<dyn CompletionProvider>, retry_attempts: u32, retry_delay_ms: u64) -> Self {
        RetryingProvider {
            inner,
            retry_attempts: retry_attempts.max(1),
            retry_delay_ms,
        }
    }

    pub fn from_config(inner: Box<dyn CompletionProvider>, config: &AzureOpenAiConfig) -> Self {
        Self::new(inner, config.retry_attempts, config.retry_delay_ms)
    }

    fn backoff(&self, attempt: u32) -> Duration {
        // 1x, 2x, 4x, ... the initial delay
        Duration::from_millis(self.retry_delay_ms.saturating_mul(1 << (attempt - 1).min(16)))
    }
}

#[async_trait]
impl CompletionProvider for RetryingProvider {
    fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        let mut attempt = 1;
        loop {
            debug!(
                "Requesting completion from {} (attempt {}/{})",
                self.inner.provider_name(),
                attempt,
                self.retry_attempts
            );

            match self.inner.complete(system, user).await {
                Ok(content) => return Ok(content),
                Err(e) if e.is_transient() && attempt < self.retry_attempts => {
                    let delay = self.backoff(attempt);
                    warn!(
                        "Provider {} failed (attempt {}/{}): {}. Retrying in {:?}",
                        self.inner.provider_name(),
                        attempt,
                        self.retry_attempts,
                        e,
                        delay
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
