//! Retry with exponential backoff for fetch calls.
//!
//! Retries only [`FetchError::Transient`]. [`FetchError::NotFound`] is a
//! definitive answer and is returned immediately.

use std::future::Future;

use crate::config::HarvestConfig;
use crate::error::FetchError;

/// Result of a retried call, with the number of attempts made.
#[derive(Debug)]
pub(crate) struct Retried<T> {
    pub result: Result<T, FetchError>,
    pub attempts: u32,
}

/// Call `f` up to `config.max_retries + 1` times.
///
/// Delays between attempts follow [`HarvestConfig::retry_delay`].
pub(crate) async fn retry_transient<F, Fut, T>(config: &HarvestConfig, f: F) -> Retried<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    let mut attempts = 0;
    for attempt in 0..config.max_retries {
        attempts += 1;
        match f().await {
            Err(e) if e.is_transient() => {
                let delay = config.retry_delay(attempt);
                tracing::warn!(
                    attempt = attempt + 1,
                    max_retries = config.max_retries,
                    "fetch failed, retrying in {delay:?}: {e}"
                );
                tokio::time::sleep(delay).await;
            }
            result => return Retried { result, attempts },
        }
    }
    // Last attempt is returned as is.
    Retried {
        result: f().await,
        attempts: attempts + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdbid_core::PdbId;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn fast_config(max_retries: u32) -> HarvestConfig {
        HarvestConfig {
            max_retries,
            retry_base_delay: Duration::from_millis(1),
            ..HarvestConfig::default()
        }
    }

    #[tokio::test]
    async fn exhausts_all_attempts_on_transient_failure() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = calls.clone();
        let retried: Retried<()> = retry_transient(&fast_config(3), || {
            let c = c.clone();
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err(FetchError::Transient("connection reset".into()))
            }
        })
        .await;
        assert!(retried.result.is_err());
        assert_eq!(retried.attempts, 4);
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn not_found_is_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = calls.clone();
        let retried: Retried<()> = retry_transient(&fast_config(3), || {
            let c = c.clone();
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err(FetchError::NotFound(PdbId::MIN))
            }
        })
        .await;
        assert_eq!(retried.result, Err(FetchError::NotFound(PdbId::MIN)));
        assert_eq!(retried.attempts, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn succeeds_after_transient_failures() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = calls.clone();
        let retried = retry_transient(&fast_config(3), || {
            let c = c.clone();
            async move {
                if c.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(FetchError::Transient("timeout".into()))
                } else {
                    Ok(7u8)
                }
            }
        })
        .await;
        assert_eq!(retried.result, Ok(7));
        assert_eq!(retried.attempts, 3);
    }

    #[tokio::test]
    async fn zero_retries_means_one_attempt() {
        let retried: Retried<()> = retry_transient(&fast_config(0), || async {
            Err(FetchError::Transient("down".into()))
        })
        .await;
        assert_eq!(retried.attempts, 1);
    }
}
