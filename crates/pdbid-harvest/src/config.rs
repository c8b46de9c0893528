//! Harvest configuration.
//!
//! Controls how many identifiers are in flight at once and how transient
//! fetch failures are retried. Defaults suit a public archive mirror.
//! Override via environment variables or explicit construction.

use std::time::Duration;

/// Default number of identifiers processed concurrently.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Default number of retries after the first fetch attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default delay before the first retry, doubled on each further retry.
pub const DEFAULT_RETRY_BASE_MS: u64 = 200;

/// Configuration for a harvest run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestConfig {
    /// Maximum identifiers in flight. Never zero.
    pub concurrency: usize,
    /// Retries after the initial fetch attempt, for transient failures only.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub retry_base_delay: Duration,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay: Duration::from_millis(DEFAULT_RETRY_BASE_MS),
        }
    }
}

impl HarvestConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `PDBID_CONCURRENCY` (default: 8, must be at least 1)
    /// - `PDBID_MAX_RETRIES` (default: 3)
    /// - `PDBID_RETRY_BASE_MS` (default: 200)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let concurrency = parse_var(&lookup, "PDBID_CONCURRENCY", DEFAULT_CONCURRENCY)?;
        if concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        Ok(Self {
            concurrency,
            max_retries: parse_var(&lookup, "PDBID_MAX_RETRIES", DEFAULT_MAX_RETRIES)?,
            retry_base_delay: Duration::from_millis(parse_var(
                &lookup,
                "PDBID_RETRY_BASE_MS",
                DEFAULT_RETRY_BASE_MS,
            )?),
        })
    }

    /// Replace the concurrency limit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroConcurrency`] if `concurrency` is 0.
    pub fn with_concurrency(mut self, concurrency: usize) -> Result<Self, ConfigError> {
        if concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        self.concurrency = concurrency;
        Ok(self)
    }

    /// Delay before retry number `attempt` (0-based): base × 2^attempt.
    pub fn retry_delay(&self, attempt: u32) -> Duration {
        self.retry_base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }
}

fn parse_var<L, T>(lookup: &L, var: &str, default: T) -> Result<T, ConfigError>
where
    L: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            var: var.to_string(),
            value: raw,
        }),
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}")]
    Invalid { var: String, value: String },
    #[error("concurrency must be at least 1")]
    ZeroConcurrency,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = HarvestConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, HarvestConfig::default());
        assert_eq!(cfg.concurrency, 8);
        assert_eq!(cfg.max_retries, 3);
        assert_eq!(cfg.retry_base_delay, Duration::from_millis(200));
    }

    #[test]
    fn overrides_from_lookup() {
        let cfg = HarvestConfig::from_lookup(lookup(&[
            ("PDBID_CONCURRENCY", "32"),
            ("PDBID_MAX_RETRIES", "0"),
            ("PDBID_RETRY_BASE_MS", " 50 "),
        ]))
        .unwrap();
        assert_eq!(cfg.concurrency, 32);
        assert_eq!(cfg.max_retries, 0);
        assert_eq!(cfg.retry_base_delay, Duration::from_millis(50));
    }

    #[test]
    fn rejects_unparseable_value() {
        let err = HarvestConfig::from_lookup(lookup(&[("PDBID_MAX_RETRIES", "many")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "PDBID_MAX_RETRIES".into(),
                value: "many".into(),
            }
        );
    }

    #[test]
    fn rejects_zero_concurrency() {
        let err = HarvestConfig::from_lookup(lookup(&[("PDBID_CONCURRENCY", "0")])).unwrap_err();
        assert_eq!(err, ConfigError::ZeroConcurrency);
        assert!(HarvestConfig::default().with_concurrency(0).is_err());
        assert_eq!(
            HarvestConfig::default().with_concurrency(2).unwrap().concurrency,
            2
        );
    }

    #[test]
    fn retry_delay_doubles() {
        let cfg = HarvestConfig::default();
        assert_eq!(cfg.retry_delay(0), Duration::from_millis(200));
        assert_eq!(cfg.retry_delay(1), Duration::from_millis(400));
        assert_eq!(cfg.retry_delay(2), Duration::from_millis(800));
    }
}
