//! API and retry configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no process environment, so the base URL override is
//! captured at build time from `STOREFRONT_API_URL`. Everything else uses the
//! defaults below unless a caller builds the structs by hand (tests do).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 3;

/// Connection settings shared by every remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin of the catalog/assistant backend, without a trailing slash.
    pub base_url: String,
    /// Budget for a whole request, body included. The assistant call may run
    /// a remote generation step, so this is sized for the slowest endpoint.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Build config from the build-time environment.
    ///
    /// Optional:
    /// - `STOREFRONT_API_URL`: backend origin (default `http://127.0.0.1:8000`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("STOREFRONT_API_URL"))
    }

    /// Build config from an optional base URL override, falling back to the default
    /// when the override is absent or blank.
    #[must_use]
    pub fn with_base_url(raw: Option<&str>) -> Self {
        Self { base_url: resolve_base_url(raw), timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS) }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(None)
    }
}

fn resolve_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_owned()
}

/// Delay growth between automatic catalog retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// Every retry waits the base delay.
    Fixed,
    /// Each retry doubles the previous delay, never exceeding `cap`.
    CappedExponential { cap: Duration },
}

/// Automatic retry schedule for catalog retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Automatic retries allowed after the initial attempt.
    pub max_retries: u32,
    /// Wait before the first retry.
    pub delay: Duration,
    pub backoff: Backoff,
}

impl RetryPolicy {
    /// Delay to wait before retry number `attempt` (1-based).
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        match self.backoff {
            Backoff::Fixed => self.delay,
            Backoff::CappedExponential { cap } => {
                let factor = 1u32.checked_shl(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
                self.delay.saturating_mul(factor).min(cap)
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            delay: Duration::from_secs(DEFAULT_RETRY_DELAY_SECS),
            backoff: Backoff::Fixed,
        }
    }
}
