//! Delay source for scheduled retries.

use std::time::Duration;

use async_trait::async_trait;

/// Suspends the caller for a duration without blocking the event loop.
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Browser timer backed by `setTimeout`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSleeper;

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl Sleeper for BrowserSleeper {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
