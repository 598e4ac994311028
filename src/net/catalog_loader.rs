//! Async driver for catalog retrieval with cold-start retries.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs the `state::catalog` state machine against the remote API. Attempts
//! are strictly sequential: the next one is issued only after the previous
//! one resolved and the retry delay elapsed. A retrieval superseded by a
//! manual retry stops at its next state check and its late result is dropped.

#[cfg(test)]
#[path = "catalog_loader_test.rs"]
mod catalog_loader_test;

use super::api::{CatalogPage, ProductApi};
use crate::config::RetryPolicy;
use crate::state::catalog::{CatalogState, RetrievalTrigger, RetryStep};
use crate::util::store::StateCell;
use crate::util::timer::Sleeper;

/// How a [`load_catalog`] call ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The catalog is `Ready`.
    Ready,
    /// Retries ran out; state is `Failed`.
    Failed,
    /// Another retrieval was already in flight; nothing was requested.
    Ignored,
    /// A newer retrieval took over (or the view went away) mid-flight.
    Superseded,
}

/// Fetch the catalog into `state`, retrying per `policy` until it succeeds or
/// the retry budget is spent.
pub async fn load_catalog<A, S, C>(
    api: &A,
    sleeper: &S,
    state: &C,
    policy: &RetryPolicy,
    trigger: RetrievalTrigger,
) -> LoadOutcome
where
    A: ProductApi + ?Sized,
    S: Sleeper + ?Sized,
    C: StateCell<CatalogState>,
{
    let Some(ticket) = state.modify(|s| s.begin(trigger)).flatten() else {
        log::debug!("catalog retrieval already in flight, ignoring {trigger:?}");
        return LoadOutcome::Ignored;
    };

    loop {
        let err = match api.list_products(CatalogPage::default()).await {
            Ok(catalog) => {
                let count = catalog.len();
                if state.modify(|s| s.record_success(ticket, catalog)).unwrap_or(false) {
                    log::info!("catalog loaded: {count} products");
                    return LoadOutcome::Ready;
                }
                return LoadOutcome::Superseded;
            }
            Err(err) => err,
        };

        match state.modify(|s| s.record_failure(ticket, policy)).flatten() {
            Some(RetryStep::RetryAfter { attempt, delay }) => {
                log::warn!(
                    "catalog fetch failed ({err}); backend may be waking up, retry {attempt}/{} in {}s",
                    policy.max_retries,
                    delay.as_secs_f32()
                );
                sleeper.sleep(delay).await;
                if !state.read(|s| s.is_current(ticket)).unwrap_or(false) {
                    return LoadOutcome::Superseded;
                }
            }
            Some(RetryStep::GiveUp) => {
                log::error!("catalog fetch gave up after {} retries: {err}", policy.max_retries);
                return LoadOutcome::Failed;
            }
            None => return LoadOutcome::Superseded,
        }
    }
}

/// Run [`load_catalog`] on the browser event loop.
#[cfg(feature = "csr")]
pub fn spawn_catalog_load(
    api: super::api::ApiClient,
    state: leptos::prelude::RwSignal<CatalogState>,
    policy: RetryPolicy,
    trigger: RetrievalTrigger,
) {
    leptos::task::spawn_local(async move {
        load_catalog(&api, &crate::util::timer::BrowserSleeper, &state, &policy, trigger).await;
    });
}
