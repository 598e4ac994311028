//! Catalog retrieval state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend may scale to zero, and its cold start is indistinguishable
//! from a network failure. Failures are therefore treated as "still waking
//! up" until the retry budget runs out, and only then surfaced to the user.
//!
//! `net::catalog_loader` drives these transitions; this module only decides
//! them. Every transition takes the [`RetrievalTicket`] handed out by
//! [`CatalogState::begin`], so results of a superseded retrieval are dropped
//! instead of overwriting newer state.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::time::Duration;

use crate::config::RetryPolicy;
use crate::net::types::{Catalog, Product};
use crate::util::filter::filter_catalog;

pub const RETRY_EXHAUSTED_MESSAGE: &str = "The backend is taking longer than expected to wake up. Please try again.";

/// Visible lifecycle of the product list.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RetrievalState {
    #[default]
    Idle,
    Loading,
    /// A previous attempt failed; retry number `attempt` is scheduled or running.
    WakingUp { attempt: u32 },
    Ready(Catalog),
    Failed(String),
}

/// Why a retrieval is being requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetrievalTrigger {
    /// View mounted; ignored while another retrieval is in flight.
    Mount,
    /// User pressed retry; resets the retry budget and supersedes anything in flight.
    ManualRetry,
}

/// Proof of which retrieval generation a result belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetrievalTicket(u64);

/// What the loader should do after a failed attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryStep {
    RetryAfter { attempt: u32, delay: Duration },
    GiveUp,
}

/// Product list plus the bookkeeping that drives automatic retries.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    retrieval: RetrievalState,
    retry_count: u32,
    in_flight: bool,
    generation: u64,
}

impl CatalogState {
    #[must_use]
    pub fn retrieval(&self) -> &RetrievalState {
        &self.retrieval
    }

    /// Automatic retries spent since the last success or manual retry.
    #[must_use]
    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    /// True from `begin` until success or retry exhaustion, including while
    /// waiting between attempts.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// The catalog, only while `Ready`.
    #[must_use]
    pub fn catalog(&self) -> Option<&[Product]> {
        match &self.retrieval {
            RetrievalState::Ready(catalog) => Some(catalog.as_slice()),
            _ => None,
        }
    }

    /// Search results over the ready catalog; `None` in every other state.
    #[must_use]
    pub fn filtered(&self, term: &str) -> Option<Catalog> {
        self.catalog().map(|catalog| filter_catalog(catalog, term))
    }

    /// Start a retrieval with a fresh retry budget. Returns `None` when a
    /// mount-triggered request finds another retrieval already in flight.
    pub fn begin(&mut self, trigger: RetrievalTrigger) -> Option<RetrievalTicket> {
        if trigger == RetrievalTrigger::Mount && self.in_flight {
            return None;
        }
        self.retry_count = 0;
        self.generation += 1;
        self.in_flight = true;
        self.retrieval = RetrievalState::Loading;
        Some(RetrievalTicket(self.generation))
    }

    #[must_use]
    pub fn is_current(&self, ticket: RetrievalTicket) -> bool {
        self.in_flight && ticket.0 == self.generation
    }

    /// Apply a successful attempt. Returns `false` if the ticket is stale.
    pub fn record_success(&mut self, ticket: RetrievalTicket, catalog: Catalog) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.retrieval = RetrievalState::Ready(catalog);
        self.retry_count = 0;
        self.in_flight = false;
        true
    }

    /// Apply a failed attempt and decide whether to retry. Returns `None` if
    /// the ticket is stale.
    pub fn record_failure(&mut self, ticket: RetrievalTicket, policy: &RetryPolicy) -> Option<RetryStep> {
        if !self.is_current(ticket) {
            return None;
        }
        if self.retry_count < policy.max_retries {
            self.retry_count += 1;
            let attempt = self.retry_count;
            self.retrieval = RetrievalState::WakingUp { attempt };
            return Some(RetryStep::RetryAfter { attempt, delay: policy.delay_for(attempt) });
        }
        self.retrieval = RetrievalState::Failed(RETRY_EXHAUSTED_MESSAGE.to_owned());
        self.in_flight = false;
        Some(RetryStep::GiveUp)
    }
}
