//! In-memory fakes for driving the loaders in tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;

use super::api::{CatalogPage, ProductApi};
use super::error::{NetworkError, ProductLookupError};
use super::types::{Catalog, ChatReply, Product, ProductId};
use crate::util::timer::Sleeper;

/// Scripted [`ProductApi`]: each call pops the next queued result.
#[derive(Default)]
pub struct FakeApi {
    pub catalog_results: RefCell<VecDeque<Result<Catalog, NetworkError>>>,
    pub product_results: RefCell<VecDeque<Result<Product, ProductLookupError>>>,
    pub chat_results: RefCell<VecDeque<Result<ChatReply, NetworkError>>>,
    pub list_calls: Cell<usize>,
    pub requested_products: RefCell<Vec<ProductId>>,
    pub chat_messages: RefCell<Vec<String>>,
    /// When set, the next chat call waits for this signal before answering.
    pub chat_gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl FakeApi {
    pub fn with_catalog_results(results: impl IntoIterator<Item = Result<Catalog, NetworkError>>) -> Self {
        let api = Self::default();
        api.catalog_results.borrow_mut().extend(results);
        api
    }

    pub fn with_chat_results(results: impl IntoIterator<Item = Result<ChatReply, NetworkError>>) -> Self {
        let api = Self::default();
        api.chat_results.borrow_mut().extend(results);
        api
    }

    pub fn remaining_catalog_results(&self) -> usize {
        self.catalog_results.borrow().len()
    }
}

fn exhausted() -> NetworkError {
    NetworkError::Unreachable("fake script exhausted".to_owned())
}

#[async_trait(?Send)]
impl ProductApi for FakeApi {
    async fn list_products(&self, _page: CatalogPage) -> Result<Catalog, NetworkError> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.catalog_results.borrow_mut().pop_front().unwrap_or_else(|| Err(exhausted()))
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductLookupError> {
        self.requested_products.borrow_mut().push(id.clone());
        self.product_results.borrow_mut().pop_front().unwrap_or_else(|| Err(exhausted().into()))
    }

    async fn send_chat_message(&self, text: &str) -> Result<ChatReply, NetworkError> {
        self.chat_messages.borrow_mut().push(text.to_owned());
        let gate = self.chat_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.chat_results.borrow_mut().pop_front().unwrap_or_else(|| Err(exhausted()))
    }
}

/// Sleeper that returns immediately and records every requested delay.
#[derive(Default)]
pub struct RecordingSleeper {
    pub delays: RefCell<Vec<Duration>>,
    /// Runs once, during the first sleep.
    pub on_first_sleep: RefCell<Option<Box<dyn FnOnce()>>>,
}

#[async_trait(?Send)]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.borrow_mut().push(duration);
        let hook = self.on_first_sleep.borrow_mut().take();
        if let Some(hook) = hook {
            hook();
        }
    }
}
