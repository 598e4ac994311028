//! REST client for the catalog and assistant backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, raced against a
//! `gloo-timers` sleep for the request timeout.
//! Native builds (tests, tooling): the transport reports `Unreachable`, since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a typed error instead of panicking. Deciding what a
//! failure means for the user is left to the loaders in `net::catalog_loader`,
//! `net::chat_session` and `net::product_loader`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::num::NonZeroU32;

use async_trait::async_trait;

use super::error::{NetworkError, ProductLookupError};
#[cfg(feature = "csr")]
use super::types::ChatRequest;
use super::types::{Catalog, CatalogEnvelope, ChatReply, Product, ProductId};
use crate::config::ApiConfig;

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const DEFAULT_PAGE_LIMIT: NonZeroU32 = NonZeroU32::new(100).unwrap();

/// Window into the product list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogPage {
    pub offset: u32,
    pub limit: NonZeroU32,
}

impl Default for CatalogPage {
    fn default() -> Self {
        Self { offset: 0, limit: DEFAULT_PAGE_LIMIT }
    }
}

/// Remote operations consumed by the loaders.
///
/// Futures are `?Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait ProductApi {
    /// Fetch one page of the catalog.
    async fn list_products(&self, page: CatalogPage) -> Result<Catalog, NetworkError>;

    /// Fetch a single product by id.
    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductLookupError>;

    /// Send one user message to the assistant.
    async fn send_chat_message(&self, text: &str) -> Result<ChatReply, NetworkError>;
}

/// HTTP implementation of [`ProductApi`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[cfg(feature = "csr")]
    async fn exchange(&self, request: gloo_net::http::Request) -> Result<(u16, String), NetworkError> {
        use futures::future::{Either, select};

        let call = Box::pin(async move {
            let response = request.send().await.map_err(transport_error)?;
            let status = response.status();
            let body = response.text().await.map_err(transport_error)?;
            Ok::<_, NetworkError>((status, body))
        });
        let deadline = Box::pin(gloo_timers::future::sleep(self.config.timeout));

        match select(call, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(NetworkError::Timeout),
        }
    }

    #[cfg(feature = "csr")]
    async fn get(&self, url: &str) -> Result<(u16, String), NetworkError> {
        let request = gloo_net::http::Request::get(url)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .build()
            .map_err(|e| NetworkError::InvalidRequest(e.to_string()))?;
        self.exchange(request).await
    }
}

#[async_trait(?Send)]
impl ProductApi for ApiClient {
    async fn list_products(&self, page: CatalogPage) -> Result<Catalog, NetworkError> {
        let url = products_endpoint(&self.config.base_url, page);
        #[cfg(feature = "csr")]
        {
            let (status, body) = self.get(&url).await?;
            NetworkError::check_status(status)?;
            decode_catalog(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(browser_only(&url))
        }
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductLookupError> {
        let url = product_endpoint(&self.config.base_url, id);
        #[cfg(feature = "csr")]
        {
            let (status, body) = self.get(&url).await?;
            ProductLookupError::check_status(id, status)?;
            Ok(decode_product(&body)?)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(browser_only(&url).into())
        }
    }

    async fn send_chat_message(&self, text: &str) -> Result<ChatReply, NetworkError> {
        let message = validate_chat_message(text)?;
        let url = chat_endpoint(&self.config.base_url);
        #[cfg(feature = "csr")]
        {
            let request = gloo_net::http::Request::post(&url)
                .json(&ChatRequest { message })
                .map_err(|e| NetworkError::InvalidRequest(e.to_string()))?;
            let (status, body) = self.exchange(request).await?;
            NetworkError::check_status(status)?;
            decode_chat_reply(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = message;
            Err(browser_only(&url))
        }
    }
}

#[cfg(feature = "csr")]
fn transport_error(err: gloo_net::Error) -> NetworkError {
    match err {
        gloo_net::Error::SerdeError(e) => NetworkError::MalformedResponse(e.to_string()),
        other => NetworkError::Unreachable(other.to_string()),
    }
}

#[cfg(not(feature = "csr"))]
fn browser_only(url: &str) -> NetworkError {
    NetworkError::Unreachable(format!("{url}: http transport is only available in the browser"))
}

/// `GET /api/products?skip={offset}&limit={limit}`
#[must_use]
pub fn products_endpoint(base_url: &str, page: CatalogPage) -> String {
    format!("{base_url}/api/products?skip={}&limit={}", page.offset, page.limit)
}

/// `GET /api/products/{id}`
#[must_use]
pub fn product_endpoint(base_url: &str, id: &ProductId) -> String {
    format!("{base_url}/api/products/{id}")
}

/// `POST /api/chat`
#[must_use]
pub fn chat_endpoint(base_url: &str) -> String {
    format!("{base_url}/api/chat")
}

/// Decode a catalog body in either accepted shape.
///
/// # Errors
///
/// Returns [`NetworkError::MalformedResponse`] when the body is neither shape.
pub fn decode_catalog(body: &str) -> Result<Catalog, NetworkError> {
    Ok(serde_json::from_str::<CatalogEnvelope>(body)?.into_catalog())
}

/// Decode a single product body.
///
/// # Errors
///
/// Returns [`NetworkError::MalformedResponse`] when the body is not a product.
pub fn decode_product(body: &str) -> Result<Product, NetworkError> {
    Ok(serde_json::from_str(body)?)
}

/// Decode an assistant reply body.
///
/// # Errors
///
/// Returns [`NetworkError::MalformedResponse`] when the body is not a JSON object.
pub fn decode_chat_reply(body: &str) -> Result<ChatReply, NetworkError> {
    Ok(serde_json::from_str(body)?)
}

fn validate_chat_message(text: &str) -> Result<&str, NetworkError> {
    if text.trim().is_empty() {
        return Err(NetworkError::InvalidRequest("chat message is empty".to_owned()));
    }
    Ok(text)
}
