//! Product-detail lookup state.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use crate::net::error::ProductLookupError;
use crate::net::types::{Product, ProductId};

pub const PRODUCT_LOAD_FAILED_MESSAGE: &str = "Failed to load product";

/// Lifecycle of the product shown on the detail page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProductDetailState {
    #[default]
    Idle,
    Loading(ProductId),
    Loaded(Product),
    Failed { id: ProductId, message: String },
}

impl ProductDetailState {
    /// Start loading `id`, replacing whatever was shown.
    pub fn begin(&mut self, id: ProductId) {
        *self = Self::Loading(id);
    }

    /// Apply a lookup result. Results for anything but the id currently
    /// loading are dropped and `false` is returned.
    ///
    /// Every error, `NotFound` included, collapses to one generic message.
    pub fn finish(&mut self, id: &ProductId, result: Result<Product, ProductLookupError>) -> bool {
        if !matches!(&*self, Self::Loading(current) if current == id) {
            return false;
        }
        *self = match result {
            Ok(product) => Self::Loaded(product),
            Err(_) => Self::Failed { id: id.clone(), message: PRODUCT_LOAD_FAILED_MESSAGE.to_owned() },
        };
        true
    }

    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        match self {
            Self::Loaded(product) => Some(product),
            _ => None,
        }
    }
}
