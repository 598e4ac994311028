//! Async driver for the product-detail lookup.

#[cfg(test)]
#[path = "product_loader_test.rs"]
mod product_loader_test;

use super::api::ProductApi;
use super::error::ProductLookupError;
use super::types::ProductId;
use crate::state::product::ProductDetailState;
use crate::util::store::StateCell;

/// Look up `id` once and store the result in `state`.
///
/// Returns `false` when the result arrived for an id the view has already
/// moved past (or the view is gone) and was discarded.
pub async fn load_product_detail<A, C>(api: &A, state: &C, id: ProductId) -> bool
where
    A: ProductApi + ?Sized,
    C: StateCell<ProductDetailState>,
{
    if state.modify(|s| s.begin(id.clone())).is_none() {
        return false;
    }

    let result = api.get_product(&id).await;
    match &result {
        Ok(_) => log::debug!("loaded product {id}"),
        Err(ProductLookupError::NotFound(_)) => log::warn!("product {id} not found"),
        Err(err) => log::warn!("product {id} lookup failed: {err}"),
    }
    state.modify(|s| s.finish(&id, result)).unwrap_or(false)
}

/// Run [`load_product_detail`] on the browser event loop.
#[cfg(feature = "csr")]
pub fn spawn_product_load(api: super::api::ApiClient, state: leptos::prelude::RwSignal<ProductDetailState>, id: ProductId) {
    leptos::task::spawn_local(async move {
        load_product_detail(&api, &state, id).await;
    });
}
