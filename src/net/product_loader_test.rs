use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::error::NetworkError;
use crate::net::test_support::FakeApi;
use crate::net::types::Product;
use crate::state::product::PRODUCT_LOAD_FAILED_MESSAGE;

fn fake_with(result: Result<Product, ProductLookupError>) -> FakeApi {
    let api = FakeApi::default();
    api.product_results.borrow_mut().push_back(result);
    api
}

#[test]
fn loaded_product_is_stored() {
    let api = fake_with(Ok(Product::new("42", "Argan Oil")));
    let state = Rc::new(RefCell::new(ProductDetailState::default()));

    assert!(block_on(load_product_detail(&api, &state, ProductId::from("42"))));

    assert_eq!(state.borrow().product().map(|p| p.title.as_str()), Some("Argan Oil"));
    assert_eq!(*api.requested_products.borrow(), vec![ProductId::from("42")]);
}

#[test]
fn not_found_shows_generic_failure() {
    let api = fake_with(Err(ProductLookupError::NotFound(ProductId::from("999"))));
    let state = Rc::new(RefCell::new(ProductDetailState::default()));

    block_on(load_product_detail(&api, &state, ProductId::from("999")));

    assert_eq!(
        *state.borrow(),
        ProductDetailState::Failed { id: ProductId::from("999"), message: PRODUCT_LOAD_FAILED_MESSAGE.to_owned() }
    );
}

#[test]
fn network_failure_is_not_retried() {
    let api = fake_with(Err(NetworkError::Timeout.into()));
    let state = Rc::new(RefCell::new(ProductDetailState::default()));

    block_on(load_product_detail(&api, &state, ProductId::from("3")));

    assert_eq!(api.requested_products.borrow().len(), 1);
    assert!(matches!(*state.borrow(), ProductDetailState::Failed { .. }));
}
