//! Catalog page: search box, retrieval status and the product grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounting the page starts a catalog retrieval (ignored while one is already
//! in flight). The catalog signal lives at app level; the search term is
//! local to the page and filters the ready catalog on every keystroke.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::components::retrieval_status::RetrievalStatus;
use crate::config::RetryPolicy;
use crate::net::api::ApiClient;
use crate::state::catalog::{CatalogState, RetrievalTrigger};

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let api = expect_context::<ApiClient>();
    let policy = expect_context::<RetryPolicy>();
    let search = RwSignal::new(String::new());

    let start = Callback::new(move |trigger: RetrievalTrigger| start_retrieval(&api, catalog, policy, trigger));
    start.run(RetrievalTrigger::Mount);
    let on_retry = Callback::new(move |()| start.run(RetrievalTrigger::ManualRetry));

    let visible = move || search.with(|term| catalog.with(|s| s.filtered(term)));

    view! {
        <div class="home">
            <h1>"Traya Health Products"</h1>
            <p class="subtitle">"AI-Powered Product Discovery"</p>
            <input
                class="search-input"
                type="search"
                placeholder="Search products..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <RetrievalStatus catalog=catalog max_retries=policy.max_retries on_retry=on_retry/>
            {move || {
                visible()
                    .map(|products| {
                        if products.is_empty() {
                            return view! { <p class="empty">"No products found."</p> }.into_any();
                        }
                        view! {
                            <div class="products-grid">
                                {products
                                    .into_iter()
                                    .map(|product| view! { <ProductCard product=product/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    })
            }}
        </div>
    }
}

fn start_retrieval(api: &ApiClient, catalog: RwSignal<CatalogState>, policy: RetryPolicy, trigger: RetrievalTrigger) {
    #[cfg(feature = "csr")]
    crate::net::catalog_loader::spawn_catalog_load(api.clone(), catalog, policy, trigger);

    #[cfg(not(feature = "csr"))]
    let _ = (api, catalog, policy, trigger);
}
