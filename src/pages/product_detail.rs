//! Product detail page for `/product/:id`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::product_card::{DETAIL_IMAGE_PLACEHOLDER, ProductImage};
use crate::net::api::ApiClient;
use crate::net::types::{Product, ProductId};
use crate::state::product::ProductDetailState;

/// Loads the product named in the route and re-loads when the id changes.
#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let detail = RwSignal::new(ProductDetailState::default());

    Effect::new(move || {
        let Some(id) = params.with(|p| p.get("id")).filter(|id| !id.is_empty()) else {
            return;
        };
        start_lookup(&api, detail, ProductId::from(id));
    });

    view! {
        <div class="product-detail">
            <a href="/" class="back-link">"← Back to Products"</a>
            {move || match detail.get() {
                ProductDetailState::Idle | ProductDetailState::Loading(_) => {
                    view! { <div class="loading">"Loading product..."</div> }.into_any()
                }
                ProductDetailState::Failed { message, .. } => view! { <div class="error">{message}</div> }.into_any(),
                ProductDetailState::Loaded(product) => view! { <ProductDetailBody product=product/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProductDetailBody(product: Product) -> impl IntoView {
    let price = product.price_label().to_owned();
    let features = product.feature_lines();
    let Product { title, category, description, image_url, source_url, .. } = product;

    view! {
        <div class="detail-container">
            <div class="detail-image">
                <ProductImage image_url=image_url alt=title.clone() placeholder=DETAIL_IMAGE_PLACEHOLDER/>
            </div>
            <div class="detail-info">
                <h1>{title}</h1>
                <p class="detail-price">{price}</p>
                {category.map(|category| view! { <span class="category">{category}</span> })}
                {description
                    .map(|description| {
                        view! {
                            <div class="description">
                                <h3>"Description"</h3>
                                <p>{description}</p>
                            </div>
                        }
                    })}
                {(!features.is_empty())
                    .then(|| {
                        view! {
                            <div class="features">
                                <h3>"Features"</h3>
                                <ul>
                                    {features.into_iter().map(|line| view! { <li>{line}</li> }).collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    })}
                {source_url
                    .map(|url| {
                        view! {
                            <a href=url target="_blank" rel="noopener noreferrer" class="source-link">
                                "View on Traya.health →"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}

fn start_lookup(api: &ApiClient, detail: RwSignal<ProductDetailState>, id: ProductId) {
    #[cfg(feature = "csr")]
    crate::net::product_loader::spawn_product_load(api.clone(), detail, id);

    #[cfg(not(feature = "csr"))]
    let _ = (api, detail, id);
}
