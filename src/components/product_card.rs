//! Catalog grid card and the product image with placeholder fallback.
//!
//! DESIGN
//! ======
//! Scraped image URLs are often missing or dead. A missing URL renders the
//! placeholder up front; a URL that fails to load is swapped for it once.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

use crate::net::types::Product;

pub const THUMBNAIL_PLACEHOLDER: &str = "https://via.placeholder.com/200";
pub const DETAIL_IMAGE_PLACEHOLDER: &str = "https://via.placeholder.com/400";

/// Image URL to render: the product's own if present and non-blank.
pub(crate) fn image_src(image_url: Option<&str>, placeholder: &str) -> String {
    image_url.map(str::trim).filter(|url| !url.is_empty()).unwrap_or(placeholder).to_owned()
}

/// Product image that falls back to `placeholder` when missing or broken.
#[component]
pub fn ProductImage(image_url: Option<String>, alt: String, placeholder: &'static str) -> impl IntoView {
    let src = image_src(image_url.as_deref(), placeholder);
    view! {
        <img
            src=src
            alt=alt
            on:error=move |ev| {
                #[cfg(feature = "csr")]
                show_placeholder(&ev, placeholder);
                #[cfg(not(feature = "csr"))]
                let _ = ev;
            }
        />
    }
}

#[cfg(feature = "csr")]
fn show_placeholder(ev: &web_sys::Event, placeholder: &str) {
    use wasm_bindgen::JsCast as _;

    let Some(img) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok()) else {
        return;
    };
    if img.src() != placeholder {
        img.set_src(placeholder);
    }
}

/// A clickable catalog entry linking to the product's detail page.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/product/{}", product.id);
    let price = product.price_label().to_owned();
    let Product { title, category, image_url, .. } = product;

    view! {
        <a class="product-card" href=href>
            <div class="product-image">
                <ProductImage image_url=image_url alt=title.clone() placeholder=THUMBNAIL_PLACEHOLDER/>
            </div>
            <div class="product-info">
                <h3>{title}</h3>
                <p class="price">{price}</p>
                {category.map(|category| view! { <span class="category">{category}</span> })}
            </div>
        </a>
    }
}
