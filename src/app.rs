//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::config::{ApiConfig, RetryPolicy};
use crate::net::api::ApiClient;
use crate::pages::{chat::ChatPage, home::HomePage, product_detail::ProductDetailPage};
use crate::state::catalog::CatalogState;

/// Root application component.
///
/// The catalog outlives route changes so returning to `/` shows the last
/// loaded list while a fresh retrieval runs. Chat and product-detail state
/// are owned by their pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_env();
    log::info!("storefront using backend {}", config.base_url);

    provide_context(ApiClient::new(config));
    provide_context(RetryPolicy::default());
    provide_context(RwSignal::new(CatalogState::default()));

    view! {
        <Title text="Product Discovery"/>

        <Router>
            <div class="app">
                <NavBar/>
                <main class="main-content">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=(StaticSegment("product"), ParamSegment("id")) view=ProductDetailPage/>
                        <Route path=StaticSegment("chat") view=ChatPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
