//! Top navigation bar shared by every route.

use leptos::prelude::*;

/// Brand link plus links to the catalog and the assistant. Plain anchors are
/// intercepted by the router, so navigation stays client-side.
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="nav-brand">
                <a href="/">"Product Discovery"</a>
            </div>
            <div class="nav-links">
                <a href="/">"Products"</a>
                <a href="/chat" class="chat-link">"💬 AI Assistant"</a>
            </div>
        </nav>
    }
}
