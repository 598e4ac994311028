//! Status line for catalog retrieval, with the manual retry action.

#[cfg(test)]
#[path = "retrieval_status_test.rs"]
mod retrieval_status_test;

use leptos::prelude::*;

use crate::state::catalog::{CatalogState, RetrievalState};

/// Text shown for a retrieval state, or `None` when the catalog is on screen.
pub(crate) fn status_message(state: &RetrievalState, max_retries: u32) -> Option<String> {
    match state {
        RetrievalState::Idle | RetrievalState::Ready(_) => None,
        RetrievalState::Loading => Some("Loading products...".to_owned()),
        RetrievalState::WakingUp { attempt } => {
            Some(format!("Waking up the server... retry {attempt} of {max_retries}"))
        }
        RetrievalState::Failed(message) => Some(message.clone()),
    }
}

/// Renders the retrieval status; offers "Retry" once automatic retries ran out.
#[component]
pub fn RetrievalStatus(catalog: RwSignal<CatalogState>, max_retries: u32, on_retry: Callback<()>) -> impl IntoView {
    let failed = move || catalog.with(|s| matches!(s.retrieval(), RetrievalState::Failed(_)));
    let waking = move || catalog.with(|s| matches!(s.retrieval(), RetrievalState::WakingUp { .. }));

    view! {
        {move || {
            catalog
                .with(|s| status_message(s.retrieval(), max_retries))
                .map(|message| {
                    view! {
                        <div class="retrieval-status" class:error=failed class:loading=move || !failed()>
                            <p>{message}</p>
                            <Show when=waking>
                                <p class="retrieval-status__hint">"The backend sleeps when idle and can take a moment to start."</p>
                            </Show>
                            <Show when=failed>
                                <button class="btn retry-button" on:click=move |_| on_retry.run(())>
                                    "Retry"
                                </button>
                            </Show>
                        </div>
                    }
                })
        }}
    }
}
