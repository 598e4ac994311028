//! Async driver for assistant chat submissions.
//!
//! ERROR HANDLING
//! ==============
//! The assistant call is attempted exactly once. A failure is logged and
//! turned into a fallback assistant turn by `ChatState::finish_submit`; it is
//! never retried or propagated, so a broken reply cannot block the next one.

#[cfg(test)]
#[path = "chat_session_test.rs"]
mod chat_session_test;

use super::api::ProductApi;
use crate::state::chat::ChatState;
use crate::util::store::StateCell;

/// Submit `text` to the assistant and record both turns in `chat`.
///
/// Returns `false` without calling the API when the text is blank or a
/// previous submission is still pending.
pub async fn submit_chat_message<A, C>(api: &A, chat: &C, text: &str) -> bool
where
    A: ProductApi + ?Sized,
    C: StateCell<ChatState>,
{
    let Some(message) = chat.modify(|s| s.begin_submit(text)).flatten() else {
        return false;
    };

    let result = api.send_chat_message(&message).await;
    match &result {
        Ok(reply) => log::info!("assistant replied with {} recommendations", reply.recommendations.len()),
        Err(err) => log::warn!("chat request failed: {err}"),
    }
    chat.modify(|s| s.finish_submit(result));
    true
}

/// Run [`submit_chat_message`] on the browser event loop.
#[cfg(feature = "csr")]
pub fn spawn_chat_submit(api: super::api::ApiClient, chat: leptos::prelude::RwSignal<ChatState>, text: String) {
    leptos::task::spawn_local(async move {
        submit_chat_message(&api, &chat, &text).await;
    });
}
