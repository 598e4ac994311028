//! Assistant chat page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The transcript belongs to this view: it starts with the onboarding turn
//! and is dropped when the user navigates away. Submissions are serialized by
//! `ChatState`; the input is disabled while a reply is pending.

use leptos::prelude::*;

use crate::components::chat_transcript::ChatTranscript;
use crate::net::api::ApiClient;
use crate::state::chat::ChatState;

#[component]
pub fn ChatPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = input.get_untracked();
        if !chat.with_untracked(|s| s.can_submit(&text)) {
            return;
        }
        input.set(String::new());
        start_submit(&api, chat, text);
    };

    let pending = move || chat.with(ChatState::is_pending);

    view! {
        <div class="chat-container">
            <div class="chat-header">
                <h1>"🤖 AI Product Assistant"</h1>
                <p>"Ask me about products for your health and wellness needs"</p>
            </div>
            <ChatTranscript chat=chat/>
            <form class="chat-input-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Ask about products..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    disabled=pending
                />
                <button
                    type="submit"
                    disabled=move || pending() || input.with(|text| text.trim().is_empty())
                >
                    "Send"
                </button>
            </form>
        </div>
    }
}

fn start_submit(api: &ApiClient, chat: RwSignal<ChatState>, text: String) {
    #[cfg(feature = "csr")]
    crate::net::chat_session::spawn_chat_submit(api.clone(), chat, text);

    #[cfg(not(feature = "csr"))]
    let _ = (api, chat, text);
}
