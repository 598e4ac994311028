//! Assistant transcript: message bubbles plus recommendation chips.
//!
//! SYSTEM CONTEXT
//! ==============
//! Assistant replies are markdown generated by a language model. They are
//! rendered to HTML with raw HTML dropped; user turns render as plain text.

#[cfg(test)]
#[path = "chat_transcript_test.rs"]
mod chat_transcript_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::net::types::ProductRef;
use crate::state::chat::{ChatState, ChatTurn, Role};

/// Ordered list of chat turns with a typing indicator while a reply is pending.
#[component]
pub fn ChatTranscript(chat: RwSignal<ChatState>) -> impl IntoView {
    view! {
        <div class="chat-messages">
            {move || {
                chat.with(|s| s.turns().to_vec())
                    .into_iter()
                    .map(|turn| view! { <ChatBubble turn=turn/> })
                    .collect::<Vec<_>>()
            }}
            {move || {
                chat.with(ChatState::is_pending)
                    .then(|| view! { <div class="message assistant loading">"Thinking..."</div> })
            }}
        </div>
    }
}

#[component]
fn ChatBubble(turn: ChatTurn) -> impl IntoView {
    let ChatTurn { role, content, recommendations } = turn;
    let body = match role {
        Role::User => view! { <div class="message-content">{content}</div> }.into_any(),
        Role::Assistant => {
            let rendered = render_markdown_html(&content);
            view! { <div class="message-content markdown-body" inner_html=rendered></div> }.into_any()
        }
    };
    let chips = (!recommendations.is_empty()).then(|| view! { <RecommendationChips items=recommendations/> });

    view! {
        <div class="message" class:user={role == Role::User} class:assistant={role == Role::Assistant}>
            {body}
            {chips}
        </div>
    }
}

#[component]
fn RecommendationChips(items: Vec<ProductRef>) -> impl IntoView {
    view! {
        <div class="recommended-products">
            <p class="products-label">"Related Products:"</p>
            <div class="product-chips">
                {items
                    .into_iter()
                    .map(|item| {
                        let href = item.detail_path();
                        let hint = item.reason.unwrap_or_default();
                        view! {
                            <a class="product-chip" href=href title=hint>
                                {item.title}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

pub(crate) fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Model output never gets to inject markup.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
