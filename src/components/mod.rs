//! Reusable UI component modules.

pub mod chat_transcript;
pub mod nav_bar;
pub mod product_card;
pub mod retrieval_status;
