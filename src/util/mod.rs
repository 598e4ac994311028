//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (timers, reactive handles) from
//! page and component logic to improve reuse and testability.

pub mod filter;
pub mod store;
pub mod timer;
