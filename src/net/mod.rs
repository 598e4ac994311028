//! Networking modules for the catalog and assistant backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema.
//! `catalog_loader`, `product_loader` and `chat_session` drive those calls
//! against the state machines in `crate::state`.

pub mod api;
pub mod catalog_loader;
pub mod chat_session;
pub mod error;
pub mod product_loader;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
