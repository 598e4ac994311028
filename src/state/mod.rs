//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each module is a plain state machine with no I/O, so transitions can be
//! tested directly. Async drivers in `crate::net` feed results into them.

pub mod catalog;
pub mod chat;
pub mod product;
