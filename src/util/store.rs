//! Mutable state handles shared between views and async loaders.
//!
//! DESIGN
//! ======
//! Loaders mutate state only through short closures, so no borrow is ever
//! held across an await point. In the app the handle is a `RwSignal`; tests
//! use `Rc<RefCell<_>>`.
//!
//! Both accessors return `None` once the backing state is gone (a disposed
//! signal after its view unmounted). Loaders treat that as "stop".

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};

/// Handle to state owned elsewhere.
pub trait StateCell<S> {
    /// Mutate the state and return the closure's result.
    fn modify<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>;

    /// Read the state without subscribing to it.
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R>;
}

impl<S> StateCell<S> for Rc<RefCell<S>> {
    fn modify<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

impl<S> StateCell<S> for RwSignal<S>
where
    S: Send + Sync + 'static,
{
    fn modify<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}
