//! Search filtering over a retrieved catalog.
//!
//! Pure and allocation-light enough to run on every keystroke.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::net::types::{Catalog, Product};

/// Products whose title or description contains `term`, ignoring case.
///
/// An empty term returns the catalog unchanged. Order is preserved.
#[must_use]
pub fn filter_catalog(catalog: &[Product], term: &str) -> Catalog {
    if term.is_empty() {
        return catalog.to_vec();
    }
    let needle = term.to_lowercase();
    catalog.iter().filter(|product| matches_needle(product, &needle)).cloned().collect()
}

fn matches_needle(product: &Product, needle: &str) -> bool {
    product.title.to_lowercase().contains(needle)
        || product.description.as_deref().unwrap_or_default().to_lowercase().contains(needle)
}
