//! Wire DTOs for the catalog and assistant endpoints.
//!
//! DESIGN
//! ======
//! `Product` and `ProductRef` stay separate: the assistant endpoint only
//! returns lightweight references, never full product records.
//!
//! The canonical catalog response is a bare JSON array. An object carrying a
//! `products` array is accepted for compatibility with older backends and is
//! normalized to the same `Catalog`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Ordered product list, replaced wholesale on every successful retrieval.
pub type Catalog = Vec<Product>;

/// Opaque product identifier. The backend sends integers; strings are accepted too.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    return Ok(Self::from(int));
                }
                if let Some(uint) = number.as_u64() {
                    return Ok(Self(uint.to_string()));
                }
                Err(D::Error::custom("expected integer product id"))
            }
            serde_json::Value::String(text) if !text.is_empty() => Ok(Self(text)),
            _ => Err(D::Error::custom("expected product id as integer or non-empty string")),
        }
    }
}

/// Product attributes as scraped: either a list of bullet lines or a name→value table.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProductFeatures {
    List(Vec<serde_json::Value>),
    Map(serde_json::Map<String, serde_json::Value>),
    /// Some scrapes store a single blob of text.
    Text(String),
}

/// A full catalog record.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub features: Option<ProductFeatures>,
    #[serde(default)]
    pub source_url: Option<String>,
}

impl Product {
    /// Minimal product with only the required fields set.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price: None,
            category: None,
            description: None,
            image_url: None,
            features: None,
            source_url: None,
        }
    }

    #[must_use]
    pub fn price_label(&self) -> &str {
        self.price.as_deref().unwrap_or("Price N/A")
    }

    /// Flatten `features` into display lines.
    ///
    /// Table entries render as `name: value`. Strings are used verbatim; any
    /// other JSON value is rendered compactly.
    #[must_use]
    pub fn feature_lines(&self) -> Vec<String> {
        match &self.features {
            None => Vec::new(),
            Some(ProductFeatures::Text(text)) if text.trim().is_empty() => Vec::new(),
            Some(ProductFeatures::Text(text)) => vec![text.clone()],
            Some(ProductFeatures::List(items)) => items.iter().map(display_json).collect(),
            Some(ProductFeatures::Map(entries)) => {
                entries.iter().map(|(name, value)| format!("{name}: {}", display_json(value))).collect()
            }
        }
    }
}

fn display_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Catalog response envelope; see module docs for which shape is canonical.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CatalogEnvelope {
    Bare(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

impl CatalogEnvelope {
    #[must_use]
    pub fn into_catalog(self) -> Catalog {
        match self {
            Self::Bare(products) | Self::Wrapped { products } => products,
        }
    }
}

/// Lightweight pointer to a product, as returned by the assistant.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProductRef {
    pub product_id: ProductId,
    pub title: String,
    /// Retrieval relevance, when the backend reports it.
    #[serde(default)]
    pub score: Option<f64>,
    /// Short snippet explaining the match, when the backend reports it.
    #[serde(default)]
    pub reason: Option<String>,
}

impl ProductRef {
    #[must_use]
    pub fn new(product_id: impl Into<ProductId>, title: impl Into<String>) -> Self {
        Self { product_id: product_id.into(), title: title.into(), score: None, reason: None }
    }

    /// Client route of the referenced product's detail page.
    #[must_use]
    pub fn detail_path(&self) -> String {
        format!("/product/{}", self.product_id)
    }
}

/// Body of `POST /api/chat`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Assistant reply. Both fields tolerate being absent or `null`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub recommendations: Vec<ProductRef>,
}

fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
