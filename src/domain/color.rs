use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Domain representation of a reusable product color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    /// Unique identifier of the color.
    pub id: i32,
    /// Human-readable name of the color.
    pub name: String,
    /// Display value, e.g. a CSS hex code.
    pub code: String,
    /// Optional suffix appended to a product article to form the
    /// color-specific SKU.
    pub suffix: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewColor {
    pub name: String,
    pub code: String,
    pub suffix: Option<String>,
}

impl NewColor {
    /// Construct a new color payload with trimmed fields.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            code: code.into().trim().to_string(),
            suffix: None,
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}

/// Replacement data applied when updating an existing color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateColor {
    pub name: String,
    pub code: String,
    pub suffix: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl UpdateColor {
    pub fn new(name: impl Into<String>, code: impl Into<String>, suffix: Option<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            suffix,
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// A color attached to a product, carrying the optional cross-link to the
/// color variant's own product page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductColorLink {
    pub color_id: i32,
    pub name: String,
    pub code: String,
    pub suffix: Option<String>,
    pub link_to_product: Option<String>,
}

/// Payload attaching one color to a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductColorLink {
    pub color_id: i32,
    pub link_to_product: Option<String>,
}

impl NewProductColorLink {
    pub fn new(color_id: i32) -> Self {
        Self {
            color_id,
            link_to_product: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link_to_product = Some(link.into());
        self
    }
}
