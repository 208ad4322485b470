use serde::{Deserialize, Serialize};

/// Free-form key/value specification row shown on the product detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Characteristic {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub value: String,
    /// Sort position within the product's specification table.
    pub position: i32,
}

/// Payload attaching one specification row to a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCharacteristic {
    pub name: String,
    pub value: String,
}

impl NewCharacteristic {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            value: value.into().trim().to_string(),
        }
    }
}
