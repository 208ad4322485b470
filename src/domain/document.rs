use serde::{Deserialize, Serialize};

/// Downloadable attachment of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    /// File kind shown next to the download link, e.g. `pdf`.
    pub doc_type: String,
    pub file_url: String,
    pub file_size_bytes: i32,
    pub position: i32,
}

/// Payload attaching one document to a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub name: String,
    pub doc_type: String,
    pub file_url: String,
    pub file_size_bytes: i32,
}

impl NewDocument {
    pub fn new(
        name: impl Into<String>,
        doc_type: impl Into<String>,
        file_url: impl Into<String>,
        file_size_bytes: i32,
    ) -> Self {
        Self {
            name: name.into(),
            doc_type: doc_type.into(),
            file_url: file_url.into(),
            file_size_bytes,
        }
    }
}
