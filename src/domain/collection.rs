use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Domain representation of a product collection.
///
/// The base row carries language-independent display fields; per-language
/// overrides live in [`crate::domain::collection_page::CollectionPage`].
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Collection {
    /// Unique identifier of the collection.
    pub id: i32,
    /// Human-readable name of the collection.
    pub name: String,
    /// URL slug, unique across collections.
    pub slug: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Optional subtitle shown under the name.
    pub sub_title: Option<String>,
    /// Optional preview image stored inline as a base64 data URI.
    pub image_base64: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new collection.
#[derive(Debug, Clone)]
pub struct NewCollection {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub sub_title: Option<String>,
    pub image_base64: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl NewCollection {
    /// Build a new collection payload with the supplied details and current timestamp.
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            description: None,
            sub_title: None,
            image_base64: None,
            updated_at: Local::now().naive_utc(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_sub_title(mut self, sub_title: impl Into<String>) -> Self {
        self.sub_title = Some(sub_title.into());
        self
    }

    pub fn with_image(mut self, image_base64: impl Into<String>) -> Self {
        self.image_base64 = Some(image_base64.into());
        self
    }
}

/// Full replacement data applied when updating an existing collection.
#[derive(Debug, Clone)]
pub struct UpdateCollection {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub sub_title: Option<String>,
    pub image_base64: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl UpdateCollection {
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        description: Option<String>,
        sub_title: Option<String>,
        image_base64: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            description,
            sub_title,
            image_base64,
            updated_at: Local::now().naive_utc(),
        }
    }
}
