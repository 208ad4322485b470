use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Per-language rich content overlaying a collection's base display fields.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CollectionPage {
    pub id: i32,
    pub collection_id: i32,
    pub lang: String,
    pub title: String,
    pub description: Option<String>,
    pub hero_image: Option<String>,
    pub banner_image: Option<String>,
    /// Ordered rich-content blocks rendered between the hero and the
    /// product grid.
    pub sections: Vec<ContentSection>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// One rich-content block of a collection page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentSection {
    Banner {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
        image: String,
    },
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        body: String,
    },
    Image {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
}

/// Payload used to create or replace the page for `(collection_id, lang)`.
#[derive(Debug, Clone)]
pub struct UpsertCollectionPage {
    pub collection_id: i32,
    pub lang: String,
    pub title: String,
    pub description: Option<String>,
    pub hero_image: Option<String>,
    pub banner_image: Option<String>,
    pub sections: Vec<ContentSection>,
    pub updated_at: NaiveDateTime,
}

impl UpsertCollectionPage {
    pub fn new(collection_id: i32, lang: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            collection_id,
            lang: lang.into(),
            title: title.into(),
            description: None,
            hero_image: None,
            banner_image: None,
            sections: Vec::new(),
            updated_at: Local::now().naive_utc(),
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_hero_image(mut self, hero_image: Option<String>) -> Self {
        self.hero_image = hero_image;
        self
    }

    pub fn with_banner_image(mut self, banner_image: Option<String>) -> Self {
        self.banner_image = banner_image;
        self
    }

    pub fn with_sections(mut self, sections: Vec<ContentSection>) -> Self {
        self.sections = sections;
        self
    }
}
