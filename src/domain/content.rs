use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Per-language hero banner shown at the top of the landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroSection {
    pub id: i32,
    pub lang: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Per-language hero banner of the brand page. Same shape as
/// [`HeroSection`] but stored separately so the two pages can diverge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandHeroSection {
    pub id: i32,
    pub lang: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload creating or replacing the hero row of one language.
#[derive(Debug, Clone)]
pub struct UpsertHeroSection {
    pub lang: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl UpsertHeroSection {
    pub fn new(lang: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            title: title.into(),
            subtitle: None,
            image_url: None,
            link_url: None,
            updated_at: Local::now().naive_utc(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: Option<String>) -> Self {
        self.subtitle = subtitle;
        self
    }

    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    pub fn with_link_url(mut self, link_url: Option<String>) -> Self {
        self.link_url = link_url;
        self
    }
}

/// Ordered text block of the brand page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandContent {
    pub id: i32,
    pub lang: String,
    pub title: String,
    pub body: String,
    pub position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a brand content block.
#[derive(Debug, Clone)]
pub struct NewBrandContent {
    pub lang: String,
    pub title: String,
    pub body: String,
    pub position: i32,
}

impl NewBrandContent {
    pub fn new(lang: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            title: title.into(),
            body: body.into(),
            position: 0,
        }
    }

    pub fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }
}

/// Replacement data applied when updating a brand content block.
#[derive(Debug, Clone)]
pub struct UpdateBrandContent {
    pub title: String,
    pub body: String,
    pub position: i32,
    pub updated_at: NaiveDateTime,
}

impl UpdateBrandContent {
    pub fn new(title: impl Into<String>, body: impl Into<String>, position: i32) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            position,
            updated_at: Local::now().naive_utc(),
        }
    }
}

/// Ordered business-direction tile shown on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Direction {
    pub id: i32,
    pub lang: String,
    pub name: String,
    pub image_url: Option<String>,
    pub position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a direction tile.
#[derive(Debug, Clone)]
pub struct NewDirection {
    pub lang: String,
    pub name: String,
    pub image_url: Option<String>,
    pub position: i32,
}

impl NewDirection {
    pub fn new(lang: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            name: name.into(),
            image_url: None,
            position: 0,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }
}

/// Replacement data applied when updating a direction tile.
#[derive(Debug, Clone)]
pub struct UpdateDirection {
    pub name: String,
    pub image_url: Option<String>,
    pub position: i32,
    pub updated_at: NaiveDateTime,
}

impl UpdateDirection {
    pub fn new(name: impl Into<String>, image_url: Option<String>, position: i32) -> Self {
        Self {
            name: name.into(),
            image_url,
            position,
            updated_at: Local::now().naive_utc(),
        }
    }
}
