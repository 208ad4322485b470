use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Shared technology descriptor attachable to many products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Technology {
    pub id: i32,
    /// Short machine-friendly name, unique.
    pub name: String,
    /// Display title shown on product pages.
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTechnology {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl NewTechnology {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            title: title.into().trim().to_string(),
            description: None,
            icon: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Replacement data applied when updating an existing technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTechnology {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl UpdateTechnology {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        description: Option<String>,
        icon: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            description,
            icon,
            updated_at: Local::now().naive_utc(),
        }
    }
}
