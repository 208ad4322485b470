use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::content::{
    NewBrandContent, NewDirection, UpdateBrandContent, UpdateDirection, UpsertHeroSection,
};
use crate::forms::{sanitize_inline_text, sanitize_lang, sanitize_multiline_text};

const TITLE_MAX_LEN: usize = 160;
const TITLE_MAX_LEN_VALIDATOR: u64 = TITLE_MAX_LEN as u64;

/// Result type returned by the static content form helpers.
pub type ContentFormResult<T> = Result<T, ContentFormError>;

/// Errors that can occur while processing static content forms.
#[derive(Debug, Error)]
pub enum ContentFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("invalid language code `{value}`")]
    InvalidLang { value: String },
    #[error("title cannot be empty")]
    EmptyTitle,
    #[error("body cannot be empty")]
    EmptyBody,
    #[error("name cannot be empty")]
    EmptyName,
}

/// JSON payload creating or replacing a hero section for one language.
///
/// Shared between the landing hero and the brand hero, which store the same
/// fields.
#[derive(Debug, Deserialize, Validate)]
pub struct HeroSectionForm {
    pub lang: String,
    #[validate(length(min = 1, max = TITLE_MAX_LEN_VALIDATOR))]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
}

impl HeroSectionForm {
    pub fn into_upsert(self) -> ContentFormResult<UpsertHeroSection> {
        self.validate()?;

        let lang = sanitize_lang(&self.lang).ok_or(ContentFormError::InvalidLang {
            value: self.lang.clone(),
        })?;

        let title = sanitize_inline_text(&self.title);
        if title.is_empty() {
            return Err(ContentFormError::EmptyTitle);
        }

        let subtitle = self
            .subtitle
            .as_deref()
            .map(sanitize_inline_text)
            .filter(|value| !value.is_empty());

        let image_url = normalize_optional(self.image_url);
        let link_url = normalize_optional(self.link_url);

        Ok(UpsertHeroSection::new(lang, title)
            .with_subtitle(subtitle)
            .with_image_url(image_url)
            .with_link_url(link_url))
    }
}

/// JSON payload submitted when creating a brand content block.
#[derive(Debug, Deserialize, Validate)]
pub struct AddBrandContentForm {
    pub lang: String,
    #[validate(length(min = 1, max = TITLE_MAX_LEN_VALIDATOR))]
    pub title: String,
    #[validate(length(min = 1))]
    pub body: String,
    #[serde(default)]
    pub position: i32,
}

impl AddBrandContentForm {
    pub fn into_new_brand_content(self) -> ContentFormResult<NewBrandContent> {
        self.validate()?;

        let lang = sanitize_lang(&self.lang).ok_or(ContentFormError::InvalidLang {
            value: self.lang.clone(),
        })?;

        let title = sanitize_inline_text(&self.title);
        if title.is_empty() {
            return Err(ContentFormError::EmptyTitle);
        }

        let body = sanitize_multiline_text(&self.body);
        if body.is_empty() {
            return Err(ContentFormError::EmptyBody);
        }

        Ok(NewBrandContent::new(lang, title, body).with_position(self.position))
    }
}

/// JSON payload submitted when editing a brand content block.
#[derive(Debug, Deserialize, Validate)]
pub struct EditBrandContentForm {
    #[validate(length(min = 1, max = TITLE_MAX_LEN_VALIDATOR))]
    pub title: String,
    #[validate(length(min = 1))]
    pub body: String,
    #[serde(default)]
    pub position: i32,
}

impl EditBrandContentForm {
    pub fn into_update_brand_content(self) -> ContentFormResult<UpdateBrandContent> {
        self.validate()?;

        let title = sanitize_inline_text(&self.title);
        if title.is_empty() {
            return Err(ContentFormError::EmptyTitle);
        }

        let body = sanitize_multiline_text(&self.body);
        if body.is_empty() {
            return Err(ContentFormError::EmptyBody);
        }

        Ok(UpdateBrandContent::new(title, body, self.position))
    }
}

/// JSON payload submitted when creating a direction tile.
#[derive(Debug, Deserialize, Validate)]
pub struct AddDirectionForm {
    pub lang: String,
    #[validate(length(min = 1, max = TITLE_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub position: i32,
}

impl AddDirectionForm {
    pub fn into_new_direction(self) -> ContentFormResult<NewDirection> {
        self.validate()?;

        let lang = sanitize_lang(&self.lang).ok_or(ContentFormError::InvalidLang {
            value: self.lang.clone(),
        })?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ContentFormError::EmptyName);
        }

        let mut new_direction = NewDirection::new(lang, name).with_position(self.position);
        if let Some(image_url) = normalize_optional(self.image_url) {
            new_direction = new_direction.with_image_url(image_url);
        }

        Ok(new_direction)
    }
}

/// JSON payload submitted when editing a direction tile.
#[derive(Debug, Deserialize, Validate)]
pub struct EditDirectionForm {
    #[validate(length(min = 1, max = TITLE_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub position: i32,
}

impl EditDirectionForm {
    pub fn into_update_direction(self) -> ContentFormResult<UpdateDirection> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ContentFormError::EmptyName);
        }

        Ok(UpdateDirection::new(
            name,
            normalize_optional(self.image_url),
            self.position,
        ))
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
