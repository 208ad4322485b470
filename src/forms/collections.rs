use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::collection::{NewCollection, UpdateCollection};
use crate::domain::collection_page::{ContentSection, UpsertCollectionPage};
use crate::forms::{
    is_valid_image_data_uri, is_valid_image_ref, is_valid_slug, sanitize_inline_text,
    sanitize_lang, sanitize_multiline_text,
};

const NAME_MAX_LEN: usize = 128;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

const SLUG_MAX_LEN: usize = 96;
const SLUG_MAX_LEN_VALIDATOR: u64 = SLUG_MAX_LEN as u64;

const TITLE_MAX_LEN: usize = 160;
const TITLE_MAX_LEN_VALIDATOR: u64 = TITLE_MAX_LEN as u64;

/// Result type returned by the collection form helpers.
pub type CollectionFormResult<T> = Result<T, CollectionFormError>;

/// Errors that can occur while processing collection forms.
#[derive(Debug, Error)]
pub enum CollectionFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("collection name cannot be empty")]
    EmptyName,
    #[error("invalid slug `{value}`")]
    InvalidSlug { value: String },
    /// The preview image is not a base64 data URI.
    #[error("preview image must be a base64 data URI")]
    InvalidPreviewImage,
    #[error("invalid language code `{value}`")]
    InvalidLang { value: String },
    #[error("page title cannot be empty")]
    EmptyTitle,
    /// A content section references a broken image.
    #[error("invalid image reference in content section {index}")]
    InvalidSectionImage { index: usize },
    /// A content section has no usable text.
    #[error("content section {index} is empty")]
    EmptySection { index: usize },
}

/// JSON payload submitted when creating a collection.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCollectionForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(min = 1, max = SLUG_MAX_LEN_VALIDATOR))]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sub_title: Option<String>,
    #[serde(default)]
    pub image_base64: Option<String>,
}

impl AddCollectionForm {
    pub fn into_new_collection(self) -> CollectionFormResult<NewCollection> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(CollectionFormError::EmptyName);
        }

        let slug = self.slug.trim().to_ascii_lowercase();
        if !is_valid_slug(&slug) {
            return Err(CollectionFormError::InvalidSlug { value: self.slug });
        }

        let mut new_collection = NewCollection::new(name, slug);

        if let Some(description) = self
            .description
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty())
        {
            new_collection = new_collection.with_description(description);
        }

        if let Some(sub_title) = self
            .sub_title
            .as_deref()
            .map(sanitize_inline_text)
            .filter(|value| !value.is_empty())
        {
            new_collection = new_collection.with_sub_title(sub_title);
        }

        if let Some(image) = normalize_preview_image(self.image_base64)? {
            new_collection = new_collection.with_image(image);
        }

        Ok(new_collection)
    }
}

/// JSON payload submitted when editing an existing collection.
#[derive(Debug, Deserialize, Validate)]
pub struct EditCollectionForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(min = 1, max = SLUG_MAX_LEN_VALIDATOR))]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sub_title: Option<String>,
    #[serde(default)]
    pub image_base64: Option<String>,
}

impl EditCollectionForm {
    pub fn into_update_collection(self) -> CollectionFormResult<UpdateCollection> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(CollectionFormError::EmptyName);
        }

        let slug = self.slug.trim().to_ascii_lowercase();
        if !is_valid_slug(&slug) {
            return Err(CollectionFormError::InvalidSlug { value: self.slug });
        }

        let description = self
            .description
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty());

        let sub_title = self
            .sub_title
            .as_deref()
            .map(sanitize_inline_text)
            .filter(|value| !value.is_empty());

        let image_base64 = normalize_preview_image(self.image_base64)?;

        Ok(UpdateCollection::new(
            name,
            slug,
            description,
            sub_title,
            image_base64,
        ))
    }
}

/// JSON payload creating or replacing a collection page for one language.
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertCollectionPageForm {
    pub lang: String,
    #[validate(length(min = 1, max = TITLE_MAX_LEN_VALIDATOR))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub banner_image: Option<String>,
    #[serde(default)]
    pub sections: Vec<ContentSection>,
}

impl UpsertCollectionPageForm {
    pub fn into_upsert_page(
        self,
        collection_id: i32,
    ) -> CollectionFormResult<UpsertCollectionPage> {
        self.validate()?;

        let lang = sanitize_lang(&self.lang).ok_or(CollectionFormError::InvalidLang {
            value: self.lang.clone(),
        })?;

        let title = sanitize_inline_text(&self.title);
        if title.is_empty() {
            return Err(CollectionFormError::EmptyTitle);
        }

        let sections = validate_sections(self.sections)?;

        let description = self
            .description
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty());

        let hero_image = normalize_image_ref(self.hero_image);
        let banner_image = normalize_image_ref(self.banner_image);

        Ok(UpsertCollectionPage::new(collection_id, lang, title)
            .with_description(description)
            .with_hero_image(hero_image)
            .with_banner_image(banner_image)
            .with_sections(sections))
    }
}

fn normalize_preview_image(
    image: Option<String>,
) -> CollectionFormResult<Option<String>> {
    let Some(image) = image.map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
    else {
        return Ok(None);
    };

    if !is_valid_image_data_uri(&image) {
        return Err(CollectionFormError::InvalidPreviewImage);
    }

    Ok(Some(image))
}

fn normalize_image_ref(image: Option<String>) -> Option<String> {
    image
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn validate_sections(
    sections: Vec<ContentSection>,
) -> CollectionFormResult<Vec<ContentSection>> {
    for (index, section) in sections.iter().enumerate() {
        match section {
            ContentSection::Banner { title, image, .. } => {
                if title.trim().is_empty() {
                    return Err(CollectionFormError::EmptySection { index });
                }
                if !is_valid_image_ref(image.trim()) {
                    return Err(CollectionFormError::InvalidSectionImage { index });
                }
            }
            ContentSection::Text { body, .. } => {
                if body.trim().is_empty() {
                    return Err(CollectionFormError::EmptySection { index });
                }
            }
            ContentSection::Image { url, .. } => {
                if !is_valid_image_ref(url.trim()) {
                    return Err(CollectionFormError::InvalidSectionImage { index });
                }
            }
        }
    }

    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_collection_form_converts_successfully() {
        let form = AddCollectionForm {
            name: "  Summer  2025 ".to_string(),
            slug: " Summer-2025 ".to_string(),
            description: Some(" Light.\n\n Bright. ".to_string()),
            sub_title: Some(" For the season ".to_string()),
            image_base64: Some("data:image/png;base64,aGk=".to_string()),
        };

        let new_collection = form.into_new_collection().expect("expected success");

        assert_eq!(new_collection.name, "Summer 2025");
        assert_eq!(new_collection.slug, "summer-2025");
        assert_eq!(new_collection.sub_title.as_deref(), Some("For the season"));
        assert!(new_collection.image_base64.is_some());
    }

    #[test]
    fn add_collection_form_rejects_plain_url_preview() {
        let form = AddCollectionForm {
            name: "Summer".to_string(),
            slug: "summer".to_string(),
            description: None,
            sub_title: None,
            image_base64: Some("https://cdn.example.com/a.png".to_string()),
        };

        let result = form.into_new_collection();

        assert!(matches!(
            result,
            Err(CollectionFormError::InvalidPreviewImage)
        ));
    }

    #[test]
    fn upsert_page_form_validates_sections() {
        let form = UpsertCollectionPageForm {
            lang: "ru".to_string(),
            title: "Summer".to_string(),
            description: None,
            hero_image: None,
            banner_image: None,
            sections: vec![ContentSection::Text {
                title: None,
                body: "  ".to_string(),
            }],
        };

        let result = form.into_upsert_page(1);

        assert!(matches!(
            result,
            Err(CollectionFormError::EmptySection { index: 0 })
        ));
    }

    #[test]
    fn upsert_page_form_converts_successfully() {
        let form = UpsertCollectionPageForm {
            lang: "EN".to_string(),
            title: " Summer " .to_string(),
            description: Some("About the drop.".to_string()),
            hero_image: Some(" /img/hero.jpg ".to_string()),
            banner_image: None,
            sections: vec![ContentSection::Banner {
                title: "New".to_string(),
                subtitle: None,
                image: "/img/banner.jpg".to_string(),
            }],
        };

        let page = form.into_upsert_page(7).expect("expected success");

        assert_eq!(page.collection_id, 7);
        assert_eq!(page.lang, "en");
        assert_eq!(page.title, "Summer");
        assert_eq!(page.hero_image.as_deref(), Some("/img/hero.jpg"));
        assert_eq!(page.sections.len(), 1);
    }
}
