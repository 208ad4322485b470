use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::{NewCategory, UpdateCategory};
use crate::forms::{is_valid_slug, sanitize_inline_text, sanitize_lang};

/// Maximum length allowed for a category name.
const NAME_MAX_LEN: usize = 128;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Maximum length allowed for a category slug.
const SLUG_MAX_LEN: usize = 96;
const SLUG_MAX_LEN_VALIDATOR: u64 = SLUG_MAX_LEN as u64;

/// Result type returned by the category form helpers.
pub type CategoryFormResult<T> = Result<T, CategoryFormError>;

/// Errors that can occur while processing category forms.
#[derive(Debug, Error)]
pub enum CategoryFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("category name cannot be empty")]
    EmptyName,
    /// The provided slug is not `lower-case-and-dashes`.
    #[error("invalid slug `{value}`")]
    InvalidSlug { value: String },
    /// The provided language code is invalid.
    #[error("invalid language code `{value}`")]
    InvalidLang { value: String },
}

/// JSON payload submitted when creating a category.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCategoryForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(min = 1, max = SLUG_MAX_LEN_VALIDATOR))]
    pub slug: String,
    pub lang: String,
    #[serde(default)]
    pub parent_id: Option<i32>,
    #[serde(default)]
    pub position: i32,
}

impl AddCategoryForm {
    /// Validates and sanitizes the payload into a domain `NewCategory`.
    pub fn into_new_category(self) -> CategoryFormResult<NewCategory> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(CategoryFormError::EmptyName);
        }

        let slug = self.slug.trim().to_ascii_lowercase();
        if !is_valid_slug(&slug) {
            return Err(CategoryFormError::InvalidSlug { value: self.slug });
        }

        let lang = sanitize_lang(&self.lang).ok_or(CategoryFormError::InvalidLang {
            value: self.lang.clone(),
        })?;

        let mut new_category = NewCategory::new(name, slug, lang).with_position(self.position);
        if let Some(parent_id) = self.parent_id {
            new_category = new_category.with_parent_id(parent_id);
        }

        Ok(new_category)
    }
}

/// JSON payload submitted when editing an existing category.
#[derive(Debug, Deserialize, Validate)]
pub struct EditCategoryForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(min = 1, max = SLUG_MAX_LEN_VALIDATOR))]
    pub slug: String,
    #[serde(default)]
    pub parent_id: Option<i32>,
    #[serde(default)]
    pub position: i32,
}

impl EditCategoryForm {
    /// Validates and sanitizes the payload into a domain `UpdateCategory`.
    pub fn into_update_category(self) -> CategoryFormResult<UpdateCategory> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(CategoryFormError::EmptyName);
        }

        let slug = self.slug.trim().to_ascii_lowercase();
        if !is_valid_slug(&slug) {
            return Err(CategoryFormError::InvalidSlug { value: self.slug });
        }

        Ok(UpdateCategory::new(name, slug, self.parent_id, self.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_category_form_converts_successfully() {
        let form = AddCategoryForm {
            name: "  Work   boots ".to_string(),
            slug: " Work-Boots ".to_string(),
            lang: "RU".to_string(),
            parent_id: Some(3),
            position: 2,
        };

        let new_category = form.into_new_category().expect("expected success");

        assert_eq!(new_category.name, "Work boots");
        assert_eq!(new_category.slug, "work-boots");
        assert_eq!(new_category.lang, "ru");
        assert_eq!(new_category.parent_id, Some(3));
        assert_eq!(new_category.position, 2);
    }

    #[test]
    fn add_category_form_rejects_bad_slug() {
        let form = AddCategoryForm {
            name: "Boots".to_string(),
            slug: "work boots".to_string(),
            lang: "ru".to_string(),
            parent_id: None,
            position: 0,
        };

        let result = form.into_new_category();

        assert!(matches!(
            result,
            Err(CategoryFormError::InvalidSlug { .. })
        ));
    }

    #[test]
    fn add_category_form_rejects_bad_lang() {
        let form = AddCategoryForm {
            name: "Boots".to_string(),
            slug: "boots".to_string(),
            lang: "russian".to_string(),
            parent_id: None,
            position: 0,
        };

        let result = form.into_new_category();

        assert!(matches!(result, Err(CategoryFormError::InvalidLang { .. })));
    }

    #[test]
    fn edit_category_form_rejects_empty_name() {
        let form = EditCategoryForm {
            name: "   ".to_string(),
            slug: "boots".to_string(),
            parent_id: None,
            position: 0,
        };

        let result = form.into_update_category();

        assert!(matches!(result, Err(CategoryFormError::EmptyName)));
    }
}
