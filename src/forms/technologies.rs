use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::technology::{NewTechnology, UpdateTechnology};
use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

const NAME_MAX_LEN: usize = 64;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

const TITLE_MAX_LEN: usize = 128;
const TITLE_MAX_LEN_VALIDATOR: u64 = TITLE_MAX_LEN as u64;

/// Result type returned by the technology form helpers.
pub type TechnologyFormResult<T> = Result<T, TechnologyFormError>;

/// Errors that can occur while processing technology forms.
#[derive(Debug, Error)]
pub enum TechnologyFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("technology name cannot be empty")]
    EmptyName,
    #[error("technology title cannot be empty")]
    EmptyTitle,
}

/// JSON payload submitted when creating a technology.
#[derive(Debug, Deserialize, Validate)]
pub struct AddTechnologyForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(min = 1, max = TITLE_MAX_LEN_VALIDATOR))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl AddTechnologyForm {
    pub fn into_new_technology(self) -> TechnologyFormResult<NewTechnology> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(TechnologyFormError::EmptyName);
        }

        let title = sanitize_inline_text(&self.title);
        if title.is_empty() {
            return Err(TechnologyFormError::EmptyTitle);
        }

        let mut new_technology = NewTechnology::new(name, title);

        if let Some(description) = self
            .description
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty())
        {
            new_technology = new_technology.with_description(description);
        }

        if let Some(icon) = self
            .icon
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
        {
            new_technology = new_technology.with_icon(icon);
        }

        Ok(new_technology)
    }
}

/// JSON payload submitted when editing an existing technology.
#[derive(Debug, Deserialize, Validate)]
pub struct EditTechnologyForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(min = 1, max = TITLE_MAX_LEN_VALIDATOR))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl EditTechnologyForm {
    pub fn into_update_technology(self) -> TechnologyFormResult<UpdateTechnology> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(TechnologyFormError::EmptyName);
        }

        let title = sanitize_inline_text(&self.title);
        if title.is_empty() {
            return Err(TechnologyFormError::EmptyTitle);
        }

        let description = self
            .description
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty());

        let icon = self
            .icon
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Ok(UpdateTechnology::new(name, title, description, icon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_technology_form_converts_successfully() {
        let form = AddTechnologyForm {
            name: " dry-shield ".to_string(),
            title: "  Dry  Shield ".to_string(),
            description: Some(" Keeps water out. \n\n ".to_string()),
            icon: Some(" /icons/dry.svg ".to_string()),
        };

        let new_technology = form.into_new_technology().expect("expected success");

        assert_eq!(new_technology.name, "dry-shield");
        assert_eq!(new_technology.title, "Dry Shield");
        assert_eq!(
            new_technology.description.as_deref(),
            Some("Keeps water out.")
        );
        assert_eq!(new_technology.icon.as_deref(), Some("/icons/dry.svg"));
    }

    #[test]
    fn edit_technology_form_rejects_blank_title() {
        let form = EditTechnologyForm {
            name: "dry-shield".to_string(),
            title: " \t ".to_string(),
            description: None,
            icon: None,
        };

        let result = form.into_update_technology();

        assert!(matches!(result, Err(TechnologyFormError::EmptyTitle)));
    }
}
