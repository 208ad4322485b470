use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::color::{NewColor, UpdateColor};
use crate::forms::{is_valid_color_code, sanitize_inline_text};

const NAME_MAX_LEN: usize = 64;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

const SUFFIX_MAX_LEN: usize = 16;
const SUFFIX_MAX_LEN_VALIDATOR: u64 = SUFFIX_MAX_LEN as u64;

/// Result type returned by the color form helpers.
pub type ColorFormResult<T> = Result<T, ColorFormError>;

/// Errors that can occur while processing color forms.
#[derive(Debug, Error)]
pub enum ColorFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("color name cannot be empty")]
    EmptyName,
    /// The display code is not a six-digit hex value.
    #[error("invalid color code `{value}`")]
    InvalidCode { value: String },
}

/// JSON payload submitted when creating a color.
#[derive(Debug, Deserialize, Validate)]
pub struct AddColorForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    pub code: String,
    #[validate(length(max = SUFFIX_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub suffix: Option<String>,
}

impl AddColorForm {
    pub fn into_new_color(self) -> ColorFormResult<NewColor> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ColorFormError::EmptyName);
        }

        let code = self.code.trim().to_ascii_lowercase();
        if !is_valid_color_code(&code) {
            return Err(ColorFormError::InvalidCode { value: self.code });
        }

        let mut new_color = NewColor::new(name, code);
        if let Some(suffix) = normalize_suffix(self.suffix) {
            new_color = new_color.with_suffix(suffix);
        }

        Ok(new_color)
    }
}

/// JSON payload submitted when editing an existing color.
#[derive(Debug, Deserialize, Validate)]
pub struct EditColorForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    pub code: String,
    #[validate(length(max = SUFFIX_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub suffix: Option<String>,
}

impl EditColorForm {
    pub fn into_update_color(self) -> ColorFormResult<UpdateColor> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ColorFormError::EmptyName);
        }

        let code = self.code.trim().to_ascii_lowercase();
        if !is_valid_color_code(&code) {
            return Err(ColorFormError::InvalidCode { value: self.code });
        }

        Ok(UpdateColor::new(name, code, normalize_suffix(self.suffix)))
    }
}

fn normalize_suffix(suffix: Option<String>) -> Option<String> {
    suffix
        .map(|value| value.trim().to_ascii_uppercase())
        .filter(|value| !value.is_empty())
}
