use crate::domain::color::Color;
use crate::forms::colors::{AddColorForm, EditColorForm};
use crate::repository::{ColorReader, ColorWriter};
use crate::services::{ServiceError, ServiceResult};

/// Lists every color, ordered by name.
pub fn load_colors<R>(repo: &R) -> ServiceResult<Vec<Color>>
where
    R: ColorReader + ?Sized,
{
    repo.list_colors().map_err(ServiceError::from)
}

/// Creates a new color.
pub fn create_color<R>(repo: &R, form: AddColorForm) -> ServiceResult<Color>
where
    R: ColorWriter + ?Sized,
{
    let new_color = form
        .into_new_color()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_color(&new_color).map_err(ServiceError::from)
}

/// Updates an existing color.
pub fn modify_color<R>(repo: &R, color_id: i32, form: EditColorForm) -> ServiceResult<Color>
where
    R: ColorWriter + ?Sized,
{
    let update = form
        .into_update_color()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_color(color_id, &update)
        .map_err(ServiceError::from)
}

/// Deletes a color; refused while products still use it.
pub fn remove_color<R>(repo: &R, color_id: i32) -> ServiceResult<()>
where
    R: ColorWriter + ?Sized,
{
    repo.delete_color(color_id).map_err(ServiceError::from)
}
