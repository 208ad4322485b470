use crate::domain::technology::Technology;
use crate::forms::technologies::{AddTechnologyForm, EditTechnologyForm};
use crate::repository::{TechnologyReader, TechnologyWriter};
use crate::services::{ServiceError, ServiceResult};

/// Lists every technology, ordered by name.
pub fn load_technologies<R>(repo: &R) -> ServiceResult<Vec<Technology>>
where
    R: TechnologyReader + ?Sized,
{
    repo.list_technologies().map_err(ServiceError::from)
}

/// Creates a new technology.
pub fn create_technology<R>(repo: &R, form: AddTechnologyForm) -> ServiceResult<Technology>
where
    R: TechnologyWriter + ?Sized,
{
    let new_technology = form
        .into_new_technology()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_technology(&new_technology)
        .map_err(ServiceError::from)
}

/// Updates an existing technology.
pub fn modify_technology<R>(
    repo: &R,
    technology_id: i32,
    form: EditTechnologyForm,
) -> ServiceResult<Technology>
where
    R: TechnologyWriter + ?Sized,
{
    let update = form
        .into_update_technology()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_technology(technology_id, &update)
        .map_err(ServiceError::from)
}

/// Deletes a technology; refused while products still use it.
pub fn remove_technology<R>(repo: &R, technology_id: i32) -> ServiceResult<()>
where
    R: TechnologyWriter + ?Sized,
{
    repo.delete_technology(technology_id)
        .map_err(ServiceError::from)
}
