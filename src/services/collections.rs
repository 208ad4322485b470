use std::thread;
use std::time::Duration;

use serde::Serialize;

use crate::domain::collection::Collection;
use crate::domain::collection_page::ContentSection;
use crate::forms::collections::{
    AddCollectionForm, EditCollectionForm, UpsertCollectionPageForm,
};
use crate::repository::{CollectionReader, CollectionWriter};
use crate::services::{ServiceError, ServiceResult};

/// Attempts made when the storefront collection list hits a connectivity
/// error. Everything else in the service layer is fail-fast; this read backs
/// the landing page and is the one documented exception.
const MAX_LIST_ATTEMPTS: u32 = 3;

/// Base delay between attempts; grows linearly with the attempt number.
const RETRY_BASE_DELAY: Duration = Duration::from_millis(100);

/// Storefront view of a collection with the per-language page overlaid on
/// the base display fields.
#[derive(Debug, Serialize)]
pub struct CollectionView {
    pub id: i32,
    pub slug: String,
    pub lang: String,
    /// Page title when a page exists for the language, base name otherwise.
    pub title: String,
    pub sub_title: Option<String>,
    /// Page description when present, base description otherwise.
    pub description: Option<String>,
    /// Inline preview image of the base collection.
    pub preview_image: Option<String>,
    pub hero_image: Option<String>,
    pub banner_image: Option<String>,
    pub sections: Vec<ContentSection>,
}

/// Lists collections for the storefront, retrying on connectivity errors.
pub fn load_collections<R>(repo: &R) -> ServiceResult<Vec<Collection>>
where
    R: CollectionReader + ?Sized,
{
    let mut attempt = 1;

    loop {
        match repo.list_collections() {
            Ok(collections) => return Ok(collections),
            Err(err) if err.is_transient() && attempt < MAX_LIST_ATTEMPTS => {
                log::warn!("listing collections failed (attempt {attempt}): {err}");
                thread::sleep(RETRY_BASE_DELAY * attempt);
                attempt += 1;
            }
            Err(err) => return Err(ServiceError::from(err)),
        }
    }
}

/// Loads one collection by slug with its page for `lang` overlaid.
///
/// Returns `None` when no collection carries the slug. Absent overlay fields
/// fall back to the base collection values.
pub fn load_collection_view<R>(
    repo: &R,
    slug: &str,
    lang: &str,
) -> ServiceResult<Option<CollectionView>>
where
    R: CollectionReader + ?Sized,
{
    let Some(collection) = repo
        .find_collection_by_slug(slug)
        .map_err(ServiceError::from)?
    else {
        return Ok(None);
    };

    let page = repo
        .get_collection_page(collection.id, lang)
        .map_err(ServiceError::from)?;

    let view = match page {
        Some(page) => CollectionView {
            id: collection.id,
            slug: collection.slug,
            lang: lang.to_string(),
            title: page.title,
            sub_title: collection.sub_title,
            description: page.description.or(collection.description),
            preview_image: collection.image_base64,
            hero_image: page.hero_image,
            banner_image: page.banner_image,
            sections: page.sections,
        },
        None => CollectionView {
            id: collection.id,
            slug: collection.slug,
            lang: lang.to_string(),
            title: collection.name,
            sub_title: collection.sub_title,
            description: collection.description,
            preview_image: collection.image_base64,
            hero_image: None,
            banner_image: None,
            sections: Vec::new(),
        },
    };

    Ok(Some(view))
}

/// Creates a new collection.
pub fn create_collection<R>(repo: &R, form: AddCollectionForm) -> ServiceResult<Collection>
where
    R: CollectionWriter + ?Sized,
{
    let new_collection = form
        .into_new_collection()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_collection(&new_collection)
        .map_err(ServiceError::from)
}

/// Updates an existing collection.
pub fn modify_collection<R>(
    repo: &R,
    collection_id: i32,
    form: EditCollectionForm,
) -> ServiceResult<Collection>
where
    R: CollectionWriter + ?Sized,
{
    let update = form
        .into_update_collection()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_collection(collection_id, &update)
        .map_err(ServiceError::from)
}

/// Deletes a collection; refused while products reference it.
pub fn remove_collection<R>(repo: &R, collection_id: i32) -> ServiceResult<()>
where
    R: CollectionWriter + ?Sized,
{
    repo.delete_collection(collection_id)
        .map_err(ServiceError::from)
}

/// Creates or replaces the page of one language for a collection.
pub fn upsert_collection_page<R>(
    repo: &R,
    collection_id: i32,
    form: UpsertCollectionPageForm,
) -> ServiceResult<crate::domain::collection_page::CollectionPage>
where
    R: CollectionWriter + ?Sized,
{
    let page = form
        .into_upsert_page(collection_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.upsert_collection_page(&page)
        .map_err(ServiceError::from)
}

/// Removes the page of one language from a collection.
pub fn remove_collection_page<R>(repo: &R, collection_id: i32, lang: &str) -> ServiceResult<()>
where
    R: CollectionWriter + ?Sized,
{
    repo.delete_collection_page(collection_id, lang)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use diesel::result::DatabaseErrorKind;

    use crate::domain::collection_page::CollectionPage;
    use crate::repository::RepositoryError;
    use crate::repository::mock::MockCollectionReader;

    fn datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn sample_collection(id: i32, slug: &str) -> Collection {
        Collection {
            id,
            name: "Workwear".to_string(),
            slug: slug.to_string(),
            description: Some("Base description".to_string()),
            sub_title: Some("Built to last".to_string()),
            image_base64: Some("data:image/png;base64,aGk=".to_string()),
            created_at: datetime(),
            updated_at: datetime(),
        }
    }

    fn connectivity_error() -> RepositoryError {
        RepositoryError::Database(diesel::result::Error::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("connection closed".to_string()),
        ))
    }

    #[test]
    fn load_collections_retries_transient_failures() {
        let mut repo = MockCollectionReader::new();

        repo.expect_list_collections()
            .times(2)
            .returning(|| Err(connectivity_error()));

        repo.expect_list_collections()
            .times(1)
            .returning(|| Ok(vec![sample_collection(1, "workwear")]));

        let collections = load_collections(&repo).expect("expected success after retries");

        assert_eq!(collections.len(), 1);
    }

    #[test]
    fn load_collections_gives_up_after_three_attempts() {
        let mut repo = MockCollectionReader::new();

        repo.expect_list_collections()
            .times(3)
            .returning(|| Err(connectivity_error()));

        let result = load_collections(&repo);

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }

    #[test]
    fn load_collections_does_not_retry_deterministic_failures() {
        let mut repo = MockCollectionReader::new();

        repo.expect_list_collections()
            .times(1)
            .returning(|| Err(RepositoryError::NotFound));

        let result = load_collections(&repo);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn collection_view_overlays_page_fields() {
        let mut repo = MockCollectionReader::new();

        repo.expect_find_collection_by_slug()
            .times(1)
            .returning(|_| Ok(Some(sample_collection(1, "workwear"))));

        repo.expect_get_collection_page()
            .times(1)
            .returning(|collection_id, lang| {
                Ok(Some(CollectionPage {
                    id: 9,
                    collection_id,
                    lang: lang.to_string(),
                    title: "Workwear 2025".to_string(),
                    description: None,
                    hero_image: Some("/img/hero.jpg".to_string()),
                    banner_image: None,
                    sections: vec![ContentSection::Text {
                        title: None,
                        body: "Reinforced seams.".to_string(),
                    }],
                    created_at: datetime(),
                    updated_at: datetime(),
                }))
            });

        let view = load_collection_view(&repo, "workwear", "ru")
            .expect("expected success")
            .expect("expected a view");

        assert_eq!(view.title, "Workwear 2025");
        // The page has no description of its own, so the base one shows.
        assert_eq!(view.description.as_deref(), Some("Base description"));
        assert_eq!(view.hero_image.as_deref(), Some("/img/hero.jpg"));
        assert_eq!(view.sections.len(), 1);
    }

    #[test]
    fn collection_view_falls_back_to_base_fields() {
        let mut repo = MockCollectionReader::new();

        repo.expect_find_collection_by_slug()
            .times(1)
            .returning(|_| Ok(Some(sample_collection(1, "workwear"))));

        repo.expect_get_collection_page()
            .times(1)
            .returning(|_, _| Ok(None));

        let view = load_collection_view(&repo, "workwear", "en")
            .expect("expected success")
            .expect("expected a view");

        assert_eq!(view.title, "Workwear");
        assert!(view.sections.is_empty());
        assert!(view.hero_image.is_none());
    }

    #[test]
    fn collection_view_misses_unknown_slug() {
        let mut repo = MockCollectionReader::new();

        repo.expect_find_collection_by_slug()
            .times(1)
            .returning(|_| Ok(None));

        let view = load_collection_view(&repo, "no-such", "ru").expect("expected success");

        assert!(view.is_none());
    }
}
