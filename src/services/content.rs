use serde::Serialize;

use crate::domain::content::{
    BrandContent, BrandHeroSection, Direction, HeroSection, UpsertHeroSection,
};
use crate::forms::content::{
    AddBrandContentForm, AddDirectionForm, EditBrandContentForm, EditDirectionForm,
    HeroSectionForm,
};
use crate::repository::{ContentReader, ContentWriter};
use crate::services::{ServiceError, ServiceResult};

/// Everything the brand page needs for one language.
#[derive(Debug, Serialize)]
pub struct BrandPageData {
    pub hero: Option<BrandHeroSection>,
    pub contents: Vec<BrandContent>,
}

/// Landing hero for one language; `None` when the language has no row yet.
pub fn load_hero_section<R>(repo: &R, lang: &str) -> ServiceResult<Option<HeroSection>>
where
    R: ContentReader + ?Sized,
{
    repo.get_hero_section(lang).map_err(ServiceError::from)
}

/// Brand hero plus the ordered brand content blocks for one language.
pub fn load_brand_page<R>(repo: &R, lang: &str) -> ServiceResult<BrandPageData>
where
    R: ContentReader + ?Sized,
{
    let hero = repo
        .get_brand_hero_section(lang)
        .map_err(ServiceError::from)?;
    let contents = repo.list_brand_contents(lang).map_err(ServiceError::from)?;

    Ok(BrandPageData { hero, contents })
}

/// Ordered direction tiles for one language.
pub fn load_directions<R>(repo: &R, lang: &str) -> ServiceResult<Vec<Direction>>
where
    R: ContentReader + ?Sized,
{
    repo.list_directions(lang).map_err(ServiceError::from)
}

fn hero_payload(form: HeroSectionForm) -> ServiceResult<UpsertHeroSection> {
    form.into_upsert()
        .map_err(|err| ServiceError::Form(err.to_string()))
}

/// Creates or replaces the landing hero for one language.
pub fn save_hero_section<R>(repo: &R, form: HeroSectionForm) -> ServiceResult<HeroSection>
where
    R: ContentWriter + ?Sized,
{
    let payload = hero_payload(form)?;
    repo.upsert_hero_section(&payload).map_err(ServiceError::from)
}

/// Creates or replaces the brand hero for one language.
pub fn save_brand_hero_section<R>(repo: &R, form: HeroSectionForm) -> ServiceResult<BrandHeroSection>
where
    R: ContentWriter + ?Sized,
{
    let payload = hero_payload(form)?;
    repo.upsert_brand_hero_section(&payload)
        .map_err(ServiceError::from)
}

/// Creates a brand content block.
pub fn create_brand_content<R>(repo: &R, form: AddBrandContentForm) -> ServiceResult<BrandContent>
where
    R: ContentWriter + ?Sized,
{
    let payload = form
        .into_new_brand_content()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_brand_content(&payload)
        .map_err(ServiceError::from)
}

/// Updates a brand content block.
pub fn modify_brand_content<R>(
    repo: &R,
    content_id: i32,
    form: EditBrandContentForm,
) -> ServiceResult<BrandContent>
where
    R: ContentWriter + ?Sized,
{
    let update = form
        .into_update_brand_content()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_brand_content(content_id, &update)
        .map_err(ServiceError::from)
}

/// Deletes a brand content block.
pub fn remove_brand_content<R>(repo: &R, content_id: i32) -> ServiceResult<()>
where
    R: ContentWriter + ?Sized,
{
    repo.delete_brand_content(content_id)
        .map_err(ServiceError::from)
}

/// Creates a direction tile.
pub fn create_direction<R>(repo: &R, form: AddDirectionForm) -> ServiceResult<Direction>
where
    R: ContentWriter + ?Sized,
{
    let payload = form
        .into_new_direction()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_direction(&payload).map_err(ServiceError::from)
}

/// Updates a direction tile.
pub fn modify_direction<R>(
    repo: &R,
    direction_id: i32,
    form: EditDirectionForm,
) -> ServiceResult<Direction>
where
    R: ContentWriter + ?Sized,
{
    let update = form
        .into_update_direction()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_direction(direction_id, &update)
        .map_err(ServiceError::from)
}

/// Deletes a direction tile.
pub fn remove_direction<R>(repo: &R, direction_id: i32) -> ServiceResult<()>
where
    R: ContentWriter + ?Sized,
{
    repo.delete_direction(direction_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::repository::mock::{MockContentReader, MockContentWriter};

    fn datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    #[test]
    fn load_brand_page_combines_hero_and_contents() {
        let mut repo = MockContentReader::new();

        repo.expect_get_brand_hero_section()
            .times(1)
            .returning(|lang| {
                Ok(Some(BrandHeroSection {
                    id: 1,
                    lang: lang.to_string(),
                    title: "Our brand".to_string(),
                    subtitle: None,
                    image_url: None,
                    link_url: None,
                    created_at: datetime(),
                    updated_at: datetime(),
                }))
            });

        repo.expect_list_brand_contents()
            .times(1)
            .returning(|lang| {
                Ok(vec![BrandContent {
                    id: 2,
                    lang: lang.to_string(),
                    title: "History".to_string(),
                    body: "Founded long ago.".to_string(),
                    position: 0,
                    created_at: datetime(),
                    updated_at: datetime(),
                }])
            });

        let data = load_brand_page(&repo, "ru").expect("expected success");

        assert!(data.hero.is_some());
        assert_eq!(data.contents.len(), 1);
    }

    #[test]
    fn save_hero_section_upserts_payload() {
        let mut repo = MockContentWriter::new();

        repo.expect_upsert_hero_section()
            .times(1)
            .withf(|payload| {
                assert_eq!(payload.lang, "ru");
                assert_eq!(payload.title, "New season");
                true
            })
            .returning(|payload| {
                Ok(HeroSection {
                    id: 1,
                    lang: payload.lang.clone(),
                    title: payload.title.clone(),
                    subtitle: payload.subtitle.clone(),
                    image_url: payload.image_url.clone(),
                    link_url: payload.link_url.clone(),
                    created_at: datetime(),
                    updated_at: datetime(),
                })
            });

        let form = HeroSectionForm {
            lang: "RU".to_string(),
            title: " New  season ".to_string(),
            subtitle: None,
            image_url: None,
            link_url: None,
        };

        let saved = save_hero_section(&repo, form).expect("expected success");

        assert_eq!(saved.lang, "ru");
    }

    #[test]
    fn save_hero_section_validates_lang() {
        let repo = MockContentWriter::new();

        let form = HeroSectionForm {
            lang: "russian".to_string(),
            title: "New season".to_string(),
            subtitle: None,
            image_url: None,
            link_url: None,
        };

        let result = save_hero_section(&repo, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
