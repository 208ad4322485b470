use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::content::{
    BrandContent as DomainBrandContent, BrandHeroSection as DomainBrandHeroSection,
    Direction as DomainDirection, HeroSection as DomainHeroSection,
    NewBrandContent as DomainNewBrandContent, NewDirection as DomainNewDirection,
    UpdateBrandContent as DomainUpdateBrandContent, UpdateDirection as DomainUpdateDirection,
    UpsertHeroSection,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::hero_sections)]
pub struct HeroSection {
    pub id: i32,
    pub lang: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::hero_sections)]
pub struct NewHeroSection<'a> {
    pub lang: &'a str,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub link_url: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::hero_sections)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateHeroSection<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub link_url: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::brand_hero_sections)]
pub struct BrandHeroSection {
    pub id: i32,
    pub lang: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::brand_hero_sections)]
pub struct NewBrandHeroSection<'a> {
    pub lang: &'a str,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub link_url: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::brand_hero_sections)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateBrandHeroSection<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub link_url: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::brand_contents)]
pub struct BrandContent {
    pub id: i32,
    pub lang: String,
    pub title: String,
    pub body: String,
    pub position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::brand_contents)]
pub struct NewBrandContent<'a> {
    pub lang: &'a str,
    pub title: &'a str,
    pub body: &'a str,
    pub position: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::brand_contents)]
pub struct UpdateBrandContent<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub position: i32,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::directions)]
pub struct Direction {
    pub id: i32,
    pub lang: String,
    pub name: String,
    pub image_url: Option<String>,
    pub position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::directions)]
pub struct NewDirection<'a> {
    pub lang: &'a str,
    pub name: &'a str,
    pub image_url: Option<&'a str>,
    pub position: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::directions)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateDirection<'a> {
    pub name: &'a str,
    pub image_url: Option<&'a str>,
    pub position: i32,
    pub updated_at: NaiveDateTime,
}

impl From<HeroSection> for DomainHeroSection {
    fn from(value: HeroSection) -> Self {
        Self {
            id: value.id,
            lang: value.lang,
            title: value.title,
            subtitle: value.subtitle,
            image_url: value.image_url,
            link_url: value.link_url,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<BrandHeroSection> for DomainBrandHeroSection {
    fn from(value: BrandHeroSection) -> Self {
        Self {
            id: value.id,
            lang: value.lang,
            title: value.title,
            subtitle: value.subtitle,
            image_url: value.image_url,
            link_url: value.link_url,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a UpsertHeroSection> for NewHeroSection<'a> {
    fn from(value: &'a UpsertHeroSection) -> Self {
        Self {
            lang: value.lang.as_str(),
            title: value.title.as_str(),
            subtitle: value.subtitle.as_deref(),
            image_url: value.image_url.as_deref(),
            link_url: value.link_url.as_deref(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a UpsertHeroSection> for UpdateHeroSection<'a> {
    fn from(value: &'a UpsertHeroSection) -> Self {
        Self {
            title: value.title.as_str(),
            subtitle: value.subtitle.as_deref(),
            image_url: value.image_url.as_deref(),
            link_url: value.link_url.as_deref(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a UpsertHeroSection> for NewBrandHeroSection<'a> {
    fn from(value: &'a UpsertHeroSection) -> Self {
        Self {
            lang: value.lang.as_str(),
            title: value.title.as_str(),
            subtitle: value.subtitle.as_deref(),
            image_url: value.image_url.as_deref(),
            link_url: value.link_url.as_deref(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a UpsertHeroSection> for UpdateBrandHeroSection<'a> {
    fn from(value: &'a UpsertHeroSection) -> Self {
        Self {
            title: value.title.as_str(),
            subtitle: value.subtitle.as_deref(),
            image_url: value.image_url.as_deref(),
            link_url: value.link_url.as_deref(),
            updated_at: value.updated_at,
        }
    }
}

impl From<BrandContent> for DomainBrandContent {
    fn from(value: BrandContent) -> Self {
        Self {
            id: value.id,
            lang: value.lang,
            title: value.title,
            body: value.body,
            position: value.position,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewBrandContent> for NewBrandContent<'a> {
    fn from(value: &'a DomainNewBrandContent) -> Self {
        Self {
            lang: value.lang.as_str(),
            title: value.title.as_str(),
            body: value.body.as_str(),
            position: value.position,
        }
    }
}

impl<'a> From<&'a DomainUpdateBrandContent> for UpdateBrandContent<'a> {
    fn from(value: &'a DomainUpdateBrandContent) -> Self {
        Self {
            title: value.title.as_str(),
            body: value.body.as_str(),
            position: value.position,
            updated_at: value.updated_at,
        }
    }
}

impl From<Direction> for DomainDirection {
    fn from(value: Direction) -> Self {
        Self {
            id: value.id,
            lang: value.lang,
            name: value.name,
            image_url: value.image_url,
            position: value.position,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewDirection> for NewDirection<'a> {
    fn from(value: &'a DomainNewDirection) -> Self {
        Self {
            lang: value.lang.as_str(),
            name: value.name.as_str(),
            image_url: value.image_url.as_deref(),
            position: value.position,
        }
    }
}

impl<'a> From<&'a DomainUpdateDirection> for UpdateDirection<'a> {
    fn from(value: &'a DomainUpdateDirection) -> Self {
        Self {
            name: value.name.as_str(),
            image_url: value.image_url.as_deref(),
            position: value.position,
            updated_at: value.updated_at,
        }
    }
}
