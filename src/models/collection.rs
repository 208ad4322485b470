use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::collection::{
    Collection as DomainCollection, NewCollection as DomainNewCollection,
    UpdateCollection as DomainUpdateCollection,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::collections)]
pub struct Collection {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub sub_title: Option<String>,
    pub image_base64: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::collections)]
pub struct NewCollection<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub sub_title: Option<&'a str>,
    pub image_base64: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::collections)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateCollection<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub sub_title: Option<&'a str>,
    pub image_base64: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Collection> for DomainCollection {
    fn from(value: Collection) -> Self {
        Self {
            id: value.id,
            name: value.name,
            slug: value.slug,
            description: value.description,
            sub_title: value.sub_title,
            image_base64: value.image_base64,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCollection> for NewCollection<'a> {
    fn from(value: &'a DomainNewCollection) -> Self {
        Self {
            name: value.name.as_str(),
            slug: value.slug.as_str(),
            description: value.description.as_deref(),
            sub_title: value.sub_title.as_deref(),
            image_base64: value.image_base64.as_deref(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateCollection> for UpdateCollection<'a> {
    fn from(value: &'a DomainUpdateCollection) -> Self {
        Self {
            name: value.name.as_str(),
            slug: value.slug.as_str(),
            description: value.description.as_deref(),
            sub_title: value.sub_title.as_deref(),
            image_base64: value.image_base64.as_deref(),
            updated_at: value.updated_at,
        }
    }
}
