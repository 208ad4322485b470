use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::collection_page::{CollectionPage as DomainCollectionPage, ContentSection};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::collection_pages)]
pub struct CollectionPage {
    pub id: i32,
    pub collection_id: i32,
    pub lang: String,
    pub title: String,
    pub description: Option<String>,
    pub hero_image: Option<String>,
    pub banner_image: Option<String>,
    /// JSON-serialized `Vec<ContentSection>`.
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl CollectionPage {
    /// Parse the JSON content column into the domain representation.
    pub fn into_domain(self) -> Result<DomainCollectionPage, serde_json::Error> {
        let sections: Vec<ContentSection> = serde_json::from_str(&self.content)?;

        Ok(DomainCollectionPage {
            id: self.id,
            collection_id: self.collection_id,
            lang: self.lang,
            title: self.title,
            description: self.description,
            hero_image: self.hero_image,
            banner_image: self.banner_image,
            sections,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::collection_pages)]
pub struct NewCollectionPage<'a> {
    pub collection_id: i32,
    pub lang: &'a str,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub hero_image: Option<&'a str>,
    pub banner_image: Option<&'a str>,
    pub content: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::collection_pages)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateCollectionPage<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub hero_image: Option<&'a str>,
    pub banner_image: Option<&'a str>,
    pub content: &'a str,
    pub updated_at: NaiveDateTime,
}
