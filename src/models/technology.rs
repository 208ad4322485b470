use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::technology::{
    NewTechnology as DomainNewTechnology, Technology as DomainTechnology,
    UpdateTechnology as DomainUpdateTechnology,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::technologies)]
pub struct Technology {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::technologies)]
pub struct NewTechnology<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub icon: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::technologies)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateTechnology<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub icon: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

/// Join row attaching a technology to a product.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product_technologies)]
pub struct ProductTechnology {
    pub id: i32,
    pub product_id: i32,
    pub technology_id: i32,
    pub position: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_technologies)]
pub struct NewProductTechnology {
    pub product_id: i32,
    pub technology_id: i32,
    pub position: i32,
}

impl From<Technology> for DomainTechnology {
    fn from(value: Technology) -> Self {
        Self {
            id: value.id,
            name: value.name,
            title: value.title,
            description: value.description,
            icon: value.icon,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewTechnology> for NewTechnology<'a> {
    fn from(value: &'a DomainNewTechnology) -> Self {
        Self {
            name: value.name.as_str(),
            title: value.title.as_str(),
            description: value.description.as_deref(),
            icon: value.icon.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateTechnology> for UpdateTechnology<'a> {
    fn from(value: &'a DomainUpdateTechnology) -> Self {
        Self {
            name: value.name.as_str(),
            title: value.title.as_str(),
            description: value.description.as_deref(),
            icon: value.icon.as_deref(),
            updated_at: value.updated_at,
        }
    }
}
