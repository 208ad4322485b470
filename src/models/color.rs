use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::color::{
    Color as DomainColor, NewColor as DomainNewColor, UpdateColor as DomainUpdateColor,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::colors)]
pub struct Color {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub suffix: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::colors)]
pub struct NewColor<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub suffix: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::colors)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateColor<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub suffix: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

/// Join row attaching a color to a product.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product_colors)]
pub struct ProductColor {
    pub id: i32,
    pub product_id: i32,
    pub color_id: i32,
    pub link_to_product: Option<String>,
    pub position: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_colors)]
pub struct NewProductColor<'a> {
    pub product_id: i32,
    pub color_id: i32,
    pub link_to_product: Option<&'a str>,
    pub position: i32,
}

impl From<Color> for DomainColor {
    fn from(value: Color) -> Self {
        Self {
            id: value.id,
            name: value.name,
            code: value.code,
            suffix: value.suffix,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewColor> for NewColor<'a> {
    fn from(value: &'a DomainNewColor) -> Self {
        Self {
            name: value.name.as_str(),
            code: value.code.as_str(),
            suffix: value.suffix.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateColor> for UpdateColor<'a> {
    fn from(value: &'a DomainUpdateColor) -> Self {
        Self {
            name: value.name.as_str(),
            code: value.code.as_str(),
            suffix: value.suffix.as_deref(),
            updated_at: value.updated_at,
        }
    }
}
