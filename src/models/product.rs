use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductImage as DomainProductImage,
    UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub article: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub currency: String,
    pub category_id: i32,
    pub subcategory_id: Option<i32>,
    pub is_featured: bool,
    pub is_active: bool,
    pub lang: String,
    pub collection_id: Option<i32>,
    pub cross_collection_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub article: &'a str,
    pub description: Option<&'a str>,
    pub price_cents: i64,
    pub currency: &'a str,
    pub category_id: i32,
    pub subcategory_id: Option<i32>,
    pub is_featured: bool,
    pub is_active: bool,
    pub lang: &'a str,
    pub collection_id: Option<i32>,
    pub cross_collection_id: Option<i32>,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub article: &'a str,
    pub description: Option<&'a str>,
    pub price_cents: i64,
    pub currency: &'a str,
    pub category_id: i32,
    pub subcategory_id: Option<i32>,
    pub is_featured: bool,
    pub is_active: bool,
    pub collection_id: Option<i32>,
    pub cross_collection_id: Option<i32>,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::product_images)]
pub struct ProductImage {
    pub id: i32,
    pub product_id: i32,
    pub url: String,
    pub color_id: Option<i32>,
    pub position: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_images)]
pub struct NewProductImage<'a> {
    pub product_id: i32,
    pub url: &'a str,
    pub color_id: Option<i32>,
    pub position: i32,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            article: value.article,
            description: value.description,
            price_cents: value.price_cents,
            currency: value.currency,
            category_id: value.category_id,
            subcategory_id: value.subcategory_id,
            is_featured: value.is_featured,
            is_active: value.is_active,
            lang: value.lang,
            collection_id: value.collection_id,
            cross_collection_id: value.cross_collection_id,
            images: Vec::new(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<ProductImage> for DomainProductImage {
    fn from(value: ProductImage) -> Self {
        Self {
            url: value.url,
            color_id: value.color_id,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            name: value.name.as_str(),
            article: value.article.as_str(),
            description: value.description.as_deref(),
            price_cents: value.price_cents,
            currency: value.currency.as_str(),
            category_id: value.category_id,
            subcategory_id: value.subcategory_id,
            is_featured: value.is_featured,
            is_active: value.is_active,
            lang: value.lang.as_str(),
            collection_id: value.collection_id,
            cross_collection_id: value.cross_collection_id,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainUpdateProduct) -> Self {
        Self {
            name: value.name.as_str(),
            article: value.article.as_str(),
            description: value.description.as_deref(),
            price_cents: value.price_cents,
            currency: value.currency.as_str(),
            category_id: value.category_id,
            subcategory_id: value.subcategory_id,
            is_featured: value.is_featured,
            is_active: value.is_active,
            collection_id: value.collection_id,
            cross_collection_id: value.cross_collection_id,
            updated_at: value.updated_at,
        }
    }
}
