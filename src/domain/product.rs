use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Domain representation of a catalog product in one language.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Stock keeping unit identifier shown to customers.
    pub article: String,
    /// Optional longer description shown on the detail page.
    pub description: Option<String>,
    /// Price represented in the smallest currency unit.
    pub price_cents: i64,
    /// ISO 4217 currency code associated with the product price.
    pub currency: String,
    /// Root category the product belongs to.
    pub category_id: i32,
    /// Optional child category within `category_id`.
    pub subcategory_id: Option<i32>,
    /// Whether the product is surfaced in featured selections.
    pub is_featured: bool,
    /// Whether the product is visible on the storefront.
    pub is_active: bool,
    /// Language this product row is written in.
    pub lang: String,
    /// Optional primary collection grouping.
    pub collection_id: Option<i32>,
    /// Optional collection whose products are cross-promoted on this one.
    pub cross_collection_id: Option<i32>,
    /// Ordered image gallery.
    pub images: Vec<ProductImage>,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// One entry of a product's ordered image gallery.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProductImage {
    /// Image location.
    pub url: String,
    /// Optional color this image belongs to.
    pub color_id: Option<i32>,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
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
    /// Ordered gallery stored alongside the product row.
    pub images: Vec<ProductImage>,
    pub updated_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new product payload with the supplied details and current timestamp.
    pub fn new(
        name: impl Into<String>,
        article: impl Into<String>,
        price_cents: i64,
        currency: impl Into<String>,
        category_id: i32,
        lang: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            article: article.into(),
            description: None,
            price_cents,
            currency: currency.into(),
            category_id,
            subcategory_id: None,
            is_featured: false,
            is_active: true,
            lang: lang.into(),
            collection_id: None,
            cross_collection_id: None,
            images: Vec::new(),
            updated_at: Local::now().naive_utc(),
        }
    }

    /// Attach a descriptive text to the product payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Place the product into a child category of `category_id`.
    pub fn with_subcategory(mut self, subcategory_id: i32) -> Self {
        self.subcategory_id = Some(subcategory_id);
        self
    }

    /// Group the product under a collection.
    pub fn with_collection(mut self, collection_id: i32) -> Self {
        self.collection_id = Some(collection_id);
        self
    }

    /// Cross-promote products of another collection on this product.
    pub fn with_cross_collection(mut self, collection_id: i32) -> Self {
        self.cross_collection_id = Some(collection_id);
        self
    }

    /// Surface the product in featured selections.
    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    /// Keep the product hidden from the storefront.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Attach the ordered image gallery.
    pub fn with_images(mut self, images: Vec<ProductImage>) -> Self {
        self.images = images;
        self
    }
}

/// Full replacement data applied when updating an existing product.
///
/// Admin edits resubmit the whole entity, so every field carries the value
/// that should be stored, not an optional patch.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub name: String,
    pub article: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub currency: String,
    pub category_id: i32,
    pub subcategory_id: Option<i32>,
    pub is_featured: bool,
    pub is_active: bool,
    pub collection_id: Option<i32>,
    pub cross_collection_id: Option<i32>,
    /// Replacement gallery; an empty list removes all images.
    pub images: Vec<ProductImage>,
    pub updated_at: NaiveDateTime,
}

impl UpdateProduct {
    /// Build an update payload with the supplied values and current timestamp.
    pub fn new(
        name: impl Into<String>,
        article: impl Into<String>,
        price_cents: i64,
        currency: impl Into<String>,
        category_id: i32,
    ) -> Self {
        Self {
            name: name.into(),
            article: article.into(),
            description: None,
            price_cents,
            currency: currency.into(),
            category_id,
            subcategory_id: None,
            is_featured: false,
            is_active: true,
            collection_id: None,
            cross_collection_id: None,
            images: Vec::new(),
            updated_at: Local::now().naive_utc(),
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_subcategory(mut self, subcategory_id: Option<i32>) -> Self {
        self.subcategory_id = subcategory_id;
        self
    }

    pub fn with_collection(mut self, collection_id: Option<i32>) -> Self {
        self.collection_id = collection_id;
        self
    }

    pub fn with_cross_collection(mut self, collection_id: Option<i32>) -> Self {
        self.cross_collection_id = collection_id;
        self
    }

    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn with_images(mut self, images: Vec<ProductImage>) -> Self {
        self.images = images;
        self
    }
}

/// Query definition used by the admin product listing.
#[derive(Debug, Clone)]
pub struct ProductListQuery {
    /// Optional language filter.
    pub lang: Option<String>,
    /// Optional name or article search term.
    pub search: Option<String>,
    /// Optional root category filter.
    pub category_id: Option<i32>,
    /// Whether inactive products should be included in the results.
    pub include_inactive: bool,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl Default for ProductListQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductListQuery {
    /// Construct a query that targets every product.
    pub fn new() -> Self {
        Self {
            lang: None,
            search: None,
            category_id: None,
            include_inactive: false,
            pagination: None,
        }
    }

    /// Restrict the results to one language.
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Filter the results by a search term applied to the name or article.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Restrict the results to one root category.
    pub fn category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Include inactive products in the results.
    pub fn include_inactive(mut self) -> Self {
        self.include_inactive = true;
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
