use crate::db::{DbConnection, DbPool};
use crate::domain::catalog::CatalogFilter;
use crate::domain::category::{Category, CategoryListQuery, NewCategory, UpdateCategory};
use crate::domain::characteristic::{Characteristic, NewCharacteristic};
use crate::domain::collection::{Collection, NewCollection, UpdateCollection};
use crate::domain::collection_page::{CollectionPage, UpsertCollectionPage};
use crate::domain::color::{Color, NewColor, NewProductColorLink, ProductColorLink, UpdateColor};
use crate::domain::content::{
    BrandContent, BrandHeroSection, Direction, HeroSection, NewBrandContent, NewDirection,
    UpdateBrandContent, UpdateDirection, UpsertHeroSection,
};
use crate::domain::document::{Document, NewDocument};
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};
use crate::domain::technology::{NewTechnology, Technology, UpdateTechnology};

pub mod errors;

mod category;
mod collection;
mod color;
mod content;
mod product;
mod technology;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

/// Diesel-backed repository implementation that wraps an r2d2 pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over category records.
pub trait CategoryReader {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
    /// Look up a category by `(slug, lang)`.
    fn find_category_by_slug(&self, slug: &str, lang: &str) -> RepositoryResult<Option<Category>>;
    /// Look up a category by `(slug, lang)` scoped to one parent.
    fn find_child_category_by_slug(
        &self,
        slug: &str,
        lang: &str,
        parent_id: i32,
    ) -> RepositoryResult<Option<Category>>;
    fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<Vec<Category>>;
}

/// Write operations over category records.
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category>;
    fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over products and their attachments.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    /// Admin listing with search and pagination.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    /// Storefront listing; count and rows are derived from the same filter.
    fn list_catalog(&self, filter: &CatalogFilter) -> RepositoryResult<(usize, Vec<Product>)>;
    fn list_product_colors(&self, product_id: i32) -> RepositoryResult<Vec<ProductColorLink>>;
    fn list_characteristics(&self, product_id: i32) -> RepositoryResult<Vec<Characteristic>>;
    fn list_product_technologies(&self, product_id: i32) -> RepositoryResult<Vec<Technology>>;
    fn list_documents(&self, product_id: i32) -> RepositoryResult<Vec<Document>>;
}

/// Write operations over products and their attachments.
///
/// The `replace_*` methods implement the documented overwrite semantics:
/// existing attachments of that kind are removed and the submitted set is
/// inserted, all inside one transaction.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    fn replace_product_colors(
        &self,
        product_id: i32,
        links: &[NewProductColorLink],
    ) -> RepositoryResult<()>;
    fn replace_characteristics(
        &self,
        product_id: i32,
        rows: &[NewCharacteristic],
    ) -> RepositoryResult<()>;
    fn replace_product_technologies(
        &self,
        product_id: i32,
        technology_ids: &[i32],
    ) -> RepositoryResult<()>;
    fn replace_documents(&self, product_id: i32, documents: &[NewDocument])
    -> RepositoryResult<()>;
}

/// Read-only operations over color records.
pub trait ColorReader {
    fn get_color_by_id(&self, id: i32) -> RepositoryResult<Option<Color>>;
    fn list_colors(&self) -> RepositoryResult<Vec<Color>>;
}

/// Write operations over color records.
pub trait ColorWriter {
    fn create_color(&self, new_color: &NewColor) -> RepositoryResult<Color>;
    fn update_color(&self, color_id: i32, updates: &UpdateColor) -> RepositoryResult<Color>;
    fn delete_color(&self, color_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over technology records.
pub trait TechnologyReader {
    fn get_technology_by_id(&self, id: i32) -> RepositoryResult<Option<Technology>>;
    fn list_technologies(&self) -> RepositoryResult<Vec<Technology>>;
}

/// Write operations over technology records.
pub trait TechnologyWriter {
    fn create_technology(&self, new_technology: &NewTechnology) -> RepositoryResult<Technology>;
    fn update_technology(
        &self,
        technology_id: i32,
        updates: &UpdateTechnology,
    ) -> RepositoryResult<Technology>;
    fn delete_technology(&self, technology_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over collections and their per-language pages.
pub trait CollectionReader {
    fn get_collection_by_id(&self, id: i32) -> RepositoryResult<Option<Collection>>;
    fn find_collection_by_slug(&self, slug: &str) -> RepositoryResult<Option<Collection>>;
    /// Collections ordered newest first.
    fn list_collections(&self) -> RepositoryResult<Vec<Collection>>;
    fn get_collection_page(
        &self,
        collection_id: i32,
        lang: &str,
    ) -> RepositoryResult<Option<CollectionPage>>;
}

/// Write operations over collections and their per-language pages.
pub trait CollectionWriter {
    fn create_collection(&self, new_collection: &NewCollection) -> RepositoryResult<Collection>;
    fn update_collection(
        &self,
        collection_id: i32,
        updates: &UpdateCollection,
    ) -> RepositoryResult<Collection>;
    fn delete_collection(&self, collection_id: i32) -> RepositoryResult<()>;
    fn upsert_collection_page(
        &self,
        page: &UpsertCollectionPage,
    ) -> RepositoryResult<CollectionPage>;
    fn delete_collection_page(&self, collection_id: i32, lang: &str) -> RepositoryResult<()>;
}

/// Read-only operations over static page content.
pub trait ContentReader {
    fn get_hero_section(&self, lang: &str) -> RepositoryResult<Option<HeroSection>>;
    fn get_brand_hero_section(&self, lang: &str) -> RepositoryResult<Option<BrandHeroSection>>;
    fn list_brand_contents(&self, lang: &str) -> RepositoryResult<Vec<BrandContent>>;
    fn list_directions(&self, lang: &str) -> RepositoryResult<Vec<Direction>>;
}

/// Write operations over static page content.
pub trait ContentWriter {
    fn upsert_hero_section(&self, payload: &UpsertHeroSection) -> RepositoryResult<HeroSection>;
    fn upsert_brand_hero_section(
        &self,
        payload: &UpsertHeroSection,
    ) -> RepositoryResult<BrandHeroSection>;
    fn create_brand_content(&self, payload: &NewBrandContent) -> RepositoryResult<BrandContent>;
    fn update_brand_content(
        &self,
        content_id: i32,
        updates: &UpdateBrandContent,
    ) -> RepositoryResult<BrandContent>;
    fn delete_brand_content(&self, content_id: i32) -> RepositoryResult<()>;
    fn create_direction(&self, payload: &NewDirection) -> RepositoryResult<Direction>;
    fn update_direction(
        &self,
        direction_id: i32,
        updates: &UpdateDirection,
    ) -> RepositoryResult<Direction>;
    fn delete_direction(&self, direction_id: i32) -> RepositoryResult<()>;
}
