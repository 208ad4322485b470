use mockall::mock;

use super::{
    CategoryReader, CategoryWriter, CollectionReader, CollectionWriter, ColorReader, ColorWriter,
    ContentReader, ContentWriter, ProductReader, ProductWriter, RepositoryResult,
    TechnologyReader, TechnologyWriter,
};
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

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
        fn find_category_by_slug(&self, slug: &str, lang: &str) -> RepositoryResult<Option<Category>>;
        fn find_child_category_by_slug(&self, slug: &str, lang: &str, parent_id: i32) -> RepositoryResult<Option<Category>>;
        fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<Vec<Category>>;
    }
}

mock! {
    pub CategoryWriter {}

    impl CategoryWriter for CategoryWriter {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn update_category(&self, category_id: i32, updates: &UpdateCategory) -> RepositoryResult<Category>;
        fn delete_category(&self, category_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
        fn list_catalog(&self, filter: &CatalogFilter) -> RepositoryResult<(usize, Vec<Product>)>;
        fn list_product_colors(&self, product_id: i32) -> RepositoryResult<Vec<ProductColorLink>>;
        fn list_characteristics(&self, product_id: i32) -> RepositoryResult<Vec<Characteristic>>;
        fn list_product_technologies(&self, product_id: i32) -> RepositoryResult<Vec<Technology>>;
        fn list_documents(&self, product_id: i32) -> RepositoryResult<Vec<Document>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
        fn replace_product_colors(&self, product_id: i32, links: &[NewProductColorLink]) -> RepositoryResult<()>;
        fn replace_characteristics(&self, product_id: i32, rows: &[NewCharacteristic]) -> RepositoryResult<()>;
        fn replace_product_technologies(&self, product_id: i32, technology_ids: &[i32]) -> RepositoryResult<()>;
        fn replace_documents(&self, product_id: i32, documents: &[NewDocument]) -> RepositoryResult<()>;
    }
}

mock! {
    pub ColorReader {}

    impl ColorReader for ColorReader {
        fn get_color_by_id(&self, id: i32) -> RepositoryResult<Option<Color>>;
        fn list_colors(&self) -> RepositoryResult<Vec<Color>>;
    }
}

mock! {
    pub ColorWriter {}

    impl ColorWriter for ColorWriter {
        fn create_color(&self, new_color: &NewColor) -> RepositoryResult<Color>;
        fn update_color(&self, color_id: i32, updates: &UpdateColor) -> RepositoryResult<Color>;
        fn delete_color(&self, color_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub TechnologyReader {}

    impl TechnologyReader for TechnologyReader {
        fn get_technology_by_id(&self, id: i32) -> RepositoryResult<Option<Technology>>;
        fn list_technologies(&self) -> RepositoryResult<Vec<Technology>>;
    }
}

mock! {
    pub TechnologyWriter {}

    impl TechnologyWriter for TechnologyWriter {
        fn create_technology(&self, new_technology: &NewTechnology) -> RepositoryResult<Technology>;
        fn update_technology(&self, technology_id: i32, updates: &UpdateTechnology) -> RepositoryResult<Technology>;
        fn delete_technology(&self, technology_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub CollectionReader {}

    impl CollectionReader for CollectionReader {
        fn get_collection_by_id(&self, id: i32) -> RepositoryResult<Option<Collection>>;
        fn find_collection_by_slug(&self, slug: &str) -> RepositoryResult<Option<Collection>>;
        fn list_collections(&self) -> RepositoryResult<Vec<Collection>>;
        fn get_collection_page(&self, collection_id: i32, lang: &str) -> RepositoryResult<Option<CollectionPage>>;
    }
}

mock! {
    pub CollectionWriter {}

    impl CollectionWriter for CollectionWriter {
        fn create_collection(&self, new_collection: &NewCollection) -> RepositoryResult<Collection>;
        fn update_collection(&self, collection_id: i32, updates: &UpdateCollection) -> RepositoryResult<Collection>;
        fn delete_collection(&self, collection_id: i32) -> RepositoryResult<()>;
        fn upsert_collection_page(&self, page: &UpsertCollectionPage) -> RepositoryResult<CollectionPage>;
        fn delete_collection_page(&self, collection_id: i32, lang: &str) -> RepositoryResult<()>;
    }
}

mock! {
    pub ContentReader {}

    impl ContentReader for ContentReader {
        fn get_hero_section(&self, lang: &str) -> RepositoryResult<Option<HeroSection>>;
        fn get_brand_hero_section(&self, lang: &str) -> RepositoryResult<Option<BrandHeroSection>>;
        fn list_brand_contents(&self, lang: &str) -> RepositoryResult<Vec<BrandContent>>;
        fn list_directions(&self, lang: &str) -> RepositoryResult<Vec<Direction>>;
    }
}

mock! {
    pub ContentWriter {}

    impl ContentWriter for ContentWriter {
        fn upsert_hero_section(&self, payload: &UpsertHeroSection) -> RepositoryResult<HeroSection>;
        fn upsert_brand_hero_section(&self, payload: &UpsertHeroSection) -> RepositoryResult<BrandHeroSection>;
        fn create_brand_content(&self, payload: &NewBrandContent) -> RepositoryResult<BrandContent>;
        fn update_brand_content(&self, content_id: i32, updates: &UpdateBrandContent) -> RepositoryResult<BrandContent>;
        fn delete_brand_content(&self, content_id: i32) -> RepositoryResult<()>;
        fn create_direction(&self, payload: &NewDirection) -> RepositoryResult<Direction>;
        fn update_direction(&self, direction_id: i32, updates: &UpdateDirection) -> RepositoryResult<Direction>;
        fn delete_direction(&self, direction_id: i32) -> RepositoryResult<()>;
    }
}
