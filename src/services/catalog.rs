use serde::{Deserialize, Serialize};

use crate::DEFAULT_LANG;
use crate::domain::catalog::{CatalogFilter, DEFAULT_CATALOG_LIMIT};
use crate::domain::category::Category;
use crate::domain::characteristic::Characteristic;
use crate::domain::color::ProductColorLink;
use crate::domain::document::Document;
use crate::domain::product::Product;
use crate::domain::technology::Technology;
use crate::pagination::CatalogPage;
use crate::repository::{CategoryReader, CollectionReader, ProductReader};
use crate::services::{ServiceError, ServiceResult};

/// Number of related products returned when the caller does not name a limit.
const DEFAULT_RELATED_LIMIT: i64 = 4;

/// Query parameters accepted by the storefront catalog listing.
///
/// Every field is optional; `category_id`/`subcategory_id` win over their
/// slug counterparts when both are present.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogRequest {
    pub category_id: Option<i32>,
    /// Category slug from the URL.
    pub category: Option<String>,
    pub subcategory_id: Option<i32>,
    /// Subcategory slug from the URL.
    pub subcategory: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub lang: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Resolve the raw request into the immutable filter driving both catalog
/// queries.
///
/// Slug resolution follows the storefront URL semantics:
/// - an unresolved slug marks the filter unsatisfiable (the catalog shows an
///   empty page rather than silently dropping the filter);
/// - a subcategory slug is first looked up under the resolved category; on a
///   miss the lookup is retried unscoped, and when the hit's actual parent
///   differs from the category filter already applied, the category filter
///   is replaced with the true parent.
pub fn resolve_catalog_filter<R>(repo: &R, request: &CatalogRequest) -> ServiceResult<CatalogFilter>
where
    R: CategoryReader + ?Sized,
{
    let lang = request
        .lang
        .clone()
        .unwrap_or_else(|| DEFAULT_LANG.to_string());

    let mut filter = CatalogFilter::new(&lang).window(
        request.limit.unwrap_or(DEFAULT_CATALOG_LIMIT),
        request.offset.unwrap_or(0),
    );

    if request.featured {
        filter = filter.featured_only();
    }

    let mut category_id = request.category_id;

    if category_id.is_none()
        && let Some(slug) = request.category.as_deref().filter(|slug| !slug.is_empty())
    {
        match repo
            .find_category_by_slug(slug, &lang)
            .map_err(ServiceError::from)?
        {
            Some(category) => category_id = Some(category.id),
            None => return Ok(filter.unsatisfiable()),
        }
    }

    let mut subcategory_id = request.subcategory_id;

    if subcategory_id.is_none()
        && let Some(slug) = request
            .subcategory
            .as_deref()
            .filter(|slug| !slug.is_empty())
    {
        let scoped = match category_id {
            Some(parent_id) => repo
                .find_child_category_by_slug(slug, &lang, parent_id)
                .map_err(ServiceError::from)?,
            None => None,
        };

        match scoped {
            Some(subcategory) => subcategory_id = Some(subcategory.id),
            None => {
                match repo
                    .find_category_by_slug(slug, &lang)
                    .map_err(ServiceError::from)?
                {
                    Some(subcategory) => {
                        // The URL named the wrong parent; trust the
                        // subcategory's own parent instead.
                        if let (Some(applied), Some(actual)) = (category_id, subcategory.parent_id)
                            && applied != actual
                        {
                            category_id = Some(actual);
                        }
                        subcategory_id = Some(subcategory.id);
                    }
                    None => return Ok(filter.unsatisfiable()),
                }
            }
        }
    }

    if let Some(category_id) = category_id {
        filter = filter.category(category_id);
    }

    if let Some(subcategory_id) = subcategory_id {
        filter = filter.subcategory(subcategory_id);
    }

    Ok(filter)
}

/// Load one page of the storefront catalog.
pub fn get_catalog_page<R>(repo: &R, request: CatalogRequest) -> ServiceResult<CatalogPage<Product>>
where
    R: CategoryReader + ProductReader + ?Sized,
{
    let filter = resolve_catalog_filter(repo, &request)?;

    let (total, items) = repo.list_catalog(&filter).map_err(ServiceError::from)?;

    Ok(CatalogPage::new(items, total, filter.limit, filter.offset))
}

/// Fully resolved product detail shown on the storefront product page.
#[derive(Debug, Serialize)]
pub struct ProductDetail {
    pub product: Product,
    pub category: Category,
    pub subcategory: Option<Category>,
    pub colors: Vec<ProductColorLink>,
    pub characteristics: Vec<Characteristic>,
    pub technologies: Vec<Technology>,
    pub documents: Vec<Document>,
}

/// Aggregate a product with all of its attachments.
///
/// Returns `None` when the product is absent, hidden, or written in another
/// language. Any failing sub-read fails the whole aggregate; there is no
/// partial result.
pub fn get_product_detail<R>(
    repo: &R,
    product_id: i32,
    lang: &str,
) -> ServiceResult<Option<ProductDetail>>
where
    R: ProductReader + CategoryReader + ?Sized,
{
    let Some(product) = repo
        .get_product_by_id(product_id)
        .map_err(ServiceError::from)?
    else {
        return Ok(None);
    };

    if product.lang != lang || !product.is_active {
        return Ok(None);
    }

    let category = repo
        .get_category_by_id(product.category_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let subcategory = match product.subcategory_id {
        Some(subcategory_id) => repo
            .get_category_by_id(subcategory_id)
            .map_err(ServiceError::from)?,
        None => None,
    };

    let colors = repo
        .list_product_colors(product.id)
        .map_err(ServiceError::from)?;
    let characteristics = repo
        .list_characteristics(product.id)
        .map_err(ServiceError::from)?;
    let technologies = repo
        .list_product_technologies(product.id)
        .map_err(ServiceError::from)?;
    let documents = repo
        .list_documents(product.id)
        .map_err(ServiceError::from)?;

    Ok(Some(ProductDetail {
        product,
        category,
        subcategory,
        colors,
        characteristics,
        technologies,
        documents,
    }))
}

/// Products promoted next to the current one, labeled with the collection
/// they come from.
#[derive(Debug, Serialize)]
pub struct RelatedProducts {
    pub collection_id: i32,
    pub collection_name: String,
    pub products: Vec<Product>,
}

/// Products of the current product's own collection.
pub fn get_related_products<R>(
    repo: &R,
    product_id: i32,
    lang: &str,
    limit: Option<i64>,
) -> ServiceResult<Option<RelatedProducts>>
where
    R: ProductReader + CollectionReader + ?Sized,
{
    related_from_collection(repo, product_id, lang, limit, |product| {
        product.collection_id
    })
}

/// Products of the collection referenced by the current product's
/// cross-promotion pointer.
pub fn get_cross_collection_products<R>(
    repo: &R,
    product_id: i32,
    lang: &str,
    limit: Option<i64>,
) -> ServiceResult<Option<RelatedProducts>>
where
    R: ProductReader + CollectionReader + ?Sized,
{
    related_from_collection(repo, product_id, lang, limit, |product| {
        product.cross_collection_id
    })
}

fn related_from_collection<R>(
    repo: &R,
    product_id: i32,
    lang: &str,
    limit: Option<i64>,
    pick_collection: impl Fn(&Product) -> Option<i32>,
) -> ServiceResult<Option<RelatedProducts>>
where
    R: ProductReader + CollectionReader + ?Sized,
{
    let product = repo
        .get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let Some(collection_id) = pick_collection(&product) else {
        return Ok(None);
    };

    let Some(collection) = repo
        .get_collection_by_id(collection_id)
        .map_err(ServiceError::from)?
    else {
        return Ok(None);
    };

    let filter = CatalogFilter::new(lang)
        .collection(collection_id)
        .excluding(product.id)
        .window(limit.unwrap_or(DEFAULT_RELATED_LIMIT), 0);

    let (_, products) = repo.list_catalog(&filter).map_err(ServiceError::from)?;

    Ok(Some(RelatedProducts {
        collection_id,
        collection_name: collection.name,
        products,
    }))
}
