use serde::Deserialize;

use crate::domain::product::{NewProduct, Product, ProductListQuery};
use crate::forms::products::{
    AddProductForm, CharacteristicsForm, DocumentsForm, EditProductForm, ProductColorsForm,
    ProductTechnologiesForm, UploadProductsForm,
};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{CategoryReader, ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the admin product listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsAdminQuery {
    /// Optional name or article search term.
    pub search: Option<String>,
    /// Optional language filter.
    pub lang: Option<String>,
    /// Optional root category filter.
    pub category_id: Option<i32>,
    /// Page requested by the UI (1-based).
    pub page: Option<usize>,
}

/// Admin listing: every language, inactive rows included.
pub fn load_products_page<R>(
    repo: &R,
    query: ProductsAdminQuery,
) -> ServiceResult<Paginated<Product>>
where
    R: ProductReader + ?Sized,
{
    let ProductsAdminQuery {
        search,
        lang,
        category_id,
        page,
    } = query;

    let page = page.unwrap_or(1).max(1);
    let mut list_query = ProductListQuery::new()
        .include_inactive()
        .paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(term) = search.as_ref().filter(|term| !term.trim().is_empty()) {
        list_query = list_query.search(term.trim());
    }

    if let Some(lang) = lang {
        list_query = list_query.lang(lang);
    }

    if let Some(category_id) = category_id {
        list_query = list_query.category(category_id);
    }

    let (total, items) = repo.list_products(list_query).map_err(ServiceError::from)?;
    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);

    Ok(Paginated::new(items, page, total_pages))
}

/// Admin read of one product, inactive rows included.
pub fn load_product<R>(repo: &R, product_id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a new product together with its image gallery.
pub fn create_product<R>(repo: &R, form: AddProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let new_product = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_product(&new_product).map_err(ServiceError::from)
}

/// Replaces an existing product's fields and gallery wholesale.
pub fn modify_product<R>(repo: &R, product_id: i32, form: EditProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let updates = form
        .into_update_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_product(product_id, &updates)
        .map_err(ServiceError::from)
}

/// Deletes a product and all of its attachments.
pub fn remove_product<R>(repo: &R, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(product_id).map_err(ServiceError::from)
}

/// Replaces the colors attached to a product.
///
/// Overwrite semantics: an empty list detaches every color.
pub fn replace_product_colors<R>(
    repo: &R,
    product_id: i32,
    form: ProductColorsForm,
) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    let links = form.into_links();

    repo.replace_product_colors(product_id, &links)
        .map_err(ServiceError::from)
}

/// Replaces the specification rows attached to a product.
pub fn replace_characteristics<R>(
    repo: &R,
    product_id: i32,
    form: CharacteristicsForm,
) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    let rows = form
        .into_rows()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.replace_characteristics(product_id, &rows)
        .map_err(ServiceError::from)
}

/// Replaces the technologies attached to a product.
pub fn replace_product_technologies<R>(
    repo: &R,
    product_id: i32,
    form: ProductTechnologiesForm,
) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.replace_product_technologies(product_id, &form.technology_ids)
        .map_err(ServiceError::from)
}

/// Replaces the documents attached to a product.
pub fn replace_documents<R>(repo: &R, product_id: i32, form: DocumentsForm) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    let rows = form
        .into_rows()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.replace_documents(product_id, &rows)
        .map_err(ServiceError::from)
}

/// Imports products from an uploaded CSV file.
///
/// Category slugs are resolved per row against the row's language; an
/// unknown slug fails the import with the offending row number.
pub fn import_products<R>(repo: &R, form: UploadProductsForm) -> ServiceResult<usize>
where
    R: ProductWriter + CategoryReader + ?Sized,
{
    let rows = form
        .into_rows()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let mut created = 0usize;

    for (index, row) in rows.into_iter().enumerate() {
        let row_number = index + 2; // account for the header row

        let category = repo
            .find_category_by_slug(&row.category_slug, &row.lang)
            .map_err(ServiceError::from)?
            .ok_or_else(|| {
                ServiceError::Form(format!(
                    "row {row_number}: unknown category `{}`",
                    row.category_slug
                ))
            })?;

        let mut new_product = NewProduct::new(
            row.name,
            row.article,
            row.price_cents,
            row.currency,
            category.id,
            row.lang,
        );

        if let Some(description) = row.description {
            new_product = new_product.with_description(description);
        }

        repo.create_product(&new_product)
            .map_err(ServiceError::from)?;
        created += 1;
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::sync::{Arc, Mutex};

    use crate::domain::category::{Category, CategoryListQuery};
    use crate::repository::RepositoryResult;
    use crate::repository::mock::{MockCategoryReader, MockProductReader, MockProductWriter};

    fn datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn sample_product(id: i32, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            article: format!("P-{id}"),
            description: None,
            price_cents: 1000,
            currency: "RUB".to_string(),
            category_id: 1,
            subcategory_id: None,
            is_featured: false,
            is_active: true,
            lang: "ru".to_string(),
            collection_id: None,
            cross_collection_id: None,
            images: Vec::new(),
            created_at: datetime(),
            updated_at: datetime(),
        }
    }

    fn sample_category(id: i32, slug: &str) -> Category {
        Category {
            id,
            parent_id: None,
            name: slug.to_string(),
            slug: slug.to_string(),
            position: 0,
            lang: "ru".to_string(),
            created_at: datetime(),
            updated_at: datetime(),
        }
    }

    /// Facade combining the writer and category reader mocks for imports.
    struct FakeRepo {
        writer: MockProductWriter,
        categories: MockCategoryReader,
    }

    impl FakeRepo {
        fn new() -> Self {
            Self {
                writer: MockProductWriter::new(),
                categories: MockCategoryReader::new(),
            }
        }
    }

    impl ProductWriter for FakeRepo {
        fn create_product(
            &self,
            new_product: &crate::domain::product::NewProduct,
        ) -> RepositoryResult<Product> {
            self.writer.create_product(new_product)
        }

        fn update_product(
            &self,
            product_id: i32,
            updates: &crate::domain::product::UpdateProduct,
        ) -> RepositoryResult<Product> {
            self.writer.update_product(product_id, updates)
        }

        fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
            self.writer.delete_product(product_id)
        }

        fn replace_product_colors(
            &self,
            product_id: i32,
            links: &[crate::domain::color::NewProductColorLink],
        ) -> RepositoryResult<()> {
            self.writer.replace_product_colors(product_id, links)
        }

        fn replace_characteristics(
            &self,
            product_id: i32,
            rows: &[crate::domain::characteristic::NewCharacteristic],
        ) -> RepositoryResult<()> {
            self.writer.replace_characteristics(product_id, rows)
        }

        fn replace_product_technologies(
            &self,
            product_id: i32,
            technology_ids: &[i32],
        ) -> RepositoryResult<()> {
            self.writer
                .replace_product_technologies(product_id, technology_ids)
        }

        fn replace_documents(
            &self,
            product_id: i32,
            documents: &[crate::domain::document::NewDocument],
        ) -> RepositoryResult<()> {
            self.writer.replace_documents(product_id, documents)
        }
    }

    impl CategoryReader for FakeRepo {
        fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>> {
            self.categories.get_category_by_id(id)
        }

        fn find_category_by_slug(
            &self,
            slug: &str,
            lang: &str,
        ) -> RepositoryResult<Option<Category>> {
            self.categories.find_category_by_slug(slug, lang)
        }

        fn find_child_category_by_slug(
            &self,
            slug: &str,
            lang: &str,
            parent_id: i32,
        ) -> RepositoryResult<Option<Category>> {
            self.categories
                .find_child_category_by_slug(slug, lang, parent_id)
        }

        fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<Vec<Category>> {
            self.categories.list_categories(query)
        }
    }

    #[test]
    fn load_products_page_includes_inactive_rows() {
        let mut repo = MockProductReader::new();

        repo.expect_list_products()
            .times(1)
            .withf(|query| {
                assert!(query.include_inactive);
                assert_eq!(query.search.as_deref(), Some("boots"));
                match &query.pagination {
                    Some(pagination) => {
                        assert_eq!(pagination.page, 2);
                        assert_eq!(pagination.per_page, DEFAULT_ITEMS_PER_PAGE);
                    }
                    None => panic!("expected pagination to be set"),
                }
                true
            })
            .returning(|_| Ok((41, vec![sample_product(1, "Boots")])));

        let query = ProductsAdminQuery {
            search: Some(" boots ".to_string()),
            lang: None,
            category_id: None,
            page: Some(2),
        };

        let page = load_products_page(&repo, query).expect("expected success");

        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn create_product_persists_entry() {
        let mut repo = MockProductWriter::new();

        repo.expect_create_product()
            .times(1)
            .withf(|new_product| {
                assert_eq!(new_product.name, "Boots");
                assert_eq!(new_product.article, "BT-1");
                assert_eq!(new_product.lang, "ru");
                true
            })
            .returning(|_| Ok(sample_product(10, "Boots")));

        let form = AddProductForm {
            name: "Boots".to_string(),
            article: "bt-1".to_string(),
            description: None,
            price_cents: 12990,
            currency: "RUB".to_string(),
            category_id: 1,
            subcategory_id: None,
            is_featured: false,
            is_active: true,
            lang: "ru".to_string(),
            collection_id: None,
            cross_collection_id: None,
            images: Vec::new(),
        };

        let created = create_product(&repo, form).expect("expected success");

        assert_eq!(created.id, 10);
    }

    #[test]
    fn replace_product_colors_submits_empty_list() {
        let mut repo = MockProductWriter::new();

        // Overwrite semantics: an empty submission must still reach the
        // repository and clear the attachments there.
        repo.expect_replace_product_colors()
            .times(1)
            .withf(|product_id, links| {
                assert_eq!(*product_id, 5);
                assert!(links.is_empty());
                true
            })
            .returning(|_, _| Ok(()));

        let form = ProductColorsForm { colors: Vec::new() };

        let result = replace_product_colors(&repo, 5, form);

        assert!(result.is_ok());
    }

    #[test]
    fn import_products_creates_each_row() {
        let mut repo = FakeRepo::new();

        repo.categories
            .expect_find_category_by_slug()
            .times(2)
            .returning(|slug, _| Ok(Some(sample_category(3, slug))));

        let created_names = Arc::new(Mutex::new(Vec::new()));
        let created_names_clone = created_names.clone();

        repo.writer
            .expect_create_product()
            .times(2)
            .returning(move |new_product| {
                created_names_clone
                    .lock()
                    .unwrap()
                    .push(new_product.name.clone());
                Ok(sample_product(1, &new_product.name))
            });

        let csv = b"name,article,price,lang,category\n\
Boots,BT-1,129.90,ru,footwear\n\
Gloves,GL-2,45,ru,footwear\n"
            .to_vec();
        let form = UploadProductsForm::new(Some("products.csv".into()), csv);

        let created = import_products(&repo, form).expect("expected success");

        assert_eq!(created, 2);
        assert_eq!(
            created_names.lock().unwrap().as_slice(),
            ["Boots".to_string(), "Gloves".to_string()]
        );
    }

    #[test]
    fn import_products_rejects_unknown_category() {
        let mut repo = FakeRepo::new();

        repo.categories
            .expect_find_category_by_slug()
            .times(1)
            .returning(|_, _| Ok(None));

        let csv = b"name,article,price,lang,category\nBoots,BT-1,10,ru,no-such\n".to_vec();
        let form = UploadProductsForm::new(None, csv);

        let result = import_products(&repo, form);

        assert!(
            matches!(result, Err(ServiceError::Form(message)) if message.contains("no-such"))
        );
    }
}
