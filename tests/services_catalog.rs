use vitrina::domain::category::NewCategory;
use vitrina::domain::product::NewProduct;
use vitrina::repository::{CategoryWriter, DieselRepository, ProductWriter};
use vitrina::services::catalog::{self, CatalogRequest};

mod common;

fn seed_category(repo: &DieselRepository, slug: &str, parent_id: Option<i32>) -> i32 {
    let mut new_category = NewCategory::new(slug, slug, "ru");
    if let Some(parent_id) = parent_id {
        new_category = new_category.with_parent_id(parent_id);
    }
    repo.create_category(&new_category)
        .expect("create category")
        .id
}

#[test]
fn subcategory_fallback_self_corrects_the_category() {
    let test_db = common::TestDb::new("service_subcategory_fallback.db");
    let repo = DieselRepository::new(test_db.pool());

    let footwear = seed_category(&repo, "footwear", None);
    let workwear = seed_category(&repo, "workwear", None);
    let gloves = seed_category(&repo, "gloves", Some(workwear));

    let in_gloves = repo
        .create_product(
            &NewProduct::new("Gloves", "GL-1", 1000, "RUB", workwear, "ru")
                .with_subcategory(gloves),
        )
        .expect("create product");
    repo.create_product(&NewProduct::new("Boots", "BT-1", 1000, "RUB", footwear, "ru"))
        .expect("create product");

    // The URL claims the subcategory lives under footwear; it actually
    // belongs to workwear. The resolver must still find its products.
    let request = CatalogRequest {
        category: Some("footwear".to_string()),
        subcategory: Some("gloves".to_string()),
        ..CatalogRequest::default()
    };

    let page = catalog::get_catalog_page(&repo, request).expect("expected success");

    assert_eq!(page.total, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, in_gloves.id);
    assert_eq!(page.items[0].category_id, workwear);
}

#[test]
fn unresolved_slug_returns_empty_page() {
    let test_db = common::TestDb::new("service_unresolved_slug.db");
    let repo = DieselRepository::new(test_db.pool());

    let footwear = seed_category(&repo, "footwear", None);
    repo.create_product(&NewProduct::new("Boots", "BT-1", 1000, "RUB", footwear, "ru"))
        .expect("create product");

    let request = CatalogRequest {
        category: Some("no-such-category".to_string()),
        ..CatalogRequest::default()
    };

    let page = catalog::get_catalog_page(&repo, request).expect("expected success");

    assert_eq!(page.total, 0);
    assert!(page.items.is_empty());
    assert!(!page.has_more);
}

#[test]
fn catalog_page_has_more_boundary() {
    let test_db = common::TestDb::new("service_has_more_boundary.db");
    let repo = DieselRepository::new(test_db.pool());

    let footwear = seed_category(&repo, "footwear", None);
    for index in 0..10 {
        repo.create_product(&NewProduct::new(
            format!("Product {index}"),
            format!("FW-{index}"),
            1000,
            "RUB",
            footwear,
            "ru",
        ))
        .expect("create product");
    }

    let request = CatalogRequest {
        limit: Some(6),
        offset: Some(0),
        ..CatalogRequest::default()
    };
    let page = catalog::get_catalog_page(&repo, request).expect("expected success");
    assert_eq!(page.items.len(), 6);
    assert_eq!(page.page, 1);
    assert!(page.has_more);

    let request = CatalogRequest {
        limit: Some(6),
        offset: Some(6),
        ..CatalogRequest::default()
    };
    let page = catalog::get_catalog_page(&repo, request).expect("expected success");
    assert_eq!(page.items.len(), 4);
    assert_eq!(page.page, 2);
    assert!(!page.has_more);
}

#[test]
fn product_detail_aggregates_against_real_rows() {
    use vitrina::domain::characteristic::NewCharacteristic;
    use vitrina::domain::color::{NewColor, NewProductColorLink};
    use vitrina::repository::ColorWriter;

    let test_db = common::TestDb::new("service_product_detail.db");
    let repo = DieselRepository::new(test_db.pool());

    let footwear = seed_category(&repo, "footwear", None);
    let boots = seed_category(&repo, "boots", Some(footwear));

    let product = repo
        .create_product(
            &NewProduct::new("Boots", "BT-1", 1000, "RUB", footwear, "ru").with_subcategory(boots),
        )
        .expect("create product");

    let black = repo
        .create_color(&NewColor::new("Black", "#000000"))
        .expect("create color");
    repo.replace_product_colors(product.id, &[NewProductColorLink::new(black.id)])
        .expect("attach color");
    repo.replace_characteristics(product.id, &[NewCharacteristic::new("Material", "Leather")])
        .expect("attach characteristic");

    let detail = catalog::get_product_detail(&repo, product.id, "ru")
        .expect("expected success")
        .expect("expected a detail");

    assert_eq!(detail.category.id, footwear);
    assert_eq!(detail.subcategory.as_ref().map(|c| c.id), Some(boots));
    assert_eq!(detail.colors.len(), 1);
    assert_eq!(detail.characteristics.len(), 1);

    // Other languages see nothing.
    let detail = catalog::get_product_detail(&repo, product.id, "en").expect("expected success");
    assert!(detail.is_none());
}
