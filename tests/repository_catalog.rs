use vitrina::domain::catalog::CatalogFilter;
use vitrina::domain::category::NewCategory;
use vitrina::domain::product::NewProduct;
use vitrina::repository::{CategoryWriter, DieselRepository, ProductReader, ProductWriter};

mod common;

fn seed_category(repo: &DieselRepository, name: &str, slug: &str, parent_id: Option<i32>) -> i32 {
    let mut new_category = NewCategory::new(name, slug, "ru");
    if let Some(parent_id) = parent_id {
        new_category = new_category.with_parent_id(parent_id);
    }
    repo.create_category(&new_category)
        .expect("create category")
        .id
}

fn seed_product(repo: &DieselRepository, article: &str, category_id: i32) -> i32 {
    let new_product = NewProduct::new(article, article, 1000, "RUB", category_id, "ru");
    repo.create_product(&new_product)
        .expect("create product")
        .id
}

#[test]
fn test_catalog_count_matches_list_filters() {
    let test_db = common::TestDb::new("test_catalog_count_matches_list_filters.db");
    let repo = DieselRepository::new(test_db.pool());

    let footwear = seed_category(&repo, "Footwear", "footwear", None);
    let workwear = seed_category(&repo, "Workwear", "workwear", None);

    for index in 0..3 {
        seed_product(&repo, &format!("FW-{index}"), footwear);
    }
    seed_product(&repo, "WW-0", workwear);

    // A product hidden from the storefront must not count.
    let hidden = NewProduct::new("Hidden", "FW-HIDDEN", 1000, "RUB", footwear, "ru").inactive();
    repo.create_product(&hidden).expect("create product");

    // Another language is invisible to this filter.
    let en_category = repo
        .create_category(&NewCategory::new("Footwear", "footwear", "en"))
        .expect("create category");
    repo.create_product(&NewProduct::new(
        "Boots", "FW-EN", 1000, "RUB", en_category.id, "en",
    ))
    .expect("create product");

    let filter = CatalogFilter::new("ru").category(footwear);
    let (total, items) = repo.list_catalog(&filter).expect("list catalog");

    assert_eq!(total, 3);
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|product| {
        product.category_id == footwear && product.lang == "ru" && product.is_active
    }));
    assert!(total >= items.len());
}

#[test]
fn test_catalog_orders_newest_first_with_id_tiebreak() {
    let test_db = common::TestDb::new("test_catalog_orders_newest_first.db");
    let repo = DieselRepository::new(test_db.pool());

    let category = seed_category(&repo, "Footwear", "footwear", None);

    let first = seed_product(&repo, "FW-1", category);
    let second = seed_product(&repo, "FW-2", category);
    let third = seed_product(&repo, "FW-3", category);

    let filter = CatalogFilter::new("ru");
    let (_, items) = repo.list_catalog(&filter).expect("list catalog");

    // All rows share one CURRENT_TIMESTAMP, so the id tiebreak decides.
    let ids: Vec<i32> = items.iter().map(|product| product.id).collect();
    assert_eq!(ids, vec![third, second, first]);
}

#[test]
fn test_catalog_pagination_boundary() {
    let test_db = common::TestDb::new("test_catalog_pagination_boundary.db");
    let repo = DieselRepository::new(test_db.pool());

    let category = seed_category(&repo, "Footwear", "footwear", None);
    for index in 0..10 {
        seed_product(&repo, &format!("FW-{index}"), category);
    }

    let first_page = CatalogFilter::new("ru").window(6, 0);
    let (total, items) = repo.list_catalog(&first_page).expect("list catalog");
    assert_eq!(total, 10);
    assert_eq!(items.len(), 6);

    let last_page = CatalogFilter::new("ru").window(6, 6);
    let (total, items) = repo.list_catalog(&last_page).expect("list catalog");
    assert_eq!(total, 10);
    assert_eq!(items.len(), 4);
}

#[test]
fn test_catalog_featured_and_subcategory_filters() {
    let test_db = common::TestDb::new("test_catalog_featured_subcategory.db");
    let repo = DieselRepository::new(test_db.pool());

    let footwear = seed_category(&repo, "Footwear", "footwear", None);
    let boots = seed_category(&repo, "Boots", "boots", Some(footwear));

    let featured = NewProduct::new("Boots", "FW-1", 1000, "RUB", footwear, "ru")
        .with_subcategory(boots)
        .featured();
    let featured_id = repo.create_product(&featured).expect("create product").id;

    seed_product(&repo, "FW-2", footwear);

    let filter = CatalogFilter::new("ru").category(footwear).featured_only();
    let (total, items) = repo.list_catalog(&filter).expect("list catalog");
    assert_eq!(total, 1);
    assert_eq!(items[0].id, featured_id);

    let filter = CatalogFilter::new("ru").category(footwear).subcategory(boots);
    let (total, items) = repo.list_catalog(&filter).expect("list catalog");
    assert_eq!(total, 1);
    assert_eq!(items[0].subcategory_id, Some(boots));
}

#[test]
fn test_unsatisfiable_filter_returns_empty_page() {
    let test_db = common::TestDb::new("test_unsatisfiable_filter.db");
    let repo = DieselRepository::new(test_db.pool());

    let category = seed_category(&repo, "Footwear", "footwear", None);
    seed_product(&repo, "FW-1", category);

    let filter = CatalogFilter::new("ru").unsatisfiable();
    let (total, items) = repo.list_catalog(&filter).expect("list catalog");

    assert_eq!(total, 0);
    assert!(items.is_empty());
}

#[test]
fn test_admin_listing_includes_inactive() {
    use vitrina::domain::product::ProductListQuery;

    let test_db = common::TestDb::new("test_admin_listing_includes_inactive.db");
    let repo = DieselRepository::new(test_db.pool());

    let category = seed_category(&repo, "Footwear", "footwear", None);
    seed_product(&repo, "FW-1", category);
    repo.create_product(&NewProduct::new("Hidden", "FW-2", 1000, "RUB", category, "ru").inactive())
        .expect("create product");

    let (total_active, _) = repo
        .list_products(ProductListQuery::new())
        .expect("list products");
    assert_eq!(total_active, 1);

    let (total_all, items) = repo
        .list_products(ProductListQuery::new().include_inactive())
        .expect("list products");
    assert_eq!(total_all, 2);
    assert_eq!(items.len(), 2);

    let (total_search, items) = repo
        .list_products(ProductListQuery::new().include_inactive().search("FW-2"))
        .expect("list products");
    assert_eq!(total_search, 1);
    assert_eq!(items[0].article, "FW-2");
}
