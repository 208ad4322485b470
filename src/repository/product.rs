use std::collections::HashMap;

use diesel::dsl::{exists, select};
use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};

use crate::domain::catalog::CatalogFilter;
use crate::domain::characteristic::{
    Characteristic as DomainCharacteristic, NewCharacteristic as DomainNewCharacteristic,
};
use crate::domain::color::{NewProductColorLink, ProductColorLink};
use crate::domain::document::{Document as DomainDocument, NewDocument as DomainNewDocument};
use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductImage as DomainProductImage,
    ProductListQuery, UpdateProduct as DomainUpdateProduct,
};
use crate::domain::technology::Technology as DomainTechnology;
use crate::models::characteristic::{
    Characteristic as DbCharacteristic, NewCharacteristic as DbNewCharacteristic,
};
use crate::models::color::NewProductColor as DbNewProductColor;
use crate::models::document::{Document as DbDocument, NewDocument as DbNewDocument};
use crate::models::product::{
    NewProduct as DbNewProduct, NewProductImage as DbNewProductImage, Product as DbProduct,
    ProductImage as DbProductImage, UpdateProduct as DbUpdateProduct,
};
use crate::models::technology::{
    NewProductTechnology as DbNewProductTechnology, Technology as DbTechnology,
};
use crate::repository::{
    DieselRepository, ProductReader, ProductWriter, RepositoryError, RepositoryResult,
};
use crate::schema::products;

/// Build the storefront selection for `filter`.
///
/// Both the count query and the page query are derived from this one
/// function so their filter sets cannot drift apart.
fn catalog_selection<'a>(filter: &'a CatalogFilter) -> products::BoxedQuery<'a, Sqlite> {
    let mut query = products::table.into_boxed::<Sqlite>();

    query = query.filter(products::lang.eq(filter.lang.as_str()));

    if !filter.include_inactive {
        query = query.filter(products::is_active.eq(true));
    }

    if let Some(category_id) = filter.category_id {
        query = query.filter(products::category_id.eq(category_id));
    }

    if let Some(subcategory_id) = filter.subcategory_id {
        query = query.filter(products::subcategory_id.eq(subcategory_id));
    }

    if filter.featured {
        query = query.filter(products::is_featured.eq(true));
    }

    if let Some(collection_id) = filter.collection_id {
        query = query.filter(products::collection_id.eq(collection_id));
    }

    if let Some(product_id) = filter.exclude_product_id {
        query = query.filter(products::id.ne(product_id));
    }

    query
}

/// Build the admin selection for `query`.
fn admin_selection<'a>(query: &'a ProductListQuery) -> products::BoxedQuery<'a, Sqlite> {
    let mut selection = products::table.into_boxed::<Sqlite>();

    if let Some(lang) = query.lang.as_ref() {
        selection = selection.filter(products::lang.eq(lang.as_str()));
    }

    if !query.include_inactive {
        selection = selection.filter(products::is_active.eq(true));
    }

    if let Some(category_id) = query.category_id {
        selection = selection.filter(products::category_id.eq(category_id));
    }

    if let Some(term) = query.search.as_ref() {
        let pattern = format!("%{}%", term);
        selection = selection.filter(
            products::name
                .like(pattern.clone())
                .or(products::article.like(pattern)),
        );
    }

    selection
}

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::id.eq(id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        if let Some(db_product) = product {
            let mut domain: DomainProduct = db_product.into();
            let mut images = load_images_for_products(&mut conn, &[domain.id])?;
            domain.images = images.remove(&domain.id).unwrap_or_default();
            Ok(Some(domain))
        } else {
            Ok(None)
        }
    }

    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainProduct>)> {
        let mut conn = self.conn()?;

        let total = admin_selection(&query)
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let mut items_query =
            admin_selection(&query).order((products::created_at.desc(), products::id.desc()));

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items_query = items_query.offset(offset).limit(limit);
        }

        let db_products = items_query.load::<DbProduct>(&mut conn)?;
        let domain_products = attach_images(&mut conn, db_products)?;

        Ok((total, domain_products))
    }

    fn list_catalog(&self, filter: &CatalogFilter) -> RepositoryResult<(usize, Vec<DomainProduct>)> {
        if filter.unsatisfiable {
            return Ok((0, Vec::new()));
        }

        let mut conn = self.conn()?;

        let total = catalog_selection(filter)
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let db_products = catalog_selection(filter)
            .order((products::created_at.desc(), products::id.desc()))
            .limit(filter.limit)
            .offset(filter.offset)
            .load::<DbProduct>(&mut conn)?;

        let domain_products = attach_images(&mut conn, db_products)?;

        Ok((total, domain_products))
    }

    fn list_product_colors(&self, product_id: i32) -> RepositoryResult<Vec<ProductColorLink>> {
        use crate::schema::{colors, product_colors};

        let mut conn = self.conn()?;

        let rows = product_colors::table
            .inner_join(colors::table)
            .filter(product_colors::product_id.eq(product_id))
            .order(product_colors::position.asc())
            .select((
                product_colors::color_id,
                colors::name,
                colors::code,
                colors::suffix,
                product_colors::link_to_product,
            ))
            .load::<(i32, String, String, Option<String>, Option<String>)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(
                |(color_id, name, code, suffix, link_to_product)| ProductColorLink {
                    color_id,
                    name,
                    code,
                    suffix,
                    link_to_product,
                },
            )
            .collect())
    }

    fn list_characteristics(&self, product_id: i32) -> RepositoryResult<Vec<DomainCharacteristic>> {
        use crate::schema::characteristics;

        let mut conn = self.conn()?;

        let rows = characteristics::table
            .filter(characteristics::product_id.eq(product_id))
            .order(characteristics::position.asc())
            .load::<DbCharacteristic>(&mut conn)?;

        Ok(rows.into_iter().map(DomainCharacteristic::from).collect())
    }

    fn list_product_technologies(&self, product_id: i32) -> RepositoryResult<Vec<DomainTechnology>> {
        use crate::schema::{product_technologies, technologies};

        let mut conn = self.conn()?;

        let rows = product_technologies::table
            .inner_join(technologies::table)
            .filter(product_technologies::product_id.eq(product_id))
            .order(product_technologies::position.asc())
            .select(DbTechnology::as_select())
            .load::<DbTechnology>(&mut conn)?;

        Ok(rows.into_iter().map(DomainTechnology::from).collect())
    }

    fn list_documents(&self, product_id: i32) -> RepositoryResult<Vec<DomainDocument>> {
        use crate::schema::documents;

        let mut conn = self.conn()?;

        let rows = documents::table
            .filter(documents::product_id.eq(product_id))
            .order(documents::position.asc())
            .load::<DbDocument>(&mut conn)?;

        Ok(rows.into_iter().map(DomainDocument::from).collect())
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        let mut conn = self.conn()?;

        conn.transaction::<DomainProduct, RepositoryError, _>(|conn| {
            ensure_article_free(conn, &new_product.article, &new_product.lang, None)?;
            ensure_category_placement(
                conn,
                new_product.category_id,
                new_product.subcategory_id,
                &new_product.lang,
            )?;
            ensure_collection_exists(conn, new_product.collection_id)?;
            ensure_collection_exists(conn, new_product.cross_collection_id)?;

            let insertable = DbNewProduct::from(new_product);

            let created = diesel::insert_into(products::table)
                .values(&insertable)
                .get_result::<DbProduct>(conn)?;

            replace_images(conn, created.id, &new_product.images)?;

            let mut domain: DomainProduct = created.into();
            domain.images = new_product.images.clone();

            Ok(domain)
        })
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<DomainProduct> {
        let mut conn = self.conn()?;

        conn.transaction::<DomainProduct, RepositoryError, _>(|conn| {
            let existing = products::table
                .filter(products::id.eq(product_id))
                .first::<DbProduct>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            ensure_article_free(conn, &updates.article, &existing.lang, Some(product_id))?;
            ensure_category_placement(
                conn,
                updates.category_id,
                updates.subcategory_id,
                &existing.lang,
            )?;
            ensure_collection_exists(conn, updates.collection_id)?;
            ensure_collection_exists(conn, updates.cross_collection_id)?;

            let db_updates = DbUpdateProduct::from(updates);

            let updated = diesel::update(products::table.filter(products::id.eq(product_id)))
                .set(&db_updates)
                .get_result::<DbProduct>(conn)?;

            replace_images(conn, product_id, &updates.images)?;

            let mut domain: DomainProduct = updated.into();
            domain.images = updates.images.clone();

            Ok(domain)
        })
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::{
            characteristics, documents, product_colors, product_images, product_technologies,
        };

        let mut conn = self.conn()?;

        // Attachments go first; SQLite does not cascade for us here.
        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(product_images::table.filter(product_images::product_id.eq(product_id)))
                .execute(conn)?;
            diesel::delete(product_colors::table.filter(product_colors::product_id.eq(product_id)))
                .execute(conn)?;
            diesel::delete(
                characteristics::table.filter(characteristics::product_id.eq(product_id)),
            )
            .execute(conn)?;
            diesel::delete(
                product_technologies::table
                    .filter(product_technologies::product_id.eq(product_id)),
            )
            .execute(conn)?;
            diesel::delete(documents::table.filter(documents::product_id.eq(product_id)))
                .execute(conn)?;

            let deleted = diesel::delete(products::table.filter(products::id.eq(product_id)))
                .execute(conn)?;

            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }

    fn replace_product_colors(
        &self,
        product_id: i32,
        links: &[NewProductColorLink],
    ) -> RepositoryResult<()> {
        use crate::schema::{colors, product_colors};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            ensure_product_exists(conn, product_id)?;

            let color_ids: Vec<i32> = links.iter().map(|link| link.color_id).collect();
            if !color_ids.is_empty() {
                let known = colors::table
                    .filter(colors::id.eq_any(&color_ids))
                    .select(colors::id)
                    .load::<i32>(conn)?;

                if known.len() != dedup_count(&color_ids) {
                    return Err(RepositoryError::Conflict(
                        "unknown color in attachment list".to_string(),
                    ));
                }
            }

            diesel::delete(product_colors::table.filter(product_colors::product_id.eq(product_id)))
                .execute(conn)?;

            let rows: Vec<DbNewProductColor> = links
                .iter()
                .enumerate()
                .map(|(position, link)| DbNewProductColor {
                    product_id,
                    color_id: link.color_id,
                    link_to_product: link.link_to_product.as_deref(),
                    position: position as i32,
                })
                .collect();

            if !rows.is_empty() {
                diesel::insert_into(product_colors::table)
                    .values(&rows)
                    .execute(conn)?;
            }

            Ok(())
        })
    }

    fn replace_characteristics(
        &self,
        product_id: i32,
        rows: &[DomainNewCharacteristic],
    ) -> RepositoryResult<()> {
        use crate::schema::characteristics;

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            ensure_product_exists(conn, product_id)?;

            diesel::delete(
                characteristics::table.filter(characteristics::product_id.eq(product_id)),
            )
            .execute(conn)?;

            let insertables: Vec<DbNewCharacteristic> = rows
                .iter()
                .enumerate()
                .map(|(position, row)| DbNewCharacteristic {
                    product_id,
                    name: row.name.as_str(),
                    value: row.value.as_str(),
                    position: position as i32,
                })
                .collect();

            if !insertables.is_empty() {
                diesel::insert_into(characteristics::table)
                    .values(&insertables)
                    .execute(conn)?;
            }

            Ok(())
        })
    }

    fn replace_product_technologies(
        &self,
        product_id: i32,
        technology_ids: &[i32],
    ) -> RepositoryResult<()> {
        use crate::schema::{product_technologies, technologies};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            ensure_product_exists(conn, product_id)?;

            if !technology_ids.is_empty() {
                let known = technologies::table
                    .filter(technologies::id.eq_any(technology_ids))
                    .select(technologies::id)
                    .load::<i32>(conn)?;

                if known.len() != dedup_count(technology_ids) {
                    return Err(RepositoryError::Conflict(
                        "unknown technology in attachment list".to_string(),
                    ));
                }
            }

            diesel::delete(
                product_technologies::table
                    .filter(product_technologies::product_id.eq(product_id)),
            )
            .execute(conn)?;

            let rows: Vec<DbNewProductTechnology> = technology_ids
                .iter()
                .enumerate()
                .map(|(position, technology_id)| DbNewProductTechnology {
                    product_id,
                    technology_id: *technology_id,
                    position: position as i32,
                })
                .collect();

            if !rows.is_empty() {
                diesel::insert_into(product_technologies::table)
                    .values(&rows)
                    .execute(conn)?;
            }

            Ok(())
        })
    }

    fn replace_documents(
        &self,
        product_id: i32,
        documents: &[DomainNewDocument],
    ) -> RepositoryResult<()> {
        use crate::schema::documents as documents_table;

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            ensure_product_exists(conn, product_id)?;

            diesel::delete(
                documents_table::table.filter(documents_table::product_id.eq(product_id)),
            )
            .execute(conn)?;

            let rows: Vec<DbNewDocument> = documents
                .iter()
                .enumerate()
                .map(|(position, document)| DbNewDocument {
                    product_id,
                    name: document.name.as_str(),
                    doc_type: document.doc_type.as_str(),
                    file_url: document.file_url.as_str(),
                    file_size_bytes: document.file_size_bytes,
                    position: position as i32,
                })
                .collect();

            if !rows.is_empty() {
                diesel::insert_into(documents_table::table)
                    .values(&rows)
                    .execute(conn)?;
            }

            Ok(())
        })
    }
}

fn attach_images(
    conn: &mut SqliteConnection,
    db_products: Vec<DbProduct>,
) -> RepositoryResult<Vec<DomainProduct>> {
    if db_products.is_empty() {
        return Ok(Vec::new());
    }

    let product_ids: Vec<i32> = db_products.iter().map(|product| product.id).collect();
    let mut image_map = load_images_for_products(conn, &product_ids)?;

    let mut domain_products = Vec::with_capacity(db_products.len());
    for db_product in db_products {
        let mut domain: DomainProduct = db_product.into();
        domain.images = image_map.remove(&domain.id).unwrap_or_default();
        domain_products.push(domain);
    }

    Ok(domain_products)
}

fn load_images_for_products(
    conn: &mut SqliteConnection,
    product_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainProductImage>>> {
    use crate::schema::product_images;

    if product_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = product_images::table
        .filter(product_images::product_id.eq_any(product_ids))
        .order(product_images::position.asc())
        .load::<DbProductImage>(conn)?;

    let mut map: HashMap<i32, Vec<DomainProductImage>> = HashMap::new();
    for row in rows {
        map.entry(row.product_id).or_default().push(row.into());
    }

    Ok(map)
}

fn replace_images(
    conn: &mut SqliteConnection,
    product_id: i32,
    images: &[DomainProductImage],
) -> RepositoryResult<()> {
    use crate::schema::product_images;

    diesel::delete(product_images::table.filter(product_images::product_id.eq(product_id)))
        .execute(conn)?;

    let rows: Vec<DbNewProductImage> = images
        .iter()
        .enumerate()
        .map(|(position, image)| DbNewProductImage {
            product_id,
            url: image.url.as_str(),
            color_id: image.color_id,
            position: position as i32,
        })
        .collect();

    if !rows.is_empty() {
        diesel::insert_into(product_images::table)
            .values(&rows)
            .execute(conn)?;
    }

    Ok(())
}

fn ensure_product_exists(conn: &mut SqliteConnection, product_id: i32) -> RepositoryResult<()> {
    let found: bool = select(exists(products::table.filter(products::id.eq(product_id))))
        .get_result(conn)?;

    if found {
        Ok(())
    } else {
        Err(RepositoryError::NotFound)
    }
}

fn ensure_article_free(
    conn: &mut SqliteConnection,
    article: &str,
    lang: &str,
    exclude_id: Option<i32>,
) -> RepositoryResult<()> {
    let taken: bool = match exclude_id {
        Some(id) => select(exists(
            products::table
                .filter(products::article.eq(article))
                .filter(products::lang.eq(lang))
                .filter(products::id.ne(id)),
        ))
        .get_result(conn)?,
        None => select(exists(
            products::table
                .filter(products::article.eq(article))
                .filter(products::lang.eq(lang)),
        ))
        .get_result(conn)?,
    };

    if taken {
        return Err(RepositoryError::Conflict(
            "product article already in use for this language".to_string(),
        ));
    }

    Ok(())
}

fn ensure_category_placement(
    conn: &mut SqliteConnection,
    category_id: i32,
    subcategory_id: Option<i32>,
    lang: &str,
) -> RepositoryResult<()> {
    use crate::schema::categories;
    use crate::models::category::Category as DbCategory;

    let category = categories::table
        .filter(categories::id.eq(category_id))
        .first::<DbCategory>(conn)
        .optional()?
        .ok_or_else(|| RepositoryError::Conflict("category does not exist".to_string()))?;

    if category.lang != lang {
        return Err(RepositoryError::Conflict(
            "category belongs to another language".to_string(),
        ));
    }

    if let Some(subcategory_id) = subcategory_id {
        let subcategory = categories::table
            .filter(categories::id.eq(subcategory_id))
            .first::<DbCategory>(conn)
            .optional()?
            .ok_or_else(|| RepositoryError::Conflict("subcategory does not exist".to_string()))?;

        if subcategory.parent_id != Some(category_id) {
            return Err(RepositoryError::Conflict(
                "subcategory does not belong to the category".to_string(),
            ));
        }
    }

    Ok(())
}

fn ensure_collection_exists(
    conn: &mut SqliteConnection,
    collection_id: Option<i32>,
) -> RepositoryResult<()> {
    use crate::schema::collections;

    let Some(collection_id) = collection_id else {
        return Ok(());
    };

    let found: bool = select(exists(
        collections::table.filter(collections::id.eq(collection_id)),
    ))
    .get_result(conn)?;

    if found {
        Ok(())
    } else {
        Err(RepositoryError::Conflict(
            "collection does not exist".to_string(),
        ))
    }
}

fn dedup_count(ids: &[i32]) -> usize {
    let mut unique: Vec<i32> = ids.to_vec();
    unique.sort_unstable();
    unique.dedup();
    unique.len()
}
