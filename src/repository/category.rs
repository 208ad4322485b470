use diesel::dsl::{exists, select};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::category::{
    Category as DomainCategory, CategoryListQuery, NewCategory as DomainNewCategory,
    UpdateCategory as DomainUpdateCategory,
};
use crate::models::category::{
    Category as DbCategory, NewCategory as DbNewCategory, UpdateCategory as DbUpdateCategory,
};
use crate::repository::{
    CategoryReader, CategoryWriter, DieselRepository, RepositoryError, RepositoryResult,
};

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::id.eq(id))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(DomainCategory::from))
    }

    fn find_category_by_slug(
        &self,
        slug: &str,
        lang: &str,
    ) -> RepositoryResult<Option<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::slug.eq(slug))
            .filter(categories::lang.eq(lang))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(DomainCategory::from))
    }

    fn find_child_category_by_slug(
        &self,
        slug: &str,
        lang: &str,
        parent_id: i32,
    ) -> RepositoryResult<Option<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::slug.eq(slug))
            .filter(categories::lang.eq(lang))
            .filter(categories::parent_id.eq(parent_id))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(DomainCategory::from))
    }

    fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<Vec<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let mut items_query = categories::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(lang) = query.lang.as_ref() {
            items_query = items_query.filter(categories::lang.eq(lang.as_str()));
        }

        match query.parent_id {
            Some(None) => items_query = items_query.filter(categories::parent_id.is_null()),
            Some(Some(parent_id)) => {
                items_query = items_query.filter(categories::parent_id.eq(parent_id));
            }
            None => {}
        }

        let rows = items_query
            .order((categories::position.asc(), categories::name.asc()))
            .load::<DbCategory>(&mut conn)?;

        Ok(rows.into_iter().map(DomainCategory::from).collect())
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(
        &self,
        new_category: &DomainNewCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        conn.transaction::<DomainCategory, RepositoryError, _>(|conn| {
            ensure_slug_free(conn, &new_category.slug, &new_category.lang, None)?;

            if let Some(parent_id) = new_category.parent_id {
                ensure_valid_parent(conn, parent_id, &new_category.lang)?;
            }

            let insertable = DbNewCategory::from(new_category);

            let created = diesel::insert_into(categories::table)
                .values(&insertable)
                .get_result::<DbCategory>(conn)?;

            Ok(created.into())
        })
    }

    fn update_category(
        &self,
        category_id: i32,
        updates: &DomainUpdateCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        conn.transaction::<DomainCategory, RepositoryError, _>(|conn| {
            let existing = categories::table
                .filter(categories::id.eq(category_id))
                .first::<DbCategory>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            ensure_slug_free(conn, &updates.slug, &existing.lang, Some(category_id))?;

            if let Some(parent_id) = updates.parent_id {
                if parent_id == category_id {
                    return Err(RepositoryError::Conflict(
                        "category cannot be its own parent".to_string(),
                    ));
                }
                ensure_valid_parent(conn, parent_id, &existing.lang)?;
            }

            let db_updates = DbUpdateCategory::from(updates);

            let updated = diesel::update(categories::table.filter(categories::id.eq(category_id)))
                .set(&db_updates)
                .get_result::<DbCategory>(conn)?;

            Ok(updated.into())
        })
    }

    fn delete_category(&self, category_id: i32) -> RepositoryResult<()> {
        use crate::schema::{categories, products};

        let mut conn = self.conn()?;

        // The guards and the delete share one transaction so a concurrent
        // insert cannot slip between the check and the act.
        conn.transaction::<(), RepositoryError, _>(|conn| {
            let has_children: bool = select(exists(
                categories::table.filter(categories::parent_id.eq(category_id)),
            ))
            .get_result(conn)?;

            if has_children {
                return Err(RepositoryError::Conflict(
                    "category still has subcategories".to_string(),
                ));
            }

            let has_products: bool = select(exists(
                products::table.filter(
                    products::category_id
                        .eq(category_id)
                        .or(products::subcategory_id.eq(category_id)),
                ),
            ))
            .get_result(conn)?;

            if has_products {
                return Err(RepositoryError::Conflict(
                    "category still has products".to_string(),
                ));
            }

            let deleted =
                diesel::delete(categories::table.filter(categories::id.eq(category_id)))
                    .execute(conn)?;

            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}

fn ensure_slug_free(
    conn: &mut SqliteConnection,
    slug: &str,
    lang: &str,
    exclude_id: Option<i32>,
) -> RepositoryResult<()> {
    use crate::schema::categories;

    let taken: bool = match exclude_id {
        Some(id) => select(exists(
            categories::table
                .filter(categories::slug.eq(slug))
                .filter(categories::lang.eq(lang))
                .filter(categories::id.ne(id)),
        ))
        .get_result(conn)?,
        None => select(exists(
            categories::table
                .filter(categories::slug.eq(slug))
                .filter(categories::lang.eq(lang)),
        ))
        .get_result(conn)?,
    };

    if taken {
        return Err(RepositoryError::Conflict(
            "category slug already in use for this language".to_string(),
        ));
    }

    Ok(())
}

fn ensure_valid_parent(
    conn: &mut SqliteConnection,
    parent_id: i32,
    lang: &str,
) -> RepositoryResult<()> {
    use crate::schema::categories;

    let parent = categories::table
        .filter(categories::id.eq(parent_id))
        .first::<DbCategory>(conn)
        .optional()?
        .ok_or(RepositoryError::NotFound)?;

    if parent.parent_id.is_some() {
        return Err(RepositoryError::Conflict(
            "categories nest only one level deep".to_string(),
        ));
    }

    if parent.lang != lang {
        return Err(RepositoryError::Conflict(
            "parent category belongs to another language".to_string(),
        ));
    }

    Ok(())
}
