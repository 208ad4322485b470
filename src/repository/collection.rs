use diesel::dsl::{exists, select};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::collection::{
    Collection as DomainCollection, NewCollection as DomainNewCollection,
    UpdateCollection as DomainUpdateCollection,
};
use crate::domain::collection_page::{
    CollectionPage as DomainCollectionPage, UpsertCollectionPage,
};
use crate::models::collection::{
    Collection as DbCollection, NewCollection as DbNewCollection,
    UpdateCollection as DbUpdateCollection,
};
use crate::models::collection_page::{
    CollectionPage as DbCollectionPage, NewCollectionPage as DbNewCollectionPage,
    UpdateCollectionPage as DbUpdateCollectionPage,
};
use crate::repository::{
    CollectionReader, CollectionWriter, DieselRepository, RepositoryError, RepositoryResult,
};

impl CollectionReader for DieselRepository {
    fn get_collection_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCollection>> {
        use crate::schema::collections;

        let mut conn = self.conn()?;

        let collection = collections::table
            .filter(collections::id.eq(id))
            .first::<DbCollection>(&mut conn)
            .optional()?;

        Ok(collection.map(DomainCollection::from))
    }

    fn find_collection_by_slug(&self, slug: &str) -> RepositoryResult<Option<DomainCollection>> {
        use crate::schema::collections;

        let mut conn = self.conn()?;

        let collection = collections::table
            .filter(collections::slug.eq(slug))
            .first::<DbCollection>(&mut conn)
            .optional()?;

        Ok(collection.map(DomainCollection::from))
    }

    fn list_collections(&self) -> RepositoryResult<Vec<DomainCollection>> {
        use crate::schema::collections;

        let mut conn = self.conn()?;

        let rows = collections::table
            .order((collections::created_at.desc(), collections::id.desc()))
            .load::<DbCollection>(&mut conn)?;

        Ok(rows.into_iter().map(DomainCollection::from).collect())
    }

    fn get_collection_page(
        &self,
        collection_id: i32,
        lang: &str,
    ) -> RepositoryResult<Option<DomainCollectionPage>> {
        use crate::schema::collection_pages;

        let mut conn = self.conn()?;

        let page = collection_pages::table
            .filter(collection_pages::collection_id.eq(collection_id))
            .filter(collection_pages::lang.eq(lang))
            .first::<DbCollectionPage>(&mut conn)
            .optional()?;

        match page {
            Some(row) => Ok(Some(row.into_domain()?)),
            None => Ok(None),
        }
    }
}

impl CollectionWriter for DieselRepository {
    fn create_collection(
        &self,
        new_collection: &DomainNewCollection,
    ) -> RepositoryResult<DomainCollection> {
        use crate::schema::collections;

        let mut conn = self.conn()?;

        conn.transaction::<DomainCollection, RepositoryError, _>(|conn| {
            ensure_collection_slug_free(conn, &new_collection.slug, None)?;

            let insertable = DbNewCollection::from(new_collection);

            let created = diesel::insert_into(collections::table)
                .values(&insertable)
                .get_result::<DbCollection>(conn)?;

            Ok(created.into())
        })
    }

    fn update_collection(
        &self,
        collection_id: i32,
        updates: &DomainUpdateCollection,
    ) -> RepositoryResult<DomainCollection> {
        use crate::schema::collections;

        let mut conn = self.conn()?;

        conn.transaction::<DomainCollection, RepositoryError, _>(|conn| {
            ensure_collection_slug_free(conn, &updates.slug, Some(collection_id))?;

            let db_updates = DbUpdateCollection::from(updates);

            let updated =
                diesel::update(collections::table.filter(collections::id.eq(collection_id)))
                    .set(&db_updates)
                    .get_result::<DbCollection>(conn)?;

            Ok(updated.into())
        })
    }

    fn delete_collection(&self, collection_id: i32) -> RepositoryResult<()> {
        use crate::schema::{collection_pages, collections, products};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            let referenced: bool = select(exists(
                products::table.filter(
                    products::collection_id
                        .eq(collection_id)
                        .or(products::cross_collection_id.eq(collection_id)),
                ),
            ))
            .get_result(conn)?;

            if referenced {
                return Err(RepositoryError::Conflict(
                    "collection still has products".to_string(),
                ));
            }

            // Per-language pages belong to the collection and go with it.
            diesel::delete(
                collection_pages::table.filter(collection_pages::collection_id.eq(collection_id)),
            )
            .execute(conn)?;

            let deleted =
                diesel::delete(collections::table.filter(collections::id.eq(collection_id)))
                    .execute(conn)?;

            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }

    fn upsert_collection_page(
        &self,
        page: &UpsertCollectionPage,
    ) -> RepositoryResult<DomainCollectionPage> {
        use crate::schema::{collection_pages, collections};

        let mut conn = self.conn()?;

        let content = serde_json::to_string(&page.sections)?;

        conn.transaction::<DomainCollectionPage, RepositoryError, _>(|conn| {
            let collection_exists: bool = select(exists(
                collections::table.filter(collections::id.eq(page.collection_id)),
            ))
            .get_result(conn)?;

            if !collection_exists {
                return Err(RepositoryError::NotFound);
            }

            let insertable = DbNewCollectionPage {
                collection_id: page.collection_id,
                lang: page.lang.as_str(),
                title: page.title.as_str(),
                description: page.description.as_deref(),
                hero_image: page.hero_image.as_deref(),
                banner_image: page.banner_image.as_deref(),
                content: content.as_str(),
                updated_at: page.updated_at,
            };

            let changeset = DbUpdateCollectionPage {
                title: page.title.as_str(),
                description: page.description.as_deref(),
                hero_image: page.hero_image.as_deref(),
                banner_image: page.banner_image.as_deref(),
                content: content.as_str(),
                updated_at: page.updated_at,
            };

            let stored = diesel::insert_into(collection_pages::table)
                .values(&insertable)
                .on_conflict((collection_pages::collection_id, collection_pages::lang))
                .do_update()
                .set(&changeset)
                .get_result::<DbCollectionPage>(conn)?;

            Ok(stored.into_domain()?)
        })
    }

    fn delete_collection_page(&self, collection_id: i32, lang: &str) -> RepositoryResult<()> {
        use crate::schema::collection_pages;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(
            collection_pages::table
                .filter(collection_pages::collection_id.eq(collection_id))
                .filter(collection_pages::lang.eq(lang)),
        )
        .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

fn ensure_collection_slug_free(
    conn: &mut SqliteConnection,
    slug: &str,
    exclude_id: Option<i32>,
) -> RepositoryResult<()> {
    use crate::schema::collections;

    let taken: bool = match exclude_id {
        Some(id) => select(exists(
            collections::table
                .filter(collections::slug.eq(slug))
                .filter(collections::id.ne(id)),
        ))
        .get_result(conn)?,
        None => select(exists(
            collections::table.filter(collections::slug.eq(slug)),
        ))
        .get_result(conn)?,
    };

    if taken {
        return Err(RepositoryError::Conflict(
            "collection slug already in use".to_string(),
        ));
    }

    Ok(())
}
