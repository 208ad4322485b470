use diesel::dsl::{exists, select};
use diesel::prelude::*;

use crate::domain::technology::{
    NewTechnology as DomainNewTechnology, Technology as DomainTechnology,
    UpdateTechnology as DomainUpdateTechnology,
};
use crate::models::technology::{
    NewTechnology as DbNewTechnology, Technology as DbTechnology,
    UpdateTechnology as DbUpdateTechnology,
};
use crate::repository::{
    DieselRepository, RepositoryError, RepositoryResult, TechnologyReader, TechnologyWriter,
};

impl TechnologyReader for DieselRepository {
    fn get_technology_by_id(&self, id: i32) -> RepositoryResult<Option<DomainTechnology>> {
        use crate::schema::technologies;

        let mut conn = self.conn()?;

        let technology = technologies::table
            .filter(technologies::id.eq(id))
            .first::<DbTechnology>(&mut conn)
            .optional()?;

        Ok(technology.map(DomainTechnology::from))
    }

    fn list_technologies(&self) -> RepositoryResult<Vec<DomainTechnology>> {
        use crate::schema::technologies;

        let mut conn = self.conn()?;

        let rows = technologies::table
            .order(technologies::name.asc())
            .load::<DbTechnology>(&mut conn)?;

        Ok(rows.into_iter().map(DomainTechnology::from).collect())
    }
}

impl TechnologyWriter for DieselRepository {
    fn create_technology(
        &self,
        new_technology: &DomainNewTechnology,
    ) -> RepositoryResult<DomainTechnology> {
        use crate::schema::technologies;

        let mut conn = self.conn()?;

        conn.transaction::<DomainTechnology, RepositoryError, _>(|conn| {
            let taken: bool = select(exists(
                technologies::table.filter(technologies::name.eq(new_technology.name.as_str())),
            ))
            .get_result(conn)?;

            if taken {
                return Err(RepositoryError::Conflict(
                    "technology name already in use".to_string(),
                ));
            }

            let insertable = DbNewTechnology::from(new_technology);

            let created = diesel::insert_into(technologies::table)
                .values(&insertable)
                .get_result::<DbTechnology>(conn)?;

            Ok(created.into())
        })
    }

    fn update_technology(
        &self,
        technology_id: i32,
        updates: &DomainUpdateTechnology,
    ) -> RepositoryResult<DomainTechnology> {
        use crate::schema::technologies;

        let mut conn = self.conn()?;

        conn.transaction::<DomainTechnology, RepositoryError, _>(|conn| {
            let taken: bool = select(exists(
                technologies::table
                    .filter(technologies::name.eq(updates.name.as_str()))
                    .filter(technologies::id.ne(technology_id)),
            ))
            .get_result(conn)?;

            if taken {
                return Err(RepositoryError::Conflict(
                    "technology name already in use".to_string(),
                ));
            }

            let db_updates = DbUpdateTechnology::from(updates);

            let updated =
                diesel::update(technologies::table.filter(technologies::id.eq(technology_id)))
                    .set(&db_updates)
                    .get_result::<DbTechnology>(conn)?;

            Ok(updated.into())
        })
    }

    fn delete_technology(&self, technology_id: i32) -> RepositoryResult<()> {
        use crate::schema::{product_technologies, technologies};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            let attached: bool = select(exists(
                product_technologies::table
                    .filter(product_technologies::technology_id.eq(technology_id)),
            ))
            .get_result(conn)?;

            if attached {
                return Err(RepositoryError::Conflict(
                    "technology is still attached to products".to_string(),
                ));
            }

            let deleted =
                diesel::delete(technologies::table.filter(technologies::id.eq(technology_id)))
                    .execute(conn)?;

            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}
