use diesel::dsl::{exists, select};
use diesel::prelude::*;

use crate::domain::color::{
    Color as DomainColor, NewColor as DomainNewColor, UpdateColor as DomainUpdateColor,
};
use crate::models::color::{Color as DbColor, NewColor as DbNewColor, UpdateColor as DbUpdateColor};
use crate::repository::{
    ColorReader, ColorWriter, DieselRepository, RepositoryError, RepositoryResult,
};

impl ColorReader for DieselRepository {
    fn get_color_by_id(&self, id: i32) -> RepositoryResult<Option<DomainColor>> {
        use crate::schema::colors;

        let mut conn = self.conn()?;

        let color = colors::table
            .filter(colors::id.eq(id))
            .first::<DbColor>(&mut conn)
            .optional()?;

        Ok(color.map(DomainColor::from))
    }

    fn list_colors(&self) -> RepositoryResult<Vec<DomainColor>> {
        use crate::schema::colors;

        let mut conn = self.conn()?;

        let rows = colors::table
            .order(colors::name.asc())
            .load::<DbColor>(&mut conn)?;

        Ok(rows.into_iter().map(DomainColor::from).collect())
    }
}

impl ColorWriter for DieselRepository {
    fn create_color(&self, new_color: &DomainNewColor) -> RepositoryResult<DomainColor> {
        use crate::schema::colors;

        let mut conn = self.conn()?;

        conn.transaction::<DomainColor, RepositoryError, _>(|conn| {
            let taken: bool = select(exists(
                colors::table.filter(colors::name.eq(new_color.name.as_str())),
            ))
            .get_result(conn)?;

            if taken {
                return Err(RepositoryError::Conflict(
                    "color name already in use".to_string(),
                ));
            }

            let insertable = DbNewColor::from(new_color);

            let created = diesel::insert_into(colors::table)
                .values(&insertable)
                .get_result::<DbColor>(conn)?;

            Ok(created.into())
        })
    }

    fn update_color(
        &self,
        color_id: i32,
        updates: &DomainUpdateColor,
    ) -> RepositoryResult<DomainColor> {
        use crate::schema::colors;

        let mut conn = self.conn()?;

        conn.transaction::<DomainColor, RepositoryError, _>(|conn| {
            let taken: bool = select(exists(
                colors::table
                    .filter(colors::name.eq(updates.name.as_str()))
                    .filter(colors::id.ne(color_id)),
            ))
            .get_result(conn)?;

            if taken {
                return Err(RepositoryError::Conflict(
                    "color name already in use".to_string(),
                ));
            }

            let db_updates = DbUpdateColor::from(updates);

            let updated = diesel::update(colors::table.filter(colors::id.eq(color_id)))
                .set(&db_updates)
                .get_result::<DbColor>(conn)?;

            Ok(updated.into())
        })
    }

    fn delete_color(&self, color_id: i32) -> RepositoryResult<()> {
        use crate::schema::{colors, product_colors, product_images};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            let attached: bool = select(exists(
                product_colors::table.filter(product_colors::color_id.eq(color_id)),
            ))
            .get_result(conn)?;

            let referenced_by_images: bool = select(exists(
                product_images::table.filter(product_images::color_id.eq(color_id)),
            ))
            .get_result(conn)?;

            if attached || referenced_by_images {
                return Err(RepositoryError::Conflict(
                    "color is still attached to products".to_string(),
                ));
            }

            let deleted = diesel::delete(colors::table.filter(colors::id.eq(color_id)))
                .execute(conn)?;

            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}
