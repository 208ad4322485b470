use diesel::prelude::*;

use crate::domain::content::{
    BrandContent as DomainBrandContent, BrandHeroSection as DomainBrandHeroSection,
    Direction as DomainDirection, HeroSection as DomainHeroSection,
    NewBrandContent as DomainNewBrandContent, NewDirection as DomainNewDirection,
    UpdateBrandContent as DomainUpdateBrandContent, UpdateDirection as DomainUpdateDirection,
    UpsertHeroSection,
};
use crate::models::content::{
    BrandContent as DbBrandContent, BrandHeroSection as DbBrandHeroSection,
    Direction as DbDirection, HeroSection as DbHeroSection, NewBrandContent as DbNewBrandContent,
    NewBrandHeroSection as DbNewBrandHeroSection, NewDirection as DbNewDirection,
    NewHeroSection as DbNewHeroSection, UpdateBrandContent as DbUpdateBrandContent,
    UpdateBrandHeroSection as DbUpdateBrandHeroSection, UpdateDirection as DbUpdateDirection,
    UpdateHeroSection as DbUpdateHeroSection,
};
use crate::repository::{
    ContentReader, ContentWriter, DieselRepository, RepositoryError, RepositoryResult,
};

impl ContentReader for DieselRepository {
    fn get_hero_section(&self, lang: &str) -> RepositoryResult<Option<DomainHeroSection>> {
        use crate::schema::hero_sections;

        let mut conn = self.conn()?;

        let row = hero_sections::table
            .filter(hero_sections::lang.eq(lang))
            .first::<DbHeroSection>(&mut conn)
            .optional()?;

        Ok(row.map(DomainHeroSection::from))
    }

    fn get_brand_hero_section(
        &self,
        lang: &str,
    ) -> RepositoryResult<Option<DomainBrandHeroSection>> {
        use crate::schema::brand_hero_sections;

        let mut conn = self.conn()?;

        let row = brand_hero_sections::table
            .filter(brand_hero_sections::lang.eq(lang))
            .first::<DbBrandHeroSection>(&mut conn)
            .optional()?;

        Ok(row.map(DomainBrandHeroSection::from))
    }

    fn list_brand_contents(&self, lang: &str) -> RepositoryResult<Vec<DomainBrandContent>> {
        use crate::schema::brand_contents;

        let mut conn = self.conn()?;

        let rows = brand_contents::table
            .filter(brand_contents::lang.eq(lang))
            .order(brand_contents::position.asc())
            .load::<DbBrandContent>(&mut conn)?;

        Ok(rows.into_iter().map(DomainBrandContent::from).collect())
    }

    fn list_directions(&self, lang: &str) -> RepositoryResult<Vec<DomainDirection>> {
        use crate::schema::directions;

        let mut conn = self.conn()?;

        let rows = directions::table
            .filter(directions::lang.eq(lang))
            .order(directions::position.asc())
            .load::<DbDirection>(&mut conn)?;

        Ok(rows.into_iter().map(DomainDirection::from).collect())
    }
}

impl ContentWriter for DieselRepository {
    fn upsert_hero_section(
        &self,
        payload: &UpsertHeroSection,
    ) -> RepositoryResult<DomainHeroSection> {
        use crate::schema::hero_sections;

        let mut conn = self.conn()?;

        let insertable = DbNewHeroSection::from(payload);
        let changeset = DbUpdateHeroSection::from(payload);

        let stored = diesel::insert_into(hero_sections::table)
            .values(&insertable)
            .on_conflict(hero_sections::lang)
            .do_update()
            .set(&changeset)
            .get_result::<DbHeroSection>(&mut conn)?;

        Ok(stored.into())
    }

    fn upsert_brand_hero_section(
        &self,
        payload: &UpsertHeroSection,
    ) -> RepositoryResult<DomainBrandHeroSection> {
        use crate::schema::brand_hero_sections;

        let mut conn = self.conn()?;

        let insertable = DbNewBrandHeroSection::from(payload);
        let changeset = DbUpdateBrandHeroSection::from(payload);

        let stored = diesel::insert_into(brand_hero_sections::table)
            .values(&insertable)
            .on_conflict(brand_hero_sections::lang)
            .do_update()
            .set(&changeset)
            .get_result::<DbBrandHeroSection>(&mut conn)?;

        Ok(stored.into())
    }

    fn create_brand_content(
        &self,
        payload: &DomainNewBrandContent,
    ) -> RepositoryResult<DomainBrandContent> {
        use crate::schema::brand_contents;

        let mut conn = self.conn()?;

        let insertable = DbNewBrandContent::from(payload);

        let created = diesel::insert_into(brand_contents::table)
            .values(&insertable)
            .get_result::<DbBrandContent>(&mut conn)?;

        Ok(created.into())
    }

    fn update_brand_content(
        &self,
        content_id: i32,
        updates: &DomainUpdateBrandContent,
    ) -> RepositoryResult<DomainBrandContent> {
        use crate::schema::brand_contents;

        let mut conn = self.conn()?;

        let db_updates = DbUpdateBrandContent::from(updates);

        let updated =
            diesel::update(brand_contents::table.filter(brand_contents::id.eq(content_id)))
                .set(&db_updates)
                .get_result::<DbBrandContent>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_brand_content(&self, content_id: i32) -> RepositoryResult<()> {
        use crate::schema::brand_contents;

        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(brand_contents::table.filter(brand_contents::id.eq(content_id)))
                .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn create_direction(&self, payload: &DomainNewDirection) -> RepositoryResult<DomainDirection> {
        use crate::schema::directions;

        let mut conn = self.conn()?;

        let insertable = DbNewDirection::from(payload);

        let created = diesel::insert_into(directions::table)
            .values(&insertable)
            .get_result::<DbDirection>(&mut conn)?;

        Ok(created.into())
    }

    fn update_direction(
        &self,
        direction_id: i32,
        updates: &DomainUpdateDirection,
    ) -> RepositoryResult<DomainDirection> {
        use crate::schema::directions;

        let mut conn = self.conn()?;

        let db_updates = DbUpdateDirection::from(updates);

        let updated = diesel::update(directions::table.filter(directions::id.eq(direction_id)))
            .set(&db_updates)
            .get_result::<DbDirection>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_direction(&self, direction_id: i32) -> RepositoryResult<()> {
        use crate::schema::directions;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(directions::table.filter(directions::id.eq(direction_id)))
            .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
