use diesel::prelude::*;

use crate::domain::characteristic::Characteristic as DomainCharacteristic;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::characteristics)]
pub struct Characteristic {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub value: String,
    pub position: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::characteristics)]
pub struct NewCharacteristic<'a> {
    pub product_id: i32,
    pub name: &'a str,
    pub value: &'a str,
    pub position: i32,
}

impl From<Characteristic> for DomainCharacteristic {
    fn from(value: Characteristic) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            name: value.name,
            value: value.value,
            position: value.position,
        }
    }
}
