use diesel::prelude::*;

use crate::domain::document::Document as DomainDocument;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::documents)]
pub struct Document {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub doc_type: String,
    pub file_url: String,
    pub file_size_bytes: i32,
    pub position: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::documents)]
pub struct NewDocument<'a> {
    pub product_id: i32,
    pub name: &'a str,
    pub doc_type: &'a str,
    pub file_url: &'a str,
    pub file_size_bytes: i32,
    pub position: i32,
}

impl From<Document> for DomainDocument {
    fn from(value: Document) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            name: value.name,
            doc_type: value.doc_type,
            file_url: value.file_url,
            file_size_bytes: value.file_size_bytes,
            position: value.position,
        }
    }
}
