use chrono::NaiveDateTime;
use diesel::prelude::*;

/// One row of the flat key-value store. Values are whole JSON documents;
/// every write replaces the previous value for its key.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::local_store)]
#[diesel(primary_key(key))]
pub struct StoreEntry {
    pub key: String,
    pub value: String,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::local_store)]
pub struct NewStoreEntry<'a> {
    pub key: &'a str,
    pub value: &'a str,
    pub updated_at: NaiveDateTime,
}
