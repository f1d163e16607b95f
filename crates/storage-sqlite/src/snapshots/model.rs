//! Database model for the key-value data slots.

use diesel::prelude::*;

/// One string-keyed slot. The goal snapshot lives in a single row.
#[derive(Queryable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::app_data)]
pub struct AppDataDB {
    pub data_key: String,
    pub data_value: String,
}
