use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use super::model::AppDataDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::app_data;
use crate::schema::app_data::dsl::*;
use hacks_core::constants::SNAPSHOT_KEY;
use hacks_core::errors::Result;
use hacks_core::goals::SnapshotRepositoryTrait;

/// Repository for the persisted goal snapshot: a single row in `app_data`
/// keyed by [`SNAPSHOT_KEY`], replaced wholesale on every save.
pub struct SnapshotRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SnapshotRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SnapshotRepository { pool, writer }
    }
}

#[async_trait]
impl SnapshotRepositoryTrait for SnapshotRepository {
    fn load_raw(&self) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let row = app_data
            .find(SNAPSHOT_KEY)
            .select(data_value)
            .first::<String>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row)
    }

    async fn save_raw(&self, payload: String) -> Result<()> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::replace_into(app_data::table)
                    .values(&AppDataDB {
                        data_key: SNAPSHOT_KEY.to_string(),
                        data_value: payload,
                    })
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
