//! Histories repository
//!
//! One row per device. The entry list only ever grows; `append` and
//! `replace_entries` write the whole JSONB list back, and no method removes
//! or reorders entries on the append path.

use chrono::Utc;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::history::{History, HistoryEntry},
};

#[derive(Clone)]
pub struct HistoriesRepository {
    pool: Pool<Postgres>,
}

impl HistoriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all history documents
    pub async fn list(&self) -> AppResult<Vec<History>> {
        let rows = sqlx::query_as::<_, History>("SELECT * FROM histories ORDER BY equipment_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a history document by its own ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<History>> {
        let row = sqlx::query_as::<_, History>("SELECT * FROM histories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Get the history document of a device
    pub async fn get_by_equipment_id(&self, equipment_id: i32) -> AppResult<Option<History>> {
        let row = sqlx::query_as::<_, History>("SELECT * FROM histories WHERE equipment_id = $1")
            .bind(equipment_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Create a new history document for a device
    pub async fn create(&self, equipment_id: i32, entries: &[HistoryEntry]) -> AppResult<History> {
        let row = sqlx::query_as::<_, History>(
            "INSERT INTO histories (equipment_id, entries) VALUES ($1, $2) RETURNING *",
        )
        .bind(equipment_id)
        .bind(Json(entries))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Persist the grown entry list of an existing document
    pub async fn replace_entries(&self, id: i32, entries: &[HistoryEntry]) -> AppResult<Option<History>> {
        let row = sqlx::query_as::<_, History>(
            "UPDATE histories SET entries = $2, modif_date = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Json(entries))
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a history document, returning the removed row if it existed
    pub async fn delete(&self, id: i32) -> AppResult<Option<History>> {
        let row = sqlx::query_as::<_, History>("DELETE FROM histories WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Delete every history document, returning the number removed
    pub async fn delete_all(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM histories")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
