use async_trait::async_trait;
use crew_change_db::models::{audit::ChangeLogModel, change_request::ChangeRequestModel};
use crew_change_db::repository::{load::Load, load_batch::LoadBatch};
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

use crate::repository::postgres::utils::{
    get_heapless_string, get_optional_heapless_string, get_parsed, TryFromRow,
};

pub struct PgChangeRequestRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl PgChangeRequestRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for ChangeRequestModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ChangeRequestModel {
            id: row.get("id"),
            category: get_heapless_string(row, "category")?,
            request_title: get_heapless_string(row, "request_title")?,
            target_type: get_heapless_string(row, "target_type")?,
            target_id: get_optional_heapless_string(row, "target_id")?,
            requested_by: get_heapless_string(row, "requested_by")?,
            request_date: row.get("request_date"),
            status: get_parsed(row, "status")?,
            original_data: row.get("original_data"),
            new_data: row.get("new_data"),
            changed_fields: row.get("changed_fields"),
            comments: get_optional_heapless_string(row, "comments")?,
            approved_by: get_optional_heapless_string(row, "approved_by")?,
            approved_date: row.try_get("approved_date")?,
            rejection_reason: get_optional_heapless_string(row, "rejection_reason")?,
            last_change_log_id: row.try_get("last_change_log_id")?,
        })
    }
}

impl TryFromRow<PgRow> for ChangeLogModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ChangeLogModel {
            id: row.get("id"),
            change_request_id: row.get("change_request_id"),
            action: get_parsed(row, "action")?,
            performed_by: get_heapless_string(row, "performed_by")?,
            performed_date: row.get("performed_date"),
            old_values: row.get("old_values"),
            new_values: row.get("new_values"),
            comments: get_optional_heapless_string(row, "comments")?,
            antecedent_hash: row.get("antecedent_hash"),
            hash: row.get("hash"),
        })
    }
}

#[async_trait]
impl Load<ChangeRequestModel> for PgChangeRequestRepositoryImpl {
    async fn load(&self, id: i64) -> Result<Option<ChangeRequestModel>, Box<dyn Error + Send + Sync>> {
        let results = self.load_batch(&[id]).await?;
        Ok(results.into_iter().next().flatten())
    }
}
