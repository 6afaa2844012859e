use async_trait::async_trait;
use crew_change_db::models::change_request::ChangeRequestModel;
use crew_change_db::repository::load_batch::LoadBatch;
use std::collections::HashMap;
use std::error::Error;

use super::repo_impl::PgChangeRequestRepositoryImpl;
use crate::repository::postgres::utils::TryFromRow;

impl PgChangeRequestRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &PgChangeRequestRepositoryImpl,
        ids: &[i64],
    ) -> Result<Vec<Option<ChangeRequestModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query(r#"SELECT * FROM change_request WHERE id = ANY($1)"#)
            .bind(ids)
            .fetch_all(&*repo.pool)
            .await?;

        let mut item_map = HashMap::new();
        for row in rows {
            let item = ChangeRequestModel::try_from_row(&row)?;
            item_map.insert(item.id, item);
        }

        let mut result = Vec::with_capacity(ids.len());
        for id in ids {
            result.push(item_map.remove(id));
        }
        Ok(result)
    }
}

#[async_trait]
impl LoadBatch<ChangeRequestModel> for PgChangeRequestRepositoryImpl {
    async fn load_batch(&self, ids: &[i64]) -> Result<Vec<Option<ChangeRequestModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}
