use async_trait::async_trait;
use crew_change_db::models::change_request::ChangeRequestModel;
use crew_change_db::repository::load_batch::LoadBatch;
use std::error::Error;

use super::repo_impl::MemoryChangeRequestRepositoryImpl;

impl MemoryChangeRequestRepositoryImpl {
    pub(super) fn load_batch_impl(
        repo: &MemoryChangeRequestRepositoryImpl,
        ids: &[i64],
    ) -> Result<Vec<Option<ChangeRequestModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let tables = repo.database.tables.read();
        Ok(ids
            .iter()
            .map(|id| tables.change_requests.get(id).cloned())
            .collect())
    }
}

#[async_trait]
impl LoadBatch<ChangeRequestModel> for MemoryChangeRequestRepositoryImpl {
    async fn load_batch(&self, ids: &[i64]) -> Result<Vec<Option<ChangeRequestModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids)
    }
}
