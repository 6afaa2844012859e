use async_trait::async_trait;
use crew_change_db::models::change_request::ChangeRequestModel;
use crew_change_db::repository::list_all::ListAll;
use std::error::Error;

use super::repo_impl::MemoryChangeRequestRepositoryImpl;

#[async_trait]
impl ListAll<ChangeRequestModel> for MemoryChangeRequestRepositoryImpl {
    async fn list_all(&self) -> Result<Vec<ChangeRequestModel>, Box<dyn Error + Send + Sync>> {
        let tables = self.database.tables.read();
        Ok(tables.change_requests.values().cloned().collect())
    }
}
