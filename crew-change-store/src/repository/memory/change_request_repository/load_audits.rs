use async_trait::async_trait;
use crew_change_db::models::{audit::ChangeLogModel, change_request::ChangeRequestModel};
use crew_change_db::repository::load_audits::LoadAudits;
use std::error::Error;

use super::repo_impl::MemoryChangeRequestRepositoryImpl;

#[async_trait]
impl LoadAudits<ChangeRequestModel> for MemoryChangeRequestRepositoryImpl {
    async fn load_audits(&self, id: i64) -> Result<Vec<ChangeLogModel>, Box<dyn Error + Send + Sync>> {
        let tables = self.database.tables.read();
        Ok(tables
            .change_logs
            .iter()
            .filter(|entry| entry.change_request_id == id)
            .cloned()
            .collect())
    }

    async fn load_audit_trail(&self) -> Result<Vec<ChangeLogModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.database.tables.read().change_logs.clone())
    }
}
