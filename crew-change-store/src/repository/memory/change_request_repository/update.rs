use async_trait::async_trait;
use crew_change_db::models::{audit::ChangeLogModel, change_request::ChangeRequestModel};
use crew_change_db::repository::update::Update;
use crew_change_db::utils::seal_change_log;
use std::error::Error;

use super::repo_impl::MemoryChangeRequestRepositoryImpl;

impl MemoryChangeRequestRepositoryImpl {
    pub(super) fn update_impl(
        repo: &MemoryChangeRequestRepositoryImpl,
        mut item: ChangeRequestModel,
        mut entry: ChangeLogModel,
    ) -> Result<(ChangeRequestModel, ChangeLogModel), Box<dyn Error + Send + Sync>> {
        let mut tables = repo.database.tables.write();

        let stored = tables
            .change_requests
            .get(&item.id)
            .ok_or_else(|| format!("Change request {} does not exist", item.id))?;

        // Optimistic check: the caller must have loaded the latest version
        if stored.last_change_log_id != item.last_change_log_id {
            return Err(format!("Change request {} was modified concurrently", item.id).into());
        }

        let antecedent_hash = stored
            .last_change_log_id
            .and_then(|id| tables.change_log(id))
            .map(|last| last.hash)
            .unwrap_or(0);

        entry.id = tables.next_change_log_id();
        entry.change_request_id = item.id;
        seal_change_log(&mut entry, antecedent_hash)?;
        item.last_change_log_id = Some(entry.id);

        tables.change_requests.insert(item.id, item.clone());
        tables.change_logs.push(entry.clone());

        Ok((item, entry))
    }
}

#[async_trait]
impl Update<ChangeRequestModel> for MemoryChangeRequestRepositoryImpl {
    async fn update(
        &self,
        item: ChangeRequestModel,
        entry: ChangeLogModel,
    ) -> Result<(ChangeRequestModel, ChangeLogModel), Box<dyn Error + Send + Sync>> {
        Self::update_impl(self, item, entry)
    }
}
