use async_trait::async_trait;
use crew_change_db::models::{audit::ChangeLogModel, change_request::ChangeRequestModel};
use crew_change_db::repository::create::Create;
use crew_change_db::utils::seal_change_log;
use std::error::Error;

use super::repo_impl::MemoryChangeRequestRepositoryImpl;

impl MemoryChangeRequestRepositoryImpl {
    pub(super) fn create_impl(
        repo: &MemoryChangeRequestRepositoryImpl,
        mut item: ChangeRequestModel,
        mut entry: ChangeLogModel,
    ) -> Result<(ChangeRequestModel, ChangeLogModel), Box<dyn Error + Send + Sync>> {
        let mut tables = repo.database.tables.write();

        item.id = tables.next_change_request_id();
        entry.id = tables.next_change_log_id();
        entry.change_request_id = item.id;
        seal_change_log(&mut entry, 0)?;
        item.last_change_log_id = Some(entry.id);

        tables.last_change_request_id = item.id;
        tables.change_requests.insert(item.id, item.clone());
        tables.change_logs.push(entry.clone());

        Ok((item, entry))
    }
}

#[async_trait]
impl Create<ChangeRequestModel> for MemoryChangeRequestRepositoryImpl {
    async fn create(
        &self,
        item: ChangeRequestModel,
        entry: ChangeLogModel,
    ) -> Result<(ChangeRequestModel, ChangeLogModel), Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item, entry)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{create_test_change_request, create_test_entry};
    use super::*;
    use crate::repository::memory::database::MemoryDatabase;
    use crew_change_api::ChangeLogAction;
    use crew_change_db::repository::{load::Load, load_audits::LoadAudits};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() -> Result<(), Box<dyn Error + Send + Sync>> {
        let repo = MemoryChangeRequestRepositoryImpl::new(Arc::new(MemoryDatabase::new()));

        let mut created = Vec::new();
        for _ in 0..3 {
            let item = create_test_change_request("components");
            let entry = create_test_entry(&item, ChangeLogAction::Created, "2nd Engineer");
            created.push(repo.create(item, entry).await?);
        }

        let ids: Vec<i64> = created.iter().map(|(item, _)| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let (item, entry) = &created[1];
        assert_eq!(entry.change_request_id, item.id);
        assert_eq!(entry.antecedent_hash, 0);
        assert_ne!(entry.hash, 0);
        assert_eq!(item.last_change_log_id, Some(entry.id));

        let loaded = repo.load(item.id).await?.expect("request should exist");
        assert_eq!(&loaded, item);
        assert_eq!(repo.load_audits(item.id).await?, vec![entry.clone()]);

        Ok(())
    }
}
