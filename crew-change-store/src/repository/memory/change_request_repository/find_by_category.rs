use async_trait::async_trait;
use crew_change_db::models::change_request::ChangeRequestModel;
use crew_change_db::repository::find_by_category::FindByCategory;
use std::error::Error;

use super::repo_impl::MemoryChangeRequestRepositoryImpl;

impl MemoryChangeRequestRepositoryImpl {
    pub(super) fn find_by_category_impl(
        repo: &MemoryChangeRequestRepositoryImpl,
        category: &str,
    ) -> Result<Vec<ChangeRequestModel>, Box<dyn Error + Send + Sync>> {
        let tables = repo.database.tables.read();
        Ok(tables
            .change_requests
            .values()
            .filter(|item| item.category.as_str() == category)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl FindByCategory<ChangeRequestModel> for MemoryChangeRequestRepositoryImpl {
    async fn find_by_category(&self, category: &str) -> Result<Vec<ChangeRequestModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_category_impl(self, category)
    }
}
