use std::sync::Arc;

use async_trait::async_trait;
use crew_change_db::models::change_request::ChangeRequestModel;
use crew_change_db::repository::{load::Load, load_batch::LoadBatch};
use std::error::Error;

use crate::repository::memory::database::MemoryDatabase;

pub struct MemoryChangeRequestRepositoryImpl {
    pub(crate) database: Arc<MemoryDatabase>,
}

impl MemoryChangeRequestRepositoryImpl {
    pub fn new(database: Arc<MemoryDatabase>) -> Self {
        Self { database }
    }
}

#[async_trait]
impl Load<ChangeRequestModel> for MemoryChangeRequestRepositoryImpl {
    async fn load(&self, id: i64) -> Result<Option<ChangeRequestModel>, Box<dyn Error + Send + Sync>> {
        let results = self.load_batch(&[id]).await?;
        Ok(results.into_iter().next().flatten())
    }
}
