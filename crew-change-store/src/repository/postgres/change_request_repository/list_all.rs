use async_trait::async_trait;
use crew_change_db::models::change_request::ChangeRequestModel;
use crew_change_db::repository::list_all::ListAll;
use std::error::Error;

use super::repo_impl::PgChangeRequestRepositoryImpl;
use crate::repository::postgres::utils::TryFromRow;

#[async_trait]
impl ListAll<ChangeRequestModel> for PgChangeRequestRepositoryImpl {
    async fn list_all(&self) -> Result<Vec<ChangeRequestModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(r#"SELECT * FROM change_request ORDER BY id"#)
            .fetch_all(&*self.pool)
            .await?;

        rows.iter().map(ChangeRequestModel::try_from_row).collect()
    }
}
