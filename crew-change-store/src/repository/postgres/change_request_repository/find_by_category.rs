use async_trait::async_trait;
use crew_change_db::models::change_request::ChangeRequestModel;
use crew_change_db::repository::find_by_category::FindByCategory;
use std::error::Error;

use super::repo_impl::PgChangeRequestRepositoryImpl;
use crate::repository::postgres::utils::TryFromRow;

#[async_trait]
impl FindByCategory<ChangeRequestModel> for PgChangeRequestRepositoryImpl {
    async fn find_by_category(&self, category: &str) -> Result<Vec<ChangeRequestModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(r#"SELECT * FROM change_request WHERE category = $1 ORDER BY id"#)
            .bind(category)
            .fetch_all(&*self.pool)
            .await?;

        rows.iter().map(ChangeRequestModel::try_from_row).collect()
    }
}
