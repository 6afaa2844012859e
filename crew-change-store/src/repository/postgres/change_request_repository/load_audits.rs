use async_trait::async_trait;
use crew_change_db::models::{audit::ChangeLogModel, change_request::ChangeRequestModel};
use crew_change_db::repository::load_audits::LoadAudits;
use std::error::Error;

use super::repo_impl::PgChangeRequestRepositoryImpl;
use crate::repository::postgres::utils::TryFromRow;

#[async_trait]
impl LoadAudits<ChangeRequestModel> for PgChangeRequestRepositoryImpl {
    async fn load_audits(&self, id: i64) -> Result<Vec<ChangeLogModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(r#"SELECT * FROM change_log WHERE change_request_id = $1 ORDER BY id"#)
            .bind(id)
            .fetch_all(&*self.pool)
            .await?;

        rows.iter().map(ChangeLogModel::try_from_row).collect()
    }

    async fn load_audit_trail(&self) -> Result<Vec<ChangeLogModel>, Box<dyn Error + Send + Sync>> {
        let rows = sqlx::query(r#"SELECT * FROM change_log ORDER BY id"#)
            .fetch_all(&*self.pool)
            .await?;

        rows.iter().map(ChangeLogModel::try_from_row).collect()
    }
}
