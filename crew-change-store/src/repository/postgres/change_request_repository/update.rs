use async_trait::async_trait;
use crew_change_db::models::{audit::ChangeLogModel, change_request::ChangeRequestModel};
use crew_change_db::repository::update::Update;
use crew_change_db::utils::seal_change_log;
use std::error::Error;

use super::repo_impl::PgChangeRequestRepositoryImpl;
use crate::repository::postgres::utils::next_id;

impl PgChangeRequestRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &PgChangeRequestRepositoryImpl,
        mut item: ChangeRequestModel,
        mut entry: ChangeLogModel,
    ) -> Result<(ChangeRequestModel, ChangeLogModel), Box<dyn Error + Send + Sync>> {
        let expected_last_change_log_id = item.last_change_log_id;
        let mut transaction = repo.pool.begin().await?;

        let antecedent_hash = match expected_last_change_log_id {
            Some(last_id) => sqlx::query_scalar::<_, i64>(
                "SELECT hash FROM change_log WHERE id = $1 AND change_request_id = $2",
            )
            .bind(last_id)
            .bind(item.id)
            .fetch_optional(&mut *transaction)
            .await?
            .unwrap_or(0),
            None => 0,
        };

        entry.id = next_id(&mut *transaction, "change_log").await?;
        entry.change_request_id = item.id;
        seal_change_log(&mut entry, antecedent_hash)?;
        item.last_change_log_id = Some(entry.id);

        // Optimistic check: only succeeds if nobody appended an entry since the load
        let result = sqlx::query(
            r#"
            UPDATE change_request SET
            status = $2, comments = $3, approved_by = $4, approved_date = $5, rejection_reason = $6, last_change_log_id = $7
            WHERE id = $1 AND last_change_log_id IS NOT DISTINCT FROM $8
            "#,
        )
        .bind(item.id)
        .bind(item.status.as_str())
        .bind(item.comments.as_deref())
        .bind(item.approved_by.as_deref())
        .bind(item.approved_date)
        .bind(item.rejection_reason.as_deref())
        .bind(item.last_change_log_id)
        .bind(expected_last_change_log_id)
        .execute(&mut *transaction)
        .await?;

        if result.rows_affected() == 0 {
            return Err(format!(
                "Change request {} does not exist or was modified concurrently",
                item.id
            )
            .into());
        }

        Self::insert_change_log(&mut transaction, &entry).await?;

        transaction.commit().await?;
        Ok((item, entry))
    }
}

#[async_trait]
impl Update<ChangeRequestModel> for PgChangeRequestRepositoryImpl {
    async fn update(
        &self,
        item: ChangeRequestModel,
        entry: ChangeLogModel,
    ) -> Result<(ChangeRequestModel, ChangeLogModel), Box<dyn Error + Send + Sync>> {
        Self::update_impl(self, item, entry).await
    }
}
