use async_trait::async_trait;
use crew_change_db::models::{audit::ChangeLogModel, change_request::ChangeRequestModel};
use crew_change_db::repository::create::Create;
use crew_change_db::utils::seal_change_log;
use std::error::Error;

use super::repo_impl::PgChangeRequestRepositoryImpl;
use crate::repository::postgres::utils::next_id;

impl PgChangeRequestRepositoryImpl {
    pub(super) async fn insert_change_log(
        transaction: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        entry: &ChangeLogModel,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO change_log
            (id, change_request_id, action, performed_by, performed_date, old_values, new_values, comments, antecedent_hash, hash)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(entry.id)
        .bind(entry.change_request_id)
        .bind(entry.action.as_str())
        .bind(entry.performed_by.as_str())
        .bind(entry.performed_date)
        .bind(&entry.old_values)
        .bind(&entry.new_values)
        .bind(entry.comments.as_deref())
        .bind(entry.antecedent_hash)
        .bind(entry.hash)
        .execute(&mut **transaction)
        .await?;
        Ok(())
    }

    pub(super) async fn create_impl(
        repo: &PgChangeRequestRepositoryImpl,
        mut item: ChangeRequestModel,
        mut entry: ChangeLogModel,
    ) -> Result<(ChangeRequestModel, ChangeLogModel), Box<dyn Error + Send + Sync>> {
        let mut transaction = repo.pool.begin().await?;

        item.id = next_id(&mut *transaction, "change_request").await?;
        entry.id = next_id(&mut *transaction, "change_log").await?;
        entry.change_request_id = item.id;
        seal_change_log(&mut entry, 0)?;
        item.last_change_log_id = Some(entry.id);

        sqlx::query(
            r#"
            INSERT INTO change_request
            (id, category, request_title, target_type, target_id, requested_by, request_date, status, original_data, new_data, changed_fields, comments, approved_by, approved_date, rejection_reason, last_change_log_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            "#,
        )
        .bind(item.id)
        .bind(item.category.as_str())
        .bind(item.request_title.as_str())
        .bind(item.target_type.as_str())
        .bind(item.target_id.as_deref())
        .bind(item.requested_by.as_str())
        .bind(item.request_date)
        .bind(item.status.as_str())
        .bind(&item.original_data)
        .bind(&item.new_data)
        .bind(&item.changed_fields)
        .bind(item.comments.as_deref())
        .bind(item.approved_by.as_deref())
        .bind(item.approved_date)
        .bind(item.rejection_reason.as_deref())
        .bind(item.last_change_log_id)
        .execute(&mut *transaction)
        .await?;

        Self::insert_change_log(&mut transaction, &entry).await?;

        transaction.commit().await?;
        Ok((item, entry))
    }
}

#[async_trait]
impl Create<ChangeRequestModel> for PgChangeRequestRepositoryImpl {
    async fn create(
        &self,
        item: ChangeRequestModel,
        entry: ChangeLogModel,
    ) -> Result<(ChangeRequestModel, ChangeLogModel), Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item, entry).await
    }
}
