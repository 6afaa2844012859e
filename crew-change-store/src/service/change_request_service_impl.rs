use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;
use crew_change_api::{
    ApiError, ApiResult, ChangeLog, ChangeLogAction, ChangeRequest, ChangeRequestPayload,
    ChangeRequestService, ChangeRequestStatus,
};
use crew_change_db::models::{audit::ChangeLogModel, change_request::ChangeRequestModel};
use crew_change_db::repository::ChangeRequestRepository;
use crew_change_db::utils::{audit_timestamp, verify_change_log_chain};
use serde_json::{json, Value};
use tracing::{debug, info, warn};
use validator::Validate;

fn database_error(e: Box<dyn Error + Send + Sync>) -> ApiError {
    ApiError::DatabaseError(e.to_string())
}

/// Values recorded by a decision entry: the status transition, plus the reason for rejections.
fn decision_values(status: ChangeRequestStatus, rejection_reason: Option<&str>) -> Value {
    match rejection_reason {
        Some(reason) => json!({ "status": status.as_str(), "rejectionReason": reason }),
        None => json!({ "status": status.as_str() }),
    }
}

/// [`ChangeRequestService`] on top of any storage backend.
pub struct ChangeRequestServiceImpl<R: ChangeRequestRepository> {
    repository: Arc<R>,
}

impl<R: ChangeRequestRepository> ChangeRequestServiceImpl<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Writes a decision for `id`. Returns false when the request does not exist.
    async fn decide(
        &self,
        id: i64,
        action: ChangeLogAction,
        performed_by: &str,
        apply: impl FnOnce(&mut ChangeRequestModel, chrono::DateTime<chrono::Utc>) -> Result<Option<String>, String> + Send,
    ) -> ApiResult<bool> {
        let Some(mut model) = self.repository.load(id).await.map_err(database_error)? else {
            debug!(change_request_id = id, %action, "Change request not found, nothing to decide");
            return Ok(false);
        };

        let decided_at = audit_timestamp();
        let old_values = decision_values(model.status, model.rejection_reason.as_deref());
        let comments = apply(&mut model, decided_at).map_err(ApiError::ValidationError)?;
        let new_values = decision_values(model.status, model.rejection_reason.as_deref());

        let entry = ChangeLogModel::new(
            action,
            performed_by,
            old_values,
            new_values,
            comments.as_deref(),
            decided_at,
        )
        .map_err(ApiError::ValidationError)?;

        let (model, entry) = self.repository.update(model, entry).await.map_err(database_error)?;
        info!(
            change_request_id = model.id,
            change_log_id = entry.id,
            status = %model.status,
            performed_by,
            "Change request decided"
        );
        Ok(true)
    }
}

#[async_trait]
impl<R: ChangeRequestRepository> ChangeRequestService for ChangeRequestServiceImpl<R> {
    async fn create(&self, payload: ChangeRequestPayload, requested_by: &str) -> ApiResult<ChangeRequest> {
        payload.validate()?;
        if payload.target_type.trim().is_empty() {
            return Err(ApiError::ValidationError("targetType must not be blank".to_string()));
        }

        let request_date = audit_timestamp();
        let model = ChangeRequestModel::from_payload(&payload, requested_by, request_date)
            .map_err(ApiError::ValidationError)?;
        let entry = ChangeLogModel::new(
            ChangeLogAction::Created,
            requested_by,
            model.original_data.clone(),
            model.new_data.clone(),
            None,
            request_date,
        )
        .map_err(ApiError::ValidationError)?;

        let (model, entry) = self.repository.create(model, entry).await.map_err(database_error)?;
        info!(
            change_request_id = model.id,
            change_log_id = entry.id,
            category = %model.category,
            requested_by,
            "Change request created"
        );
        Ok(model.into())
    }

    async fn approve(&self, id: i64, approved_by: &str, comments: Option<String>) -> ApiResult<bool> {
        self.decide(id, ChangeLogAction::Approved, approved_by, |model, decided_at| {
            model.approve(approved_by, comments.as_deref(), decided_at)?;
            Ok(comments)
        })
        .await
    }

    async fn reject(&self, id: i64, rejected_by: &str, reason: &str) -> ApiResult<bool> {
        self.decide(id, ChangeLogAction::Rejected, rejected_by, |model, decided_at| {
            model.reject(rejected_by, reason, decided_at)?;
            Ok(Some(reason.to_string()))
        })
        .await
    }

    async fn list(&self) -> ApiResult<Vec<ChangeRequest>> {
        let models = self.repository.list_all().await.map_err(database_error)?;
        Ok(models.into_iter().map(ChangeRequest::from).collect())
    }

    async fn list_by_category(&self, category: &str) -> ApiResult<Vec<ChangeRequest>> {
        let models = self.repository.find_by_category(category).await.map_err(database_error)?;
        Ok(models.into_iter().map(ChangeRequest::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> ApiResult<Option<ChangeRequest>> {
        let model = self.repository.load(id).await.map_err(database_error)?;
        Ok(model.map(ChangeRequest::from))
    }

    async fn get_audit_log(&self) -> ApiResult<Vec<ChangeLog>> {
        let entries = self.repository.load_audit_trail().await.map_err(database_error)?;
        Ok(entries.into_iter().map(ChangeLog::from).collect())
    }

    async fn get_audit_log_for(&self, change_request_id: i64) -> ApiResult<Vec<ChangeLog>> {
        let entries = self.repository.load_audits(change_request_id).await.map_err(database_error)?;
        Ok(entries.into_iter().map(ChangeLog::from).collect())
    }

    async fn verify_audit_log(&self, change_request_id: i64) -> ApiResult<bool> {
        if self.repository.load(change_request_id).await.map_err(database_error)?.is_none() {
            return Err(ApiError::NotFound(format!("Change request {change_request_id}")));
        }
        let entries = self.repository.load_audits(change_request_id).await.map_err(database_error)?;
        let valid = verify_change_log_chain(&entries);
        if !valid {
            warn!(change_request_id, entries = entries.len(), "Change log hash chain is broken");
        }
        Ok(valid)
    }
}
