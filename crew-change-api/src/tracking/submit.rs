use tracing::info;

use validator::Validate;

use super::scope::ModifyModeHandle;
use crate::domain::{ChangeRequest, ModifyTarget, Principal};
use crate::error::ApiResult;
use crate::service::ChangeRequestService;

/// Submits the pending changes of a modify-mode session as a change request
/// on behalf of `principal`.
///
/// Nothing is sent when there are no changes. After a successful create the
/// submitted session is disabled, since its diffs now live in the stored
/// request. If the view moved to another target while the request was in
/// flight, that newer session is left alone. On failure the session is left
/// untouched so the user can retry.
pub async fn submit_change_request<S>(
    handle: &ModifyModeHandle,
    service: &S,
    principal: &Principal,
) -> ApiResult<Option<ChangeRequest>>
where
    S: ChangeRequestService + ?Sized,
{
    principal.validate()?;

    let Some((target, payload)) = handle.read(|c| {
        let payload = c.build_change_request_payload()?;
        Some((c.target().cloned()?, payload))
    }) else {
        return Ok(None);
    };

    let request = service.create(payload, &principal.name).await?;
    disable_if_still_on(handle, &target);

    info!(
        change_request_id = request.id,
        category = %request.category,
        changed_fields = request.changed_fields.len(),
        "Change request submitted"
    );
    Ok(Some(request))
}

fn disable_if_still_on(handle: &ModifyModeHandle, target: &ModifyTarget) {
    handle.update(|c| {
        if c.is_active() && c.target() == Some(target) {
            c.disable();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChangeLog, ChangeRequestPayload, ChangeRequestStatus, OriginalSnapshot};
    use crate::error::ApiError;
    use async_trait::async_trait;
    use chrono::Utc;
    use parking_lot::Mutex;
    use serde_json::json;

    #[derive(Default)]
    struct RecordingService {
        received: Mutex<Vec<(ChangeRequestPayload, String)>>,
        fail: bool,
        // Simulates the view moving on while the request is in flight
        navigate_during_create: Option<ModifyModeHandle>,
    }

    #[async_trait]
    impl ChangeRequestService for RecordingService {
        async fn create(&self, payload: ChangeRequestPayload, requested_by: &str) -> ApiResult<ChangeRequest> {
            if self.fail {
                return Err(ApiError::DatabaseError("connection refused".to_string()));
            }
            if let Some(handle) = &self.navigate_during_create {
                handle.enable("components", Some("6".to_string()));
                handle.set_original_snapshot(OriginalSnapshot::new().with("name", json!("Fuel Pump")));
                handle.track_field_change("name", json!("Fuel Pump #2"), None);
            }
            let request = ChangeRequest {
                id: 1,
                category: payload.resolved_category().to_string(),
                request_title: payload.resolved_title(),
                target_type: payload.target_type.clone(),
                target_id: payload.target_id.clone(),
                requested_by: requested_by.to_string(),
                request_date: Utc::now(),
                status: ChangeRequestStatus::PendingApproval,
                original_data: payload.snapshot_before.to_value(),
                new_data: payload.snapshot_after().to_value(),
                changed_fields: payload.changed_fields(),
                comments: None,
                approved_by: None,
                approved_date: None,
                rejection_reason: None,
            };
            self.received.lock().push((payload, requested_by.to_string()));
            Ok(request)
        }

        async fn approve(&self, _id: i64, _approved_by: &str, _comments: Option<String>) -> ApiResult<bool> {
            Ok(false)
        }

        async fn reject(&self, _id: i64, _rejected_by: &str, _reason: &str) -> ApiResult<bool> {
            Ok(false)
        }

        async fn list(&self) -> ApiResult<Vec<ChangeRequest>> {
            Ok(vec![])
        }

        async fn list_by_category(&self, _category: &str) -> ApiResult<Vec<ChangeRequest>> {
            Ok(vec![])
        }

        async fn get_by_id(&self, _id: i64) -> ApiResult<Option<ChangeRequest>> {
            Ok(None)
        }

        async fn get_audit_log(&self) -> ApiResult<Vec<ChangeLog>> {
            Ok(vec![])
        }

        async fn get_audit_log_for(&self, _change_request_id: i64) -> ApiResult<Vec<ChangeLog>> {
            Ok(vec![])
        }

        async fn verify_audit_log(&self, _change_request_id: i64) -> ApiResult<bool> {
            Ok(true)
        }
    }

    fn engineer() -> Principal {
        Principal::new("2nd Engineer", "engineer")
    }

    fn edited_handle() -> ModifyModeHandle {
        let handle = ModifyModeHandle::new();
        handle.enable("components", Some("5".to_string()));
        handle.set_original_snapshot(OriginalSnapshot::new().with("frequency", json!("6 Months")));
        handle.track_field_change("frequency", json!("3 Months"), None);
        handle
    }

    #[test]
    fn test_submit_without_changes_sends_nothing() {
        let service = RecordingService::default();
        let handle = ModifyModeHandle::new();
        handle.enable("components", Some("5".to_string()));

        let result = tokio_test::block_on(submit_change_request(&handle, &service, &engineer())).unwrap();
        assert!(result.is_none());
        assert!(service.received.lock().is_empty());
        assert!(handle.is_active());
    }

    #[test]
    fn test_submit_creates_request_and_leaves_modify_mode() {
        let service = RecordingService::default();
        let handle = edited_handle();

        let request = tokio_test::block_on(submit_change_request(&handle, &service, &engineer()))
            .unwrap()
            .unwrap();

        assert_eq!(request.status, ChangeRequestStatus::PendingApproval);
        assert_eq!(request.new_data, json!({ "frequency": "3 Months" }));
        let received = service.received.lock();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].1, "2nd Engineer");
        assert!(!handle.is_active());
    }

    #[test]
    fn test_failed_submit_keeps_pending_changes() {
        let service = RecordingService {
            fail: true,
            ..Default::default()
        };
        let handle = edited_handle();

        let result = tokio_test::block_on(submit_change_request(&handle, &service, &engineer()));
        assert!(matches!(result, Err(ApiError::DatabaseError(_))));
        assert!(handle.is_active());
        assert_eq!(handle.change_summary().changed_fields_count, 1);
    }

    #[test]
    fn test_submit_keeps_session_entered_while_in_flight() {
        let handle = edited_handle();
        let service = RecordingService {
            navigate_during_create: Some(handle.clone()),
            ..Default::default()
        };

        let request = tokio_test::block_on(submit_change_request(&handle, &service, &engineer()))
            .unwrap()
            .unwrap();
        assert_eq!(request.target_id.as_deref(), Some("5"));

        assert!(handle.is_active());
        assert_eq!(
            handle.read(|c| c.target().cloned()),
            Some(ModifyTarget::new("components", Some("6".to_string())))
        );
        let summary = handle.change_summary();
        assert_eq!(summary.changed_fields_count, 1);
        assert_eq!(summary.changes[0].path, "name");
    }

    #[test]
    fn test_submit_rejects_invalid_principal() {
        let service = RecordingService::default();
        let handle = edited_handle();
        let anonymous = Principal::new("", "engineer");

        let result = tokio_test::block_on(submit_change_request(&handle, &service, &anonymous));
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
        assert!(service.received.lock().is_empty());
        assert!(handle.is_active());
    }
}
