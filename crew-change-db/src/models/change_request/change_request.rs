use chrono::{DateTime, Utc};
use crew_change_api::{ChangeRequest, ChangeRequestPayload, ChangeRequestStatus};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::auditable::Auditable;
use crate::models::identifiable::Identifiable;
use crate::utils::{to_heapless, to_optional_heapless};

/// # Documentation
/// - Persisted form of a change request.
/// - `id` is 0 until the repository assigns the next sequential id on create.
/// - Mutated only by an approve or reject decision; every mutation is written
///   together with one change log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRequestModel {
    pub id: i64,

    /// Grouping used by `list_by_category`, e.g. `components` or `Maintenance`
    pub category: HeaplessString<50>,

    pub request_title: HeaplessString<200>,

    pub target_type: HeaplessString<50>,

    pub target_id: Option<HeaplessString<100>>,

    /// Display name of the requesting principal
    pub requested_by: HeaplessString<100>,

    pub request_date: DateTime<Utc>,

    pub status: ChangeRequestStatus,

    /// Snapshot of the target before the change, as a flat path -> value object
    pub original_data: Value,

    /// `original_data` with every proposed change applied
    pub new_data: Value,

    /// Paths of the changed fields, sorted and unique
    pub changed_fields: Vec<String>,

    pub comments: Option<HeaplessString<500>>,

    /// Whoever decided the request, for approvals and rejections alike
    pub approved_by: Option<HeaplessString<100>>,

    pub approved_date: Option<DateTime<Utc>>,

    pub rejection_reason: Option<HeaplessString<500>>,

    /// Reference to the latest change log entry of this request
    /// - None: for new requests not yet created
    /// - Some(id): updated on every create/update to link the next entry's antecedent hash
    pub last_change_log_id: Option<i64>,
}

impl ChangeRequestModel {
    /// Builds a pending request from a submitted payload.
    pub fn from_payload(
        payload: &ChangeRequestPayload,
        requested_by: &str,
        request_date: DateTime<Utc>,
    ) -> Result<Self, String> {
        Ok(ChangeRequestModel {
            id: 0,
            category: to_heapless(payload.resolved_category(), "category")?,
            request_title: to_heapless(&payload.resolved_title(), "request_title")?,
            target_type: to_heapless(&payload.target_type, "target_type")?,
            target_id: to_optional_heapless(payload.target_id.as_deref(), "target_id")?,
            requested_by: to_heapless(requested_by, "requested_by")?,
            request_date,
            status: ChangeRequestStatus::PendingApproval,
            original_data: payload.snapshot_before.to_value(),
            new_data: payload.snapshot_after().to_value(),
            changed_fields: payload.changed_fields().into_iter().collect(),
            comments: None,
            approved_by: None,
            approved_date: None,
            rejection_reason: None,
            last_change_log_id: None,
        })
    }

    /// Stamps an approval. A previous decision, if any, is overwritten.
    pub fn approve(
        &mut self,
        approved_by: &str,
        comments: Option<&str>,
        decided_at: DateTime<Utc>,
    ) -> Result<(), String> {
        self.approved_by = Some(to_heapless(approved_by, "approved_by")?);
        if comments.is_some() {
            self.comments = to_optional_heapless(comments, "comments")?;
        }
        self.status = ChangeRequestStatus::Approved;
        self.approved_date = Some(decided_at);
        Ok(())
    }

    /// Stamps a rejection. A previous decision, if any, is overwritten.
    pub fn reject(&mut self, rejected_by: &str, reason: &str, decided_at: DateTime<Utc>) -> Result<(), String> {
        self.approved_by = Some(to_heapless(rejected_by, "rejected_by")?);
        self.rejection_reason = Some(to_heapless(reason, "rejection_reason")?);
        self.status = ChangeRequestStatus::Rejected;
        self.approved_date = Some(decided_at);
        Ok(())
    }
}

impl Identifiable for ChangeRequestModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl Auditable for ChangeRequestModel {
    fn get_last_change_log_id(&self) -> Option<i64> {
        self.last_change_log_id
    }
}

impl From<ChangeRequestModel> for ChangeRequest {
    fn from(model: ChangeRequestModel) -> Self {
        ChangeRequest {
            id: model.id,
            category: model.category.to_string(),
            request_title: model.request_title.to_string(),
            target_type: model.target_type.to_string(),
            target_id: model.target_id.map(|s| s.to_string()),
            requested_by: model.requested_by.to_string(),
            request_date: model.request_date,
            status: model.status,
            original_data: model.original_data,
            new_data: model.new_data,
            changed_fields: model.changed_fields.into_iter().collect(),
            comments: model.comments.map(|s| s.to_string()),
            approved_by: model.approved_by.map(|s| s.to_string()),
            approved_date: model.approved_date,
            rejection_reason: model.rejection_reason.map(|s| s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crew_change_api::{OriginalSnapshot, ProposedChange};
    use serde_json::json;

    fn frequency_payload() -> ChangeRequestPayload {
        ChangeRequestPayload {
            target_type: "components".to_string(),
            target_id: Some("5".to_string()),
            snapshot_before: OriginalSnapshot::new().with("frequency", json!("6 Months")),
            proposed_changes: vec![ProposedChange {
                field: "frequency".to_string(),
                from: Some(json!("6 Months")),
                to: json!("3 Months"),
                timestamp: "2026-10-18T09:30:00.000Z".to_string(),
            }],
            request_title: None,
            category: None,
        }
    }

    #[test]
    fn test_from_payload_builds_pending_request() {
        let model = ChangeRequestModel::from_payload(&frequency_payload(), "2nd Engineer", Utc::now()).unwrap();

        assert_eq!(model.id, 0);
        assert_eq!(model.status, ChangeRequestStatus::PendingApproval);
        assert_eq!(model.category.as_str(), "components");
        assert_eq!(model.request_title.as_str(), "Modify components 5");
        assert_eq!(model.original_data, json!({ "frequency": "6 Months" }));
        assert_eq!(model.new_data, json!({ "frequency": "3 Months" }));
        assert_eq!(model.changed_fields, vec!["frequency".to_string()]);
        assert_eq!(model.last_change_log_id, None);
    }

    #[test]
    fn test_overlong_requester_is_rejected() {
        let requested_by = "x".repeat(101);
        let result = ChangeRequestModel::from_payload(&frequency_payload(), &requested_by, Utc::now());
        assert!(result.unwrap_err().contains("requested_by"));
    }

    #[test]
    fn test_decisions_overwrite_stamps() {
        let mut model = ChangeRequestModel::from_payload(&frequency_payload(), "2nd Engineer", Utc::now()).unwrap();

        model.approve("Chief Engineer", Some("Agreed"), Utc::now()).unwrap();
        assert_eq!(model.status, ChangeRequestStatus::Approved);
        assert_eq!(model.comments.as_deref(), Some("Agreed"));

        model.reject("Superintendent", "Maker advice says 6 months", Utc::now()).unwrap();
        assert_eq!(model.status, ChangeRequestStatus::Rejected);
        assert_eq!(model.approved_by.as_deref(), Some("Superintendent"));
        assert_eq!(model.rejection_reason.as_deref(), Some("Maker advice says 6 months"));

        let request: ChangeRequest = model.into();
        assert!(request.changed_fields.contains("frequency"));
        assert_eq!(request.comments.as_deref(), Some("Agreed"));
    }
}
