use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use super::snapshot::OriginalSnapshot;

/// One field delta of a change request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedChange {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Value>,
    pub to: Value,
    /// RFC 3339 instant of the last edit, e.g. `2026-10-18T09:30:00.000Z`
    pub timestamp: String,
}

/// # Documentation
/// - Submittable form of a modify-mode session: target identity, the snapshot
///   the edits were made against, and the ordered field deltas.
/// - Built on demand by the assembler and never persisted directly; it is the
///   input to `ChangeRequestService::create`.
/// - `request_title` and `category` are only set for sessions entered through
///   the change-request variant; the store derives defaults otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequestPayload {
    #[validate(length(min = 1, max = 50))]
    pub target_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,

    pub snapshot_before: OriginalSnapshot,

    #[validate(length(min = 1))]
    pub proposed_changes: Vec<ProposedChange>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub request_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 50))]
    pub category: Option<String>,
}

impl ChangeRequestPayload {
    pub fn changed_fields(&self) -> BTreeSet<String> {
        self.proposed_changes.iter().map(|c| c.field.clone()).collect()
    }

    /// The snapshot with every proposed change applied.
    pub fn snapshot_after(&self) -> OriginalSnapshot {
        self.snapshot_before
            .with_changes(self.proposed_changes.iter().map(|c| (c.field.as_str(), &c.to)))
    }

    pub fn resolved_category(&self) -> &str {
        self.category.as_deref().unwrap_or(&self.target_type)
    }

    pub fn resolved_title(&self) -> String {
        match (&self.request_title, &self.target_id) {
            (Some(title), _) => title.clone(),
            (None, Some(id)) => format!("Modify {} {}", self.target_type, id),
            (None, None) => format!("Modify {}", self.target_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(changes: Vec<ProposedChange>) -> ChangeRequestPayload {
        ChangeRequestPayload {
            target_type: "components".to_string(),
            target_id: Some("5".to_string()),
            snapshot_before: OriginalSnapshot::new()
                .with("frequency", json!("6 Months"))
                .with("name", json!("Fuel Pump")),
            proposed_changes: changes,
            request_title: None,
            category: None,
        }
    }

    fn change(field: &str, from: Value, to: Value) -> ProposedChange {
        ProposedChange {
            field: field.to_string(),
            from: Some(from),
            to,
            timestamp: "2026-10-18T09:30:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_snapshot_after_applies_changes() {
        let payload = payload(vec![change("frequency", json!("6 Months"), json!("3 Months"))]);

        assert_eq!(
            payload.snapshot_after().to_value(),
            json!({ "frequency": "3 Months", "name": "Fuel Pump" })
        );
        assert_eq!(payload.changed_fields().into_iter().collect::<Vec<_>>(), vec!["frequency"]);
    }

    #[test]
    fn test_defaults_for_title_and_category() {
        let mut payload = payload(vec![change("frequency", json!("6 Months"), json!("3 Months"))]);
        assert_eq!(payload.resolved_category(), "components");
        assert_eq!(payload.resolved_title(), "Modify components 5");

        payload.category = Some("Maintenance".to_string());
        payload.request_title = Some("Shorten pump service interval".to_string());
        assert_eq!(payload.resolved_category(), "Maintenance");
        assert_eq!(payload.resolved_title(), "Shorten pump service interval");
    }

    #[test]
    fn test_validation_rejects_empty_change_set() {
        assert!(payload(vec![]).validate().is_err());
        assert!(payload(vec![change("name", json!("Fuel Pump"), json!("Fuel Pump #2"))])
            .validate()
            .is_ok());
    }

    #[test]
    fn test_serializes_in_camel_case() {
        let json = serde_json::to_value(payload(vec![change("frequency", json!("6 Months"), json!("3 Months"))]))
            .unwrap();
        assert_eq!(json["targetType"], "components");
        assert_eq!(json["snapshotBefore"]["frequency"], "6 Months");
        assert_eq!(json["proposedChanges"][0]["from"], "6 Months");
        assert!(json.get("requestTitle").is_none());
    }
}
