use chrono::Utc;
use crew_change_api::{ChangeLogAction, ChangeRequestPayload, OriginalSnapshot, ProposedChange};
use crew_change_db::models::{audit::ChangeLogModel, change_request::ChangeRequestModel};
use serde_json::json;

pub fn create_test_payload(category: &str) -> ChangeRequestPayload {
    ChangeRequestPayload {
        target_type: "components".to_string(),
        target_id: Some("5".to_string()),
        snapshot_before: OriginalSnapshot::new()
            .with("frequency", json!("6 Months"))
            .with("name", json!("Fuel Pump")),
        proposed_changes: vec![ProposedChange {
            field: "frequency".to_string(),
            from: Some(json!("6 Months")),
            to: json!("3 Months"),
            timestamp: "2026-10-18T09:30:00.000Z".to_string(),
        }],
        request_title: None,
        category: Some(category.to_string()),
    }
}

pub fn create_test_change_request(category: &str) -> ChangeRequestModel {
    ChangeRequestModel::from_payload(&create_test_payload(category), "2nd Engineer", Utc::now()).unwrap()
}

pub fn create_test_entry(model: &ChangeRequestModel, action: ChangeLogAction, performed_by: &str) -> ChangeLogModel {
    ChangeLogModel::new(
        action,
        performed_by,
        model.original_data.clone(),
        model.new_data.clone(),
        None,
        Utc::now(),
    )
    .unwrap()
}
