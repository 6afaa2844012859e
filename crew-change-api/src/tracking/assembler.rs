use chrono::{DateTime, SecondsFormat, Utc};

use super::controller::ModifySession;
use crate::domain::{ChangeRequestPayload, ProposedChange};

/// Turns a modify-mode session into a submittable payload.
pub struct ChangeRequestAssembler;

impl ChangeRequestAssembler {
    /// Returns `None` for an inactive session or one without diffs.
    pub fn build(session: &ModifySession) -> Option<ChangeRequestPayload> {
        if !session.is_active() || session.diffs().is_empty() {
            return None;
        }
        let target = session.target()?;
        let context = session.context().cloned().unwrap_or_default();

        let proposed_changes = session
            .diffs()
            .iter()
            .map(|diff| ProposedChange {
                field: diff.path.clone(),
                from: diff.original_value.clone(),
                to: diff.current_value.clone(),
                timestamp: iso_timestamp(&diff.timestamp),
            })
            .collect();

        Some(ChangeRequestPayload {
            target_type: target.target_type.clone(),
            target_id: target.target_id.clone(),
            snapshot_before: session.snapshot().clone(),
            proposed_changes,
            request_title: context.title,
            category: context.category,
        })
    }
}

fn iso_timestamp(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OriginalSnapshot;
    use crate::tracking::controller::ModifyModeController;
    use serde_json::json;

    fn maintenance_controller() -> ModifyModeController {
        let mut controller = ModifyModeController::new();
        controller.enable("components", Some("5".to_string()));
        controller.set_original_snapshot(
            OriginalSnapshot::new()
                .with("frequency", json!("6 Months"))
                .with("name", json!("Fuel Pump")),
        );
        controller
    }

    #[test]
    fn test_session_without_diffs_builds_nothing() {
        let controller = maintenance_controller();
        assert!(ChangeRequestAssembler::build(controller.session()).is_none());

        let inactive = ModifyModeController::new();
        assert!(ChangeRequestAssembler::build(inactive.session()).is_none());
    }

    #[test]
    fn test_single_diff_builds_single_change() {
        let mut controller = maintenance_controller();
        controller.track_field_change("frequency", json!("3 Months"), None);

        let payload = ChangeRequestAssembler::build(controller.session()).unwrap();
        assert_eq!(payload.target_type, "components");
        assert_eq!(payload.target_id.as_deref(), Some("5"));
        assert_eq!(payload.snapshot_before.get("name"), Some(&json!("Fuel Pump")));
        assert_eq!(payload.proposed_changes.len(), 1);

        let change = &payload.proposed_changes[0];
        assert_eq!(change.field, "frequency");
        assert_eq!(change.from, Some(json!("6 Months")));
        assert_eq!(change.to, json!("3 Months"));
        assert!(DateTime::parse_from_rfc3339(&change.timestamp).is_ok());
        assert!(change.timestamp.ends_with('Z'));
        assert_eq!(payload.request_title, None);
        assert_eq!(payload.category, None);
    }

    #[test]
    fn test_changes_follow_diff_order() {
        let mut controller = maintenance_controller();
        controller.track_field_change("name", json!("Fuel Pump #2"), None);
        controller.track_field_change("frequency", json!("3 Months"), None);
        controller.track_field_change("name", json!("Fuel Pump #3"), None);

        let payload = controller.build_change_request_payload().unwrap();
        let fields: Vec<&str> = payload.proposed_changes.iter().map(|c| c.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "frequency"]);
        assert_eq!(payload.proposed_changes[0].to, json!("Fuel Pump #3"));
    }
}
