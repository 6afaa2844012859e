use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeRequestStatus {
    #[serde(rename = "Pending Approval")]
    PendingApproval,
    Approved,
    Rejected,
}

impl ChangeRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeRequestStatus::PendingApproval => "Pending Approval",
            ChangeRequestStatus::Approved => "Approved",
            ChangeRequestStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ChangeRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeRequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending Approval" => Ok(ChangeRequestStatus::PendingApproval),
            "Approved" => Ok(ChangeRequestStatus::Approved),
            "Rejected" => Ok(ChangeRequestStatus::Rejected),
            _ => Err(format!("Unknown change request status: {s}")),
        }
    }
}

/// # Documentation
/// - A persisted, approvable proposal for one target record.
/// - `original_data` is the snapshot the edits were made against and `new_data`
///   the same snapshot with the proposed changes applied.
/// - A reject decision is stamped into `approved_by`/`approved_date` as well, so
///   those fields always name whoever decided the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequest {
    pub id: i64,
    pub category: String,
    pub request_title: String,
    pub target_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    pub requested_by: String,
    pub request_date: DateTime<Utc>,
    pub status: ChangeRequestStatus,
    pub original_data: Value,
    pub new_data: Value,
    pub changed_fields: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(ChangeRequestStatus::PendingApproval).unwrap(),
            "Pending Approval"
        );
        assert_eq!(
            serde_json::from_value::<ChangeRequestStatus>("Rejected".into()).unwrap(),
            ChangeRequestStatus::Rejected
        );
        for status in [
            ChangeRequestStatus::PendingApproval,
            ChangeRequestStatus::Approved,
            ChangeRequestStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<ChangeRequestStatus>(), Ok(status));
        }
        assert!("Withdrawn".parse::<ChangeRequestStatus>().is_err());
    }
}
