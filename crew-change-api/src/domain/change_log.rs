use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeLogAction {
    Created,
    Approved,
    Rejected,
}

impl ChangeLogAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeLogAction::Created => "created",
            ChangeLogAction::Approved => "approved",
            ChangeLogAction::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ChangeLogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeLogAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(ChangeLogAction::Created),
            "approved" => Ok(ChangeLogAction::Approved),
            "rejected" => Ok(ChangeLogAction::Rejected),
            _ => Err(format!("Unknown change log action: {s}")),
        }
    }
}

/// # Documentation
/// - One append-only audit entry for an action taken on a change request.
/// - Entries are never mutated or deleted once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeLog {
    pub id: i64,
    pub change_request_id: i64,
    pub action: ChangeLogAction,
    pub performed_by: String,
    pub performed_date: DateTime<Utc>,
    pub old_values: Value,
    pub new_values: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}
