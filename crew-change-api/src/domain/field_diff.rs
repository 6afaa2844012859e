use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// # Documentation
/// - A recorded deviation of one field from its original value.
/// - `original_value` is `None` when the field had no original at all, which is
///   distinct from an original of `null`.
/// - `timestamp` is the instant of the last update and is only used for ordering
///   in the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDiff {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_value: Option<Value>,
    pub current_value: Value,
    pub timestamp: DateTime<Utc>,
}
