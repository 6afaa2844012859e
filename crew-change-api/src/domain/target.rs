use serde::{Deserialize, Serialize};

/// Identity of the record being edited in modify mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyTarget {
    pub target_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
}

impl ModifyTarget {
    pub fn new(target_type: impl Into<String>, target_id: Option<String>) -> Self {
        Self {
            target_type: target_type.into(),
            target_id,
        }
    }
}

/// Title and category requested through the change-request variant of modify mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequestContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
