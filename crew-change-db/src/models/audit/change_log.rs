use chrono::{DateTime, Utc};
use crew_change_api::{ChangeLog, ChangeLogAction};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::identifiable::Identifiable;
use crate::utils::{to_heapless, to_optional_heapless};

/// # Documentation
/// - Append-only audit entry for one action on a change request.
/// - The repository assigns `id` and `change_request_id` and seals the entry
///   (see [`crate::utils::seal_change_log`]) in the same atomic step that writes
///   the change request.
/// - Entries of one request form a hash chain: `antecedent_hash` is the `hash`
///   of the request's previous entry, 0 for the `created` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeLogModel {
    pub id: i64,

    pub change_request_id: i64,

    pub action: ChangeLogAction,

    pub performed_by: HeaplessString<100>,

    pub performed_date: DateTime<Utc>,

    pub old_values: Value,

    pub new_values: Value,

    /// Approval comments or the rejection reason
    pub comments: Option<HeaplessString<500>>,

    /// Hash of the previous entry of the same change request (0 for the first entry)
    pub antecedent_hash: i64,

    /// Hash of the entry with hash field set to 0
    /// - 0: for entries not yet sealed
    /// - Non-zero: computed hash providing tamper detection
    pub hash: i64,
}

impl ChangeLogModel {
    /// Builds an unsealed entry; ids and hashes are filled in by the repository.
    pub fn new(
        action: ChangeLogAction,
        performed_by: &str,
        old_values: Value,
        new_values: Value,
        comments: Option<&str>,
        performed_date: DateTime<Utc>,
    ) -> Result<Self, String> {
        Ok(ChangeLogModel {
            id: 0,
            change_request_id: 0,
            action,
            performed_by: to_heapless(performed_by, "performed_by")?,
            performed_date,
            old_values,
            new_values,
            comments: to_optional_heapless(comments, "comments")?,
            antecedent_hash: 0,
            hash: 0,
        })
    }
}

impl Identifiable for ChangeLogModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl From<ChangeLogModel> for ChangeLog {
    fn from(model: ChangeLogModel) -> Self {
        ChangeLog {
            id: model.id,
            change_request_id: model.change_request_id,
            action: model.action,
            performed_by: model.performed_by.to_string(),
            performed_date: model.performed_date,
            old_values: model.old_values,
            new_values: model.new_values,
            comments: model.comments.map(|s| s.to_string()),
        }
    }
}
