use std::collections::BTreeMap;

use crew_change_db::models::{audit::ChangeLogModel, change_request::ChangeRequestModel};
use parking_lot::RwLock;

/// Tables of the in-memory store.
///
/// Ids are sequential per table and start at 1. The change log is append-only,
/// so an entry's position is always `id - 1`.
#[derive(Debug, Default)]
pub struct Tables {
    pub change_requests: BTreeMap<i64, ChangeRequestModel>,
    pub change_logs: Vec<ChangeLogModel>,
    pub last_change_request_id: i64,
}

impl Tables {
    pub fn next_change_request_id(&self) -> i64 {
        self.last_change_request_id + 1
    }

    pub fn next_change_log_id(&self) -> i64 {
        self.change_logs.len() as i64 + 1
    }

    pub fn change_log(&self, id: i64) -> Option<&ChangeLogModel> {
        usize::try_from(id - 1).ok().and_then(|index| self.change_logs.get(index))
    }
}

/// Process-local storage shared by the in-memory repositories.
///
/// Every write takes the single write lock, so a change request and its change
/// log entry always become visible together.
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    pub(crate) tables: RwLock<Tables>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}
