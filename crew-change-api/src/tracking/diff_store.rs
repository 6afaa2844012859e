use chrono::Utc;
use serde_json::Value;

use super::canonical::values_equal;
use crate::domain::{FieldDiff, OriginalSnapshot};

/// What a call to [`DiffStore::record_change`] did to the diff set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// A new diff was appended.
    Inserted,
    /// An existing diff got a new current value.
    Updated,
    /// The value returned to its original and the diff was dropped.
    Removed,
    /// The value equals its original and no diff existed.
    Unchanged,
}

/// # Documentation
/// - Holds the original snapshot of one record and the net changes made to it.
/// - A diff whose current value deep-equals its original is never kept: editing a
///   field and editing it back leaves no pending change.
/// - Diffs keep the order in which they were first created; updating a diff does
///   not move it.
#[derive(Debug, Clone, Default)]
pub struct DiffStore {
    snapshot: OriginalSnapshot,
    diffs: Vec<FieldDiff>,
}

impl DiffStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the snapshot. Existing diffs were computed against the old base and are dropped.
    pub fn set_snapshot(&mut self, snapshot: OriginalSnapshot) {
        self.snapshot = snapshot;
        self.diffs.clear();
    }

    pub fn snapshot(&self) -> &OriginalSnapshot {
        &self.snapshot
    }

    /// Records the latest value of a field.
    ///
    /// The original is, in order of precedence: the original captured when the
    /// field first diverged, `explicit_original`, the snapshot value at `path`.
    /// When none exists the field has no original and any value counts as a change.
    pub fn record_change(
        &mut self,
        path: &str,
        new_value: Value,
        explicit_original: Option<Value>,
    ) -> RecordOutcome {
        let position = self.diffs.iter().position(|d| d.path == path);

        let original = match position {
            Some(index) => self.diffs[index].original_value.clone(),
            None => explicit_original.or_else(|| self.snapshot.get(path).cloned()),
        };

        let unchanged = original
            .as_ref()
            .is_some_and(|original| values_equal(original, &new_value));

        match (position, unchanged) {
            (Some(index), true) => {
                self.diffs.remove(index);
                RecordOutcome::Removed
            }
            (None, true) => RecordOutcome::Unchanged,
            (Some(index), false) => {
                let diff = &mut self.diffs[index];
                diff.current_value = new_value;
                diff.timestamp = Utc::now();
                RecordOutcome::Updated
            }
            (None, false) => {
                self.diffs.push(FieldDiff {
                    path: path.to_string(),
                    original_value: original,
                    current_value: new_value,
                    timestamp: Utc::now(),
                });
                RecordOutcome::Inserted
            }
        }
    }

    pub fn get_diffs(&self) -> &[FieldDiff] {
        &self.diffs
    }

    pub fn get_diff(&self, path: &str) -> Option<&FieldDiff> {
        self.diffs.iter().find(|d| d.path == path)
    }

    /// Drops every diff but keeps the snapshot.
    pub fn clear_diffs(&mut self) {
        self.diffs.clear();
    }

    /// Drops every diff and the snapshot.
    pub fn reset(&mut self) {
        self.snapshot = OriginalSnapshot::default();
        self.diffs.clear();
    }

    pub fn has_changes(&self) -> bool {
        !self.diffs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }
}
