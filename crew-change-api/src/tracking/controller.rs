use serde::Serialize;
use serde_json::Value;
use tokio::sync::watch;
use tracing::debug;

use super::assembler::ChangeRequestAssembler;
use super::diff_store::DiffStore;
use super::navigation::{NavigationIntent, NavigationState};
use crate::domain::{ChangeRequestContext, ChangeRequestPayload, FieldDiff, ModifyTarget, OriginalSnapshot};

/// # Documentation
/// - The state of one modify-mode session: whether it is active, which record it
///   targets, and the diff store holding snapshot and pending changes.
/// - `context` is only present when the session was entered through the
///   change-request variant.
#[derive(Debug, Clone, Default)]
pub struct ModifySession {
    active: bool,
    target: Option<ModifyTarget>,
    context: Option<ChangeRequestContext>,
    store: DiffStore,
}

impl ModifySession {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> Option<&ModifyTarget> {
        self.target.as_ref()
    }

    pub fn context(&self) -> Option<&ChangeRequestContext> {
        self.context.as_ref()
    }

    pub fn snapshot(&self) -> &OriginalSnapshot {
        self.store.snapshot()
    }

    pub fn diffs(&self) -> &[FieldDiff] {
        self.store.get_diffs()
    }

    pub fn store(&self) -> &DiffStore {
        &self.store
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSummary {
    pub has_changes: bool,
    pub changed_fields_count: usize,
    pub changes: Vec<FieldDiff>,
}

/// What observers of a controller see. Cheap to clone, no diff values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyModeState {
    pub active: bool,
    pub target: Option<ModifyTarget>,
    pub has_changes: bool,
    pub changed_fields_count: usize,
}

/// # Documentation
/// - Drives one editing view's modify mode: `inactive` or `active` for a target.
/// - Entering from `inactive` clears pending diffs but keeps a snapshot that was
///   already supplied. Switching to a different target while active starts a fresh
///   session with neither diffs nor snapshot. Re-entering the same target is a no-op.
/// - Leaving clears diffs and snapshot.
/// - Tracking while inactive is silently ignored.
/// - Every state change is published on a watch channel; see [`ModifyModeController::subscribe`].
#[derive(Debug)]
pub struct ModifyModeController {
    session: ModifySession,
    state_tx: watch::Sender<ModifyModeState>,
}

impl Default for ModifyModeController {
    fn default() -> Self {
        Self::new()
    }
}

impl ModifyModeController {
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(ModifyModeState::default());
        Self {
            session: ModifySession::default(),
            state_tx,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ModifyModeState> {
        self.state_tx.subscribe()
    }

    pub fn session(&self) -> &ModifySession {
        &self.session
    }

    pub fn is_active(&self) -> bool {
        self.session.active
    }

    pub fn target(&self) -> Option<&ModifyTarget> {
        self.session.target.as_ref()
    }

    /// Applies the current navigation state. Call on every navigation change.
    pub fn sync_navigation(&mut self, state: &NavigationState) {
        match state.intent() {
            NavigationIntent::Inactive => {
                if self.session.active {
                    self.disable();
                }
            }
            NavigationIntent::Modify(target) => self.enter(target, None),
            NavigationIntent::ChangeRequest { target, context } => self.enter(target, Some(context)),
        }
    }

    pub fn enable(&mut self, target_type: impl Into<String>, target_id: Option<String>) {
        self.enter(ModifyTarget::new(target_type, target_id), None);
    }

    pub fn enable_change_request(&mut self, target: ModifyTarget, context: ChangeRequestContext) {
        self.enter(target, Some(context));
    }

    fn enter(&mut self, target: ModifyTarget, context: Option<ChangeRequestContext>) {
        if self.session.active && self.session.target.as_ref() == Some(&target) {
            self.session.context = context;
            return;
        }

        if self.session.active {
            debug!(
                target_type = %target.target_type,
                target_id = ?target.target_id,
                discarded = self.session.store.len(),
                "Modify mode target changed, starting a fresh session"
            );
            self.session.store.reset();
        } else {
            debug!(target_type = %target.target_type, target_id = ?target.target_id, "Modify mode enabled");
            self.session.store.clear_diffs();
        }

        self.session.active = true;
        self.session.target = Some(target);
        self.session.context = context;
        self.publish();
    }

    /// Leaves modify mode and discards every uncommitted diff.
    pub fn disable(&mut self) {
        if self.session.active {
            debug!(discarded = self.session.store.len(), "Modify mode disabled");
        }
        self.session = ModifySession::default();
        self.publish();
    }

    /// Sets the baseline for the current record. Pending diffs are dropped.
    pub fn set_original_snapshot(&mut self, snapshot: OriginalSnapshot) {
        self.session.store.set_snapshot(snapshot);
        self.publish();
    }

    pub fn track_field_change(&mut self, path: &str, new_value: Value, old_value: Option<Value>) {
        if !self.session.active {
            return;
        }
        self.session.store.record_change(path, new_value, old_value);
        self.publish();
    }

    pub fn change_summary(&self) -> ChangeSummary {
        let changes = self.session.store.get_diffs().to_vec();
        ChangeSummary {
            has_changes: !changes.is_empty(),
            changed_fields_count: changes.len(),
            changes,
        }
    }

    /// `None` when inactive or without changes; submission should not be offered then.
    pub fn build_change_request_payload(&self) -> Option<ChangeRequestPayload> {
        ChangeRequestAssembler::build(&self.session)
    }

    fn state(&self) -> ModifyModeState {
        ModifyModeState {
            active: self.session.active,
            target: self.session.target.clone(),
            has_changes: self.session.store.has_changes(),
            changed_fields_count: self.session.store.len(),
        }
    }

    fn publish(&self) {
        let next = self.state();
        self.state_tx.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}
