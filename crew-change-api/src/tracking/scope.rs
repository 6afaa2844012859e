use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::watch;

use super::controller::{ChangeSummary, ModifyModeController, ModifyModeState};
use super::navigation::NavigationState;
use crate::domain::{ChangeRequestPayload, OriginalSnapshot};
use crate::error::{ApiError, ApiResult};

/// Shared handle to one view's [`ModifyModeController`].
///
/// The view creates the handle and injects clones into its field bindings. The
/// lock is held only for the duration of a single call and never across an await.
#[derive(Debug, Clone, Default)]
pub struct ModifyModeHandle {
    inner: Arc<Mutex<ModifyModeController>>,
}

impl ModifyModeHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with shared access to the controller.
    pub fn read<R>(&self, f: impl FnOnce(&ModifyModeController) -> R) -> R {
        f(&*self.inner.lock())
    }

    /// Runs `f` with exclusive access to the controller.
    pub fn update<R>(&self, f: impl FnOnce(&mut ModifyModeController) -> R) -> R {
        f(&mut *self.inner.lock())
    }

    pub fn subscribe(&self) -> watch::Receiver<ModifyModeState> {
        self.read(|c| c.subscribe())
    }

    pub fn is_active(&self) -> bool {
        self.read(|c| c.is_active())
    }

    pub fn sync_navigation(&self, state: &NavigationState) {
        self.update(|c| c.sync_navigation(state))
    }

    pub fn enable(&self, target_type: impl Into<String>, target_id: Option<String>) {
        self.update(|c| c.enable(target_type, target_id))
    }

    pub fn disable(&self) {
        self.update(|c| c.disable())
    }

    pub fn set_original_snapshot(&self, snapshot: OriginalSnapshot) {
        self.update(|c| c.set_original_snapshot(snapshot))
    }

    pub fn track_field_change(&self, path: &str, new_value: Value, old_value: Option<Value>) {
        self.update(|c| c.track_field_change(path, new_value, old_value))
    }

    pub fn change_summary(&self) -> ChangeSummary {
        self.read(|c| c.change_summary())
    }

    pub fn build_change_request_payload(&self) -> Option<ChangeRequestPayload> {
        self.read(|c| c.build_change_request_payload())
    }
}

/// The modify-mode provider scope a component is rendered in, if any.
///
/// Field bindings may be rendered whether or not modify mode is active, but they
/// must be rendered under a provider. Resolving a handle from an empty scope is a
/// wiring bug and fails with [`ApiError::OutsideScope`].
#[derive(Debug, Clone, Default)]
pub struct ModifyModeContext {
    provider: Option<ModifyModeHandle>,
}

impl ModifyModeContext {
    pub fn provided(handle: ModifyModeHandle) -> Self {
        Self {
            provider: Some(handle),
        }
    }

    pub fn detached() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> ApiResult<&ModifyModeHandle> {
        self.provider.as_ref().ok_or_else(|| {
            ApiError::OutsideScope("no ModifyModeHandle was provided to this component".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clones_share_one_controller() {
        let view = ModifyModeHandle::new();
        let field = view.clone();

        view.enable("components", Some("5".to_string()));
        view.set_original_snapshot(OriginalSnapshot::new().with("frequency", json!("6 Months")));
        field.track_field_change("frequency", json!("3 Months"), None);

        assert!(field.is_active());
        assert_eq!(view.change_summary().changed_fields_count, 1);
    }

    #[test]
    fn test_resolving_outside_a_provider_fails() {
        let result = ModifyModeContext::detached().handle().map(|_| ());
        assert!(matches!(result, Err(ApiError::OutsideScope(_))));

        let context = ModifyModeContext::provided(ModifyModeHandle::new());
        assert!(context.handle().is_ok());
    }
}
