use serde_json::Value;

use super::scope::{ModifyModeContext, ModifyModeHandle};
use crate::error::ApiResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldHighlight {
    None,
    Modified,
}

/// What a field renderer receives from its binding.
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    pub path: &'a str,
    pub value: &'a Value,
    pub is_modified: bool,
    pub highlight: FieldHighlight,
}

/// # Documentation
/// - Connects one editable field to modify mode without the field's renderer
///   knowing about modify mode.
/// - On every change the caller's handler runs with the new value, exactly as it
///   would without the binding. While modify mode is active the value is also
///   reported to the controller, with the binding's original as the explicit
///   original.
/// - [`FieldChangeBinding::is_modified`] is a presentation hint only. The
///   controller's diff set decides what gets submitted.
#[derive(Debug, Clone)]
pub struct FieldChangeBinding {
    handle: ModifyModeHandle,
    path: String,
    original: Option<Value>,
}

impl FieldChangeBinding {
    pub fn new(handle: &ModifyModeHandle, path: impl Into<String>, original: Option<Value>) -> Self {
        Self {
            handle: handle.clone(),
            path: path.into(),
            original,
        }
    }

    /// Binds a field to the provider of `context`; fails outside a provider.
    pub fn from_context(
        context: &ModifyModeContext,
        path: impl Into<String>,
        original: Option<Value>,
    ) -> ApiResult<Self> {
        Ok(Self::new(context.handle()?, path, original))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn original(&self) -> Option<&Value> {
        self.original.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_active()
    }

    /// Highlight flag for `current`; always `false` while modify mode is inactive.
    pub fn is_modified(&self, current: &Value) -> bool {
        self.is_active() && is_modified(self.original.as_ref(), current)
    }

    /// Handles a value-change event and returns whatever the caller's handler returns.
    pub fn on_change<T>(&self, new_value: Value, handler: impl FnOnce(Value) -> T) -> T {
        if self.is_active() {
            self.handle
                .track_field_change(&self.path, new_value.clone(), self.original.clone());
        }
        handler(new_value)
    }

    /// Renders the field through `render`, wrapped with its modify-mode highlight.
    ///
    /// For array and object fields, pass `self.original()` while the field is
    /// untouched; any other composite value is highlighted, even if equal.
    pub fn render<R>(&self, current: &Value, render: impl FnOnce(FieldView<'_>) -> R) -> R {
        let is_modified = self.is_modified(current);
        render(FieldView {
            path: &self.path,
            value: current,
            is_modified,
            highlight: if is_modified {
                FieldHighlight::Modified
            } else {
                FieldHighlight::None
            },
        })
    }
}

/// Cheap inequality used for highlighting.
///
/// Scalars compare by value. Arrays and objects compare by identity: they count
/// as modified unless `current` is the very value the original refers to. A
/// binding keeps its own copy of the original, so an unchanged composite field
/// must be rendered from [`FieldChangeBinding::original`] to show unhighlighted.
pub fn is_modified(original: Option<&Value>, current: &Value) -> bool {
    match original {
        None => false,
        Some(original) if is_scalar(original) && is_scalar(current) => original != current,
        Some(original) => !std::ptr::eq(original, current),
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}
