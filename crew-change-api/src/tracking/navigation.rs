use std::collections::BTreeMap;

use url::{form_urlencoded, Url};

use crate::domain::{ChangeRequestContext, ModifyTarget};
use crate::error::{ApiError, ApiResult};

pub const MODIFY_KEY: &str = "modify";
pub const TARGET_TYPE_KEY: &str = "targetType";
pub const TARGET_ID_KEY: &str = "targetId";
pub const EDIT_AS_CHANGE_REQUEST_KEY: &str = "editAsChangeRequest";
pub const CR_TITLE_KEY: &str = "crTitle";
pub const CR_CATEGORY_KEY: &str = "crCategory";

/// Target type used by the change-request variant when neither `targetType` nor `crCategory` is given.
pub const DEFAULT_TARGET_TYPE: &str = "record";

const FLAG_ON: &str = "1";

/// What the current navigation state asks of modify mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    Inactive,
    Modify(ModifyTarget),
    ChangeRequest {
        target: ModifyTarget,
        context: ChangeRequestContext,
    },
}

/// # Documentation
/// - Key/value pairs carried on the current navigable location.
/// - Values are opaque strings; an empty value counts as absent.
/// - When a key repeats, the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    params: BTreeMap<String, String>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw query string, with or without the leading `?`.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(form_urlencoded::parse(query.as_bytes()).map(|(k, v)| (k.into_owned(), v.into_owned())))
    }

    pub fn from_url(url: &Url) -> Self {
        Self::from_pairs(url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())))
    }

    pub fn parse_url(input: &str) -> ApiResult<Self> {
        let url = Url::parse(input).map_err(|e| ApiError::ValidationError(format!("Invalid location '{input}': {e}")))?;
        Ok(Self::from_url(&url))
    }

    fn from_pairs(pairs: impl Iterator<Item = (String, String)>) -> Self {
        let mut params = BTreeMap::new();
        for (key, value) in pairs {
            params.entry(key).or_insert(value);
        }
        Self { params }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    fn flag(&self, key: &str) -> bool {
        self.get(key) == Some(FLAG_ON)
    }

    /// Derives the modify-mode intent.
    ///
    /// `modify=1` needs a `targetType` to activate and takes precedence over
    /// `editAsChangeRequest=1`. The change-request variant falls back to
    /// `crCategory`, then [`DEFAULT_TARGET_TYPE`], for its target type.
    pub fn intent(&self) -> NavigationIntent {
        let target_id = self.get(TARGET_ID_KEY).map(str::to_string);

        if self.flag(MODIFY_KEY) {
            if let Some(target_type) = self.get(TARGET_TYPE_KEY) {
                return NavigationIntent::Modify(ModifyTarget::new(target_type, target_id));
            }
        }

        if self.flag(EDIT_AS_CHANGE_REQUEST_KEY) {
            let context = ChangeRequestContext {
                title: self.get(CR_TITLE_KEY).map(str::to_string),
                category: self.get(CR_CATEGORY_KEY).map(str::to_string),
            };
            let target_type = self
                .get(TARGET_TYPE_KEY)
                .or(context.category.as_deref())
                .unwrap_or(DEFAULT_TARGET_TYPE)
                .to_string();
            return NavigationIntent::ChangeRequest {
                target: ModifyTarget::new(target_type, target_id),
                context,
            };
        }

        NavigationIntent::Inactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modify_flag_with_target() {
        let state = NavigationState::from_query("?modify=1&targetType=components&targetId=5");
        assert_eq!(
            state.intent(),
            NavigationIntent::Modify(ModifyTarget::new("components", Some("5".to_string())))
        );
    }

    #[test]
    fn test_modify_flag_without_target_id() {
        let state = NavigationState::from_query("modify=1&targetType=crew");
        assert_eq!(state.intent(), NavigationIntent::Modify(ModifyTarget::new("crew", None)));
    }

    #[test]
    fn test_modify_requires_target_type_and_exact_flag() {
        assert_eq!(NavigationState::from_query("modify=1").intent(), NavigationIntent::Inactive);
        assert_eq!(
            NavigationState::from_query("modify=1&targetType=").intent(),
            NavigationIntent::Inactive
        );
        assert_eq!(
            NavigationState::from_query("modify=true&targetType=crew").intent(),
            NavigationIntent::Inactive
        );
        assert_eq!(NavigationState::new().intent(), NavigationIntent::Inactive);
    }

    #[test]
    fn test_change_request_variant_decodes_title_and_category() {
        let state = NavigationState::parse_url(
            "https://admin.example.com/components/5?editAsChangeRequest=1&crTitle=Shorten%20interval&crCategory=Maintenance",
        )
        .unwrap();

        match state.intent() {
            NavigationIntent::ChangeRequest { target, context } => {
                assert_eq!(target, ModifyTarget::new("Maintenance", None));
                assert_eq!(context.title.as_deref(), Some("Shorten interval"));
                assert_eq!(context.category.as_deref(), Some("Maintenance"));
            }
            other => panic!("unexpected intent: {other:?}"),
        }
    }

    #[test]
    fn test_change_request_variant_defaults() {
        let state = NavigationState::from_query("editAsChangeRequest=1");
        match state.intent() {
            NavigationIntent::ChangeRequest { target, context } => {
                assert_eq!(target.target_type, DEFAULT_TARGET_TYPE);
                assert_eq!(context, ChangeRequestContext::default());
            }
            other => panic!("unexpected intent: {other:?}"),
        }
    }

    #[test]
    fn test_modify_wins_over_change_request_variant() {
        let state = NavigationState::from_query("modify=1&editAsChangeRequest=1&targetType=jobs&targetId=9");
        assert_eq!(
            state.intent(),
            NavigationIntent::Modify(ModifyTarget::new("jobs", Some("9".to_string())))
        );
    }

    #[test]
    fn test_first_occurrence_wins_and_invalid_url_is_rejected() {
        let state = NavigationState::from_query("targetType=a&targetType=b");
        assert_eq!(state.get(TARGET_TYPE_KEY), Some("a"));
        assert!(matches!(
            NavigationState::parse_url("not a url"),
            Err(ApiError::ValidationError(_))
        ));
    }
}
