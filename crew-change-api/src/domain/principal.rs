use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// # Documentation
/// - The authenticated user as resolved by the session layer.
/// - Only `name` is recorded on change requests and change logs; `id` and `role`
///   are carried for callers that need them for display or routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Principal {
    pub id: Uuid,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 50))]
    pub role: String,
}

impl Principal {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role: role.into(),
        }
    }
}
