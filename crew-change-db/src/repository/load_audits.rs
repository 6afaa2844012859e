use async_trait::async_trait;

use crate::models::audit::ChangeLogModel;
use crate::models::auditable::Auditable;

/// Generic repository trait for loading the change log entries of auditable entities
///
/// Entries are append-only; both methods return them in append (id) order.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Auditable trait
///
/// # Example
/// ```ignore
/// let history = repo.load_audits(change_request_id).await?;
/// assert!(verify_change_log_chain(&history));
/// ```
#[async_trait]
pub trait LoadAudits<T: Auditable>: Send + Sync {
    /// Load the entries of one entity
    ///
    /// # Arguments
    /// * `id` - The id of the entity whose entries should be loaded
    ///
    /// # Returns
    /// * `Ok(Vec<ChangeLogModel>)` - The entries, empty for unknown ids
    /// * `Err` - An error if the entries could not be loaded
    async fn load_audits(&self, id: i64) -> Result<Vec<ChangeLogModel>, Box<dyn std::error::Error + Send + Sync>>;

    /// Load the entries of every entity of this type
    async fn load_audit_trail(&self) -> Result<Vec<ChangeLogModel>, Box<dyn std::error::Error + Send + Sync>>;
}
