use async_trait::async_trait;

use crate::models::audit::ChangeLogModel;
use crate::models::auditable::Auditable;

/// Generic repository trait for creating an auditable entity together with its first change log entry
///
/// Implementations assign the next sequential id to the entity and to the entry,
/// link the entry to the entity, seal the entry with no antecedent, record the
/// entry as the entity's last change log entry, and persist both atomically.
/// A caller never observes the entity without its entry.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Auditable trait
///
/// # Example
/// ```ignore
/// impl Create<ChangeRequestModel> for MemoryChangeRequestRepositoryImpl {
///     async fn create(&self, item: ChangeRequestModel, entry: ChangeLogModel) -> Result<(ChangeRequestModel, ChangeLogModel), Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Create<T: Auditable>: Send + Sync {
    /// Save an entity and its `created` entry in a single atomic step
    ///
    /// # Arguments
    /// * `item` - The entity to create; its id is ignored
    /// * `entry` - The unsealed change log entry describing the creation
    ///
    /// # Returns
    /// * `Ok((T, ChangeLogModel))` - The created entity and entry with generated fields populated
    /// * `Err` - An error if nothing could be written
    async fn create(
        &self,
        item: T,
        entry: ChangeLogModel,
    ) -> Result<(T, ChangeLogModel), Box<dyn std::error::Error + Send + Sync>>;
}
