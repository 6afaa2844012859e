use async_trait::async_trait;

use crate::models::audit::ChangeLogModel;
use crate::models::auditable::Auditable;

/// Generic repository trait for updating an auditable entity together with a new change log entry
///
/// The update is optimistic: it only succeeds when the stored entity still
/// references the same last change log entry as `item`. The new entry is sealed
/// with the hash of that last entry as its antecedent.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Auditable trait
///
/// # Example
/// ```ignore
/// impl Update<ChangeRequestModel> for MemoryChangeRequestRepositoryImpl {
///     async fn update(&self, item: ChangeRequestModel, entry: ChangeLogModel) -> Result<(ChangeRequestModel, ChangeLogModel), Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Update<T: Auditable>: Send + Sync {
    /// Update an entity and append its entry in a single atomic step
    ///
    /// # Arguments
    /// * `item` - The entity as loaded, with the changes applied
    /// * `entry` - The unsealed change log entry describing the change
    ///
    /// # Returns
    /// * `Ok((T, ChangeLogModel))` - The updated entity and the sealed entry
    /// * `Err` - The entity does not exist, was modified since it was loaded, or could not be written
    async fn update(
        &self,
        item: T,
        entry: ChangeLogModel,
    ) -> Result<(T, ChangeLogModel), Box<dyn std::error::Error + Send + Sync>>;
}
