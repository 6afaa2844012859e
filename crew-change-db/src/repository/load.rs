use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading entities by their ID
/// 
/// This trait provides a standard interface for loading entities from a data store.
/// Any entity that implements the Identifiable trait can be loaded using this trait.
/// 
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Load<ChangeRequestModel> for MemoryChangeRequestRepositoryImpl {
///     async fn load(&self, id: i64) -> Result<Option<ChangeRequestModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Load<T: Identifiable>: Send + Sync {
    /// Load an entity by its unique identifier
    /// 
    /// # Arguments
    /// * `id` - The id of the entity to load
    /// 
    /// # Returns
    /// * `Ok(Some(T))` - The loaded entity
    /// * `Ok(None)` - If the entity does not exist
    /// * `Err` - An error if the query could not be executed
    async fn load(&self, id: i64) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
