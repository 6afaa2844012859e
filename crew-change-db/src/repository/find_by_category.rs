use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for finding entities by their category
///
/// Matching is exact and case-sensitive. Results are in id order.
#[async_trait]
pub trait FindByCategory<T: Identifiable>: Send + Sync {
    /// # Returns
    /// * `Ok(Vec<T>)` - The matching entities, empty if none match
    /// * `Err` - An error if the query could not be executed
    async fn find_by_category(&self, category: &str) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
