use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for listing every entity of a type in id order
#[async_trait]
pub trait ListAll<T: Identifiable>: Send + Sync {
    async fn list_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
