use std::sync::Arc;

#[cfg(feature = "postgres")]
use crate::config::PostgresConfig;
use crate::repository::memory::{MemoryChangeRequestRepositoryImpl, MemoryDatabase};
#[cfg(feature = "postgres")]
use crate::repository::postgres::{db_init, PgChangeRequestRepositoryImpl};
use crate::service::ChangeRequestServiceImpl;

/// Factory for building change request services over a storage backend
///
/// Each call builds an independent store; share the returned service
/// throughout the application.
pub struct ChangeStoreFactory;

impl ChangeStoreFactory {
    /// Build a service over a fresh process-local store
    pub fn in_memory() -> Arc<ChangeRequestServiceImpl<MemoryChangeRequestRepositoryImpl>> {
        let database = Arc::new(MemoryDatabase::new());
        let repository = Arc::new(MemoryChangeRequestRepositoryImpl::new(database));
        Arc::new(ChangeRequestServiceImpl::new(repository))
    }

    /// Connect to Postgres, apply the schema and build a service over it
    #[cfg(feature = "postgres")]
    pub async fn postgres(
        config: &PostgresConfig,
    ) -> Result<Arc<ChangeRequestServiceImpl<PgChangeRequestRepositoryImpl>>, sqlx::Error> {
        let pool = db_init::connect(config).await?;
        db_init::init_database(&pool).await?;
        let repository = Arc::new(PgChangeRequestRepositoryImpl::new(Arc::new(pool)));
        Ok(Arc::new(ChangeRequestServiceImpl::new(repository)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crew_change_api::ChangeRequestService;

    #[test]
    fn test_in_memory_stores_are_independent() {
        let first = ChangeStoreFactory::in_memory();
        let second = ChangeStoreFactory::in_memory();

        let first_list = tokio_test::block_on(first.list()).unwrap();
        let second_list = tokio_test::block_on(second.list()).unwrap();
        assert!(first_list.is_empty());
        assert!(second_list.is_empty());
        assert!(!Arc::ptr_eq(first.repository(), second.repository()));
    }
}
